// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Typed access to a decoded terminfo entry

use std::ops::Range;

use crate::{
    cap::{BooleanCap, NumberCap, StringCap},
    parse::{self, CANCELED_ENTRY, Error, Layout, check_offset, get_string, le16, read_number},
};

/// State of a string capability slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<T> {
    Present(T),
    /// Not defined by the entry, or past the end of the section
    Absent,
    /// Explicitly removed by the entry (`name@` in terminfo source)
    Canceled,
}

impl<T> Entry<T> {
    /// Convert to `Option`, treating canceled capabilities as absent
    pub fn present(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Canceled => None,
        }
    }
}

/// Decoded terminfo entry
///
/// `B` is the storage holding the raw file contents, usually `Vec<u8>` for
/// entries loaded from disk or `&[u8]` for buffers owned elsewhere. All
/// capability values are borrowed from that storage, so they stay valid for
/// as long as the `Terminfo` is alive. Dropping it releases the buffer.
#[derive(Debug, Clone)]
pub struct Terminfo<B = Vec<u8>> {
    buffer: B,
    layout: Layout,
}

impl<B: AsRef<[u8]>> Terminfo<B> {
    pub(crate) const fn new(buffer: B, layout: Layout) -> Self {
        Self { buffer, layout }
    }

    /// Decode a terminfo entry from the supplied buffer
    pub fn parse(buffer: B) -> Result<Self, Error> {
        parse::parse(buffer)
    }

    fn section(&self, range: &Range<usize>) -> &[u8] {
        self.buffer.as_ref().get(range.clone()).unwrap_or_default()
    }

    /// Raw buffer the entry was decoded from
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_ref()
    }

    /// Terminal names separated by `|`, the last one usually being a description
    pub fn names(&self) -> &[u8] {
        self.section(&self.layout.names)
    }

    /// Iterate over the `|`-separated terminal names
    pub fn aliases(&self) -> impl Iterator<Item = &[u8]> {
        self.names().split(|c| *c == b'|')
    }

    /// Number of boolean capabilities stored in the legacy section
    pub const fn flag_count(&self) -> usize {
        self.layout.booleans.end - self.layout.booleans.start
    }

    /// Number of numeric capabilities stored in the legacy section
    pub const fn number_count(&self) -> usize {
        (self.layout.numbers.end - self.layout.numbers.start) / self.layout.number_size
    }

    /// Number of string capabilities stored in the legacy section
    pub const fn string_count(&self) -> usize {
        (self.layout.strings.end - self.layout.strings.start) / 2
    }

    /// Boolean capability at `index`, `false` if not set or out of range
    pub fn flag_at(&self, index: usize) -> bool {
        self.section(&self.layout.booleans).get(index) == Some(&1)
    }

    /// Numeric capability at `index`
    ///
    /// Returns `None` if the entry does not define it or `index` is out of range.
    pub fn number_at(&self, index: usize) -> Option<i32> {
        let section = self.section(&self.layout.numbers);
        read_number(section, self.layout.number_size, index).filter(|value| *value >= 0)
    }

    /// String capability at `index`, distinguishing absent and canceled values
    pub fn string_entry_at(&self, index: usize) -> Entry<&[u8]> {
        let offsets = self.section(&self.layout.strings);
        let table = self.section(&self.layout.string_table);
        string_entry(offsets, table, index)
    }

    /// String capability at `index`
    ///
    /// Returns `None` if the entry does not define it or `index` is out of range.
    pub fn string_at(&self, index: usize) -> Option<&[u8]> {
        self.string_entry_at(index).present()
    }

    pub fn flag(&self, cap: BooleanCap) -> bool {
        self.flag_at(cap.index())
    }

    pub fn number(&self, cap: NumberCap) -> Option<i32> {
        self.number_at(cap.index())
    }

    pub fn string(&self, cap: StringCap) -> Option<&[u8]> {
        self.string_at(cap.index())
    }

    /// Whether the file has a section with extended capabilities
    pub const fn has_extended(&self) -> bool {
        self.layout.extended.is_some()
    }

    pub fn extended_flag_count(&self) -> usize {
        self.layout
            .extended
            .as_ref()
            .map_or(0, |ext| ext.booleans.len())
    }

    pub fn extended_number_count(&self) -> usize {
        self.layout.extended.as_ref().map_or(0, |ext| {
            ext.numbers.len() / self.layout.number_size
        })
    }

    pub fn extended_string_count(&self) -> usize {
        self.layout
            .extended
            .as_ref()
            .map_or(0, |ext| ext.strings.len() / 2)
    }

    /// Extended boolean capability by exact name
    ///
    /// Returns `None` if the name is unknown, `Some(false)` if the entry lists
    /// the name but does not set it.
    pub fn extended_flag(&self, name: &str) -> Option<bool> {
        let ext = self.layout.extended.as_ref()?;
        let index = *ext.boolean_names.get(name)?;
        Some(self.section(&ext.booleans).get(index) == Some(&1))
    }

    /// Extended numeric capability by exact name
    pub fn extended_number(&self, name: &str) -> Option<i32> {
        let ext = self.layout.extended.as_ref()?;
        let index = *ext.number_names.get(name)?;
        read_number(self.section(&ext.numbers), self.layout.number_size, index)
            .filter(|value| *value >= 0)
    }

    /// Extended string capability by exact name
    pub fn extended_string(&self, name: &str) -> Option<&[u8]> {
        let ext = self.layout.extended.as_ref()?;
        let index = *ext.string_names.get(name)?;
        let offsets = self.section(&ext.strings);
        let table = self.section(&ext.string_table);
        string_entry(offsets, table, index).present()
    }

    /// Names of the extended boolean capabilities, sorted
    pub fn extended_flag_names(&self) -> impl Iterator<Item = &str> {
        self.layout
            .extended
            .iter()
            .flat_map(|ext| ext.boolean_names.keys().map(String::as_str))
    }

    /// Names of the extended numeric capabilities, sorted
    pub fn extended_number_names(&self) -> impl Iterator<Item = &str> {
        self.layout
            .extended
            .iter()
            .flat_map(|ext| ext.number_names.keys().map(String::as_str))
    }

    /// Names of the extended string capabilities, sorted
    pub fn extended_string_names(&self) -> impl Iterator<Item = &str> {
        self.layout
            .extended
            .iter()
            .flat_map(|ext| ext.string_names.keys().map(String::as_str))
    }

    /// Boolean capability by short name, standard names first
    pub fn flag_by_name(&self, name: &str) -> bool {
        match BooleanCap::from_name(name) {
            Some(cap) => self.flag(cap),
            None => self.extended_flag(name).unwrap_or(false),
        }
    }

    /// Numeric capability by short name, standard names first
    pub fn number_by_name(&self, name: &str) -> Option<i32> {
        match NumberCap::from_name(name) {
            Some(cap) => self.number(cap),
            None => self.extended_number(name),
        }
    }

    /// String capability by short name, standard names first
    pub fn string_by_name(&self, name: &str) -> Option<&[u8]> {
        match StringCap::from_name(name) {
            Some(cap) => self.string(cap),
            None => self.extended_string(name),
        }
    }
}

fn string_entry<'a>(offsets: &[u8], table: &'a [u8], index: usize) -> Entry<&'a [u8]> {
    let Some(start) = index.checked_mul(2) else {
        return Entry::Absent;
    };
    let Some(offset) = start
        .checked_add(2)
        .and_then(|end| offsets.get(start..end))
        .map(le16)
    else {
        return Entry::Absent;
    };
    if i32::from(offset) == CANCELED_ENTRY {
        return Entry::Canceled;
    }
    // Offsets were validated when decoding, a failure here means absent.
    match check_offset(offset).map(|offset| get_string(table, offset)) {
        Some(Ok(value)) => Entry::Present(value),
        _ => Entry::Absent,
    }
}
