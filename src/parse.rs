// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decoding terminfo database files
//!
//! The decoder makes one validated pass over the buffer and records where each
//! section lives. Nothing is copied except the extended capability names, which
//! are collected into lookup maps.

use std::{collections::BTreeMap, ops::Range};

use crate::terminfo::Terminfo;

pub(crate) const ABSENT_ENTRY: i32 = -1;
pub(crate) const CANCELED_ENTRY: i32 = -2;

const HEADER_SIZE: usize = 12;
const EXTENDED_HEADER_SIZE: usize = 10;

#[repr(u16)]
enum TerminfoMagic {
    /// Legacy format, 16-bit numbers (octal 0432)
    Magic1 = 0o432,
    /// 32-bit numbers (octal 01036)
    Magic2 = 0o1036,
}

/// Errors reported when decoding a terminfo database
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The magic number is invalid or unsupported
    #[error("Unknown magic number")]
    BadMagic,
    /// The buffer ends before a section that the header announces
    #[error("Truncated terminfo database")]
    Truncated,
    /// A string is not terminated by the NUL byte
    #[error("String without final NUL")]
    UnterminatedString,
    /// Negative count or offset outside its table, probably invalid terminfo database
    #[error("Unsupported terminfo format")]
    UnsupportedFormat,
    /// Boolean value not 0, 1 or canceled, probably invalid terminfo database
    #[error("Invalid boolean value {0}")]
    InvalidBooleanValue(u8),
    /// An extended capability name is not valid UTF-8
    #[error("Invalid UTF-8 string")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Decode a terminfo database from the supplied buffer
///
/// The buffer is kept by the returned `Terminfo`, which can be an owned
/// `Vec<u8>` or a borrowed slice.
pub fn parse<B: AsRef<[u8]>>(buffer: B) -> Result<Terminfo<B>, Error> {
    let layout = Layout::decode(buffer.as_ref())?;
    Ok(Terminfo::new(buffer, layout))
}

/// Location of every section of a decoded terminfo entry
#[derive(Debug, Clone)]
pub(crate) struct Layout {
    /// Terminal names without the final NUL
    pub names: Range<usize>,
    pub booleans: Range<usize>,
    pub numbers: Range<usize>,
    pub strings: Range<usize>,
    pub string_table: Range<usize>,
    /// 2 or 4 depending on the magic number
    pub number_size: usize,
    pub extended: Option<Extended>,
}

/// Extended capabilities, addressed by name
#[derive(Debug, Clone)]
pub(crate) struct Extended {
    pub booleans: Range<usize>,
    pub numbers: Range<usize>,
    pub strings: Range<usize>,
    pub string_table: Range<usize>,
    pub boolean_names: BTreeMap<String, usize>,
    pub number_names: BTreeMap<String, usize>,
    pub string_names: BTreeMap<String, usize>,
}

/// Bounds-checked reader over the raw buffer
struct Reader<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> Reader<'a> {
    const fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    const fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Claim the next `size` bytes as a section
    fn take(&mut self, size: usize) -> Result<Range<usize>, Error> {
        let end = self
            .position
            .checked_add(size)
            .filter(|end| *end <= self.buffer.len())
            .ok_or(Error::Truncated)?;
        let range = self.position..end;
        self.position = end;
        Ok(range)
    }

    fn skip(&mut self, size: usize) -> Result<(), Error> {
        self.take(size).map(|_| ())
    }

    fn read_le16(&mut self) -> Result<i16, Error> {
        let range = self.take(2)?;
        Ok(le16(&self.buffer[range]))
    }

    /// Read a header count, rejecting negative values
    fn read_count(&mut self) -> Result<usize, Error> {
        usize::try_from(self.read_le16()?).map_err(|_| Error::UnsupportedFormat)
    }

    /// Skip a byte if needed to ensure 2-byte alignment
    fn align(&mut self) -> Result<(), Error> {
        if self.position & 1 == 1 {
            self.skip(1)?;
        }
        Ok(())
    }
}

pub(crate) fn le16(bytes: &[u8]) -> i16 {
    i16::from_le_bytes([bytes[0], bytes[1]])
}

/// Read the number at `index` from a section of 2- or 4-byte numbers
pub(crate) fn read_number(section: &[u8], number_size: usize, index: usize) -> Option<i32> {
    let start = index.checked_mul(number_size)?;
    let bytes = section.get(start..start.checked_add(number_size)?)?;
    Some(if number_size == 4 {
        i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    } else {
        i32::from(le16(bytes))
    })
}

/// Return the NUL-terminated string starting at `offset`, without the NUL
pub(crate) fn get_string(string_table: &[u8], offset: usize) -> Result<&[u8], Error> {
    let Some(string_slice) = string_table.get(offset..) else {
        return Err(Error::UnsupportedFormat);
    };
    match string_slice.iter().position(|c| *c == b'\0') {
        Some(string_length) => Ok(&string_slice[..string_length]),
        None => Err(Error::UnterminatedString),
    }
}

/// Convert ABSENT and CANCELED to None
pub(crate) fn check_offset(offset: i16) -> Option<usize> {
    match i32::from(offset) {
        ABSENT_ENTRY | CANCELED_ENTRY => None,
        _ => usize::try_from(offset).ok(),
    }
}

fn check_booleans(values: &[u8]) -> Result<(), Error> {
    match values
        .iter()
        .find(|value| !matches!(**value as i8, 0 | 1 | -2))
    {
        Some(value) => Err(Error::InvalidBooleanValue(*value)),
        None => Ok(()),
    }
}

/// Verify that every present string offset resolves inside the table
///
/// Returns the total size of the present strings, including their NUL bytes.
fn check_strings(offsets: &[u8], string_table: &[u8]) -> Result<usize, Error> {
    let mut total = 0;
    for offset in offsets.chunks_exact(2).map(le16) {
        match i32::from(offset) {
            ABSENT_ENTRY | CANCELED_ENTRY => {}
            value if value < 0 => return Err(Error::UnsupportedFormat),
            _ => total += get_string(string_table, offset as usize)?.len() + 1,
        }
    }
    Ok(total)
}

impl Layout {
    fn decode(buffer: &[u8]) -> Result<Self, Error> {
        if buffer.len() < HEADER_SIZE {
            return Err(Error::Truncated);
        }
        let mut reader = Reader::new(buffer);

        let magic = reader.read_le16()? as u16;
        let number_size = match magic {
            val if val == TerminfoMagic::Magic1 as u16 => 2,
            val if val == TerminfoMagic::Magic2 as u16 => 4,
            _ => return Err(Error::BadMagic),
        };

        let name_size = reader.read_count()?;
        let bool_count = reader.read_count()?;
        let num_count = reader.read_count()?;
        let str_count = reader.read_count()?;
        let str_size = reader.read_count()?;

        let names_section = reader.take(name_size)?;
        let names_length = get_string(&buffer[names_section.clone()], 0)
            .map_err(|_| Error::UnterminatedString)?
            .len();
        let names = names_section.start..names_section.start + names_length;

        let booleans = reader.take(bool_count)?;
        check_booleans(&buffer[booleans.clone()])?;

        // Numbers start on an even offset. The header has an even size, so
        // padding depends on the names and booleans only.
        if (name_size + bool_count) % 2 == 1 {
            reader.skip(1)?;
        }

        let numbers = reader.take(num_count * number_size)?;
        let strings = reader.take(str_count * 2)?;
        let string_table = reader.take(str_size)?;
        check_strings(&buffer[strings.clone()], &buffer[string_table.clone()])?;

        let extended = if reader.align().is_ok() && reader.remaining() >= EXTENDED_HEADER_SIZE {
            Some(Extended::decode(&mut reader, number_size)?)
        } else {
            if reader.remaining() > 0 {
                log::debug!(
                    "ignoring {} trailing bytes after legacy sections",
                    reader.remaining()
                );
            }
            None
        };

        Ok(Self {
            names,
            booleans,
            numbers,
            strings,
            string_table,
            number_size,
            extended,
        })
    }
}

impl Extended {
    fn decode(reader: &mut Reader<'_>, number_size: usize) -> Result<Self, Error> {
        let buffer = reader.buffer;

        let bool_count = reader.read_count()?;
        let num_count = reader.read_count()?;
        let str_count = reader.read_count()?;
        let _ext_str_usage = reader.read_count()?;
        let str_limit = reader.read_count()?;

        let booleans = reader.take(bool_count)?;
        check_booleans(&buffer[booleans.clone()])?;
        reader.align()?;

        let numbers = reader.take(number_size * num_count)?;
        let strings = reader.take(2 * str_count)?;
        let names = reader.take(2 * (bool_count + num_count + str_count))?;
        let string_table = reader.take(str_limit)?;

        // Names follow the string values in the same table.
        let table = &buffer[string_table.clone()];
        let names_base = check_strings(&buffer[strings.clone()], table)?;
        let Some(names_table) = table.get(names_base..) else {
            return Err(Error::UnsupportedFormat);
        };

        let mut name_offsets = buffer[names].chunks_exact(2).map(le16);
        let mut collect = |count: usize| -> Result<BTreeMap<String, usize>, Error> {
            let mut map = BTreeMap::new();
            for index in 0..count {
                let offset = name_offsets.next().ok_or(Error::UnsupportedFormat)?;
                let offset = check_offset(offset).ok_or(Error::UnsupportedFormat)?;
                let name = str::from_utf8(get_string(names_table, offset)?)?;
                map.entry(name.to_owned()).or_insert(index);
            }
            Ok(map)
        };

        let boolean_names = collect(bool_count)?;
        let number_names = collect(num_count)?;
        let string_names = collect(str_count)?;

        Ok(Self {
            booleans,
            numbers,
            strings,
            string_table,
            boolean_names,
            number_names,
            string_names,
        })
    }
}

#[cfg(test)]
mod test {
    use collection_literals::collection;

    use super::*;

    #[derive(Clone, Copy, PartialEq)]
    enum NumberType {
        U16,
        U32,
    }

    #[derive(Clone, PartialEq)]
    enum StringValue {
        Present(Vec<u8>),
        Absent,
        Canceled,
    }

    impl<'a> IntoIterator for &'a StringValue {
        type Item = &'a [u8];
        type IntoIter = std::option::IntoIter<Self::Item>;

        fn into_iter(self) -> Self::IntoIter {
            match self {
                StringValue::Present(value) => Some(value.as_slice()),
                _ => None,
            }
            .into_iter()
        }
    }

    impl<const N: usize> From<&[u8; N]> for StringValue {
        fn from(value: &[u8; N]) -> Self {
            Self::Present(value.to_vec())
        }
    }

    // Size of byte string in memory with terminating NUL
    fn memlen(byte_string: &[u8]) -> u16 {
        byte_string.len() as u16 + 1
    }

    fn push_offset(buffer: &mut Vec<u8>, string: &StringValue, offset: &mut u16) {
        match string {
            StringValue::Present(string) => {
                buffer.extend_from_slice(&u16::to_le_bytes(*offset));
                *offset += memlen(string);
            }
            StringValue::Absent => buffer.extend_from_slice(&u16::to_le_bytes(0xffff)),
            StringValue::Canceled => buffer.extend_from_slice(&u16::to_le_bytes(0xfffe)),
        }
    }

    struct DataSet {
        number_type: NumberType,
        term_name: Vec<u8>,
        base_booleans: Vec<u8>,
        base_numbers: Vec<i32>,
        base_strings: Vec<StringValue>,
        ext_booleans: Vec<(&'static [u8], u8)>,
        ext_numbers: Vec<(&'static [u8], i32)>,
        ext_strings: Vec<(&'static [u8], StringValue)>,
    }

    impl Default for DataSet {
        fn default() -> Self {
            Self {
                number_type: NumberType::U16,
                term_name: b"myterm|My terminal".to_vec(),
                base_booleans: vec![1, 0, 0, 0, 1],
                base_numbers: vec![80, -2, 25, -1, 0, 0x10005],
                base_strings: vec![
                    StringValue::Absent,
                    StringValue::from(b"Hello"),
                    StringValue::Canceled,
                    StringValue::Absent,
                    StringValue::from(b"World!"),
                ],
                ext_booleans: vec![(b"Curly", 1), (b"Italic", 0), (b"Semi-bold", 1)],
                ext_numbers: vec![(b"Shades", 1100), (b"Variants", -1)],
                ext_strings: vec![
                    (b"Colors", StringValue::from(b"A lot")),
                    (b"Ideas", StringValue::Absent),
                    (b"Luminosity", StringValue::from(b"Positive")),
                ],
            }
        }
    }

    fn push_number(buffer: &mut Vec<u8>, number_type: NumberType, number: i32) {
        match number_type {
            NumberType::U16 => buffer.extend_from_slice(&u16::to_le_bytes(number as u16)),
            NumberType::U32 => buffer.extend_from_slice(&u32::to_le_bytes(number as u32)),
        }
    }

    fn make_buffer(data_set: &DataSet, add_ext: bool) -> Vec<u8> {
        let magic: u16 = match data_set.number_type {
            NumberType::U16 => 0o432,
            NumberType::U32 => 0o1036,
        };
        let str_size = data_set.base_strings.iter().flatten().map(memlen).sum();

        let mut buffer = vec![];
        buffer.extend_from_slice(&u16::to_le_bytes(magic));
        buffer.extend_from_slice(&u16::to_le_bytes(memlen(&data_set.term_name)));
        buffer.extend_from_slice(&u16::to_le_bytes(data_set.base_booleans.len() as u16));
        buffer.extend_from_slice(&u16::to_le_bytes(data_set.base_numbers.len() as u16));
        buffer.extend_from_slice(&u16::to_le_bytes(data_set.base_strings.len() as u16));
        buffer.extend_from_slice(&u16::to_le_bytes(str_size));
        buffer.extend_from_slice(&data_set.term_name);
        buffer.push(0);
        buffer.extend_from_slice(&data_set.base_booleans);
        if !buffer.len().is_multiple_of(2) {
            buffer.push(0);
        }
        for number in &data_set.base_numbers {
            push_number(&mut buffer, data_set.number_type, *number);
        }
        let mut offset = 0;
        for string in &data_set.base_strings {
            push_offset(&mut buffer, string, &mut offset);
        }
        for string in data_set.base_strings.iter().flatten() {
            buffer.extend_from_slice(string);
            buffer.push(0);
        }
        if add_ext {
            if !buffer.len().is_multiple_of(2) {
                buffer.push(0);
            }
            buffer.append(&mut make_ext_buffer(data_set));
        }
        buffer
    }

    fn make_ext_buffer(data_set: &DataSet) -> Vec<u8> {
        let booleans = &data_set.ext_booleans;
        let numbers = &data_set.ext_numbers;
        let strings = &data_set.ext_strings;

        let boolean_name_size: u16 = booleans.iter().map(|x| memlen(x.0)).sum();
        let number_name_size: u16 = numbers.iter().map(|x| memlen(x.0)).sum();
        let string_name_size: u16 = strings.iter().map(|x| memlen(x.0)).sum();
        let string_value_size: u16 = strings.iter().flat_map(|x| &x.1).map(memlen).sum();
        let name_size = boolean_name_size + number_name_size + string_name_size;
        let string_size = name_size + string_value_size;

        let mut buffer = vec![];

        // extended header, boolean values, align(2), number values, string value offsets,
        // name offsets, string values, boolean names, number names, string names.
        buffer.extend_from_slice(&u16::to_le_bytes(booleans.len() as u16));
        buffer.extend_from_slice(&u16::to_le_bytes(numbers.len() as u16));
        buffer.extend_from_slice(&u16::to_le_bytes(strings.len() as u16));
        buffer.extend_from_slice(&u16::to_le_bytes(0u16)); // unused `ext_str_usage`
        buffer.extend_from_slice(&u16::to_le_bytes(string_size));

        for boolean in booleans {
            buffer.push(boolean.1);
        }
        if !buffer.len().is_multiple_of(2) {
            buffer.push(0);
        }
        for number in numbers {
            push_number(&mut buffer, data_set.number_type, number.1);
        }
        let mut offset = 0;
        for string in strings {
            push_offset(&mut buffer, &string.1, &mut offset);
        }

        offset = 0;
        let names = booleans
            .iter()
            .map(|x| x.0)
            .chain(numbers.iter().map(|x| x.0))
            .chain(strings.iter().map(|x| x.0));
        for name in names.clone() {
            buffer.extend_from_slice(&u16::to_le_bytes(offset));
            offset += memlen(name);
        }
        for string in strings.iter().flat_map(|x| &x.1) {
            buffer.extend_from_slice(string);
            buffer.push(0);
        }
        for name in names {
            buffer.extend_from_slice(name);
            buffer.push(0);
        }

        buffer
    }

    fn flags<B: AsRef<[u8]>>(terminfo: &Terminfo<B>) -> Vec<bool> {
        (0..terminfo.flag_count())
            .map(|index| terminfo.flag_at(index))
            .collect()
    }

    fn numbers<B: AsRef<[u8]>>(terminfo: &Terminfo<B>) -> Vec<Option<i32>> {
        (0..terminfo.number_count())
            .map(|index| terminfo.number_at(index))
            .collect()
    }

    fn strings<B: AsRef<[u8]>>(terminfo: &Terminfo<B>) -> Vec<Option<&[u8]>> {
        (0..terminfo.string_count())
            .map(|index| terminfo.string_at(index))
            .collect()
    }

    #[test]
    fn empty_buffer() {
        assert_eq!(parse(b"").unwrap_err(), Error::Truncated);
    }

    #[test]
    fn short_header() {
        assert_eq!(parse(b"\x1a\x01\x10\x00").unwrap_err(), Error::Truncated);
    }

    #[test]
    fn base_16_bit() {
        let data_set = DataSet::default();
        let buffer = make_buffer(&data_set, false);
        let terminfo = parse(buffer.as_slice()).unwrap();
        assert_eq!(terminfo.names(), b"myterm|My terminal");
        assert_eq!(flags(&terminfo), [true, false, false, false, true]);
        assert_eq!(
            numbers(&terminfo),
            [Some(80), None, Some(25), None, Some(0), Some(5)]
        );
        assert_eq!(
            strings(&terminfo),
            [None, Some(b"Hello".as_slice()), None, None, Some(b"World!")]
        );
        assert!(!terminfo.has_extended());
    }

    #[test]
    fn base_32_bit() {
        let mut data_set = DataSet {
            number_type: NumberType::U32,
            ..Default::default()
        };
        data_set.base_numbers[5] = 0x7fff_ffff;

        let buffer = make_buffer(&data_set, false);
        let terminfo = parse(buffer.as_slice()).unwrap();
        assert_eq!(
            numbers(&terminfo),
            [Some(80), None, Some(25), None, Some(0), Some(0x7fff_ffff)]
        );
        assert_eq!(
            strings(&terminfo),
            [None, Some(b"Hello".as_slice()), None, None, Some(b"World!")]
        );
    }

    #[test]
    fn bad_magic() {
        let data_set = DataSet::default();
        let mut buffer = make_buffer(&data_set, false);
        buffer[1] = 3;
        assert_eq!(parse(buffer.as_slice()).unwrap_err(), Error::BadMagic);
    }

    #[test]
    fn base_truncated() {
        let data_set = DataSet::default();
        let mut buffer = make_buffer(&data_set, false);
        buffer.pop();
        assert_eq!(parse(buffer.as_slice()).unwrap_err(), Error::Truncated);
    }

    #[test]
    fn base_unterminated_string() {
        let data_set = DataSet::default();
        let mut buffer = make_buffer(&data_set, false);
        let buffer_size = buffer.len();
        buffer[buffer_size - 1] = b'!';
        assert_eq!(
            parse(buffer.as_slice()).unwrap_err(),
            Error::UnterminatedString
        );
    }

    #[test]
    fn invalid_boolean() {
        let data_set = DataSet {
            base_booleans: vec![1, 0, 7],
            ..Default::default()
        };
        let buffer = make_buffer(&data_set, false);
        assert_eq!(
            parse(buffer.as_slice()).unwrap_err(),
            Error::InvalidBooleanValue(7)
        );
    }

    #[test]
    fn canceled_boolean_is_false() {
        let data_set = DataSet {
            base_booleans: vec![1, 0xfe, 1],
            ..Default::default()
        };
        let buffer = make_buffer(&data_set, false);
        let terminfo = parse(buffer.as_slice()).unwrap();
        assert_eq!(flags(&terminfo), [true, false, true]);
    }

    #[test]
    fn negative_count() {
        let data_set = DataSet::default();
        let mut buffer = make_buffer(&data_set, false);
        buffer[6] = 0xf0;
        buffer[7] = 0xff;
        assert_eq!(
            parse(buffer.as_slice()).unwrap_err(),
            Error::UnsupportedFormat
        );
    }

    #[test]
    fn string_offset_outside_table() {
        let data_set = DataSet::default();
        let mut buffer = make_buffer(&data_set, false);
        // Five string offsets followed by "Hello" and "World!" with their NULs
        let strings_start = buffer.len() - 13 - 2 * 5;
        buffer[strings_start + 2] = 0x40;
        assert_eq!(
            parse(buffer.as_slice()).unwrap_err(),
            Error::UnsupportedFormat
        );
    }

    #[test]
    fn alignment_parity() {
        // "ab" + NUL is odd, "abc" + NUL is even; combined with odd and even
        // boolean counts this covers all four padding cases.
        for term_name in [b"ab".as_slice(), b"abc"] {
            for base_booleans in [vec![1], vec![1, 0]] {
                for add_ext in [false, true] {
                    let data_set = DataSet {
                        term_name: term_name.to_vec(),
                        base_booleans: base_booleans.clone(),
                        ..Default::default()
                    };
                    let buffer = make_buffer(&data_set, add_ext);
                    let terminfo = parse(buffer.as_slice()).unwrap();
                    assert_eq!(terminfo.names(), term_name);
                    assert!(terminfo.flag_at(0));
                    assert_eq!(terminfo.number_at(0), Some(80));
                    assert_eq!(terminfo.string_at(4), Some(b"World!".as_slice()));
                    assert_eq!(terminfo.has_extended(), add_ext);
                }
            }
        }
    }

    #[test]
    fn odd_legacy_section_with_odd_extended_booleans() {
        let data_set = DataSet {
            term_name: b"xterm-kitty|KovIdTTY".to_vec(),
            base_booleans: vec![0, 1],
            base_strings: vec![StringValue::from(b"\x1b[K"), StringValue::from(b"odd!")],
            ..Default::default()
        };
        let buffer = make_buffer(&data_set, true);
        let terminfo = parse(buffer.as_slice()).unwrap();
        assert_eq!(terminfo.string_at(0), Some(b"\x1b[K".as_slice()));
        assert_eq!(terminfo.extended_flag_count(), 3);
        assert_eq!(terminfo.extended_flag("Semi-bold"), Some(true));
        assert_eq!(terminfo.extended_number("Shades"), Some(1100));
        assert_eq!(
            terminfo.extended_string("Luminosity"),
            Some(b"Positive".as_slice())
        );
    }

    #[test]
    fn extended_16_bit() {
        let data_set = DataSet::default();
        let buffer = make_buffer(&data_set, true);
        let terminfo = parse(buffer.as_slice()).unwrap();
        assert_eq!(flags(&terminfo), [true, false, false, false, true]);
        assert_eq!(
            terminfo.extended_flag_names().collect::<Vec<_>>(),
            ["Curly", "Italic", "Semi-bold"]
        );
        assert_eq!(terminfo.extended_flag("Curly"), Some(true));
        assert_eq!(terminfo.extended_flag("Italic"), Some(false));
        assert_eq!(terminfo.extended_number("Shades"), Some(1100));
        assert_eq!(terminfo.extended_number("Variants"), None);
        assert_eq!(
            terminfo.extended_string("Colors"),
            Some(b"A lot".as_slice())
        );
        assert_eq!(terminfo.extended_string("Ideas"), None);
        assert_eq!(
            terminfo.extended_string("Luminosity"),
            Some(b"Positive".as_slice())
        );
        assert_eq!(terminfo.extended_string("luminosity"), None);
    }

    #[test]
    fn extended_32_bit() {
        let mut data_set = DataSet {
            number_type: NumberType::U32,
            ..Default::default()
        };
        data_set.ext_numbers[0].1 = 0x12_3456;

        let buffer = make_buffer(&data_set, true);
        let terminfo = parse(buffer.as_slice()).unwrap();
        assert_eq!(terminfo.number_at(0), Some(80));
        assert_eq!(terminfo.extended_number("Shades"), Some(0x12_3456));
        assert_eq!(
            terminfo.extended_string("Colors"),
            Some(b"A lot".as_slice())
        );
    }

    #[test]
    fn extended_name_maps() {
        let data_set = DataSet::default();
        let buffer = make_buffer(&data_set, true);
        let layout = Layout::decode(&buffer).unwrap();
        let extended = layout.extended.unwrap();
        assert_eq!(
            extended.boolean_names,
            collection!(
                "Curly".to_owned() => 0,
                "Italic".to_owned() => 1,
                "Semi-bold".to_owned() => 2,
            )
        );
        assert_eq!(
            extended.number_names,
            collection!("Shades".to_owned() => 0, "Variants".to_owned() => 1)
        );
        assert_eq!(
            extended.string_names,
            collection!(
                "Colors".to_owned() => 0,
                "Ideas".to_owned() => 1,
                "Luminosity".to_owned() => 2,
            )
        );
    }

    #[test]
    fn short_trailer_ignored() {
        let data_set = DataSet::default();
        let mut buffer = make_buffer(&data_set, false);
        if !buffer.len().is_multiple_of(2) {
            buffer.push(0);
        }
        buffer.extend_from_slice(&[1, 0, 2, 0]);
        let terminfo = parse(buffer.as_slice()).unwrap();
        assert!(!terminfo.has_extended());
    }

    #[test]
    fn extended_truncated() {
        let data_set = DataSet::default();
        let mut buffer = make_buffer(&data_set, true);
        buffer.truncate(buffer.len() - 3);
        assert_eq!(parse(buffer.as_slice()).unwrap_err(), Error::Truncated);
    }

    #[test]
    fn extended_invalid_name() {
        let data_set = DataSet {
            ext_booleans: vec![(b"\xff\xfe", 1)],
            ..Default::default()
        };
        let buffer = make_buffer(&data_set, true);
        assert!(matches!(
            parse(buffer.as_slice()).unwrap_err(),
            Error::Utf8(_)
        ));
    }
}
