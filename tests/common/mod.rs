//! Writer for compiled terminfo entries used by the integration tests

#![allow(dead_code)]

use std::{
    fs::{create_dir_all, write},
    path::{Path, PathBuf},
};

#[derive(Default)]
pub struct EntryBuilder {
    names: Vec<u8>,
    wide: bool,
    booleans: Vec<u8>,
    numbers: Vec<i32>,
    strings: Vec<Option<Vec<u8>>>,
    extended: Option<Extended>,
}

#[derive(Default)]
struct Extended {
    booleans: Vec<(String, u8)>,
    numbers: Vec<(String, i32)>,
    strings: Vec<(String, Vec<u8>)>,
}

fn push_le16(buffer: &mut Vec<u8>, value: usize) {
    buffer.extend_from_slice(&i16::try_from(value).unwrap().to_le_bytes());
}

fn push_number(buffer: &mut Vec<u8>, value: i32, wide: bool) {
    if wide {
        buffer.extend_from_slice(&value.to_le_bytes());
    } else {
        buffer.extend_from_slice(&i16::try_from(value).unwrap().to_le_bytes());
    }
}

fn pad_to_even(buffer: &mut Vec<u8>) {
    if buffer.len() % 2 == 1 {
        buffer.push(0);
    }
}

impl EntryBuilder {
    pub fn new(names: &str) -> Self {
        Self {
            names: names.as_bytes().to_vec(),
            ..Self::default()
        }
    }

    /// Store numbers as 32-bit values
    pub fn wide(mut self) -> Self {
        self.wide = true;
        self
    }

    /// Set `count` booleans to 0, then set the listed ones to 1
    pub fn booleans(mut self, count: usize, set: &[usize]) -> Self {
        self.booleans = vec![0; count];
        for index in set {
            self.booleans[*index] = 1;
        }
        self
    }

    /// Set `count` numbers to -1, then assign the listed ones
    pub fn numbers(mut self, count: usize, set: &[(usize, i32)]) -> Self {
        self.numbers = vec![-1; count];
        for (index, value) in set {
            self.numbers[*index] = *value;
        }
        self
    }

    /// Make `count` strings absent, then assign the listed ones
    pub fn strings(mut self, count: usize, set: &[(usize, &[u8])]) -> Self {
        self.strings = vec![None; count];
        for (index, value) in set {
            self.strings[*index] = Some(value.to_vec());
        }
        self
    }

    pub fn extended_boolean(mut self, name: &str, value: bool) -> Self {
        let extended = self.extended.get_or_insert_default();
        extended.booleans.push((name.to_owned(), u8::from(value)));
        self
    }

    pub fn extended_number(mut self, name: &str, value: i32) -> Self {
        let extended = self.extended.get_or_insert_default();
        extended.numbers.push((name.to_owned(), value));
        self
    }

    pub fn extended_string(mut self, name: &str, value: &[u8]) -> Self {
        let extended = self.extended.get_or_insert_default();
        extended.strings.push((name.to_owned(), value.to_vec()));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut table = vec![];
        let mut offsets = vec![];
        for value in &self.strings {
            match value {
                Some(value) => {
                    offsets.push(i16::try_from(table.len()).unwrap());
                    table.extend_from_slice(value);
                    table.push(0);
                }
                None => offsets.push(-1),
            }
        }

        let mut buffer = vec![];
        let magic: u16 = if self.wide { 0o1036 } else { 0o432 };
        buffer.extend_from_slice(&magic.to_le_bytes());
        push_le16(&mut buffer, self.names.len() + 1);
        push_le16(&mut buffer, self.booleans.len());
        push_le16(&mut buffer, self.numbers.len());
        push_le16(&mut buffer, self.strings.len());
        push_le16(&mut buffer, table.len());
        buffer.extend_from_slice(&self.names);
        buffer.push(0);
        buffer.extend_from_slice(&self.booleans);
        pad_to_even(&mut buffer);
        for number in &self.numbers {
            push_number(&mut buffer, *number, self.wide);
        }
        for offset in &offsets {
            buffer.extend_from_slice(&offset.to_le_bytes());
        }
        buffer.extend_from_slice(&table);

        if let Some(extended) = &self.extended {
            pad_to_even(&mut buffer);
            self.build_extended(extended, &mut buffer);
        }
        buffer
    }

    fn build_extended(&self, extended: &Extended, buffer: &mut Vec<u8>) {
        let mut table = vec![];
        let mut value_offsets = vec![];
        for (_, value) in &extended.strings {
            value_offsets.push(table.len());
            table.extend_from_slice(value);
            table.push(0);
        }
        let names_base = table.len();
        let mut name_offsets = vec![];
        let names = extended.booleans.iter().map(|(name, _)| name);
        let names = names.chain(extended.numbers.iter().map(|(name, _)| name));
        let names = names.chain(extended.strings.iter().map(|(name, _)| name));
        for name in names {
            name_offsets.push(table.len() - names_base);
            table.extend_from_slice(name.as_bytes());
            table.push(0);
        }

        push_le16(buffer, extended.booleans.len());
        push_le16(buffer, extended.numbers.len());
        push_le16(buffer, extended.strings.len());
        push_le16(buffer, value_offsets.len() + name_offsets.len());
        push_le16(buffer, table.len());
        buffer.extend(extended.booleans.iter().map(|(_, value)| *value));
        pad_to_even(buffer);
        for (_, number) in &extended.numbers {
            push_number(buffer, *number, self.wide);
        }
        for offset in value_offsets.iter().chain(&name_offsets) {
            push_le16(buffer, *offset);
        }
        buffer.extend_from_slice(&table);
    }
}

/// Install a compiled entry in the standard layout under `dir`
pub fn install(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let leaf_dir = dir.join(&name[..1]);
    create_dir_all(&leaf_dir).unwrap();
    let path = leaf_dir.join(name);
    write(&path, contents).unwrap();
    path
}
