// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Find, read and decode the terminfo entry for a terminal

use std::{ffi::OsStr, fs, io, path::Path};

use crate::{locate, parse, terminfo::Terminfo};

/// Errors reported when loading a terminfo entry
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Terminfo file could not be found
    #[error(transparent)]
    Locate(#[from] locate::Error),
    /// Terminfo file could not be read
    #[error("Cannot read terminfo file: {0}")]
    Io(#[from] io::Error),
    /// Terminfo file could not be decoded
    #[error(transparent)]
    Parse(#[from] parse::Error),
}

/// Load the terminfo entry for the terminal
///
/// An empty `term_name` means the value of the `TERM` environment variable.
pub fn load(term_name: impl AsRef<OsStr>) -> Result<Terminfo, Error> {
    let path = locate::locate(term_name)?;
    load_file(path)
}

/// Read and decode a terminfo file at a known location
pub fn load_file(path: impl AsRef<Path>) -> Result<Terminfo, Error> {
    let path = path.as_ref();
    let buffer = fs::read(path)?;
    log::debug!("read {} bytes from {}", buffer.len(), path.display());
    Ok(parse::parse(buffer)?)
}
