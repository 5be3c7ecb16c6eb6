// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Search for terminfo database file for the terminal

use std::{
    env,
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

const TERMINFO_DIRS: &[&str] = &[
    "/etc/terminfo",
    "/lib/terminfo",
    "/usr/share/terminfo",
    "/usr/lib/terminfo",
    "/boot/system/data/terminfo", // haiku
];

/// Errors reported when looking for a terminfo database file
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// No terminal name was given and `TERM` is not set
    #[error("Terminal name is not set")]
    NameUnresolved,
    /// Terminfo file for the terminal could not be found
    #[error("File not found")]
    NotFound,
}

fn find_in_directory(term_name: &OsStr, dir: &Path) -> Option<PathBuf> {
    let first_byte = *term_name.as_encoded_bytes().first()?;

    // Standard layout - leaf directories use the first character of the terminal name.
    let first_char = first_byte as char;
    let filename = dir.join(first_char.to_string()).join(term_name);
    if filename.is_file() {
        return Some(filename);
    }

    // Layout for systems with non-case-sensitive filesystems (MacOS, Windows) - leaf
    // directories use the first byte of the terminal name in hexadecimal form.
    let first_byte_hex = format!("{first_byte:02x}");
    let filename = dir.join(first_byte_hex).join(term_name);
    if filename.is_file() {
        return Some(filename);
    }

    None
}

/// Returns all directories that are searched for terminfo files
///
/// If the `TERMINFO` environment variable is set, its value is the only
/// directory searched. This function does not attempt to verify if the
/// directories to be searched actually exist.
pub fn search_directories() -> Vec<PathBuf> {
    if let Some(dir) = env::var_os("TERMINFO") {
        return vec![PathBuf::from(dir)];
    }

    let mut search_dirs = vec![];

    // Lazily evaluated iterator, consumed at most once.
    let mut default_dirs = TERMINFO_DIRS.iter().map(PathBuf::from);

    // Search `.terminfo` in the home directory.
    if let Some(home_dir) = env::home_dir() {
        search_dirs.push(home_dir.join(".terminfo"));
    }

    // Search colon separated directories from the `TERMINFO_DIRS`
    // environment variable.
    if let Ok(dirs) = env::var("TERMINFO_DIRS") {
        for dir in dirs.split(':') {
            if dir.is_empty() {
                // Empty directory means search the default locations.
                search_dirs.extend(&mut default_dirs);
            } else {
                search_dirs.push(PathBuf::from(dir));
            }
        }
    }

    // Search default terminfo locations (nothing is added if used already).
    search_dirs.extend(&mut default_dirs);

    search_dirs
}

/// Resolve the terminal name, falling back to `TERM` if `term_name` is empty
pub fn resolve_name(term_name: &OsStr) -> Result<OsString, Error> {
    if !term_name.is_empty() {
        return Ok(term_name.to_owned());
    }
    match env::var_os("TERM") {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(Error::NameUnresolved),
    }
}

/// Find terminfo database file for the terminal name
///
/// # Arguments
///
/// * `term_name` - terminal name, `TERM` is used if empty.
///
/// Returns the file path if it exists, an error otherwise.
pub fn locate(term_name: impl AsRef<OsStr>) -> Result<PathBuf, Error> {
    let term_name = resolve_name(term_name.as_ref())?;
    for dir in search_directories() {
        if let Some(file) = find_in_directory(&term_name, &dir) {
            log::debug!("found terminfo for {term_name:?} at {}", file.display());
            return Ok(file);
        }
    }

    Err(Error::NotFound)
}
