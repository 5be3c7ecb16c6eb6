// Copyright 2025 Pavel Roskin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Read-only view of compiled terminfo entries with a capability string interpreter

pub mod cap;
pub mod expand;
pub mod load;
pub mod locate;
pub mod parse;
pub mod program;
pub mod terminfo;

pub use cap::{BooleanCap, NumberCap, StringCap};
pub use expand::{MAX_PARAMETERS, Parameter, Session};
pub use load::{load, load_file};
pub use locate::{locate, search_directories};
pub use parse::parse;
pub use program::Program;
pub use terminfo::{Entry, Terminfo};
