// Copyright 2019 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Parameterized string expansion
//!
//! Expansion never fails. Stack underflow reads as 0 or an empty string,
//! pushes beyond the stack capacity are dropped, and operands of the wrong
//! type are converted.

use std::{array::from_fn, iter::repeat_n};

use crate::{
    cap::StringCap,
    program::{Conversion, Flags, Instruction, Program, Variable},
    terminfo::Terminfo,
};

/// Maximal number of parameters a capability can use
pub const MAX_PARAMETERS: usize = 9;

const STACK_CAPACITY: usize = 32;

/// Types of parameters a capability can use
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Parameter {
    Number(i32),
    String(Vec<u8>),
}

impl From<i32> for Parameter {
    fn from(value: i32) -> Self {
        Self::Number(value)
    }
}

impl From<&[u8]> for Parameter {
    fn from(value: &[u8]) -> Self {
        Self::String(value.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Parameter {
    fn from(value: &[u8; N]) -> Self {
        Self::String(value.to_vec())
    }
}

impl From<&str> for Parameter {
    fn from(value: &str) -> Self {
        Self::String(value.as_bytes().to_vec())
    }
}

/// Operand stack element
#[derive(Clone, Debug, PartialEq, Eq)]
enum Value {
    Number(i32),
    /// Character constant, a number or a one-byte string depending on use
    Char(u8),
    String(Vec<u8>),
}

impl Default for Value {
    fn default() -> Self {
        Self::Number(0)
    }
}

impl From<&Parameter> for Value {
    fn from(parameter: &Parameter) -> Self {
        match parameter {
            Parameter::Number(number) => Self::Number(*number),
            Parameter::String(string) => Self::String(string.clone()),
        }
    }
}

impl Value {
    fn into_number(self) -> i32 {
        match self {
            Self::Number(number) => number,
            Self::Char(c) => i32::from(c),
            Self::String(string) => parse_decimal(&string),
        }
    }

    fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Number(number) => number.to_string().into_bytes(),
            Self::Char(c) => vec![c],
            Self::String(string) => string,
        }
    }
}

/// Parse a decimal integer the way `atoi` does, malformed text gives 0
fn parse_decimal(text: &[u8]) -> i32 {
    let text = text.trim_ascii_start();
    let (negative, digits) = match text.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, text),
    };
    let value = digits
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .fold(0i32, |value, c| {
            value.wrapping_mul(10).wrapping_add(i32::from(c - b'0'))
        });
    if negative { value.wrapping_neg() } else { value }
}

/// Bounded operand stack
#[derive(Default)]
struct Stack(Vec<Value>);

impl Stack {
    fn push(&mut self, value: Value) {
        if self.0.len() < STACK_CAPACITY {
            self.0.push(value);
        } else {
            log::trace!("stack overflow, dropping {value:?}");
        }
    }

    fn pop(&mut self) -> Option<Value> {
        let value = self.0.pop();
        if value.is_none() {
            log::trace!("stack underflow");
        }
        value
    }

    fn pop_number(&mut self) -> i32 {
        self.pop().map_or(0, Value::into_number)
    }

    fn pop_bytes(&mut self) -> Vec<u8> {
        self.pop().map(Value::into_bytes).unwrap_or_default()
    }
}

/// Session state for capability expansion
///
/// Holds the static variables `A`-`Z`, which keep their values from one
/// expansion to the next. To be compatible with ncurses, the same `Session`
/// should be used for all expansions for the same terminal. Dynamic variables
/// `a`-`z` and the operand stack are local to each expansion.
#[derive(Clone, Debug, Default)]
pub struct Session {
    /// Static variables A-Z
    static_variables: [Value; 26],
}

impl Session {
    /// Return a new session with all static variables set to 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all static variables to 0
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Expand a parameterized capability
    ///
    /// # Arguments
    /// * `cap`    - string to expand
    /// * `params` - values for `%p1` to `%p9`, missing ones are 0, extra ones are ignored
    pub fn expand(&mut self, cap: &[u8], params: &[Parameter]) -> Vec<u8> {
        self.run(&Program::compile(cap), params)
    }

    /// Expand a standard string capability of the terminal
    ///
    /// Returns `None` if the terminal does not have the capability.
    pub fn expand_capability<B: AsRef<[u8]>>(
        &mut self,
        terminfo: &Terminfo<B>,
        cap: StringCap,
        params: &[Parameter],
    ) -> Option<Vec<u8>> {
        let template = terminfo.string(cap)?;
        Some(self.expand(template, params))
    }

    /// Run a compiled capability
    pub fn run(&mut self, program: &Program<'_>, params: &[Parameter]) -> Vec<u8> {
        if params.len() > MAX_PARAMETERS {
            log::debug!(
                "ignoring {} parameters past the first {MAX_PARAMETERS}",
                params.len() - MAX_PARAMETERS
            );
        }
        let mut mparams: [Value; MAX_PARAMETERS] =
            from_fn(|index| params.get(index).map(Value::from).unwrap_or_default());

        // Dynamic variables a-z
        let mut dynamic_variables: [Value; 26] = from_fn(|_| Value::default());

        let mut stack = Stack::default();
        let mut output = Vec::new();

        let instructions = program.instructions();
        let mut pc = 0;
        while let Some(instruction) = instructions.get(pc) {
            pc += 1;
            match *instruction {
                Instruction::Literal(bytes) => output.extend_from_slice(bytes),
                Instruction::Percent => output.push(b'%'),
                Instruction::Increment => {
                    for param in &mut mparams[..2] {
                        if let Value::Number(number) = param {
                            *number = number.wrapping_add(1);
                        }
                    }
                }
                Instruction::Char => match stack.pop() {
                    // if c is 0, use 0200 (128) for ncurses compatibility
                    Some(Value::Number(0)) => output.push(128u8),
                    // Don't check bounds. ncurses just casts and truncates.
                    Some(Value::Number(c)) => output.push(c as u8),
                    Some(Value::Char(c)) => output.push(c),
                    Some(Value::String(s)) => output.extend(s),
                    None => {}
                },
                Instruction::Format(conversion, flags) => {
                    let arg = stack.pop().unwrap_or_else(|| match conversion {
                        Conversion::String => Value::String(Vec::new()),
                        _ => Value::Number(0),
                    });
                    output.extend(format(arg, conversion, flags));
                }
                Instruction::PushParam(index) => stack.push(mparams[index].clone()),
                Instruction::PushInt(number) => stack.push(Value::Number(number)),
                Instruction::PushChar(c) => stack.push(Value::Char(c)),
                Instruction::Store(variable) => {
                    let arg = stack.pop().unwrap_or(Value::String(Vec::new()));
                    match variable {
                        Variable::Static(index) => self.static_variables[index] = arg,
                        Variable::Dynamic(index) => dynamic_variables[index] = arg,
                    }
                }
                Instruction::Load(variable) => {
                    let value = match variable {
                        Variable::Static(index) => &self.static_variables[index],
                        Variable::Dynamic(index) => &dynamic_variables[index],
                    };
                    stack.push(value.clone());
                }
                Instruction::Length => {
                    let length = stack.pop_bytes().len();
                    stack.push(Value::Number(i32::try_from(length).unwrap_or(i32::MAX)));
                }
                Instruction::Binary(op) => {
                    let y = stack.pop_number();
                    let x = stack.pop_number();
                    stack.push(Value::Number(op.apply(x, y)));
                }
                Instruction::Unary(op) => {
                    let x = stack.pop_number();
                    stack.push(Value::Number(op.apply(x)));
                }
                Instruction::If | Instruction::EndIf => {}
                Instruction::Then(target) => {
                    if stack.pop_number() == 0 {
                        pc = target;
                    }
                }
                Instruction::Else(target) => pc = target,
            }
        }
        output
    }
}

fn format(val: Value, conversion: Conversion, flags: Flags) -> Vec<u8> {
    let mut s = match conversion {
        Conversion::String => {
            let mut s = val.into_bytes();
            if let Some(precision) = flags.precision
                && let precision = usize::from(precision)
                && precision < s.len()
            {
                s.truncate(precision);
            }
            s
        }
        _ => format_number(val.into_number(), conversion, flags).into_bytes(),
    };
    if usize::from(flags.width) > s.len() {
        let n = usize::from(flags.width) - s.len();
        if flags.left {
            s.extend(repeat_n(b' ', n));
        } else if flags.zero && flags.precision.is_none() && conversion != Conversion::String {
            // Zeros go between the sign or radix prefix and the digits
            let mut prefix = usize::from(matches!(s.first(), Some(b'+' | b'-' | b' ')));
            if s[prefix..].starts_with(b"0x") || s[prefix..].starts_with(b"0X") {
                prefix += 2;
            }
            let digits = s.split_off(prefix);
            s.extend(repeat_n(b'0', n));
            s.extend(digits);
        } else {
            let mut s_ = Vec::with_capacity(usize::from(flags.width));
            s_.extend(repeat_n(b' ', n));
            s_.extend(s);
            s = s_;
        }
    }
    s
}

fn format_number(d: i32, conversion: Conversion, flags: Flags) -> String {
    match conversion {
        Conversion::Decimal | Conversion::String => match flags.precision {
            Some(precision) => {
                if flags.sign {
                    format!("{d:+0prec$}", prec = usize::from(precision) + 1)
                } else if d < 0 {
                    format!("{d:0prec$}", prec = usize::from(precision) + 1)
                } else if flags.space {
                    format!(" {d:0prec$}", prec = precision.into())
                } else {
                    format!("{d:0prec$}", prec = precision.into())
                }
            }
            None => {
                if flags.sign {
                    format!("{d:+}")
                } else if d >= 0 && flags.space {
                    format!(" {d}")
                } else {
                    format!("{d}")
                }
            }
        },
        Conversion::Octal => match flags.precision {
            // Leading octal zero counts against precision.
            Some(precision) if flags.alternate => {
                format!("0{d:0prec$o}", prec = precision.saturating_sub(1).into())
            }
            Some(precision) => format!("{d:0prec$o}", prec = precision.into()),
            None if flags.alternate => format!("0{d:o}"),
            None => format!("{d:o}"),
        },
        Conversion::Hex => match flags.precision {
            Some(precision) if flags.alternate && d != 0 => {
                format!("0x{d:0prec$x}", prec = precision.into())
            }
            Some(precision) => format!("{d:0prec$x}", prec = precision.into()),
            None if flags.alternate && d != 0 => format!("0x{d:x}"),
            None => format!("{d:x}"),
        },
        Conversion::HexUpper => match flags.precision {
            Some(precision) if flags.alternate && d != 0 => {
                format!("0X{d:0prec$X}", prec = precision.into())
            }
            Some(precision) => format!("{d:0prec$X}", prec = precision.into()),
            None if flags.alternate && d != 0 => format!("0X{d:X}"),
            None => format!("{d:X}"),
        },
    }
}
