// Copyright 2019 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decoding parameterized strings into instructions
//!
//! A capability string is scanned once. Text outside of `%` escapes becomes a
//! literal, every escape becomes one instruction, and the targets of
//! conditional jumps are resolved before anything runs. Malformed escapes are
//! dropped so that the rest of the string still expands.

/// Output conversion of a printf-style escape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Conversion {
    Decimal,
    Octal,
    Hex,
    HexUpper,
    String,
}

impl Conversion {
    const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'd' => Some(Self::Decimal),
            b'o' => Some(Self::Octal),
            b'x' => Some(Self::Hex),
            b'X' => Some(Self::HexUpper),
            b's' => Some(Self::String),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, PartialEq, Eq, Clone, Default)]
pub(crate) struct Flags {
    pub width: u16,
    pub precision: Option<u16>,
    pub alternate: bool,
    pub left: bool,
    pub sign: bool,
    pub space: bool,
    pub zero: bool,
}

#[derive(Copy, PartialEq, Clone)]
enum FormatState {
    Flags,
    Width,
    Precision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Variable {
    /// `A`-`Z`, kept by the session
    Static(usize),
    /// `a`-`z`, reset for every expansion
    Dynamic(usize),
}

impl Variable {
    fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'A'..=b'Z' => Some(Self::Static(usize::from(byte - b'A'))),
            b'a'..=b'z' => Some(Self::Dynamic(usize::from(byte - b'a'))),
            _ => {
                log::trace!("invalid variable name {:?}", byte as char);
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    BitAnd,
    BitOr,
    BitXor,
    Equal,
    Less,
    Greater,
    And,
    Or,
}

impl BinaryOp {
    /// Apply the operator, `x` being the deeper stack element
    pub(crate) fn apply(self, x: i32, y: i32) -> i32 {
        match self {
            Self::Add => x.wrapping_add(y),
            Self::Subtract => x.wrapping_sub(y),
            Self::Multiply => x.wrapping_mul(y),
            // Division by zero yields 0
            Self::Divide => x.checked_div(y).unwrap_or(0),
            Self::Remainder => x.checked_rem(y).unwrap_or(0),
            Self::BitAnd => x & y,
            Self::BitOr => x | y,
            Self::BitXor => x ^ y,
            Self::Equal => i32::from(x == y),
            Self::Less => i32::from(x < y),
            Self::Greater => i32::from(x > y),
            Self::And => i32::from(x != 0 && y != 0),
            Self::Or => i32::from(x != 0 || y != 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnaryOp {
    Not,
    Complement,
}

impl UnaryOp {
    pub(crate) fn apply(self, x: i32) -> i32 {
        match self {
            Self::Not => i32::from(x == 0),
            Self::Complement => !x,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Instruction<'a> {
    /// Bytes copied to the output as is
    Literal(&'a [u8]),
    /// `%%`
    Percent,
    /// `%i`
    Increment,
    /// `%c`
    Char,
    /// `%d`, `%s`, `%x`, `%:-5.2d` and similar
    Format(Conversion, Flags),
    /// `%p1` to `%p9`, stored as 0-based index
    PushParam(usize),
    /// `%{123}`
    PushInt(i32),
    /// `%'c'`
    PushChar(u8),
    /// `%P`
    Store(Variable),
    /// `%g`
    Load(Variable),
    /// `%l`
    Length,
    Binary(BinaryOp),
    Unary(UnaryOp),
    /// `%?`
    If,
    /// `%t`, jumps to the target if the popped condition is 0
    Then(usize),
    /// `%e`, end of a taken branch, jumps to the end of the conditional
    Else(usize),
    /// `%;`
    EndIf,
}

/// Parameterized string decoded into instructions
///
/// Compiling once and running many times avoids rescanning capabilities that
/// are expanded often, such as cursor movement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program<'a> {
    instructions: Vec<Instruction<'a>>,
}

struct Scanner<'a> {
    input: &'a [u8],
    position: usize,
}

impl<'a> Scanner<'a> {
    const fn new(input: &'a [u8]) -> Self {
        Self { input, position: 0 }
    }

    fn next(&mut self) -> Option<u8> {
        let byte = *self.input.get(self.position)?;
        self.position += 1;
        Some(byte)
    }

    fn next_if(&mut self, predicate: impl FnOnce(&u8) -> bool) -> Option<u8> {
        let byte = *self.input.get(self.position).filter(|byte| predicate(*byte))?;
        self.position += 1;
        Some(byte)
    }

    /// Consume `expected` if it is the next byte
    fn eat(&mut self, expected: u8) -> bool {
        self.next_if(|byte| *byte == expected).is_some()
    }

    /// Consume everything up to the next `%` or the end of input
    fn literal(&mut self) -> &'a [u8] {
        let rest = &self.input[self.position..];
        let length = rest.iter().position(|c| *c == b'%').unwrap_or(rest.len());
        self.position += length;
        &rest[..length]
    }
}

impl<'a> Program<'a> {
    /// Decode a parameterized string
    pub fn compile(cap: &'a [u8]) -> Self {
        let mut instructions = Vec::new();
        let mut scanner = Scanner::new(cap);

        loop {
            let literal = scanner.literal();
            if !literal.is_empty() {
                instructions.push(Instruction::Literal(literal));
            }
            // `literal()` stops at `%` or the end
            if scanner.next().is_none() {
                break;
            }
            if let Some(instruction) = decode_escape(&mut scanner) {
                instructions.push(instruction);
            }
        }

        resolve_jumps(&mut instructions);
        Self { instructions }
    }

    pub(crate) fn instructions(&self) -> &[Instruction<'a>] {
        &self.instructions
    }
}

/// Decode the escape following `%`
fn decode_escape(scanner: &mut Scanner<'_>) -> Option<Instruction<'static>> {
    let Some(op) = scanner.next() else {
        log::trace!("lone % at the end of capability");
        return None;
    };
    if let Some(conversion) = Conversion::from_byte(op) {
        return Some(Instruction::Format(conversion, Flags::default()));
    }
    let instruction = match op {
        b'%' => Instruction::Percent,
        b'i' => Instruction::Increment,
        b'c' => Instruction::Char,
        b':' | b'#' | b' ' | b'.' | b'0'..=b'9' => return decode_format(scanner, op),
        b'p' => match scanner.next()? {
            // params are 1-indexed
            digit @ b'1'..=b'9' => Instruction::PushParam(usize::from(digit - b'1')),
            other => {
                log::trace!("invalid parameter index {:?}", other as char);
                Instruction::PushInt(0)
            }
        },
        b'P' => Instruction::Store(Variable::from_byte(scanner.next()?)?),
        b'g' => Instruction::Load(Variable::from_byte(scanner.next()?)?),
        b'\'' => {
            let c = scanner.next()?;
            if !scanner.eat(b'\'') {
                log::trace!("malformed character constant");
            }
            Instruction::PushChar(c)
        }
        b'{' => {
            let mut value: i32 = 0;
            while let Some(digit) = scanner.next_if(u8::is_ascii_digit) {
                value = value
                    .saturating_mul(10)
                    .saturating_add(i32::from(digit - b'0'));
            }
            if !scanner.eat(b'}') {
                log::trace!("malformed integer constant");
            }
            Instruction::PushInt(value)
        }
        b'l' => Instruction::Length,
        b'+' => Instruction::Binary(BinaryOp::Add),
        b'-' => Instruction::Binary(BinaryOp::Subtract),
        b'*' => Instruction::Binary(BinaryOp::Multiply),
        b'/' => Instruction::Binary(BinaryOp::Divide),
        b'm' => Instruction::Binary(BinaryOp::Remainder),
        b'&' => Instruction::Binary(BinaryOp::BitAnd),
        b'|' => Instruction::Binary(BinaryOp::BitOr),
        b'^' => Instruction::Binary(BinaryOp::BitXor),
        b'=' => Instruction::Binary(BinaryOp::Equal),
        b'<' => Instruction::Binary(BinaryOp::Less),
        b'>' => Instruction::Binary(BinaryOp::Greater),
        b'A' => Instruction::Binary(BinaryOp::And),
        b'O' => Instruction::Binary(BinaryOp::Or),
        b'!' => Instruction::Unary(UnaryOp::Not),
        b'~' => Instruction::Unary(UnaryOp::Complement),
        b'?' => Instruction::If,
        b't' => Instruction::Then(usize::MAX),
        b'e' => Instruction::Else(usize::MAX),
        b';' => Instruction::EndIf,
        other => {
            log::trace!("unrecognized format option {:?}", other as char);
            return None;
        }
    };
    Some(instruction)
}

/// Decode `%[[:]flags][width[.precision]][doxXs]` starting with `first`
fn decode_format(scanner: &mut Scanner<'_>, first: u8) -> Option<Instruction<'static>> {
    let mut flags = Flags::default();
    let mut state = FormatState::Flags;
    let mut cur = if first == b':' { scanner.next()? } else { first };

    loop {
        if let Some(conversion) = Conversion::from_byte(cur) {
            return Some(Instruction::Format(conversion, flags));
        }
        match (state, cur) {
            (FormatState::Flags, b'#') => flags.alternate = true,
            (FormatState::Flags, b'-') => flags.left = true,
            (FormatState::Flags, b'+') => flags.sign = true,
            (FormatState::Flags, b' ') => flags.space = true,
            (FormatState::Flags, b'0') => flags.zero = true,
            (FormatState::Flags, b'1'..=b'9') => {
                flags.width = u16::from(cur - b'0');
                state = FormatState::Width;
            }
            (FormatState::Width, b'0'..=b'9') => {
                flags.width = flags
                    .width
                    .saturating_mul(10)
                    .saturating_add(u16::from(cur - b'0'));
            }
            (FormatState::Flags | FormatState::Width, b'.') => {
                flags.precision = Some(0);
                state = FormatState::Precision;
            }
            (FormatState::Precision, b'0'..=b'9') => {
                flags.precision = flags.precision.map(|precision| {
                    precision
                        .saturating_mul(10)
                        .saturating_add(u16::from(cur - b'0'))
                });
            }
            _ => {
                log::trace!("unrecognized format option {:?}", cur as char);
                return None;
            }
        }
        cur = scanner.next()?;
    }
}

#[derive(Default)]
struct Conditional {
    /// `%t` waiting for its `%e` or `%;`
    pending_then: Option<usize>,
    /// `%e` waiting for `%;`
    elses: Vec<usize>,
}

impl Conditional {
    fn close(self, instructions: &mut [Instruction<'_>], target: usize) {
        if let Some(then) = self.pending_then {
            instructions[then] = Instruction::Then(target);
        }
        for index in self.elses {
            instructions[index] = Instruction::Else(target);
        }
    }
}

/// Point every `%t` and `%e` at the instruction where execution continues
///
/// All jumps go forward. Conditionals missing `%;` end with the program.
fn resolve_jumps(instructions: &mut [Instruction<'_>]) {
    let end = instructions.len();
    let mut open: Vec<Conditional> = Vec::new();

    for index in 0..end {
        match instructions[index] {
            Instruction::If => open.push(Conditional::default()),
            Instruction::Then(_) => {
                if open.is_empty() {
                    open.push(Conditional::default());
                }
                if let Some(conditional) = open.last_mut() {
                    conditional.pending_then = Some(index);
                }
            }
            Instruction::Else(_) => {
                if open.is_empty() {
                    open.push(Conditional::default());
                }
                if let Some(conditional) = open.last_mut() {
                    // A false condition resumes right after `%e`.
                    if let Some(then) = conditional.pending_then.take() {
                        instructions[then] = Instruction::Then(index + 1);
                    }
                    conditional.elses.push(index);
                }
            }
            Instruction::EndIf => {
                if let Some(conditional) = open.pop() {
                    conditional.close(instructions, index);
                }
            }
            _ => {}
        }
    }

    while let Some(conditional) = open.pop() {
        conditional.close(instructions, end);
    }
}
