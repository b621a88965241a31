//! Recursive-descent JSON parser.
//!
//! The parser walks a byte cursor over the input with one byte of lookahead.
//! It accepts RFC 8259 JSON with these decisions:
//!
//! - Numbers without a fraction or exponent become `Int`. If they do not fit in
//!   an `i64` they fall back to `Double`. Numbers whose magnitude overflows an
//!   `f64` are rejected.
//! - `\u` escapes must form valid scalar values; surrogate pairs are combined
//!   and an unpaired surrogate is an error.
//! - A repeated object key overwrites the earlier value but keeps the earlier
//!   key's position in the iteration order.
//! - Anything but whitespace after the top-level value is rejected unless
//!   [`Trailing::Ignore`] is configured.
//!
//! Errors carry the byte offset of the failure plus a 1-based line and column
//! (the column counts characters, not bytes).

use crate::error::{JsonError, ParseErrorKind, Result};
use crate::value::{Map, Value};
use std::rc::Rc;
use std::str::FromStr;

/// What to do with non-whitespace input after the top-level value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trailing {
    #[default]
    Reject,
    Ignore,
}

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting of arrays and objects. Deeper input fails with
    /// [`ParseErrorKind::NestingTooDeep`] instead of exhausting the stack.
    pub max_depth: usize,
    pub trailing: Trailing,
}

impl ParseOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    pub const fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            trailing: Trailing::Reject,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn with_trailing(mut self, trailing: Trailing) -> Self {
        self.trailing = trailing;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse JSON text with the default options.
pub fn parse(text: &str) -> Result<Value> {
    parse_with(text, &ParseOptions::default())
}

/// Parse JSON text with explicit options.
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Value> {
    let mut parser = Parser::new(text, *options);
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if options.trailing == Trailing::Reject && parser.pos < parser.input.len() {
        return Err(parser.error(ParseErrorKind::TrailingCharacters));
    }
    Ok(value)
}

impl Value {
    /// Parse JSON text into a new value.
    ///
    /// ```
    /// use dynjson_core::Value;
    /// let v = Value::parse(r#"{"name":"junping","age":30}"#).unwrap();
    /// assert_eq!(v["age"], 30);
    /// ```
    pub fn parse(text: &str) -> Result<Value> {
        parse(text)
    }

    pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Value> {
        parse_with(text, options)
    }

    /// Parse into an existing value. On failure `self` is left unchanged.
    pub fn parse_into(&mut self, text: &str) -> Result<()> {
        *self = parse(text)?;
        Ok(())
    }
}

impl FromStr for Value {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

struct Parser<'a> {
    text: &'a str,
    input: &'a [u8],
    pos: usize,
    depth: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str, options: ParseOptions) -> Self {
        Self {
            text,
            input: text.as_bytes(),
            pos: 0,
            depth: 0,
            options,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.error(ParseErrorKind::UnexpectedEnd)),
            Some(b'n') => self.parse_literal("null", Value::Null),
            Some(b't') => self.parse_literal("true", Value::Bool(true)),
            Some(b'f') => self.parse_literal("false", Value::Bool(false)),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(_) => Err(self.unexpected()),
        }
    }

    fn parse_literal(&mut self, word: &'static str, value: Value) -> Result<Value> {
        if self.input[self.pos..].starts_with(word.as_bytes()) {
            self.pos += word.len();
            Ok(value)
        } else {
            Err(self.error(ParseErrorKind::InvalidLiteral(word)))
        }
    }

    /// Parse a string literal; the cursor is on the opening quote.
    fn parse_string(&mut self) -> Result<String> {
        self.pos += 1;
        let mut out = String::new();
        // Unescaped bytes are copied in runs. Runs only end on ASCII bytes, so
        // both ends are always char boundaries.
        let mut run_start = self.pos;
        loop {
            match self.peek() {
                None => return Err(self.error(ParseErrorKind::UnexpectedEnd)),
                Some(b'"') => {
                    out.push_str(&self.text[run_start..self.pos]);
                    self.pos += 1;
                    return Ok(out);
                }
                Some(b'\\') => {
                    out.push_str(&self.text[run_start..self.pos]);
                    self.pos += 1;
                    let ch = self.parse_escape()?;
                    out.push(ch);
                    run_start = self.pos;
                }
                Some(b) if b < 0x20 => {
                    return Err(self.error(ParseErrorKind::ControlCharacter(u32::from(b))));
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    /// The cursor is just past the backslash.
    fn parse_escape(&mut self) -> Result<char> {
        let Some(b) = self.peek() else {
            return Err(self.error(ParseErrorKind::UnexpectedEnd));
        };
        let ch = match b {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{08}',
            b'f' => '\u{0C}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => {
                self.pos += 1;
                return self.parse_unicode_escape();
            }
            _ => {
                let found = self.char_at(self.pos).unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(self.error(ParseErrorKind::InvalidEscape(found)));
            }
        };
        self.pos += 1;
        Ok(ch)
    }

    /// The cursor is just past `\u`.
    fn parse_unicode_escape(&mut self) -> Result<char> {
        let escape_start = self.pos - 2;
        let first = self.read_hex4()?;
        let code = match first {
            0xD800..=0xDBFF => {
                if !self.input[self.pos..].starts_with(b"\\u") {
                    return Err(self.error_at(escape_start, ParseErrorKind::LoneSurrogate));
                }
                self.pos += 2;
                let second = self.read_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&second) {
                    return Err(self.error_at(escape_start, ParseErrorKind::LoneSurrogate));
                }
                0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00)
            }
            0xDC00..=0xDFFF => {
                return Err(self.error_at(escape_start, ParseErrorKind::LoneSurrogate));
            }
            cp => cp,
        };
        char::from_u32(code)
            .ok_or_else(|| self.error_at(escape_start, ParseErrorKind::InvalidUnicodeEscape))
    }

    fn read_hex4(&mut self) -> Result<u32> {
        let mut code = 0u32;
        for _ in 0..4 {
            let Some(b) = self.peek() else {
                return Err(self.error(ParseErrorKind::UnexpectedEnd));
            };
            let Some(digit) = char::from(b).to_digit(16) else {
                return Err(self.error(ParseErrorKind::InvalidUnicodeEscape));
            };
            code = code * 16 + digit;
            self.pos += 1;
        }
        Ok(code)
    }

    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        let mut is_double = false;

        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        match self.peek() {
            Some(b'0') => self.pos += 1,
            Some(b'1'..=b'9') => self.skip_digits(),
            _ => return Err(self.error(ParseErrorKind::InvalidNumber)),
        }

        if self.peek() == Some(b'.') {
            self.pos += 1;
            self.expect_digit()?;
            self.skip_digits();
            is_double = true;
        }

        if let Some(b'e' | b'E') = self.peek() {
            self.pos += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.pos += 1;
            }
            self.expect_digit()?;
            self.skip_digits();
            is_double = true;
        }

        let literal = &self.text[start..self.pos];
        if !is_double {
            if let Ok(i) = literal.parse::<i64>() {
                return Ok(Value::Int(i));
            }
        }
        match literal.parse::<f64>() {
            Ok(d) if d.is_finite() => Ok(Value::Double(d)),
            _ => Err(self.error_at(start, ParseErrorKind::NumberOutOfRange)),
        }
    }

    fn skip_digits(&mut self) {
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }
    }

    fn expect_digit(&self) -> Result<()> {
        match self.peek() {
            Some(b'0'..=b'9') => Ok(()),
            None => Err(self.error(ParseErrorKind::UnexpectedEnd)),
            Some(_) => Err(self.error(ParseErrorKind::InvalidNumber)),
        }
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.enter()?;
        self.pos += 1;
        let mut items = Vec::new();

        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.pos += 1;
            self.depth -= 1;
            return Ok(Value::Array(Rc::new(items)));
        }

        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    break;
                }
                Some(_) => return Err(self.error(ParseErrorKind::ExpectedCommaOrEnd(']'))),
                None => return Err(self.error(ParseErrorKind::UnexpectedEnd)),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(Rc::new(items)))
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.enter()?;
        self.pos += 1;
        let mut map = Map::new();

        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            self.depth -= 1;
            return Ok(Value::Object(Rc::new(map)));
        }

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'"') => {}
                Some(_) => return Err(self.error(ParseErrorKind::ExpectedKey)),
                None => return Err(self.error(ParseErrorKind::UnexpectedEnd)),
            }
            let key = self.parse_string()?;

            self.skip_whitespace();
            match self.peek() {
                Some(b':') => self.pos += 1,
                Some(_) => return Err(self.error(ParseErrorKind::ExpectedColon)),
                None => return Err(self.error(ParseErrorKind::UnexpectedEnd)),
            }

            let value = self.parse_value()?;
            // IndexMap::insert keeps the slot of an existing key.
            map.insert(key, value);

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    break;
                }
                Some(_) => return Err(self.error(ParseErrorKind::ExpectedCommaOrEnd('}'))),
                None => return Err(self.error(ParseErrorKind::UnexpectedEnd)),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(Rc::new(map)))
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.options.max_depth {
            return Err(self.error(ParseErrorKind::NestingTooDeep(self.options.max_depth)));
        }
        self.depth += 1;
        Ok(())
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(offset..).and_then(|rest| rest.chars().next())
    }

    fn unexpected(&self) -> JsonError {
        match self.char_at(self.pos) {
            Some(ch) => self.error(ParseErrorKind::UnexpectedChar(ch)),
            None => self.error(ParseErrorKind::UnexpectedEnd),
        }
    }

    fn error(&self, kind: ParseErrorKind) -> JsonError {
        self.error_at(self.pos, kind)
    }

    fn error_at(&self, offset: usize, kind: ParseErrorKind) -> JsonError {
        let consumed = &self.input[..offset.min(self.input.len())];
        let line = consumed.iter().filter(|&&b| b == b'\n').count() + 1;
        let line_start = consumed
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |p| p + 1);
        // Count chars, not bytes: skip UTF-8 continuation bytes.
        let column = consumed[line_start..]
            .iter()
            .filter(|&&b| b & 0xC0 != 0x80)
            .count()
            + 1;
        JsonError::Parse {
            kind,
            offset,
            line,
            column,
        }
    }
}
