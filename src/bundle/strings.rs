// SPDX-License-Identifier: PMPL-1.0-or-later

//! `Localizable.strings` table parser.
//!
//! Accepts the plain-text form:
//!
//! ```text
//! /* Description of the current locale */
//! "current.locale" = "現在のロケール";
//! // line comment
//! "console" = "コンソール";
//! ```
//!
//! Strings support the escapes `\" \\ \n \t \r \0` and `\Uxxxx`/`\uxxxx`;
//! characters outside the BMP are written as a surrogate pair of `\U`
//! escapes. A later duplicate key overrides an earlier one.
//!
//! Files are UTF-8 unless they start with a UTF-16 (LE or BE) or UTF-8 byte
//! order mark.

use anyhow::{anyhow, bail, Context, Result};
use encoding_rs::{Encoding, UTF_8};
use std::collections::HashMap;
use std::fs;
use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;

pub fn load(path: &Path) -> Result<HashMap<String, String>> {
    let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let content = decode(&raw).with_context(|| format!("decoding {}", path.display()))?;
    parse(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Decode table bytes, honouring a leading byte order mark.
pub fn decode(raw: &[u8]) -> Result<String> {
    let (encoding, bom_len) = Encoding::for_bom(raw).unwrap_or((UTF_8, 0));
    let (text, had_errors) = encoding.decode_without_bom_handling(&raw[bom_len..]);
    if had_errors {
        bail!("malformed {} input", encoding.name());
    }
    Ok(text.into_owned())
}

pub fn parse(input: &str) -> Result<HashMap<String, String>> {
    let mut parser = Parser {
        chars: input.trim_start_matches('\u{feff}').chars().peekable(),
        line: 1,
    };
    let mut table = HashMap::new();

    loop {
        parser.skip_trivia()?;
        let Some(&c) = parser.chars.peek() else {
            break;
        };
        if c != '"' {
            bail!("line {}: expected quoted key, found {:?}", parser.line, c);
        }
        let key = parser.quoted()?;
        parser.skip_trivia()?;
        parser.expect('=')?;
        parser.skip_trivia()?;
        let value = parser.quoted()?;
        parser.skip_trivia()?;
        parser.expect(';')?;
        table.insert(key, value);
    }

    Ok(table)
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl Parser<'_> {
    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn expect(&mut self, want: char) -> Result<()> {
        match self.bump() {
            Some(c) if c == want => Ok(()),
            Some(c) => Err(anyhow!("line {}: expected {:?}, found {:?}", self.line, want, c)),
            None => Err(anyhow!("line {}: expected {:?}, found end of input", self.line, want)),
        }
    }

    /// Whitespace and both comment styles.
    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            match self.chars.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') => {
                    self.bump();
                    match self.bump() {
                        Some('/') => {
                            while let Some(c) = self.bump() {
                                if c == '\n' {
                                    break;
                                }
                            }
                        }
                        Some('*') => self.block_comment()?,
                        _ => bail!("line {}: stray '/'", self.line),
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn block_comment(&mut self) -> Result<()> {
        let start = self.line;
        let mut prev = '\0';
        while let Some(c) = self.bump() {
            if prev == '*' && c == '/' {
                return Ok(());
            }
            prev = c;
        }
        bail!("line {}: unterminated comment", start)
    }

    fn quoted(&mut self) -> Result<String> {
        let start = self.line;
        self.expect('"')?;
        let mut out = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(out),
                Some('\\') => out.push(self.escape()?),
                Some(c) => out.push(c),
                None => bail!("line {}: unterminated string", start),
            }
        }
    }

    fn escape(&mut self) -> Result<char> {
        let c = match self.bump() {
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('0') => '\0',
            Some('u') | Some('U') => self.unicode_escape()?,
            Some(other) => other,
            None => bail!("line {}: dangling escape", self.line),
        };
        Ok(c)
    }

    /// Body of a `\Uxxxx` escape; a high surrogate must be followed by a
    /// `\Uxxxx` low surrogate.
    fn unicode_escape(&mut self) -> Result<char> {
        let first = self.hex4()?;
        let mut units = vec![first];
        if (0xD800..0xDC00).contains(&first) {
            match (self.bump(), self.bump()) {
                (Some('\\'), Some('u' | 'U')) => units.push(self.hex4()?),
                _ => bail!("line {}: unpaired surrogate {:04x}", self.line, first),
            }
        }
        let mut decoded = char::decode_utf16(units.iter().copied());
        match (decoded.next(), decoded.next()) {
            (Some(Ok(c)), None) => Ok(c),
            _ => bail!("line {}: unpaired surrogate {:04x}", self.line, first),
        }
    }

    fn hex4(&mut self) -> Result<u16> {
        let mut code = 0u16;
        for _ in 0..4 {
            let digit = self
                .bump()
                .and_then(|d| d.to_digit(16))
                .ok_or_else(|| anyhow!("line {}: bad unicode escape", self.line))?;
            code = code * 16 + digit as u16;
        }
        Ok(code)
    }
}
