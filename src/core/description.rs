// File: src/core/description.rs
//! Decoding and display of dictionary description payloads.
//!
//! A payload is a literal list of groupings, each grouping mapping a word
//! class label to its senses:
//!
//! ```text
//! [{'danh từ': ['loài thú nhỏ', 'nuôi để bắt chuột']}, {'động từ': 'kêu'}]
//! ```
//!
//! Version 1 of the syntax accepts single- or double-quoted strings with
//! backslash escapes, a bare string or a list of strings as a grouping value,
//! trailing commas, and arbitrary whitespace between tokens. Nothing else is
//! evaluated.

use crate::error::DescriptionError;

/// One `label → details` pair inside a grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sense {
    pub label: String,
    pub details: Vec<String>,
}

/// One grouping of a payload; rendered as one display line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DescriptionGroup {
    pub senses: Vec<Sense>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Description {
    pub groups: Vec<DescriptionGroup>,
}

/// Parses a raw payload. A blank payload decodes to an empty description.
pub fn decode(raw: &str) -> Result<Description, DescriptionError> {
    let mut parser = Parser { src: raw, pos: 0 };
    parser.skip_ws();
    if parser.at_end() {
        return Ok(Description::default());
    }
    let groups = parser.list(|p| p.group())?;
    parser.skip_ws();
    if !parser.at_end() {
        return Err(parser.error("end of payload"));
    }
    Ok(Description { groups })
}

/// Renders each grouping as `"<word>" ﹣ <labels>: <details>`.
pub fn format_lines(display_word: &str, description: &Description) -> Vec<String> {
    description
        .groups
        .iter()
        .map(|group| {
            let labels: Vec<&str> = group.senses.iter().map(|s| s.label.as_str()).collect();
            let details: Vec<&str> = group
                .senses
                .iter()
                .flat_map(|s| s.details.iter().map(String::as_str))
                .collect();
            format!("\"{}\" ﹣ {}: {}", display_word, labels.join("; "), details.join("; "))
        })
        .collect()
}

/// Decodes and formats a payload, degrading to a single line carrying the
/// raw text when the payload cannot be decoded.
pub fn describe(display_word: &str, raw: &str) -> Vec<String> {
    match decode(raw) {
        Ok(description) => format_lines(display_word, &description),
        Err(err) => {
            tracing::warn!(word = display_word, %err, "undecodable description payload");
            vec![format!("\"{}\" ﹣ {}", display_word, raw.trim())]
        }
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn error(&self, expected: &'static str) -> DescriptionError {
        DescriptionError { offset: self.pos, expected }
    }

    fn expect(&mut self, ch: char, expected: &'static str) -> Result<(), DescriptionError> {
        if self.peek() == Some(ch) {
            self.bump();
            Ok(())
        } else {
            Err(self.error(expected))
        }
    }

    /// `[ item (, item)* ,? ]`
    fn list<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<T, DescriptionError>,
    ) -> Result<Vec<T>, DescriptionError> {
        self.expect('[', "'['")?;
        let mut items = Vec::new();
        loop {
            self.skip_ws();
            if self.peek() == Some(']') {
                self.bump();
                return Ok(items);
            }
            items.push(item(self)?);
            self.skip_ws();
            match self.bump() {
                Some(',') => continue,
                Some(']') => return Ok(items),
                _ => return Err(self.error("',' or ']'")),
            }
        }
    }

    /// `{ label : details (, label : details)* ,? }`
    fn group(&mut self) -> Result<DescriptionGroup, DescriptionError> {
        self.expect('{', "'{'")?;
        let mut senses = Vec::new();
        loop {
            self.skip_ws();
            if self.peek() == Some('}') {
                self.bump();
                return Ok(DescriptionGroup { senses });
            }
            let label = self.string()?;
            self.skip_ws();
            self.expect(':', "':'")?;
            self.skip_ws();
            let details = match self.peek() {
                Some('[') => self.list(|p| p.string())?,
                _ => vec![self.string()?],
            };
            senses.push(Sense { label, details });
            self.skip_ws();
            match self.bump() {
                Some(',') => continue,
                Some('}') => return Ok(DescriptionGroup { senses }),
                _ => return Err(self.error("',' or '}'")),
            }
        }
    }

    fn string(&mut self) -> Result<String, DescriptionError> {
        let quote = match self.peek() {
            Some(q @ ('\'' | '"')) => q,
            _ => return Err(self.error("quoted string")),
        };
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("closing quote")),
                Some(ch) if ch == quote => return Ok(out),
                Some('\\') => self.escape(&mut out)?,
                Some(ch) => out.push(ch),
            }
        }
    }

    fn escape(&mut self, out: &mut String) -> Result<(), DescriptionError> {
        match self.bump() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('u') => {
                let start = self.pos;
                let hex = self.src.get(start..start + 4).ok_or_else(|| self.error("4 hex digits"))?;
                let ch = u32::from_str_radix(hex, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| self.error("4 hex digits"))?;
                self.pos += 4;
                out.push(ch);
            }
            Some(ch @ ('\\' | '\'' | '"')) => out.push(ch),
            // Unknown escapes are kept verbatim.
            Some(ch) => {
                out.push('\\');
                out.push(ch);
            }
            None => return Err(self.error("escape sequence")),
        }
        Ok(())
    }
}
