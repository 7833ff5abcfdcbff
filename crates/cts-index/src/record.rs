//! Raw tag records and the tag line grammar.
//!
//! A record line looks like:
//!
//! ```text
//! name<TAB>file<TAB>address[;"<TAB>field<TAB>field...]
//! ```
//!
//! The address is an ex command: a line number, a search pattern
//! (`/.../` or `?...?`), or a line number followed by `;` and a pattern.

use crate::error::IndexError;

/// One record as stored in the tag file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRecord {
    /// Symbol name
    pub name: String,
    /// Source file, as written in the tag file (often relative)
    pub file: String,
    /// Search pattern including its delimiters, if the address has one
    pub pattern: Option<String>,
    /// Line number of the definition (0 when unknown)
    pub line_number: u64,
    /// Kind code (e.g. "f", "v", "c")
    pub kind: Option<String>,
    /// Symbol is only visible inside its file
    pub file_scope: bool,
    /// Remaining extension fields in file order
    pub fields: Vec<(String, String)>,
}

impl TagRecord {
    /// Parse a single record line. `line` is the 1-based line number, used
    /// for error reporting only.
    pub fn parse(text: &str, line: usize) -> Result<Self, IndexError> {
        let text = text.strip_suffix('\r').unwrap_or(text);
        let mut parts = text.splitn(3, '\t');
        let (name, file, rest) = match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(file), Some(rest)) => (name, file, rest),
            _ => {
                return Err(IndexError::malformed(
                    line,
                    "expected name, file and address separated by tabs",
                ))
            }
        };

        let (pattern, mut line_number, tail) = parse_address(rest, line)?;

        let fields_text = if tail.is_empty() {
            ""
        } else if let Some(fields) = tail.strip_prefix(";\"") {
            fields
        } else {
            return Err(IndexError::malformed(
                line,
                format!("unexpected text after address: {tail:?}"),
            ));
        };

        let mut kind = None;
        let mut file_scope = false;
        let mut fields = Vec::new();

        for field in fields_text.split('\t').filter(|f| !f.is_empty()) {
            match field.split_once(':') {
                None => {
                    if kind.is_none() {
                        kind = Some(field.to_string());
                    }
                }
                Some(("kind", value)) => kind = Some(unescape(value)),
                Some(("line", value)) => {
                    line_number = value.parse().map_err(|_| {
                        IndexError::malformed(line, format!("invalid line field: {value:?}"))
                    })?;
                }
                Some(("file", _)) => file_scope = true,
                Some((key, value)) => fields.push((key.to_string(), unescape(value))),
            }
        }

        Ok(Self {
            name: name.to_string(),
            file: file.to_string(),
            pattern,
            line_number,
            kind,
            file_scope,
            fields,
        })
    }

    /// Look up an extension field by key.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Split the address off the front of `rest`.
///
/// Returns the pattern (if any), the line number (0 if none) and whatever
/// follows the address.
fn parse_address(rest: &str, line: usize) -> Result<(Option<String>, u64, &str), IndexError> {
    if rest.starts_with('/') || rest.starts_with('?') {
        let (pattern, tail) = split_pattern(rest)
            .ok_or_else(|| IndexError::malformed(line, "unterminated search pattern"))?;
        return Ok((Some(pattern.to_string()), 0, tail));
    }

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(IndexError::malformed(
            line,
            format!("unrecognized address: {rest:?}"),
        ));
    }

    let line_number = rest[..digits]
        .parse()
        .map_err(|_| IndexError::malformed(line, "line number out of range"))?;
    let tail = &rest[digits..];

    // "42;/pattern/" carries both forms
    if let Some(after) = tail.strip_prefix(';') {
        if after.starts_with('/') || after.starts_with('?') {
            let (pattern, tail) = split_pattern(after)
                .ok_or_else(|| IndexError::malformed(line, "unterminated search pattern"))?;
            return Ok((Some(pattern.to_string()), line_number, tail));
        }
    }

    Ok((None, line_number, tail))
}

/// Split a delimited pattern (`/.../` or `?...?`) from the text after it.
fn split_pattern(text: &str) -> Option<(&str, &str)> {
    let bytes = text.as_bytes();
    let delim = *bytes.first()?;
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == delim => return Some((&text[..=i], &text[i + 1..])),
            _ => i += 1,
        }
    }
    None
}

fn unescape(value: &str) -> String {
    if !value.contains('\\') {
        return value.to_string();
    }

    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
