//! Character substitution policy.
//!
//! The base name is decoded as UTF-8 one character at a time, using the
//! leading byte to determine the width. Each decoded character is looked up
//! in an ordered replacement table; characters without an entry become `_`.
//! Malformed sequences never abort the scan: the offending byte is consumed
//! on its own and replaced.

use std::fmt;

use tracing::trace;

/// Replacement for any character without a table entry.
pub const FALLBACK: &str = "_";

/// Punctuation that maps to itself in the standard table.
const SAFE_PUNCTUATION: [char; 4] = ['_', '-', '+', ':'];

/// One table entry: an encoded source character and its ASCII replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementRule {
    source: Box<[u8]>,
    target: Box<str>,
}

impl ReplacementRule {
    pub fn new(source: char, target: &str) -> Self {
        let mut buf = [0u8; 4];
        let encoded = source.encode_utf8(&mut buf);
        Self {
            source: encoded.as_bytes().into(),
            target: target.into(),
        }
    }

    /// Rule that maps a character to itself.
    pub fn identity(c: char) -> Self {
        let mut buf = [0u8; 4];
        Self::new(c, c.encode_utf8(&mut buf))
    }

    pub fn source(&self) -> &[u8] {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Fixed, ordered list of replacement rules. Built once and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementTable {
    rules: Vec<ReplacementRule>,
}

impl ReplacementTable {
    pub fn new(rules: Vec<ReplacementRule>) -> Self {
        Self { rules }
    }

    /// The standard table: ASCII letters, digits and `_ - + :` unchanged,
    /// `ä` -> `ae`, `ö` -> `oe`.
    pub fn standard() -> Self {
        let mut rules: Vec<ReplacementRule> = ('A'..='Z')
            .chain('a'..='z')
            .chain('0'..='9')
            .chain(SAFE_PUNCTUATION)
            .map(ReplacementRule::identity)
            .collect();
        rules.push(ReplacementRule::new('ä', "ae"));
        rules.push(ReplacementRule::new('ö', "oe"));
        Self { rules }
    }

    /// Exact-match lookup on the encoded character; first match wins.
    pub fn lookup(&self, unit: &[u8]) -> Option<&str> {
        self.rules
            .iter()
            .find(|r| r.source() == unit)
            .map(ReplacementRule::target)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for ReplacementTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Width of a UTF-8 character announced by its leading byte.
/// Continuation bytes and out-of-range leaders return `None`.
#[inline]
pub fn declared_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7f => Some(1),
        0xc0..=0xdf => Some(2),
        0xe0..=0xef => Some(3),
        0xf0..=0xf7 => Some(4),
        _ => None,
    }
}

#[inline]
fn is_continuation(b: u8) -> bool {
    b & 0xc0 == 0x80
}

/// Iterator over the encoded characters of a byte string.
///
/// Yields `(unit, valid)`. An invalid unit is always exactly one byte.
pub struct Units<'a> {
    rest: &'a [u8],
}

impl<'a> Units<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { rest: bytes }
    }
}

impl<'a> Iterator for Units<'a> {
    type Item = (&'a [u8], bool);

    fn next(&mut self) -> Option<Self::Item> {
        let lead = *self.rest.first()?;
        let (len, valid) = match declared_len(lead) {
            Some(n)
                if n <= self.rest.len() && self.rest[1..n].iter().all(|&b| is_continuation(b)) =>
            {
                (n, true)
            }
            _ => (1, false),
        };
        let (unit, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some((unit, valid))
    }
}

/// Rewrites base names through a [`ReplacementTable`].
#[derive(Debug, Clone, Default)]
pub struct CharacterPolicy {
    table: ReplacementTable,
}

impl CharacterPolicy {
    pub fn new(table: ReplacementTable) -> Self {
        Self { table }
    }

    /// Rewrite an encoded base name. Never fails.
    pub fn rewrite(&self, base_name: &[u8]) -> String {
        let mut out = String::with_capacity(base_name.len());
        for (unit, valid) in Units::new(base_name) {
            if !valid {
                trace!(byte = unit[0], "invalid leading byte; substituting");
                out.push_str(FALLBACK);
                continue;
            }
            out.push_str(self.table.lookup(unit).unwrap_or(FALLBACK));
        }
        out
    }

    /// Convenience wrapper for `&str` input.
    pub fn rewrite_str(&self, base_name: &str) -> String {
        self.rewrite(base_name.as_bytes())
    }
}

/// Whether `c` belongs to the safe alphabet of the standard table.
pub fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || SAFE_PUNCTUATION.contains(&c)
}

/// Whether every character of `name` is in the safe alphabet.
pub fn is_safe_name(name: &str) -> bool {
    name.chars().all(is_safe_char)
}

impl fmt::Display for ReplacementRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            String::from_utf8_lossy(&self.source),
            self.target
        )
    }
}
