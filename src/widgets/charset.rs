//! Character sets a text field scrolls through.

use once_cell::sync::Lazy;

use crate::error::WidgetError;

/// A named, ordered sequence of inclusive character ranges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterSet {
    name: String,
    ranges: Vec<(char, char)>,
    len: usize,
}

static PRINTABLE_ASCII: Lazy<CharacterSet> =
    Lazy::new(|| CharacterSet::from_static("printable", &[(' ', '}')]));
static DIGITS: Lazy<CharacterSet> = Lazy::new(|| CharacterSet::from_static("digits", &[('0', '9')]));
static DECIMAL: Lazy<CharacterSet> =
    Lazy::new(|| CharacterSet::from_static("decimal", &[('-', '.'), ('0', '9')]));
static UPPERCASE: Lazy<CharacterSet> =
    Lazy::new(|| CharacterSet::from_static("uppercase", &[(' ', ' '), ('A', 'Z')]));
static ALPHANUMERIC: Lazy<CharacterSet> = Lazy::new(|| {
    CharacterSet::from_static(
        "alphanumeric",
        &[(' ', ' '), ('0', '9'), ('A', 'Z'), ('a', 'z')],
    )
});

impl CharacterSet {
    pub fn new(name: impl Into<String>, ranges: Vec<(char, char)>) -> Result<Self, WidgetError> {
        let name = name.into();
        if ranges.is_empty() {
            return Err(WidgetError::EmptyCharacterSet { name });
        }
        if let Some(&(low, high)) = ranges.iter().find(|(low, high)| low > high) {
            return Err(WidgetError::InvalidRange { name, low, high });
        }
        let len = ranges.iter().map(|&(low, high)| range_len(low, high)).sum();
        Ok(Self { name, ranges, len })
    }

    fn from_static(name: &str, ranges: &[(char, char)]) -> Self {
        let len = ranges.iter().map(|&(low, high)| range_len(low, high)).sum();
        Self {
            name: name.to_string(),
            ranges: ranges.to_vec(),
            len,
        }
    }

    /// `' '..='}'`.
    pub fn printable_ascii() -> Self {
        PRINTABLE_ASCII.clone()
    }

    pub fn digits() -> Self {
        DIGITS.clone()
    }

    /// Digits plus `-` and `.`.
    pub fn decimal() -> Self {
        DECIMAL.clone()
    }

    /// Space then `A..=Z`.
    pub fn uppercase() -> Self {
        UPPERCASE.clone()
    }

    /// Space, digits, upper and lower case letters.
    pub fn alphanumeric() -> Self {
        ALPHANUMERIC.clone()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ranges(&self) -> &[(char, char)] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        let mut remaining = index;
        for &(low, high) in &self.ranges {
            let len = range_len(low, high);
            if remaining < len {
                return char::from_u32(low as u32 + remaining as u32);
            }
            remaining -= len;
        }
        None
    }

    /// Position of `ch` in walk order (first occurrence).
    pub fn index_of(&self, ch: char) -> Option<usize> {
        let mut offset = 0;
        for &(low, high) in &self.ranges {
            if (low..=high).contains(&ch) {
                return Some(offset + (ch as u32 - low as u32) as usize);
            }
            offset += range_len(low, high);
        }
        None
    }

    pub fn contains(&self, ch: char) -> bool {
        self.index_of(ch).is_some()
    }

    /// Move `delta` positions from `ch`, clamped to the first and last character.
    ///
    /// A character outside the set steps from the nearest end: forward from the first character,
    /// backward from the last.
    pub fn step(&self, ch: char, delta: i32) -> char {
        let last = self.len.saturating_sub(1) as i64;
        let start = match self.index_of(ch) {
            Some(index) => index as i64,
            None if delta < 0 => last + 1,
            None => -1,
        };
        let target = (start + i64::from(delta)).clamp(0, last) as usize;
        self.char_at(target).unwrap_or(ch)
    }
}

fn range_len(low: char, high: char) -> usize {
    (high as u32 - low as u32 + 1) as usize
}
