//! Lookup of named colors.

use crate::{
    error::{ConvertError, Result},
    names::CSS_KEYWORDS,
    Rgb,
};

/// An ordered, read-only mapping from color names to colors.
///
/// The order of the entries matters: when more than one name maps to the same
/// color, lookups by color return the name that comes first.
#[derive(Clone, Copy, Debug)]
pub struct KeywordTable<'a> {
    entries: &'a [(&'a str, Rgb)],
}

impl<'a> KeywordTable<'a> {
    /// Create a table that borrows the given entries.
    pub const fn new(entries: &'a [(&'a str, Rgb)]) -> Self {
        Self { entries }
    }

    /// The CSS named colors.
    pub const fn css() -> KeywordTable<'static> {
        KeywordTable::new(CSS_KEYWORDS)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, Rgb)> + 'a {
        let entries = self.entries;
        entries.iter().copied()
    }

    /// Return the color for a name. Names are matched ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<Rgb> {
        self.iter()
            .find(|(keyword, _)| keyword.eq_ignore_ascii_case(name))
            .map(|(_, rgb)| rgb)
    }

    /// Return the first name in table order whose color equals `rgb`.
    pub fn keyword_for(&self, rgb: Rgb) -> Result<&'a str> {
        log::trace!("looking up keyword for {rgb}");

        match self.iter().find(|(_, candidate)| *candidate == rgb) {
            Some((keyword, _)) => Ok(keyword),
            None => {
                log::debug!("no keyword for {rgb}");
                Err(ConvertError::NoKeywordMatch)
            }
        }
    }
}

impl Default for KeywordTable<'static> {
    fn default() -> Self {
        Self::css()
    }
}
