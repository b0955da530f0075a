//! Lookup of Pantone-like codes by hex value.
//!
//! Pantone codes are treated as opaque tokens. The conversion from a color
//! goes through its hex representation first, then through a
//! [`PantoneLookup`].

use crate::{
    error::{ConvertError, Result},
    Rgb,
};

/// Something that can map a hex color to a Pantone code.
pub trait PantoneLookup {
    /// Return the code for `hex`, or [`ConvertError::NoPantoneMatch`].
    fn hex_to_pantone(&self, hex: &str) -> Result<String>;
}

/// Convert a color to a Pantone code by way of its hex representation.
///
/// Failures of the lookup are returned unchanged.
pub fn to_pantone(rgb: Rgb, lookup: &impl PantoneLookup) -> Result<String> {
    lookup.hex_to_pantone(&rgb.to_hex())
}

#[rustfmt::skip]
static REFERENCE: &[(&str, &str)] = &[
    ("000000", "30"),
    ("101820", "Black 6 C"),
    ("2D2926", "Black C"),
    ("FFFFFF", "White"),
    ("FEDD00", "Yellow C"),
    ("FFD100", "109 C"),
    ("FE5000", "Orange 021 C"),
    ("F9423A", "Warm Red C"),
    ("EF3340", "Red 032 C"),
    ("DA291C", "485 C"),
    ("E10098", "Rhodamine Red C"),
    ("BB29BB", "Purple C"),
    ("440099", "Violet C"),
    ("10069F", "Blue 072 C"),
    ("001489", "Reflex Blue C"),
    ("0085CA", "Process Blue C"),
    ("00B5E2", "Process Cyan C"),
    ("00AB84", "Green C"),
    ("009A44", "355 C"),
    ("D9D9D6", "Cool Gray 1 C"),
    ("97999B", "Cool Gray 7 C"),
    ("53565A", "Cool Gray 11 C"),
];

/// A Pantone reference held as `(hex, code)` pairs. Hex keys are six
/// uppercase digits without a leading `#`.
#[derive(Clone, Copy, Debug)]
pub struct PantoneTable<'a> {
    entries: &'a [(&'a str, &'a str)],
}

impl<'a> PantoneTable<'a> {
    /// Create a table that borrows the given entries.
    pub const fn new(entries: &'a [(&'a str, &'a str)]) -> Self {
        Self { entries }
    }

    /// The built-in reference table. It only covers a small set of common
    /// codes, supply a full table with [`PantoneTable::new`] when needed.
    pub const fn reference() -> PantoneTable<'static> {
        PantoneTable::new(REFERENCE)
    }

    /// Iterate over the `(hex, code)` entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        let entries = self.entries;
        entries.iter().copied()
    }
}

impl Default for PantoneTable<'static> {
    fn default() -> Self {
        Self::reference()
    }
}

impl PantoneLookup for PantoneTable<'_> {
    fn hex_to_pantone(&self, hex: &str) -> Result<String> {
        let key = hex.strip_prefix('#').unwrap_or(hex);
        log::trace!("looking up pantone for {key}");

        self.iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
            .map(|(_, code)| code.to_string())
            .ok_or_else(|| {
                log::debug!("no pantone for {key}");
                ConvertError::NoPantoneMatch {
                    hex: key.to_ascii_uppercase(),
                }
            })
    }
}
