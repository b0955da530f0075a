//! A [`Converter`] binds the lookup tables and dispatches a color to one or
//! more target notations.

use std::{fmt, str::FromStr};

use bitflags::bitflags;

use crate::{
    error::{ConvertError, Result},
    keyword::KeywordTable,
    pantone::{self, PantoneLookup, PantoneTable},
    Cmyk, Hsl, Rgb,
};

/// The notations an [`Rgb`] color can be converted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Target {
    /// Six uppercase hexadecimal digits.
    Hex = 0,
    /// Cyan, magenta, yellow and black percentages.
    Cmyk = 1,
    /// Hue, saturation and lightness.
    Hsl = 2,
    /// A named color from a [`KeywordTable`].
    Keyword = 3,
    /// A code from a [`PantoneLookup`].
    Pantone = 4,
}

impl Target {
    /// Every target in conversion order.
    pub const ALL: [Target; 5] = [
        Target::Hex,
        Target::Cmyk,
        Target::Hsl,
        Target::Keyword,
        Target::Pantone,
    ];

    /// The lowercase name of the target.
    pub fn name(&self) -> &'static str {
        match self {
            Target::Hex => "hex",
            Target::Cmyk => "cmyk",
            Target::Hsl => "hsl",
            Target::Keyword => "keyword",
            Target::Pantone => "pantone",
        }
    }

    fn flag(&self) -> Targets {
        Targets::from_bits_retain(1 << *self as u8)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        Target::ALL
            .into_iter()
            .find(|target| target.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConvertError::UnknownTarget {
                name: s.to_string(),
            })
    }
}

bitflags! {
    /// A set of [`Target`]s to convert to in one go.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Targets : u8 {
        /// See [`Target::Hex`].
        const HEX = 1 << Target::Hex as u8;
        /// See [`Target::Cmyk`].
        const CMYK = 1 << Target::Cmyk as u8;
        /// See [`Target::Hsl`].
        const HSL = 1 << Target::Hsl as u8;
        /// See [`Target::Keyword`].
        const KEYWORD = 1 << Target::Keyword as u8;
        /// See [`Target::Pantone`].
        const PANTONE = 1 << Target::Pantone as u8;
    }
}

impl Targets {
    /// Iterate over the targets in the set in conversion order.
    pub fn targets(&self) -> impl Iterator<Item = Target> {
        let targets = *self;
        Target::ALL
            .into_iter()
            .filter(move |target| targets.contains(target.flag()))
    }
}

impl From<Target> for Targets {
    fn from(value: Target) -> Self {
        value.flag()
    }
}

impl FromIterator<Target> for Targets {
    fn from_iter<I: IntoIterator<Item = Target>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Targets::empty(), |targets, target| targets | target.flag())
    }
}

/// The result of converting a color to a single [`Target`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Converted {
    /// See [`Rgb::to_hex`].
    Hex(String),
    /// See [`Rgb::to_cmyk`].
    Cmyk(Cmyk),
    /// See [`Rgb::to_hsl`].
    Hsl(Hsl),
    /// See [`KeywordTable::keyword_for`].
    Keyword(String),
    /// See [`pantone::to_pantone`].
    Pantone(String),
}

impl Converted {
    /// The target this value was converted to.
    pub fn target(&self) -> Target {
        match self {
            Converted::Hex(_) => Target::Hex,
            Converted::Cmyk(_) => Target::Cmyk,
            Converted::Hsl(_) => Target::Hsl,
            Converted::Keyword(_) => Target::Keyword,
            Converted::Pantone(_) => Target::Pantone,
        }
    }
}

impl fmt::Display for Converted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Converted::Hex(hex) => write!(f, "#{hex}"),
            Converted::Cmyk(cmyk) => write!(f, "{cmyk}"),
            Converted::Hsl(hsl) => write!(f, "{hsl}"),
            Converted::Keyword(value) | Converted::Pantone(value) => f.write_str(value),
        }
    }
}

static CSS: KeywordTable<'static> = KeywordTable::css();
static REFERENCE: PantoneTable<'static> = PantoneTable::reference();

/// Converts [`Rgb`] colors using a borrowed keyword table and pantone lookup.
///
/// ```rust
/// use rgb_convert::{Converter, Rgb};
/// let converter: Converter = Converter::default();
/// assert_eq!(converter.to_keyword(Rgb::new(255, 0, 0)), Ok("red"));
/// assert_eq!(converter.to_pantone(Rgb::new(0, 0, 0)).as_deref(), Ok("30"));
/// ```
#[derive(Debug)]
pub struct Converter<'a, P: PantoneLookup = PantoneTable<'a>> {
    keywords: &'a KeywordTable<'a>,
    pantone: &'a P,
}

impl<'a, P: PantoneLookup> Clone for Converter<'a, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, P: PantoneLookup> Copy for Converter<'a, P> {}

impl Default for Converter<'static> {
    fn default() -> Self {
        Self::new(&CSS, &REFERENCE)
    }
}

impl<'a, P: PantoneLookup> Converter<'a, P> {
    /// Create a converter that borrows the given tables.
    pub fn new(keywords: &'a KeywordTable<'a>, pantone: &'a P) -> Self {
        Self { keywords, pantone }
    }

    /// The keyword table used by [`Converter::to_keyword`].
    pub fn keywords(&self) -> &'a KeywordTable<'a> {
        self.keywords
    }

    /// See [`Rgb::to_hex`].
    pub fn to_hex(&self, rgb: Rgb) -> String {
        rgb.to_hex()
    }

    /// See [`Rgb::to_cmyk`].
    pub fn to_cmyk(&self, rgb: Rgb) -> Cmyk {
        rgb.to_cmyk()
    }

    /// See [`Rgb::to_hsl`].
    pub fn to_hsl(&self, rgb: Rgb) -> Hsl {
        rgb.to_hsl()
    }

    /// Return the first keyword in table order for the color.
    pub fn to_keyword(&self, rgb: Rgb) -> Result<&'a str> {
        self.keywords.keyword_for(rgb)
    }

    /// Return the pantone code for the color.
    pub fn to_pantone(&self, rgb: Rgb) -> Result<String> {
        pantone::to_pantone(rgb, self.pantone)
    }

    /// Convert the color to a single target.
    pub fn convert(&self, rgb: Rgb, target: Target) -> Result<Converted> {
        Ok(match target {
            Target::Hex => Converted::Hex(self.to_hex(rgb)),
            Target::Cmyk => Converted::Cmyk(self.to_cmyk(rgb)),
            Target::Hsl => Converted::Hsl(self.to_hsl(rgb)),
            Target::Keyword => Converted::Keyword(self.to_keyword(rgb)?.to_string()),
            Target::Pantone => Converted::Pantone(self.to_pantone(rgb)?),
        })
    }

    /// Convert the color to every target in the set, in conversion order. A
    /// failed lookup does not stop the remaining conversions.
    pub fn convert_many(&self, rgb: Rgb, targets: Targets) -> Vec<(Target, Result<Converted>)> {
        targets
            .targets()
            .map(|target| (target, self.convert(rgb, target)))
            .collect()
    }
}
