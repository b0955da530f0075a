//! rgb-convert converts 8-bit RGB colors to other common notations: hex, CMYK,
//! HSL, named CSS keywords and Pantone-like codes.
//!
//! The arithmetic conversions are methods on [`Rgb`] and never fail. Lookups
//! go through a borrowed [`KeywordTable`] or [`PantoneLookup`] and report a
//! [`ConvertError`] when nothing matches.

#![deny(missing_docs)]

mod cmyk;
mod color;
mod convert;
mod converter;
mod error;
mod hsl;
mod keyword;
mod math;
mod names;
mod pantone;
mod rgb;

#[cfg(test)]
mod test;

pub use cmyk::Cmyk;
pub use color::{Component, Components};
pub use converter::{Converted, Converter, Target, Targets};
pub use error::{ConvertError, Result};
pub use hsl::Hsl;
pub use keyword::KeywordTable;
pub use pantone::{to_pantone, PantoneLookup, PantoneTable};
pub use rgb::Rgb;
