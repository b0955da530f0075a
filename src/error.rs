//! Error types for color conversions.

use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors reported by lookups and input validation. The arithmetic
/// conversions (hex, CMYK, HSL) never fail.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConvertError {
    /// No entry of the keyword table has the requested color.
    #[error("No keyword match could be found for that rgb value.")]
    NoKeywordMatch,

    /// The pantone reference has no entry for the hex value.
    #[error("No pantone match could be found for that hex value.")]
    NoPantoneMatch {
        /// The hex value that was looked up.
        hex: String,
    },

    /// A channel was outside of [0, 255].
    #[error("Channel {channel} is out of range: {value} (expected 0 to 255)")]
    ChannelOutOfRange {
        /// Name of the offending channel.
        channel: &'static str,
        /// The value that was supplied.
        value: i64,
    },

    /// The name does not refer to a conversion target.
    #[error("Unknown conversion target: {name}")]
    UnknownTarget {
        /// The name that was supplied.
        name: String,
    },
}

impl ConvertError {
    /// Check if this error means a lookup found nothing, as opposed to the
    /// input being invalid.
    pub fn is_no_match(&self) -> bool {
        matches!(
            self,
            ConvertError::NoKeywordMatch | ConvertError::NoPantoneMatch { .. }
        )
    }
}
