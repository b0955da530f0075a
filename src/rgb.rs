//! Model a color with 8-bit red, green and blue channels.

use std::fmt;

use crate::{
    color::Components,
    error::{ConvertError, Result},
    math::normalize,
};

rgb_convert_macros::gen_model! {
    /// A color specified by its red, green and blue channels, in that order.
    /// Each channel is in [0, 255].
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Rgb {
        /// The red channel of the color.
        red: u8,
        /// The green channel of the color.
        green: u8,
        /// The blue channel of the color.
        blue: u8,
    }
}

impl Rgb {
    /// Return the channels mapped into the range [0.0, 1.0].
    pub fn to_components(&self) -> Components {
        Components(
            normalize(self.red),
            normalize(self.green),
            normalize(self.blue),
        )
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        [value.red, value.green, value.blue]
    }
}

impl TryFrom<[i64; 3]> for Rgb {
    type Error = ConvertError;

    /// Build a color from wide integers, rejecting any channel outside of
    /// [0, 255].
    fn try_from([red, green, blue]: [i64; 3]) -> Result<Self> {
        fn channel(channel: &'static str, value: i64) -> Result<u8> {
            u8::try_from(value).map_err(|_| ConvertError::ChannelOutOfRange { channel, value })
        }

        Ok(Self::new(
            channel("red", red)?,
            channel("green", green)?,
            channel("blue", blue)?,
        ))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}, {})",
            Self::NOTATION,
            self.red,
            self.green,
            self.blue
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn basic_rgb_colors() {
        let rgb = Rgb::new(10, 20, 30);
        assert_eq!(rgb.red, 10);
        assert_eq!(rgb.green, 20);
        assert_eq!(rgb.blue, 30);
        assert_eq!(rgb.to_tuple(), (10, 20, 30));
        assert_eq!(Rgb::from((10, 20, 30)), rgb);
        assert_eq!(Rgb::from([10, 20, 30]), rgb);
        assert_eq!(<[u8; 3]>::from(rgb), [10, 20, 30]);
    }

    #[test]
    fn components_are_normalized() {
        let c = Rgb::new(0, 51, 255).to_components();
        assert_eq!(c, Components(0.0, 0.2, 1.0));
    }

    #[test]
    fn channels_out_of_range_are_rejected() {
        assert_eq!(Rgb::try_from([0_i64, 128, 255]), Ok(Rgb::new(0, 128, 255)));
        assert_eq!(
            Rgb::try_from([0_i64, 256, 0]),
            Err(ConvertError::ChannelOutOfRange {
                channel: "green",
                value: 256
            })
        );
        assert_eq!(
            Rgb::try_from([-1_i64, 0, 0]),
            Err(ConvertError::ChannelOutOfRange {
                channel: "red",
                value: -1
            })
        );
    }

    #[test]
    fn display() {
        assert_eq!(Rgb::NOTATION, "rgb");
        assert_eq!(Rgb::new(255, 0, 0).to_string(), "rgb(255, 0, 0)");
    }
}
