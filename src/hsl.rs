//! Model a color with the HSL notation.

use std::fmt;

rgb_convert_macros::gen_model! {
    /// A color specified with the HSL notation.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Hsl {
        /// The hue of the color in degrees, in [0, 360).
        h: u16,
        /// The saturation of the color as a percentage.
        s: u8,
        /// The lightness of the color as a percentage.
        l: u8,
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}%, {}%)",
            Self::NOTATION,
            self.h,
            self.s,
            self.l
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::Hsl;

    #[test]
    fn as_model() {
        let hsl = Hsl::new(25, 75, 47);
        assert_eq!(hsl.h, 25);
        assert_eq!(hsl.s, 75);
        assert_eq!(hsl.l, 47);
        assert_eq!(<(u16, u8, u8)>::from(hsl), (25, 75, 47));
        assert_eq!(hsl.to_string(), "hsl(25, 75%, 47%)");
    }
}
