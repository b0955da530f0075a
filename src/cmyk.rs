//! Model a color with the CMYK notation.

use std::fmt;

rgb_convert_macros::gen_model! {
    /// A color specified as cyan, magenta, yellow and black (key) percentages.
    /// Each component is in [0, 100].
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Cmyk {
        /// The cyan component of the color.
        c: u8,
        /// The magenta component of the color.
        m: u8,
        /// The yellow component of the color.
        y: u8,
        /// The black (key) component of the color.
        k: u8,
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}%, {}%, {}%, {}%)",
            Self::NOTATION,
            self.c,
            self.m,
            self.y,
            self.k
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::Cmyk;

    #[test]
    fn as_model() {
        let cmyk = Cmyk::new(1, 2, 3, 4);
        assert_eq!(cmyk.to_tuple(), (1, 2, 3, 4));
        assert_eq!(Cmyk::from((1, 2, 3, 4)), cmyk);
        assert_eq!(Cmyk::NOTATION, "cmyk");
        assert_eq!(cmyk.to_string(), "cmyk(1%, 2%, 3%, 4%)");
    }
}
