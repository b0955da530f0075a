//! Conversions from an [`Rgb`] color to the other notations.
//!
//! The arithmetic happens on normalized floating point [`Components`] and is
//! only rounded to whole numbers at the very end.
//!
//! ```rust
//! use rgb_convert::{Cmyk, Hsl, Rgb};
//! let red = Rgb::new(255, 0, 0);
//! assert_eq!(red.to_hex(), "FF0000");
//! assert_eq!(red.to_cmyk(), Cmyk::new(0, 100, 100, 0));
//! assert_eq!(red.to_hsl(), Hsl::new(0, 100, 50));
//! ```

use crate::{
    color::Components,
    math::{degrees, percent},
    Cmyk, Hsl, Rgb,
};

impl Rgb {
    /// Render the color as six uppercase hexadecimal digits, two per channel,
    /// without a leading `#`.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Convert the color to the CMYK notation.
    pub fn to_cmyk(&self) -> Cmyk {
        let [c, m, y, k] = util::rgb_to_cmyk(&self.to_components());
        Cmyk::new(percent(c), percent(m), percent(y), percent(k))
    }

    /// Convert the color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) = util::rgb_to_hsl(&self.to_components());
        Hsl::new(degrees(hue), percent(saturation), percent(lightness))
    }
}

mod util {
    use crate::color::{Component, Components};

    /// Calculate the hue in degrees from RGB components and return it along
    /// with the min and max RGB values. The hue is 0 when there is no chroma.
    ///
    /// When two channels share the maximum, red wins over green and green
    /// wins over blue.
    pub fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = from.max();
        let min = from.min();

        let delta = max - min;

        let hue = if delta != 0.0 {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            0.0
        };

        (hue, min, max)
    }

    /// Convert from RGB notation to HSL notation. Saturation and lightness are
    /// fractions in [0.0, 1.0].
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;

        let saturation = if max == min {
            0.0
        } else {
            (max - min) / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        Components(hue, saturation, lightness)
    }

    /// Convert from RGB notation to CMYK fractions in [0.0, 1.0].
    pub fn rgb_to_cmyk(from: &Components) -> [Component; 4] {
        let k = 1.0 - from.max();

        // Pure black, every channel is already covered by the key.
        if k == 1.0 {
            return [0.0, 0.0, 0.0, k];
        }

        let Components(c, m, y) = from.map(|v| (1.0 - v - k) / (1.0 - k));
        [c, m, y, k]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::color::Component;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex() {
        assert_eq!(Rgb::new(255, 0, 0).to_hex(), "FF0000");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "000000");
        assert_eq!(Rgb::new(16, 16, 16).to_hex(), "101010");
        assert_eq!(Rgb::new(1, 10, 171).to_hex(), "010AAB");
        assert_eq!(Rgb::new(255, 255, 255).to_hex(), "FFFFFF");
    }

    #[test]
    fn cmyk() {
        #[rustfmt::skip]
        const TESTS: &[((u8, u8, u8), (u8, u8, u8, u8))] = &[
            ((255, 0, 0), (0, 100, 100, 0)),
            ((0, 255, 0), (100, 0, 100, 0)),
            ((0, 0, 255), (100, 100, 0, 0)),
            ((0, 0, 0), (0, 0, 0, 100)),
            ((255, 255, 255), (0, 0, 0, 0)),
            ((128, 128, 128), (0, 0, 0, 50)),
            ((255, 255, 0), (0, 0, 100, 0)),
            ((0, 128, 128), (100, 0, 0, 50)),
        ];

        for &(rgb, cmyk) in TESTS {
            assert_eq!(Rgb::from(rgb).to_cmyk(), Cmyk::from(cmyk), "{rgb:?}");
        }
    }

    #[test]
    fn hsl() {
        #[rustfmt::skip]
        const TESTS: &[((u8, u8, u8), (u16, u8, u8))] = &[
            ((255, 0, 0), (0, 100, 50)),
            ((0, 0, 0), (0, 0, 0)),
            ((255, 255, 255), (0, 0, 100)),
            ((128, 128, 128), (0, 0, 50)),
            ((0, 255, 0), (120, 100, 50)),
            ((0, 0, 255), (240, 100, 50)),
            ((255, 255, 0), (60, 100, 50)),
            ((0, 255, 255), (180, 100, 50)),
            ((255, 0, 255), (300, 100, 50)),
            ((0, 128, 128), (180, 100, 25)),
            ((210, 105, 30), (25, 75, 47)),
        ];

        for &(rgb, hsl) in TESTS {
            assert_eq!(Rgb::from(rgb).to_hsl(), Hsl::from(hsl), "{rgb:?}");
        }
    }

    #[test]
    fn hue_close_to_a_full_turn_wraps_to_zero() {
        // 60 * (6 - 1/255) = 359.76...
        assert_eq!(Rgb::new(255, 0, 1).to_hsl().h, 0);
        assert_eq!(Rgb::new(255, 0, 3).to_hsl().h, 359);
    }

    #[test]
    fn hue_is_zero_if_there_is_no_chroma() {
        for v in [0, 1, 127, 128, 254, 255] {
            let hsl = Rgb::new(v, v, v).to_hsl();
            assert_eq!(hsl.h, 0);
            assert_eq!(hsl.s, 0);
        }
    }

    #[test]
    fn ties_for_max_prefer_red_then_green() {
        // Red and blue share the max, the red branch wraps with the offset.
        let (hue, _, _) = util::rgb_to_hue_with_min_max(&Components(1.0, 0.0, 1.0));
        assert_component_eq!(hue, 300.0);
        // Green and blue share the max, the green branch is used.
        let (hue, _, _) = util::rgb_to_hue_with_min_max(&Components(0.0, 1.0, 1.0));
        assert_component_eq!(hue, 180.0);
    }

    #[test]
    fn rgb_to_hsl_fractions() {
        // rgb(210 105 30), chocolate
        let hsl = util::rgb_to_hsl(&Rgb::new(210, 105, 30).to_components());
        assert_component_eq!(hsl.0, 25.0);
        assert_component_eq!(hsl.1, 0.75);
        assert_component_eq!(hsl.2, 0.470588);
    }

    #[test]
    fn rgb_to_cmyk_fractions() {
        let [c, m, y, k] = util::rgb_to_cmyk(&Rgb::new(210, 105, 30).to_components());
        assert_component_eq!(c, 0.0);
        assert_component_eq!(m, 0.5);
        assert_component_eq!(y, 0.857143);
        assert_component_eq!(k, 0.176471);
    }

    #[test]
    fn extreme_channels_do_not_divide_by_zero() {
        for r in [0, 255] {
            for g in [0, 255] {
                for b in [0, 255] {
                    let [c, m, y, k] = util::rgb_to_cmyk(&Rgb::new(r, g, b).to_components());
                    let hsl = util::rgb_to_hsl(&Rgb::new(r, g, b).to_components());
                    for value in [c, m, y, k, hsl.0, hsl.1, hsl.2] {
                        assert!(value.is_finite(), "rgb({r}, {g}, {b})");
                    }
                }
            }
        }
    }

    #[test]
    fn results_stay_in_range() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(5) {
                    let rgb = Rgb::new(r, g, b);

                    let cmyk = rgb.to_cmyk();
                    for v in [cmyk.c, cmyk.m, cmyk.y, cmyk.k] {
                        assert!(v <= 100, "{rgb} -> {cmyk}");
                    }

                    let hsl = rgb.to_hsl();
                    assert!(hsl.h < 360, "{rgb} -> {hsl}");
                    assert!(hsl.s <= 100, "{rgb} -> {hsl}");
                    assert!(hsl.l <= 100, "{rgb} -> {hsl}");
                }
            }
        }
    }

    #[test]
    fn unrounded_saturation_never_exceeds_one() {
        for v in 1..=254u8 {
            let hsl = util::rgb_to_hsl(&Rgb::new(v, 0, 255 - v).to_components());
            assert!(hsl.1 <= 1.0 + Component::EPSILON * 4.0);
        }
    }
}
