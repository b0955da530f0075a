//! Math utility functions.

use crate::color::Component;

/// The largest value a single channel can hold.
pub const CHANNEL_MAX: Component = 255.0;

/// Map an 8-bit channel into the range [0.0, 1.0].
pub fn normalize(channel: u8) -> Component {
    Component::from(channel) / CHANNEL_MAX
}

/// Round a value to the nearest integer. Ties round away from zero, so `12.5`
/// becomes `13`.
pub fn round(value: Component) -> Component {
    value.round()
}

/// Convert a fraction in [0.0, 1.0] to a whole percentage.
///
/// Values that drift marginally outside the range due to floating point error
/// saturate at the bounds.
pub fn percent(fraction: Component) -> u8 {
    round(fraction * 100.0).clamp(0.0, 100.0) as u8
}

/// Round a hue in degrees to a whole number in [0, 360).
pub fn degrees(hue: Component) -> u16 {
    let hue = round(hue);
    if hue >= 360.0 {
        0
    } else {
        hue.max(0.0) as u16
    }
}
