//! Normalized floating point components used while converting between
//! notations.

/// A 64-bit floating point value that normalized components are stored as.
pub type Component = f64;

/// Represent three normalized components that describe a color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// The largest of the three components.
    pub fn max(&self) -> Component {
        self.0.max(self.1).max(self.2)
    }

    /// The smallest of the three components.
    pub fn min(&self) -> Component {
        self.0.min(self.1).min(self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_applies_to_every_component() {
        let c = Components(0.1, 0.2, 0.3).map(|v| v * 2.0);
        assert_eq!(c, Components(0.2, 0.4, 0.6));
    }

    #[test]
    fn min_and_max() {
        let c = Components(0.4, 0.9, 0.1);
        assert_eq!(c.max(), 0.9);
        assert_eq!(c.min(), 0.1);
    }
}
