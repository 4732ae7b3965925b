//! Tristimulus adapter for color-space collaborators.
//!
//! Color-space code elsewhere passes XYZ on the unit scale (`Y = 1` for
//! the white). The [`Tristimulus`] trait is the contract such code relies
//! on; the appearance model scales to its own 0 - 100 range internally.

use crate::correlate::Correlates;
use crate::error::CamResult;
use crate::model::Ciecam02;

/// Scale between unit XYZ and the model's 0 - 100 XYZ.
const XYZ_SCALE: f64 = 100.0;

/// A color representation convertible to and from unit-scaled XYZ.
pub trait Tristimulus {
    /// Native representation of a color.
    type Value;

    /// Converts unit-scaled XYZ into the native representation.
    fn from_tristimulus(&self, xyz: [f64; 3]) -> CamResult<Self::Value>;

    /// Converts the native representation back to unit-scaled XYZ.
    fn to_tristimulus(&self, value: &Self::Value) -> CamResult<[f64; 3]>;
}

impl Tristimulus for Ciecam02 {
    type Value = Correlates;

    fn from_tristimulus(&self, xyz: [f64; 3]) -> CamResult<Correlates> {
        self.forward(xyz.map(|v| v * XYZ_SCALE))
    }

    fn to_tristimulus(&self, value: &Correlates) -> CamResult<[f64; 3]> {
        Ok(self.reverse(value)?.map(|v| v / XYZ_SCALE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_scale() {
        let model = Ciecam02::default_instance();
        let unit = model.from_tristimulus([0.1931, 0.2393, 0.1014]).unwrap();
        let hundred = model.forward([19.31, 23.93, 10.14]).unwrap();
        assert_relative_eq!(unit.lightness.unwrap(), hundred.lightness.unwrap(), max_relative = 1e-12);

        let back = model.to_tristimulus(&unit).unwrap();
        assert_relative_eq!(back[0], 0.1931, max_relative = 1e-5);
        assert_relative_eq!(back[1], 0.2393, max_relative = 1e-5);
        assert_relative_eq!(back[2], 0.1014, max_relative = 1e-5);
    }

    #[test]
    fn test_generic_use() {
        fn convert_all<T: Tristimulus>(space: &T, colors: &[[f64; 3]]) -> Vec<T::Value> {
            colors.iter().filter_map(|xyz| space.from_tristimulus(*xyz).ok()).collect()
        }
        let out = convert_all(Ciecam02::default_instance(), &[[0.5, 0.5, 0.5], [0.2, 0.1, 0.05]]);
        assert_eq!(out.len(), 2);
    }
}
