//! Standard illuminant white points.
//!
//! White points are given as XYZ with `Y = 1`. The appearance model works
//! on the conventional 0-100 scale, see [`Illuminant::white_point_100`].

use crate::Vec3;

/// CIE Standard Illuminant D65 (daylight, ~6500K).
pub const D65: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);

/// CIE Standard Illuminant D50 (horizon light, ~5000K).
pub const D50: Vec3 = Vec3::new(0.96422, 1.0, 0.82521);

/// CIE Standard Illuminant D55 (~5500K).
pub const D55: Vec3 = Vec3::new(0.95682, 1.0, 0.92149);

/// CIE Standard Illuminant D75 (~7500K).
pub const D75: Vec3 = Vec3::new(0.94972, 1.0, 1.22638);

/// CIE Standard Illuminant A (tungsten, ~2856K).
pub const A: Vec3 = Vec3::new(1.09850, 1.0, 0.35585);

/// CIE Standard Illuminant E (equal energy).
pub const E: Vec3 = Vec3::new(1.0, 1.0, 1.0);

/// Named reference illuminants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Illuminant {
    /// Horizon daylight.
    D50,
    /// Mid-morning daylight.
    D55,
    /// Noon daylight; the default for sRGB-like displays.
    D65,
    /// North sky daylight.
    D75,
    /// Incandescent tungsten.
    A,
    /// Equal energy.
    E,
}

impl Illuminant {
    /// All illuminants, in declaration order.
    pub const ALL: [Illuminant; 6] = [
        Illuminant::D50,
        Illuminant::D55,
        Illuminant::D65,
        Illuminant::D75,
        Illuminant::A,
        Illuminant::E,
    ];

    /// White point with `Y = 1`.
    pub const fn white_point(self) -> Vec3 {
        match self {
            Illuminant::D50 => D50,
            Illuminant::D55 => D55,
            Illuminant::D65 => D65,
            Illuminant::D75 => D75,
            Illuminant::A => A,
            Illuminant::E => E,
        }
    }

    /// White point with `Y = 100`.
    ///
    /// ```rust
    /// use cam_math::Illuminant;
    ///
    /// assert_eq!(Illuminant::D65.white_point_100().y, 100.0);
    /// ```
    pub fn white_point_100(self) -> Vec3 {
        self.white_point() * 100.0
    }

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Illuminant::D50 => "D50",
            Illuminant::D55 => "D55",
            Illuminant::D65 => "D65",
            Illuminant::D75 => "D75",
            Illuminant::A => "A",
            Illuminant::E => "E",
        }
    }
}

impl std::fmt::Display for Illuminant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illuminants_unit_y() {
        for ill in Illuminant::ALL {
            assert_eq!(ill.white_point().y, 1.0, "{ill}");
            assert_eq!(ill.white_point_100().y, 100.0, "{ill}");
        }
    }
}
