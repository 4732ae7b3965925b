//! Surround presets.
//!
//! The surround describes the luminance of the field around the viewed
//! stimulus relative to the adapting white. CIECAM02 defines three presets,
//! each fixing the factor for degree of adaptation `F`, the impact of
//! surround `c`, and the chromatic induction factor `N_c`.
//!
//! | Surround | F | c | N_c | Typical use |
//! |----------|-----|-------|-----|-------------|
//! | Average | 1.0 | 0.69 | 1.0 | Surface colors, offices |
//! | Dim | 0.9 | 0.59 | 0.9 | Television, dim rooms |
//! | Dark | 0.8 | 0.525 | 0.8 | Cinema, projection |

/// CIECAM02 surround condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Surround {
    /// Average surround (surround ratio > 0.2).
    #[default]
    Average,
    /// Dim surround (surround ratio 0 - 0.2).
    Dim,
    /// Dark surround (surround ratio 0).
    Dark,
}

impl Surround {
    /// All presets.
    pub const ALL: [Surround; 3] = [Surround::Average, Surround::Dim, Surround::Dark];

    /// Factor determining the degree of adaptation, `F`.
    #[inline]
    pub const fn f(self) -> f64 {
        match self {
            Surround::Average => 1.0,
            Surround::Dim => 0.9,
            Surround::Dark => 0.8,
        }
    }

    /// Impact of surround, `c`.
    #[inline]
    pub const fn c(self) -> f64 {
        match self {
            Surround::Average => 0.69,
            Surround::Dim => 0.59,
            Surround::Dark => 0.525,
        }
    }

    /// Chromatic induction factor, `N_c`.
    #[inline]
    pub const fn n_c(self) -> f64 {
        match self {
            Surround::Average => 1.0,
            Surround::Dim => 0.9,
            Surround::Dark => 0.8,
        }
    }

    /// Lower-case preset name.
    pub const fn name(self) -> &'static str {
        match self {
            Surround::Average => "average",
            Surround::Dim => "dim",
            Surround::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Surround {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
