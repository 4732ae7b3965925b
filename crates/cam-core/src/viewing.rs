//! Viewing conditions and the adaptation constants derived from them.
//!
//! A [`ViewingConditions`] value is built once from four inputs:
//!
//! - the adapting white point (XYZ, conventionally `Y_w = 100`)
//! - the adapting luminance `L_A` in cd/m²
//! - the relative background luminance `Y_b`
//! - the [`Surround`] preset
//!
//! and caches every constant the forward and reverse transforms need.
//! Construction is the expensive part of the model; reuse the value for
//! every color seen under the same conditions.
//!
//! # Usage
//!
//! ```rust
//! use cam_core::{Surround, ViewingConditions};
//! use cam_math::Illuminant;
//!
//! let vc = ViewingConditions::adapted(Illuminant::D65, 64.0, 20.0, Surround::Average)?;
//! assert!(vc.a_w() > 0.0);
//! assert!(vc.d() > 0.9 && vc.d() < 1.0);
//! # Ok::<(), cam_core::CamError>(())
//! ```

use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use cam_math::{Illuminant, Vec3};
use tracing::debug;

use crate::error::{CamError, CamResult};
use crate::stages;
use crate::surround::Surround;

/// Adapting luminance of the default conditions, cd/m².
pub const DEFAULT_ADAPTING_LUMINANCE: f64 = 64.0;

/// Background luminance of the default conditions.
pub const DEFAULT_BACKGROUND_LUMINANCE: f64 = 20.0;

/// Immutable CIECAM02 viewing conditions.
///
/// Equality and hashing consider only the construction inputs; the derived
/// constants are a pure function of them.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ViewingConditionsInputs", into = "ViewingConditionsInputs")
)]
pub struct ViewingConditions {
    white_point: Vec3,
    l_a: f64,
    y_b: f64,
    surround: Surround,

    d: f64,
    d_rgb: Vec3,
    f_l: f64,
    n: f64,
    n_bb: f64,
    n_cb: f64,
    z: f64,
    a_w: f64,
}

impl ViewingConditions {
    /// Builds viewing conditions, deriving all adaptation constants.
    ///
    /// # Arguments
    ///
    /// * `white_point` - adapting white in XYZ, `Y_w` conventionally 100
    /// * `l_a` - adapting luminance in cd/m² (often 20% of the white's luminance)
    /// * `y_b` - background luminance relative to `Y_w`
    /// * `surround` - surround preset
    ///
    /// # Errors
    ///
    /// [`CamError::InvalidViewingConditions`] if `l_a` or `y_b` is not
    /// finite and positive, or the white point is not finite, has
    /// non-positive `Y`, or has a zero sharpened cone response.
    pub fn new(white_point: Vec3, l_a: f64, y_b: f64, surround: Surround) -> CamResult<Self> {
        positive("L_A", l_a)?;
        positive("Y_b", y_b)?;
        if !white_point.is_finite() {
            return Err(invalid_white(f64::NAN));
        }
        positive("white point", white_point.y)?;
        let rgb_w = stages::sharpened_response(white_point);
        if let Some(bad) = rgb_w.to_array().into_iter().find(|v| *v == 0.0) {
            return Err(invalid_white(bad));
        }

        let vc = Self::derive(white_point, l_a, y_b, surround);
        if !(vc.a_w.is_finite() && vc.a_w > 0.0) {
            return Err(invalid_white(vc.a_w));
        }

        debug!(
            white = ?white_point.to_array(),
            l_a,
            y_b,
            surround = %surround,
            d = vc.d,
            f_l = vc.f_l,
            n_bb = vc.n_bb,
            z = vc.z,
            a_w = vc.a_w,
            "viewing conditions"
        );
        Ok(vc)
    }

    /// Builds viewing conditions for a named illuminant scaled to `Y_w = 100`.
    pub fn adapted(
        illuminant: Illuminant,
        l_a: f64,
        y_b: f64,
        surround: Surround,
    ) -> CamResult<Self> {
        Self::new(illuminant.white_point_100(), l_a, y_b, surround)
    }

    /// Process-wide default: D65, `L_A = 64`, `Y_b = 20`, average surround.
    ///
    /// Built on first use and shared read-only afterwards.
    pub fn default_conditions() -> &'static ViewingConditions {
        static INSTANCE: OnceLock<ViewingConditions> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            debug!("building default viewing conditions");
            Self::derive(
                Illuminant::D65.white_point_100(),
                DEFAULT_ADAPTING_LUMINANCE,
                DEFAULT_BACKGROUND_LUMINANCE,
                Surround::Average,
            )
        })
    }

    /// Ordered derivation of the adaptation constants.
    ///
    /// Inputs are assumed valid. `A_w` is computed last, through the same
    /// stage functions as any stimulus, with the final `D_RGB`, `F_L` and
    /// `N_bb`.
    fn derive(white_point: Vec3, l_a: f64, y_b: f64, surround: Surround) -> Self {
        let k = 1.0 / (5.0 * l_a + 1.0);
        let k4 = k * k * k * k;
        let f_l = 0.2 * k4 * (5.0 * l_a) + 0.1 * (1.0 - k4).powi(2) * (5.0 * l_a).cbrt();

        let y_w = white_point.y;
        let n = y_b / y_w;
        let n_bb = 0.725 * (1.0 / n).powf(0.2);
        let n_cb = n_bb;
        let z = 1.48 + n.sqrt();

        let d = surround.f() * (1.0 - (1.0 / 3.6) * ((-l_a - 42.0) / 92.0).exp());
        let rgb_w = stages::sharpened_response(white_point);
        let d_rgb = rgb_w.map(|r| d * y_w / r + 1.0 - d);

        let rgb_wc = stages::adapted_response(rgb_w, d_rgb);
        let rgb_wp = stages::hpe_fundamentals(rgb_wc);
        let rgb_wa = stages::compress_response(rgb_wp, f_l);
        let a_w = stages::achromatic_response(rgb_wa, n_bb);

        Self {
            white_point,
            l_a,
            y_b,
            surround,
            d,
            d_rgb,
            f_l,
            n,
            n_bb,
            n_cb,
            z,
            a_w,
        }
    }

    /// Adapting white point (XYZ).
    #[inline]
    pub fn white_point(&self) -> Vec3 {
        self.white_point
    }

    /// Adapting luminance `L_A`, cd/m².
    #[inline]
    pub fn l_a(&self) -> f64 {
        self.l_a
    }

    /// Background luminance `Y_b`.
    #[inline]
    pub fn y_b(&self) -> f64 {
        self.y_b
    }

    /// Surround preset.
    #[inline]
    pub fn surround(&self) -> Surround {
        self.surround
    }

    /// Degree of chromatic adaptation `D`.
    #[inline]
    pub fn d(&self) -> f64 {
        self.d
    }

    /// Per-channel adaptation scale `D_RGB`.
    #[inline]
    pub fn d_rgb(&self) -> Vec3 {
        self.d_rgb
    }

    /// Luminance-level adaptation factor `F_L`.
    #[inline]
    pub fn f_l(&self) -> f64 {
        self.f_l
    }

    /// `F_L^0.25`, the chroma-to-colorfulness scale.
    #[inline]
    pub fn f_l_quarter(&self) -> f64 {
        self.f_l.powf(0.25)
    }

    /// Background induction ratio `n = Y_b / Y_w`.
    #[inline]
    pub fn n(&self) -> f64 {
        self.n
    }

    /// Brightness background induction factor `N_bb`.
    #[inline]
    pub fn n_bb(&self) -> f64 {
        self.n_bb
    }

    /// Chromatic background induction factor `N_cb`.
    #[inline]
    pub fn n_cb(&self) -> f64 {
        self.n_cb
    }

    /// Base exponent of lightness `z`.
    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Achromatic response of the adapting white `A_w`.
    #[inline]
    pub fn a_w(&self) -> f64 {
        self.a_w
    }

    fn key(&self) -> [u64; 5] {
        [
            self.white_point.x.to_bits(),
            self.white_point.y.to_bits(),
            self.white_point.z.to_bits(),
            self.l_a.to_bits(),
            self.y_b.to_bits(),
        ]
    }
}

impl Default for ViewingConditions {
    fn default() -> Self {
        Self::default_conditions().clone()
    }
}

impl PartialEq for ViewingConditions {
    fn eq(&self, other: &Self) -> bool {
        self.surround == other.surround && self.key() == other.key()
    }
}

impl Eq for ViewingConditions {}

impl Hash for ViewingConditions {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
        self.surround.hash(state);
    }
}

fn positive(parameter: &'static str, value: f64) -> CamResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CamError::InvalidViewingConditions { parameter, value })
    }
}

fn invalid_white(value: f64) -> CamError {
    CamError::InvalidViewingConditions { parameter: "white point", value }
}

/// Serialized form: only the construction inputs.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ViewingConditionsInputs {
    white_point: Vec3,
    l_a: f64,
    y_b: f64,
    surround: Surround,
}

#[cfg(feature = "serde")]
impl TryFrom<ViewingConditionsInputs> for ViewingConditions {
    type Error = CamError;

    fn try_from(v: ViewingConditionsInputs) -> CamResult<Self> {
        Self::new(v.white_point, v.l_a, v.y_b, v.surround)
    }
}

#[cfg(feature = "serde")]
impl From<ViewingConditions> for ViewingConditionsInputs {
    fn from(vc: ViewingConditions) -> Self {
        Self {
            white_point: vc.white_point,
            l_a: vc.l_a,
            y_b: vc.y_b,
            surround: vc.surround,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::collections::HashSet;

    #[test]
    fn test_cie_worked_example_constants() {
        // CIE 159:2004 worked example
        let vc = ViewingConditions::new(
            Vec3::new(95.05, 100.0, 108.88),
            318.31,
            20.0,
            Surround::Average,
        )
        .unwrap();
        assert_relative_eq!(vc.f_l(), 1.16754, max_relative = 1e-5);
        assert_relative_eq!(vc.d(), 0.99447, max_relative = 1e-5);
        assert_relative_eq!(vc.n_bb(), 1.000304, max_relative = 1e-6);
        assert_relative_eq!(vc.z(), 1.927214, max_relative = 1e-6);
    }

    #[test]
    fn test_default_conditions() {
        let vc = ViewingConditions::default_conditions();
        assert_eq!(vc.surround(), Surround::Average);
        assert_eq!(vc.l_a(), 64.0);
        assert_eq!(vc.y_b(), 20.0);
        assert_relative_eq!(vc.f_l(), 0.68399, max_relative = 1e-4);
        assert_relative_eq!(vc.a_w(), 37.1672, max_relative = 1e-4);
        assert!(std::ptr::eq(vc, ViewingConditions::default_conditions()));

        let built =
            ViewingConditions::adapted(Illuminant::D65, 64.0, 20.0, Surround::Average).unwrap();
        assert_eq!(&built, vc);
        assert_eq!(built.a_w(), vc.a_w());
    }

    #[test]
    fn test_white_adapts_to_y() {
        // D_RGB maps the white's sharpened response toward Y_w
        let vc = ViewingConditions::adapted(Illuminant::A, 200.0, 20.0, Surround::Average).unwrap();
        let rgb_w = stages::sharpened_response(vc.white_point());
        let adapted = stages::adapted_response(rgb_w, vc.d_rgb());
        for i in 0..3 {
            let full = 100.0;
            let expected = vc.d() * full + (1.0 - vc.d()) * rgb_w[i];
            assert_abs_diff_eq!(adapted[i], expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_rejects_non_positive_luminance() {
        let white = Illuminant::D65.white_point_100();
        let err = ViewingConditions::new(white, 0.0, 20.0, Surround::Dim).unwrap_err();
        assert_eq!(err, CamError::InvalidViewingConditions { parameter: "L_A", value: 0.0 });

        let err = ViewingConditions::new(white, 20.0, -1.0, Surround::Dim).unwrap_err();
        assert_eq!(err, CamError::InvalidViewingConditions { parameter: "Y_b", value: -1.0 });

        assert!(ViewingConditions::new(white, f64::NAN, 20.0, Surround::Dim).is_err());
        assert!(ViewingConditions::new(white, f64::INFINITY, 20.0, Surround::Dim).is_err());
    }

    #[test]
    fn test_rejects_bad_white() {
        let err = ViewingConditions::new(Vec3::new(95.0, 0.0, 108.0), 20.0, 20.0, Surround::Average);
        assert!(matches!(
            err,
            Err(CamError::InvalidViewingConditions { parameter: "white point", .. })
        ));
        let err = ViewingConditions::new(Vec3::new(f64::NAN, 100.0, 108.0), 20.0, 20.0, Surround::Average);
        assert!(err.is_err());
    }

    #[test]
    fn test_equality_by_inputs() {
        let a = ViewingConditions::adapted(Illuminant::D50, 20.0, 20.0, Surround::Dark).unwrap();
        let b = ViewingConditions::adapted(Illuminant::D50, 20.0, 20.0, Surround::Dark).unwrap();
        let c = ViewingConditions::adapted(Illuminant::D50, 20.0, 20.0, Surround::Dim).unwrap();
        let d = ViewingConditions::adapted(Illuminant::D50, 21.0, 20.0, Surround::Dark).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);

        let set: HashSet<_> = [a.clone(), b, c, d].into_iter().collect();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&a));
    }

    #[test]
    fn test_surround_lowers_adaptation() {
        let white = Illuminant::D65.white_point_100();
        let avg = ViewingConditions::new(white, 20.0, 20.0, Surround::Average).unwrap();
        let dark = ViewingConditions::new(white, 20.0, 20.0, Surround::Dark).unwrap();
        assert!(dark.d() < avg.d());
        assert_eq!(dark.f_l(), avg.f_l());
    }

    #[test]
    fn test_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ViewingConditions>();
    }
}
