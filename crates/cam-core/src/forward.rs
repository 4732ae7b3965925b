//! XYZ -> correlates.

use cam_math::{hue_angle, Vec3};
use tracing::trace;

use crate::complete::complete_forward;
use crate::correlate::Correlates;
use crate::error::{finite, CamResult};
use crate::stages;
use crate::viewing::ViewingConditions;

/// Forward CIECAM02 transform.
///
/// `xyz` is on the 0 - 100 scale of the white point. `None` for the
/// conditions uses [`ViewingConditions::default_conditions`]. All seven
/// correlates of the result are present.
///
/// # Errors
///
/// - [`CamError::NonFinite`](crate::CamError::NonFinite) if J, C or h is
///   not finite, e.g. for stimuli with a negative achromatic response
/// - whatever [`complete_forward`] reports
///
/// # Example
///
/// ```rust
/// use cam_core::forward;
///
/// let c = forward(None, [19.31, 23.93, 10.14])?;
/// assert!((c.lightness.unwrap() - 45.505).abs() < 1e-3);
/// assert!(c.is_complete());
/// # Ok::<(), cam_core::CamError>(())
/// ```
pub fn forward(conditions: Option<&ViewingConditions>, xyz: [f64; 3]) -> CamResult<Correlates> {
    let vc = conditions.unwrap_or_else(|| ViewingConditions::default_conditions());
    trace!(xyz = ?xyz, "forward");

    let rgb_a = compressed_response(vc, Vec3::from_array(xyz));

    let a = stages::achromatic_response(rgb_a, vc.n_bb());
    let j = finite(stages::lightness(a, vc.a_w(), vc.surround().c(), vc.z()), "lightness")?;

    let (op_a, op_b) = stages::opponent(rgb_a);
    let h = finite(hue_angle(op_a, op_b), "hue angle")?;

    let e = stages::eccentricity(h, vc.surround().n_c(), vc.n_cb());
    let t = stages::preliminary_magnitude(e, op_a, op_b, rgb_a);
    let c = finite(stages::chroma(j, t, vc.n()), "chroma")?;

    let mut out = Correlates::from_jch(j, c, h);
    complete_forward(vc, &mut out)?;
    Ok(out)
}

/// Stages 1 - 4: XYZ to the compressed HPE response.
pub(crate) fn compressed_response(vc: &ViewingConditions, xyz: Vec3) -> Vec3 {
    let rgb = stages::sharpened_response(xyz);
    let rgb_c = stages::adapted_response(rgb, vc.d_rgb());
    let rgb_p = stages::hpe_fundamentals(rgb_c);
    stages::compress_response(rgb_p, vc.f_l())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CamError;
    use crate::surround::Surround;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_conditions_values() {
        let c = forward(None, [19.31, 23.93, 10.14]).unwrap();
        assert_relative_eq!(c.lightness.unwrap(), 45.50500, max_relative = 1e-5);
        assert_relative_eq!(c.chroma.unwrap(), 33.66666, max_relative = 1e-5);
        assert_relative_eq!(c.hue_angle.unwrap(), 115.27291, max_relative = 1e-5);
        assert_relative_eq!(c.hue_composition.unwrap(), 142.43492, max_relative = 1e-5);
        assert_relative_eq!(c.brightness.unwrap(), 146.40459, max_relative = 1e-5);
        assert_relative_eq!(c.colorfulness.unwrap(), 30.61700, max_relative = 1e-5);
        assert_relative_eq!(c.saturation.unwrap(), 45.73029, max_relative = 1e-5);
    }

    #[test]
    fn test_explicit_equals_default() {
        let vc = ViewingConditions::default_conditions();
        let xyz = [41.24, 21.26, 1.93];
        assert_eq!(forward(Some(vc), xyz).unwrap(), forward(None, xyz).unwrap());
    }

    #[test]
    fn test_near_neutral() {
        let c = forward(None, [19.01, 20.0, 21.78]).unwrap();
        assert_relative_eq!(c.lightness.unwrap(), 41.52677, max_relative = 1e-5);
        assert_relative_eq!(c.chroma.unwrap(), 1.13898, max_relative = 1e-4);
        assert_relative_eq!(c.hue_angle.unwrap(), 211.36691, max_relative = 1e-5);
    }

    #[test]
    fn test_white_is_lightness_100() {
        for surround in Surround::ALL {
            let vc = ViewingConditions::adapted(cam_math::Illuminant::D50, 100.0, 20.0, surround)
                .unwrap();
            let c = forward(Some(&vc), vc.white_point().to_array()).unwrap();
            assert_relative_eq!(c.lightness.unwrap(), 100.0, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_negative_achromatic_is_error() {
        // Strongly negative tristimulus values push A below zero
        let err = forward(None, [-50.0, -50.0, -50.0]).unwrap_err();
        assert_eq!(err, CamError::NonFinite { stage: "lightness" });
    }
}
