//! Correlates -> XYZ.

use cam_math::Vec3;
use tracing::trace;

use crate::complete::{complete_reverse, missing_symbols};
use crate::correlate::{Correlate, Correlates};
use crate::error::{finite, CamError, CamResult};
use crate::stages;
use crate::viewing::ViewingConditions;

/// Channels the reverse pipeline consumes directly.
const REQUIRED: [Correlate; 3] = [Correlate::Lightness, Correlate::Chroma, Correlate::HueAngle];

/// Reverse CIECAM02 transform.
///
/// Any subset of correlates from which J, C and h can be derived is
/// accepted; see [`complete_reverse`]. The input is not modified. The
/// result is XYZ on the 0 - 100 scale of the white point.
///
/// # Errors
///
/// - [`CamError::InsufficientCorrelates`] naming the channels that stay
///   absent after completion
/// - [`CamError::NonFinite`] naming the first stage that left the reals
/// - hue-domain errors from completion
pub fn reverse(conditions: &ViewingConditions, correlates: &Correlates) -> CamResult<[f64; 3]> {
    trace!(correlates = %correlates, "reverse");

    let mut c = *correlates;
    complete_reverse(conditions, &mut c)?;
    let (Some(j), Some(chroma), Some(h)) = (c.lightness, c.chroma, c.hue_angle) else {
        let missing = missing_symbols(&c, &REQUIRED).unwrap_or_default();
        return Err(CamError::InsufficientCorrelates { missing });
    };

    reverse_jch(conditions, j, chroma, h).map(Vec3::to_array)
}

/// Reverse pipeline from lightness, chroma and hue angle.
fn reverse_jch(vc: &ViewingConditions, j: f64, chroma: f64, h: f64) -> CamResult<Vec3> {
    // A zero chroma zeroes the opponent pair and would hide a bad hue
    let j = finite(j, "lightness")?;
    let chroma = finite(chroma, "chroma")?;
    let h = finite(h, "hue angle")?;

    let surround = vc.surround();
    let e = stages::eccentricity(h, surround.n_c(), vc.n_cb());
    let a = finite(
        stages::achromatic_from_lightness(j, vc.a_w(), surround.c(), vc.z()),
        "achromatic response",
    )?;
    let t = finite(stages::magnitude_from_chroma(j, chroma, vc.n()), "magnitude")?;
    let p2 = stages::p2(a, vc.n_bb());

    let (op_a, op_b) = stages::opponent_from_hue(h, e, t, p2);
    finite(op_a, "opponent a")?;
    finite(op_b, "opponent b")?;

    let rgb_a = stages::response_from_opponent(op_a, op_b, p2);
    let rgb_p = stages::expand_response(rgb_a, vc.f_l());
    check(rgb_p, "response expansion")?;

    let rgb = stages::unadapted_response(rgb_p, vc.d_rgb());
    check(rgb, "adaptation")?;

    let xyz = stages::tristimulus(rgb);
    check(xyz, "tristimulus")?;
    Ok(xyz)
}

fn check(v: Vec3, stage: &'static str) -> CamResult<Vec3> {
    if v.is_finite() { Ok(v) } else { Err(CamError::NonFinite { stage }) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forward::forward;
    use approx::assert_relative_eq;

    #[test]
    fn test_roundtrip_default() {
        let vc = ViewingConditions::default_conditions();
        let xyz = [19.31, 23.93, 10.14];
        let c = forward(Some(vc), xyz).unwrap();
        let back = reverse(vc, &c).unwrap();
        for i in 0..3 {
            assert_relative_eq!(back[i], xyz[i], max_relative = 1e-5);
        }
    }

    #[test]
    fn test_input_not_modified() {
        let vc = ViewingConditions::default_conditions();
        let c = Correlates {
            brightness: Some(120.0),
            colorfulness: Some(20.0),
            hue_composition: Some(50.0),
            ..Correlates::EMPTY
        };
        let copy = c;
        reverse(vc, &c).unwrap();
        assert_eq!(c, copy);
    }

    #[test]
    fn test_missing_chroma() {
        let vc = ViewingConditions::default_conditions();
        let c = Correlates {
            lightness: Some(50.0),
            hue_angle: Some(10.0),
            saturation: Some(20.0),
            ..Correlates::EMPTY
        };
        // saturation alone needs brightness, which completion derives from J
        assert!(reverse(vc, &c).is_ok());

        let c = Correlates { lightness: Some(50.0), ..Correlates::EMPTY };
        assert_eq!(
            reverse(vc, &c),
            Err(CamError::InsufficientCorrelates { missing: "C, h".into() })
        );
    }

    #[test]
    fn test_black() {
        let vc = ViewingConditions::default_conditions();
        let xyz = reverse(vc, &Correlates::from_jch(0.0, 0.0, 0.0)).unwrap();
        for v in xyz {
            assert!(v.abs() < 1e-9);
        }
    }

    #[test]
    fn test_non_finite_stage() {
        let vc = ViewingConditions::default_conditions();
        let c = Correlates::from_jch(-10.0, 5.0, 40.0).with(Correlate::Brightness, 1.0);
        assert_eq!(reverse(vc, &c), Err(CamError::NonFinite { stage: "achromatic response" }));
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        let vc = ViewingConditions::default_conditions();

        // neutral colors still need a real hue angle
        let c = Correlates::from_jch(50.0, 0.0, f64::NAN);
        assert_eq!(reverse(vc, &c), Err(CamError::NonFinite { stage: "hue angle" }));

        let c = Correlates::from_jch(50.0, f64::INFINITY, 120.0);
        assert_eq!(reverse(vc, &c), Err(CamError::NonFinite { stage: "chroma" }));
    }
}
