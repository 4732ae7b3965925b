//! Hue composition (hue quadrature).
//!
//! Maps the hue angle `h` onto the composition scale `H`, where the four
//! unique hues sit at 0 (red), 100 (yellow), 200 (green) and 300 (blue),
//! and 400 closes the circle back onto red.
//!
//! | Unique hue | h_i | e_i | H_i |
//! |------------|--------|-----|-----|
//! | Red | 20.14 | 0.8 | 0 |
//! | Yellow | 90.00 | 0.7 | 100 |
//! | Green | 164.25 | 1.0 | 200 |
//! | Blue | 237.53 | 1.2 | 300 |
//! | Red | 380.14 | 0.8 | 400 |
//!
//! The inverse uses the published piecewise-rational form, which agrees
//! with the forward interpolation to floating-point precision.

use crate::error::{CamError, CamResult};

/// Hue angles of the unique hues, red repeated at `+360`.
const HUE_ANGLES: [f64; 5] = [20.14, 90.0, 164.25, 237.53, 380.14];

/// Eccentricities of the unique hues.
const ECCENTRICITIES: [f64; 5] = [0.8, 0.7, 1.0, 1.2, 0.8];

/// Largest hue angle the composition mapping accepts.
pub const MAX_HUE_ANGLE: f64 = 380.14;

/// Largest hue composition the inverse mapping accepts.
pub const MAX_HUE_COMPOSITION: f64 = 400.0;

/// Composition values this close below 400 are reported as 0.
const COMPOSITION_SNAP: f64 = 1e-3;

/// Hue angles this close below 360 are reported as 0.
const ANGLE_SNAP: f64 = 1e-4;

/// Hue composition `H` of a hue angle `h` in degrees.
///
/// Angles below the red unique hue are shifted by 360 first, so the whole
/// `[0, 360)` circle lands in one of the four quadrants. A result that is
/// 400 to within `1e-3` is reported as exactly 0.
///
/// # Errors
///
/// [`CamError::HueAngleOutOfRange`] for `h` outside `[0, 380.14]` or NaN.
///
/// # Example
///
/// ```rust
/// use cam_core::hue_composition;
///
/// assert_eq!(hue_composition(90.0)?, 100.0);
/// assert_eq!(hue_composition(20.14)?, 0.0);
/// # Ok::<(), cam_core::CamError>(())
/// ```
pub fn hue_composition(h: f64) -> CamResult<f64> {
    if !(0.0..=MAX_HUE_ANGLE).contains(&h) {
        return Err(CamError::HueAngleOutOfRange(h));
    }
    let h = if h < HUE_ANGLES[0] { h + 360.0 } else { h };

    // h is now in [20.14, 380.14]; the last quadrant is closed.
    let q = HUE_ANGLES[1..4].iter().take_while(|&&hi| h >= hi).count();

    let (h0, h1) = (HUE_ANGLES[q], HUE_ANGLES[q + 1]);
    let (e0, e1) = (ECCENTRICITIES[q], ECCENTRICITIES[q + 1]);
    let i = (h - h0) / e0;
    let big_h = 100.0 * q as f64 + 100.0 * i / (i + (h1 - h) / e1);

    if (MAX_HUE_COMPOSITION - COMPOSITION_SNAP..=MAX_HUE_COMPOSITION).contains(&big_h) {
        Ok(0.0)
    } else {
        Ok(big_h)
    }
}

/// Hue angle `h` in degrees from a hue composition `H`.
///
/// Results above 360 wrap, and results within `1e-4` of 360 are reported
/// as 0.
///
/// # Errors
///
/// [`CamError::HueCompositionOutOfRange`] for `H` outside `[0, 400]` or NaN.
pub fn hue_from_composition(big_h: f64) -> CamResult<f64> {
    if !(0.0..=MAX_HUE_COMPOSITION).contains(&big_h) {
        return Err(CamError::HueCompositionOutOfRange(big_h));
    }

    let h = if big_h < 100.0 {
        let i = big_h;
        (-57.902 * i - 1409.8) / (-0.1 * i - 70.0)
    } else if big_h < 200.0 {
        let i = big_h - 100.0;
        (-24.975 * i - 9000.0) / (0.3 * i - 100.0)
    } else if big_h < 300.0 {
        let i = big_h - 200.0;
        (-40.43 * i - 19710.0) / (0.2 * i - 120.0)
    } else {
        let i = big_h - 300.0;
        (-266.144 * i - 19002.4) / (-0.4 * i - 80.0)
    };

    let h = if h > 360.0 { h - 360.0 } else { h };
    Ok(if h > 360.0 - ANGLE_SNAP { 0.0 } else { h })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Circular distance in degrees.
    fn angle_diff(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn test_unique_hues() {
        assert_abs_diff_eq!(hue_composition(20.14).unwrap(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hue_composition(90.0).unwrap(), 100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hue_composition(164.25).unwrap(), 200.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hue_composition(237.53).unwrap(), 300.0, epsilon = 1e-12);

        assert_abs_diff_eq!(hue_from_composition(0.0).unwrap(), 20.14, epsilon = 1e-9);
        assert_abs_diff_eq!(hue_from_composition(100.0).unwrap(), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hue_from_composition(200.0).unwrap(), 164.25, epsilon = 1e-9);
        assert_abs_diff_eq!(hue_from_composition(300.0).unwrap(), 237.53, epsilon = 1e-9);
        assert_abs_diff_eq!(hue_from_composition(400.0).unwrap(), 20.14, epsilon = 1e-9);
    }

    #[test]
    fn test_roundtrip_full_circle() {
        for k in 0..3600 {
            let h = k as f64 * 0.1;
            let big_h = hue_composition(h).unwrap();
            assert!((0.0..400.0).contains(&big_h), "H = {big_h} for h = {h}");
            let back = hue_from_composition(big_h).unwrap();
            assert!(angle_diff(back, h) < 1e-9, "h = {h} came back as {back}");
        }
    }

    #[test]
    fn test_continuous_across_quadrants() {
        for &hi in &HUE_ANGLES[1..4] {
            let below = hue_composition(hi - 1e-9).unwrap();
            let above = hue_composition(hi + 1e-9).unwrap();
            assert!((above - below).abs() < 1e-6);
        }
        for big_h in [100.0, 200.0, 300.0] {
            let below = hue_from_composition(big_h - 1e-9).unwrap();
            let above = hue_from_composition(big_h + 1e-9).unwrap();
            assert!((above - below).abs() < 1e-6);
        }
    }

    #[test]
    fn test_monotone_composition() {
        // Increasing h from the red unique hue walks H up through 400
        let mut last = -1.0;
        let mut h = 20.14;
        while h < 380.0 {
            let big_h = hue_composition(h).unwrap();
            assert!(big_h > last);
            last = big_h;
            h += 0.5;
        }
    }

    #[test]
    fn test_snap_to_zero() {
        assert_eq!(hue_composition(380.14).unwrap(), 0.0);
        assert_eq!(hue_composition(380.1399).unwrap(), 0.0);
        // Just outside the snap window
        let big_h = hue_composition(20.13).unwrap();
        assert!(big_h > 399.98 && big_h < 399.999);
    }

    #[test]
    fn test_zero_angle_roundtrips() {
        let big_h = hue_composition(0.0).unwrap();
        assert_abs_diff_eq!(big_h, 380.2135, epsilon = 1e-3);
        let back = hue_from_composition(big_h).unwrap();
        assert!(angle_diff(back, 0.0) < 1e-9);
    }

    #[test]
    fn test_rejects_out_of_domain() {
        assert_eq!(hue_composition(-0.5), Err(CamError::HueAngleOutOfRange(-0.5)));
        assert_eq!(hue_composition(380.2), Err(CamError::HueAngleOutOfRange(380.2)));
        assert!(hue_composition(f64::NAN).is_err());
        assert_eq!(hue_from_composition(400.5), Err(CamError::HueCompositionOutOfRange(400.5)));
        assert!(hue_from_composition(-1.0).is_err());
        assert!(hue_from_composition(f64::NAN).is_err());
    }
}
