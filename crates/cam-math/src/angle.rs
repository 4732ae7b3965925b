//! Hue angle from opponent coordinates.

/// Hue angle in degrees of the opponent pair `(a, b)`, in `[0, 360)`.
///
/// `atan2(b, a)` mapped to the positive circle. The origin maps to 0.
///
/// ```rust
/// use cam_math::hue_angle;
///
/// assert_eq!(hue_angle(1.0, 0.0), 0.0);
/// assert!((hue_angle(0.0, 1.0) - 90.0).abs() < 1e-12);
/// assert!((hue_angle(0.0, -1.0) - 270.0).abs() < 1e-12);
/// ```
#[inline]
pub fn hue_angle(a: f64, b: f64) -> f64 {
    let h = b.atan2(a).to_degrees();
    let h = if h < 0.0 { h + 360.0 } else { h };
    // tiny negative angles round up to exactly 360
    if h >= 360.0 { h - 360.0 } else { h }
}
