//! Derivation of missing correlates.
//!
//! Lightness and brightness carry the same information, as do chroma,
//! colorfulness and (given brightness) saturation. The functions here fill
//! whichever slots of a [`Correlates`] are absent from those present.
//!
//! # Forward completion
//!
//! Runs after the forward pipeline has filled J, C and h:
//!
//! ```text
//! J -> Q   (or Q -> J)
//! C -> M
//! (Q, M) -> s
//! h -> H
//! ```
//!
//! # Reverse completion
//!
//! Runs before the reverse pipeline, which needs J, C and h:
//!
//! ```text
//! Q -> J   (or J -> Q)
//! M -> C
//! (s, Q) -> C
//! H -> h
//! ```
//!
//! Present slots are never overwritten, so both directions are idempotent.

use tracing::trace;

use crate::correlate::{Correlate, Correlates};
use crate::error::{finite, CamError, CamResult};
use crate::hue::{hue_composition, hue_from_composition};
use crate::viewing::ViewingConditions;

// ============================================================================
// Formulas
// ============================================================================

/// `Q = (4/c)·√(J/100)·(A_w + 4)·F_L^0.25`
#[inline]
pub fn brightness_from_lightness(vc: &ViewingConditions, j: f64) -> f64 {
    (4.0 / vc.surround().c()) * (j / 100.0).sqrt() * (vc.a_w() + 4.0) * vc.f_l_quarter()
}

/// `J = 6.25·(c·Q / ((A_w + 4)·F_L^0.25))²`
#[inline]
pub fn lightness_from_brightness(vc: &ViewingConditions, q: f64) -> f64 {
    let r = vc.surround().c() * q / ((vc.a_w() + 4.0) * vc.f_l_quarter());
    6.25 * r * r
}

/// `M = C·F_L^0.25`
#[inline]
pub fn colorfulness_from_chroma(vc: &ViewingConditions, c: f64) -> f64 {
    c * vc.f_l_quarter()
}

/// `C = M / F_L^0.25`
#[inline]
pub fn chroma_from_colorfulness(vc: &ViewingConditions, m: f64) -> f64 {
    m / vc.f_l_quarter()
}

/// `C = (s/100)²·Q / F_L^0.25`
#[inline]
pub fn chroma_from_saturation(vc: &ViewingConditions, s: f64, q: f64) -> f64 {
    let r = s / 100.0;
    r * r * q / vc.f_l_quarter()
}

/// `s = 100·√(M/Q)`, zero for zero brightness.
#[inline]
pub fn saturation_from_colorfulness(m: f64, q: f64) -> f64 {
    if q == 0.0 { 0.0 } else { 100.0 * (m / q).sqrt() }
}

// ============================================================================
// Completion
// ============================================================================

/// Fills absent slots after a forward transform.
///
/// # Errors
///
/// - [`CamError::InsufficientCorrelates`] if neither J nor Q is present
/// - [`CamError::HueAngleOutOfRange`] if h cannot be mapped to H
/// - [`CamError::NonFinite`] if a derived value is not finite
pub fn complete_forward(vc: &ViewingConditions, c: &mut Correlates) -> CamResult<()> {
    trace!(correlates = %c, "complete_forward");
    resolve_lightness(vc, c, false)?;

    if let (Some(chroma), None) = (c.chroma, c.colorfulness) {
        c.colorfulness = Some(finite(colorfulness_from_chroma(vc, chroma), "colorfulness")?);
    }
    if let (Some(q), Some(m), None) = (c.brightness, c.colorfulness, c.saturation) {
        c.saturation = Some(finite(saturation_from_colorfulness(m, q), "saturation")?);
    }
    if let (Some(h), None) = (c.hue_angle, c.hue_composition) {
        c.hue_composition = Some(hue_composition(h)?);
    }
    Ok(())
}

/// Fills absent slots before a reverse transform.
///
/// Chroma comes from colorfulness when available, else from saturation and
/// brightness.
///
/// # Errors
///
/// - [`CamError::InsufficientCorrelates`] if neither J nor Q is present
/// - [`CamError::HueCompositionOutOfRange`] if H cannot be mapped to h
/// - [`CamError::NonFinite`] if a derived value is not finite
pub fn complete_reverse(vc: &ViewingConditions, c: &mut Correlates) -> CamResult<()> {
    trace!(correlates = %c, "complete_reverse");
    resolve_lightness(vc, c, true)?;

    if let (Some(m), None) = (c.colorfulness, c.chroma) {
        c.chroma = Some(finite(chroma_from_colorfulness(vc, m), "chroma")?);
    }
    if let (Some(s), Some(q), None) = (c.saturation, c.brightness, c.chroma) {
        c.chroma = Some(finite(chroma_from_saturation(vc, s, q), "chroma")?);
    }
    if let (Some(big_h), None) = (c.hue_composition, c.hue_angle) {
        c.hue_angle = Some(hue_from_composition(big_h)?);
    }
    Ok(())
}

/// Makes both J and Q present. `brightness_first` picks which one is
/// derived when only one of them is given; with both present nothing is
/// written.
fn resolve_lightness(
    vc: &ViewingConditions,
    c: &mut Correlates,
    brightness_first: bool,
) -> CamResult<()> {
    match (c.lightness, c.brightness) {
        (Some(_), Some(_)) => {}
        (Some(j), None) => {
            c.brightness = Some(finite(brightness_from_lightness(vc, j), "brightness")?);
        }
        (None, Some(q)) => {
            c.lightness = Some(finite(lightness_from_brightness(vc, q), "lightness")?);
        }
        (None, None) => {
            let missing = if brightness_first { "Q or J" } else { "J or Q" };
            return Err(CamError::InsufficientCorrelates { missing: missing.into() });
        }
    }
    Ok(())
}

/// Symbols of `required` channels absent from `c`, joined with `", "`.
pub(crate) fn missing_symbols(c: &Correlates, required: &[Correlate]) -> Option<String> {
    let missing: Vec<&str> = required
        .iter()
        .filter(|ch| c.get(**ch).is_none())
        .map(|ch| ch.symbol())
        .collect();
    if missing.is_empty() { None } else { Some(missing.join(", ")) }
}
