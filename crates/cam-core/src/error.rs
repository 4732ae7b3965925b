//! Error types for appearance-model operations.
//!
//! Every failure in this crate is a domain or precondition violation
//! detected synchronously at the call that received the bad input. Nothing
//! is transient, so nothing is retried.

use thiserror::Error;

/// Appearance-model error.
///
/// Covers all failure modes of the CIECAM02 core:
/// - Viewing conditions that the adaptation formulas cannot evaluate
/// - Correlate vectors that do not determine a color
/// - Hue values outside the composition mapping's domain
/// - Arithmetic that left the real numbers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CamError {
    /// A viewing-condition input is non-positive or not finite.
    ///
    /// `L_A` and `Y_b` enter logarithms and fractional powers; the white
    /// point must have a positive luminance and non-zero cone responses.
    #[error("invalid viewing conditions: {parameter} = {value} (must be finite and positive)")]
    InvalidViewingConditions {
        /// Name of the offending input (`L_A`, `Y_b`, `white point`).
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The reverse transform could not derive J, C and h.
    #[error("insufficient correlates: cannot derive {missing}")]
    InsufficientCorrelates {
        /// Symbols of the correlates that stayed absent, e.g. `"J or Q"`.
        missing: String,
    },

    /// Hue angle outside `[0, 380.14]` given to the composition mapping.
    #[error("hue angle {0} outside 0..=380.14 degrees")]
    HueAngleOutOfRange(f64),

    /// Hue composition outside `[0, 400]` given to the inverse mapping.
    #[error("hue composition {0} outside 0..=400")]
    HueCompositionOutOfRange(f64),

    /// A pipeline stage produced NaN or infinity.
    #[error("non-finite result in {stage}")]
    NonFinite {
        /// Stage that produced the value.
        stage: &'static str,
    },
}

/// Result type for appearance-model operations.
pub type CamResult<T> = Result<T, CamError>;

/// Returns `value` if it is finite, otherwise [`CamError::NonFinite`].
#[inline]
pub(crate) fn finite(value: f64, stage: &'static str) -> CamResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CamError::NonFinite { stage })
    }
}
