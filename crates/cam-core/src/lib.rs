//! # cam-core
//!
//! The CIECAM02 color appearance model.
//!
//! Transforms CIE XYZ tristimulus values into the seven perceptual
//! correlates of CIECAM02 and back, for a given set of viewing conditions:
//!
//! | Correlate | Symbol | Meaning |
//! |-----------|--------|---------|
//! | Lightness | J | brightness relative to the white |
//! | Brightness | Q | absolute perceived luminance |
//! | Chroma | C | colorfulness relative to the white's brightness |
//! | Colorfulness | M | absolute chromatic intensity |
//! | Saturation | s | colorfulness relative to own brightness |
//! | Hue composition | H | position between unique hues, 0 - 400 |
//! | Hue angle | h | opponent-space angle, degrees |
//!
//! # Architecture
//!
//! ```text
//!   ViewingConditions ---------------------------+
//!        |  (D, D_RGB, F_L, N_bb, z, A_w ...)    |
//!        v                                       v
//!   XYZ --forward--> J, C, h --complete_forward--> Correlates
//!                                                   |
//!   XYZ <--reverse-- J, C, h <--complete_reverse----+
//!                 \
//!                  stages (shared pure functions)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use cam_core::{forward, reverse, Correlates, Surround, ViewingConditions};
//! use cam_math::Illuminant;
//!
//! let vc = ViewingConditions::adapted(Illuminant::D65, 20.0, 20.0, Surround::Average)?;
//!
//! let c = forward(Some(&vc), [19.31, 23.93, 10.14])?;
//! println!("{c}");
//!
//! // Any subset that determines J, C and h reverses
//! let partial = Correlates {
//!     brightness: c.brightness,
//!     saturation: c.saturation,
//!     hue_composition: c.hue_composition,
//!     ..Correlates::EMPTY
//! };
//! let xyz = reverse(&vc, &partial)?;
//! assert!((xyz[1] - 23.93).abs() < 1e-4);
//! # Ok::<(), cam_core::CamError>(())
//! ```
//!
//! # Design
//!
//! - All stages are pure functions over immutable inputs
//! - [`ViewingConditions`] caches every constant that does not depend on
//!   the stimulus; build it once per viewing situation
//! - Absent correlates are `None`, never a sentinel value
//! - Defaults are built lazily, once per process
//! - Errors carry the offending value; nothing is clamped silently
//!
//! # Logging
//!
//! Uses [`tracing`]: `debug` when conditions are built, `trace` at
//! pipeline entry. No subscriber is installed.
//!
//! # Features
//!
//! - `serde` - serialization of conditions, correlates and presets
//!
//! # Dependencies
//!
//! - [`cam-math`] - matrices, vectors, white points
//!
//! [`cam-math`]: cam_math

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod complete;
mod convert;
mod correlate;
mod error;
mod forward;
mod hue;
mod model;
mod reverse;
mod surround;
mod viewing;
pub mod stages;

pub use complete::{
    brightness_from_lightness, chroma_from_colorfulness, chroma_from_saturation,
    colorfulness_from_chroma, complete_forward, complete_reverse, lightness_from_brightness,
    saturation_from_colorfulness,
};
pub use convert::Tristimulus;
pub use correlate::{Correlate, Correlates};
pub use error::{CamError, CamResult};
pub use forward::forward;
pub use hue::{hue_composition, hue_from_composition, MAX_HUE_ANGLE, MAX_HUE_COMPOSITION};
pub use model::Ciecam02;
pub use reverse::reverse;
pub use surround::Surround;
pub use viewing::{ViewingConditions, DEFAULT_ADAPTING_LUMINANCE, DEFAULT_BACKGROUND_LUMINANCE};

// Re-export the math crate for convenience
pub use cam_math as math;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        forward, reverse, CamError, CamResult, Ciecam02, Correlate, Correlates, Surround,
        Tristimulus, ViewingConditions,
    };
    pub use cam_math::Illuminant;
}
