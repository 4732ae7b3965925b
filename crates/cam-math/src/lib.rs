//! # cam-math
//!
//! Math utilities for the CIECAM02 color appearance model.
//!
//! This crate provides the linear-algebra collaborators of the model:
//!
//! - [`Mat3`] - constant 3x3 cone-space transforms
//! - [`Vec3`] - XYZ and cone-response triplets
//! - [`CAT02`], [`CAT02_TO_HPE`] and their inverses
//! - [`Illuminant`] - standard white points
//! - [`hue_angle`] - atan2-style hue in degrees
//!
//! # Design
//!
//! Everything is `f64`. Matrices are written row by row, as published,
//! and applied to **column vectors**; the product itself is glam's
//! `DMat3 * DVec3`:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use cam_math::{CAT02, CAT02_TO_HPE, Illuminant, Vec3};
//!
//! let white = Illuminant::D65.white_point_100();
//! let sharpened = CAT02 * white;
//! let fundamentals = CAT02_TO_HPE * sharpened;
//! assert!(fundamentals.is_finite());
//! ```
//!
//! # Used By
//!
//! - `cam-core` - viewing conditions and the appearance pipeline

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod angle;
mod cone;
mod illuminant;
mod mat3;
mod vec3;

pub use angle::*;
pub use cone::*;
pub use illuminant::{Illuminant, A, D50, D55, D65, D75, E};
pub use mat3::*;
pub use vec3::*;
