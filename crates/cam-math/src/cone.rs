//! Cone-response transforms used by CIECAM02.
//!
//! Chromatic adaptation in CIECAM02 happens in a "sharpened" cone space
//! reached through the CAT02 matrix. The post-adaptation nonlinearity is
//! applied in the Hunt-Pointer-Estevez (HPE) cone-fundamental space. The
//! model never goes back to XYZ between the two, so the HPE step is
//! expressed directly as a CAT02 -> HPE matrix.
//!
//! # Spaces
//!
//! ```text
//!   XYZ --CAT02--> RGB (sharpened) --D_RGB--> RGB_c --CAT02_TO_HPE--> RGB'
//!   XYZ <-CAT02_INV- RGB           <-/D_RGB-- RGB_c <-HPE_TO_CAT02--- RGB'
//! ```
//!
//! All constants are the published CIE 159:2004 values. The inverses are
//! tabulated, not computed, so products of a pair are identity only to
//! about six digits.
//!
//! # Usage
//!
//! ```rust
//! use cam_math::{CAT02, CAT02_INV, Vec3};
//!
//! let xyz = Vec3::new(19.31, 23.93, 10.14);
//! let back = CAT02_INV * (CAT02 * xyz);
//! assert!((back.y - xyz.y).abs() < 1e-4);
//! ```

use crate::Mat3;

/// CAT02 chromatic adaptation matrix (XYZ -> sharpened cone response).
pub const CAT02: Mat3 = Mat3::from_rows([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

/// Inverse CAT02 matrix (sharpened cone response -> XYZ).
pub const CAT02_INV: Mat3 = Mat3::from_rows([
    [1.096124, -0.278869, 0.182745],
    [0.454369, 0.473533, 0.072098],
    [-0.009628, -0.005698, 1.015326],
]);

/// Adapted sharpened response -> HPE space: the Hunt-Pointer-Estevez
/// matrix applied after [`CAT02_INV`], pre-multiplied.
pub const CAT02_TO_HPE: Mat3 = Mat3::from_rows([
    [0.7409792, 0.2180250, 0.0410058],
    [0.2853532, 0.6242014, 0.0904454],
    [-0.0096280, -0.0056980, 1.0153260],
]);

/// Inverse of [`CAT02_TO_HPE`]: HPE space -> adapted sharpened response.
pub const HPE_TO_CAT02: Mat3 = Mat3::from_rows([
    [1.5591524816, -0.5447228688, -0.0144452544],
    [-0.7143269842, 1.8503096114, -0.1359760488],
    [0.0107755110, 0.0052187624, 0.9840056152],
]);
