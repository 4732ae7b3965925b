//! Fixed linear transforms between XYZ and the cone spaces.
//!
//! [`Mat3`] exists to hold the published CAT02 and HPE tables as
//! constants and apply them to a [`Vec3`]. Multiplication is done by
//! glam's `DMat3`.

use crate::Vec3;
use glam::{DMat3, DVec3};
use std::ops::Mul;

/// A constant 3x3 transform, applied as `matrix * column`.
///
/// ```rust
/// use cam_math::{Mat3, Vec3};
///
/// const SWAP_XZ: Mat3 = Mat3::from_rows([
///     [0.0, 0.0, 1.0],
///     [0.0, 1.0, 0.0],
///     [1.0, 0.0, 0.0],
/// ]);
/// assert_eq!(SWAP_XZ * Vec3::new(1.0, 2.0, 3.0), Vec3::new(3.0, 2.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3(DMat3);

impl Mat3 {
    /// Builds the transform from rows as they are printed in the
    /// literature. glam stores columns, so the table is transposed here.
    pub const fn from_rows(r: [[f64; 3]; 3]) -> Self {
        Self(DMat3::from_cols(
            DVec3::new(r[0][0], r[1][0], r[2][0]),
            DVec3::new(r[0][1], r[1][1], r[2][1]),
            DVec3::new(r[0][2], r[1][2], r[2][2]),
        ))
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        (self.0 * DVec3::from(v)).into()
    }
}
