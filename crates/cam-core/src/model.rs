//! The CIECAM02 model bound to one set of viewing conditions.

use std::sync::OnceLock;

use cam_math::Vec3;
use tracing::{debug, trace};

use crate::complete::{complete_forward, complete_reverse};
use crate::correlate::Correlates;
use crate::error::{finite, CamResult};
use crate::forward::{compressed_response, forward};
use crate::reverse::reverse;
use crate::stages;
use crate::viewing::ViewingConditions;

/// CIECAM02 appearance model for fixed viewing conditions.
///
/// Two models are equal, and hash alike, when their conditions are.
///
/// # Example
///
/// ```rust
/// use cam_core::{Ciecam02, Surround, ViewingConditions};
/// use cam_math::Illuminant;
///
/// let vc = ViewingConditions::adapted(Illuminant::D50, 40.0, 20.0, Surround::Dim)?;
/// let model = Ciecam02::new(vc);
///
/// let c = model.forward([30.0, 25.0, 12.0])?;
/// let xyz = model.reverse(&c)?;
/// assert!((xyz[1] - 25.0).abs() < 1e-4);
/// # Ok::<(), cam_core::CamError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ciecam02 {
    conditions: ViewingConditions,
}

impl Ciecam02 {
    /// Creates a model for `conditions`.
    pub fn new(conditions: ViewingConditions) -> Self {
        Self { conditions }
    }

    /// Shared model over [`ViewingConditions::default_conditions`].
    pub fn default_instance() -> &'static Ciecam02 {
        static INSTANCE: OnceLock<Ciecam02> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            debug!("building default CIECAM02 instance");
            Self::new(ViewingConditions::default_conditions().clone())
        })
    }

    /// Viewing conditions of this model.
    #[inline]
    pub fn conditions(&self) -> &ViewingConditions {
        &self.conditions
    }

    /// XYZ (0 - 100) to a complete correlate vector. See [`forward`].
    pub fn forward(&self, xyz: [f64; 3]) -> CamResult<Correlates> {
        forward(Some(&self.conditions), xyz)
    }

    /// Correlates to XYZ (0 - 100). See [`reverse`].
    pub fn reverse(&self, correlates: &Correlates) -> CamResult<[f64; 3]> {
        reverse(&self.conditions, correlates)
    }

    /// See [`complete_forward`].
    pub fn complete_forward(&self, correlates: &mut Correlates) -> CamResult<()> {
        complete_forward(&self.conditions, correlates)
    }

    /// See [`complete_reverse`].
    pub fn complete_reverse(&self, correlates: &mut Correlates) -> CamResult<()> {
        complete_reverse(&self.conditions, correlates)
    }

    /// Lightness `J` only, skipping the chromatic stages.
    ///
    /// Equal to the J of [`Ciecam02::forward`] for the same input.
    pub fn lightness(&self, xyz: [f64; 3]) -> CamResult<f64> {
        trace!(xyz = ?xyz, "lightness");
        let vc = &self.conditions;
        let rgb_a = compressed_response(vc, Vec3::from_array(xyz));
        let a = stages::achromatic_response(rgb_a, vc.n_bb());
        finite(stages::lightness(a, vc.a_w(), vc.surround().c(), vc.z()), "lightness")
    }
}

impl From<ViewingConditions> for Ciecam02 {
    fn from(conditions: ViewingConditions) -> Self {
        Self::new(conditions)
    }
}
