//! Point light with an empirically fitted distance falloff.

use boxlight_math::Vec3;

use crate::error::{SceneError, SceneResult};

/// Power-law fit for the linear attenuation coefficient: `a * D^b`.
const LINEAR_FIT: (f64, f64) = (4.690508, -1.009712);
/// Power-law fit for the quadratic attenuation coefficient: `a * D^b`.
const QUADRATIC_FIT: (f64, f64) = (82.444779, -2.019206);

/// A point light.
///
/// The attenuation coefficients are derived from `reference_distance` when
/// the light is built. `size` only feeds the soft shadow radius estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    position: Vec3,
    strength: f64,
    reference_distance: f64,
    size: f64,
    constant: f64,
    linear: f64,
    quadratic: f64,
}

impl Light {
    /// Create a new light.
    ///
    /// - `reference_distance`: effective range the falloff curve is fitted to
    /// - `size`: apparent light size, larger lights cast wider penumbrae
    pub fn new(position: Vec3, strength: f64, reference_distance: f64, size: f64) -> SceneResult<Self> {
        if !(reference_distance.is_finite() && reference_distance > 0.0) {
            return Err(SceneError::InvalidReferenceDistance(reference_distance));
        }
        if !strength.is_finite() {
            return Err(SceneError::InvalidLightStrength(strength));
        }
        if !(size.is_finite() && size >= 0.0) {
            return Err(SceneError::InvalidLightSize(size));
        }

        Ok(Self {
            position,
            strength,
            reference_distance,
            size,
            constant: 1.0,
            linear: LINEAR_FIT.0 * reference_distance.powf(LINEAR_FIT.1),
            quadratic: QUADRATIC_FIT.0 * reference_distance.powf(QUADRATIC_FIT.1),
        })
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn strength(&self) -> f64 {
        self.strength
    }

    #[inline]
    pub fn reference_distance(&self) -> f64 {
        self.reference_distance
    }

    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Attenuation coefficients as `(constant, linear, quadratic)`.
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.constant, self.linear, self.quadratic)
    }

    /// Multiplicative falloff at `distance`.
    #[inline]
    pub fn attenuation(&self, distance: f64) -> f64 {
        1.0 / (self.constant + (self.quadratic * distance + self.linear) * distance)
    }
}
