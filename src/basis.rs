use error::{InvalidNormalReason, SamplingError};
use geom::prelude::*;
use geom::{is_finite, to_array, Vec3};

use std::str::FromStr;

/// If the z component of a normal reaches this magnitude, the x axis is used as
/// the reference vector instead of the z axis.
pub const UP_SWITCH_THRESHOLD: f32 = 0.999;

/// Maximum deviation of a normal's length from one that passes validation.
pub const UNIT_TOLERANCE: f32 = 1e-3;

/// Squared magnitudes below this are considered zero when normalizing.
pub const DEGENERATE_EPSILON: f32 = 1e-12;

/// Decides how the basis builder treats the normal it is given.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NormalPolicy {
    /// Use the normal as is. A non-unit normal ends up unnormalized in the
    /// basis, so the result is no longer orthonormal.
    Trust,
    /// Refuse normals that are non-finite, zero or not unit length.
    Validate,
    /// Refuse normals that are non-finite or exactly zero, normalize all
    /// others. Tiny and huge normals are scaled by their largest component
    /// first so the length neither underflows nor overflows.
    Renormalize,
}

impl Default for NormalPolicy {
    fn default() -> Self {
        NormalPolicy::Validate
    }
}

impl FromStr for NormalPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trust" => Ok(NormalPolicy::Trust),
            "validate" => Ok(NormalPolicy::Validate),
            "renormalize" => Ok(NormalPolicy::Renormalize),
            other => Err(format!(
                "Unknown normal policy \"{}\", expected trust, validate or renormalize",
                other
            )),
        }
    }
}

/// Right-handed frame around a normal: `tangent × bitangent = normal`.
///
/// Directions are expressed in this frame with the normal as local +z.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrthonormalBasis {
    pub tangent: Vec3,
    pub bitangent: Vec3,
    pub normal: Vec3,
}

/// Builds the basis for a unit normal, refusing anything else.
pub fn build_basis(normal: Vec3) -> Result<OrthonormalBasis, SamplingError> {
    OrthonormalBasis::new(normal)
}

impl OrthonormalBasis {
    pub fn new(normal: Vec3) -> Result<Self, SamplingError> {
        Self::with_policy(normal, NormalPolicy::default())
    }

    pub fn with_policy(normal: Vec3, policy: NormalPolicy) -> Result<Self, SamplingError> {
        let normal = match policy {
            NormalPolicy::Trust => normal,
            NormalPolicy::Validate => {
                let length = checked_length(normal)?;
                if (length - 1.0).abs() > UNIT_TOLERANCE {
                    return Err(invalid(normal, InvalidNormalReason::NotUnit { length }));
                }
                normal
            }
            NormalPolicy::Renormalize => rescaled(normal)?,
        };

        let up = if normal.z.abs() < UP_SWITCH_THRESHOLD {
            Vec3::unit_z()
        } else {
            Vec3::unit_x()
        };

        let tangent = normalize(up.cross(normal), "tangent")?;
        let bitangent = normal.cross(tangent);

        Ok(OrthonormalBasis {
            tangent,
            bitangent,
            normal,
        })
    }

    /// Maps a direction given relative to this basis into world space.
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        local.x * self.tangent + local.y * self.bitangent + local.z * self.normal
    }

    /// Expresses a world space direction relative to this basis.
    pub fn to_local(&self, world: Vec3) -> Vec3 {
        Vec3::new(
            world.dot(self.tangent),
            world.dot(self.bitangent),
            world.dot(self.normal),
        )
    }
}

/// Normalizes `v`, failing instead of dividing by (almost) zero.
pub fn normalize(v: Vec3, stage: &'static str) -> Result<Vec3, SamplingError> {
    let length2 = v.magnitude2();

    if !length2.is_finite() || length2 < DEGENERATE_EPSILON {
        let length = length2.sqrt();
        debug!(stage, length, "refusing to normalize degenerate vector");
        return Err(SamplingError::Degenerate { stage, length });
    }

    Ok(v / length2.sqrt())
}

fn checked_length(normal: Vec3) -> Result<f32, SamplingError> {
    if !is_finite(normal) {
        return Err(invalid(normal, InvalidNormalReason::NonFinite));
    }

    let length = normal.magnitude();
    if length * length < DEGENERATE_EPSILON {
        return Err(invalid(normal, InvalidNormalReason::ZeroLength));
    }

    Ok(length)
}

fn rescaled(normal: Vec3) -> Result<Vec3, SamplingError> {
    if !is_finite(normal) {
        return Err(invalid(normal, InvalidNormalReason::NonFinite));
    }

    let largest = normal.x.abs().max(normal.y.abs()).max(normal.z.abs());
    if largest == 0.0 {
        return Err(invalid(normal, InvalidNormalReason::ZeroLength));
    }

    // Components now lie in [-1, 1] with at least one of magnitude 1
    let scaled = normal / largest;
    Ok(scaled / scaled.magnitude())
}

fn invalid(normal: Vec3, reason: InvalidNormalReason) -> SamplingError {
    debug!(?reason, x = normal.x, y = normal.y, z = normal.z, "rejected normal");
    SamplingError::InvalidNormal {
        normal: to_array(normal),
        reason,
    }
}
