use super::uniform::Uniform;
use error::SamplingError;
use geom::Vec3;
use hemisphere::sample_local;
use random::RandomSource;

/// A hemisphere of radius 1, with the bottom disk aligned to a plane
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnitHemisphere {
    PosX, NegX,
    PosY, NegY,
    PosZ, NegZ
}

impl UnitHemisphere {
    pub fn normal(&self) -> Vec3 {
        match *self {
            UnitHemisphere::PosX => Vec3::unit_x(),
            UnitHemisphere::NegX => -Vec3::unit_x(),
            UnitHemisphere::PosY => Vec3::unit_y(),
            UnitHemisphere::NegY => -Vec3::unit_y(),
            UnitHemisphere::PosZ => Vec3::unit_z(),
            UnitHemisphere::NegZ => -Vec3::unit_z(),
        }
    }
}

impl Uniform for UnitHemisphere {

    /// Uniformly samples the given hemisphere.
    ///
    /// Axis aligned hemispheres need no basis, the direction around +z is
    /// swizzled onto the axis instead.
    fn uniform<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Vec3, SamplingError> {
        let Vec3 { x, y, z } = sample_local(rng)?;

        Ok(match *self {
            UnitHemisphere::PosZ => Vec3::new(x, y, z),
            UnitHemisphere::NegZ => Vec3::new(x, y, -z),
            UnitHemisphere::PosY => Vec3::new(x, z, y),
            UnitHemisphere::NegY => Vec3::new(x, -z, y),
            UnitHemisphere::PosX => Vec3::new(z, y, x),
            UnitHemisphere::NegX => Vec3::new(-z, y, x)
        })
    }
}
