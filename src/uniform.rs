use error::SamplingError;
use geom::Vec3;
use random::RandomSource;

/// Samples a direction or point on the implementer.
/// All possible results have equal probability density.
pub trait Uniform {
    fn uniform<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Vec3, SamplingError>;
}
