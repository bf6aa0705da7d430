use error::SamplingError;
use geom::Vec3;
use hemisphere::Hemisphere;
use random::RandomSource;

/// Builds the basis for `normal` once and draws `count` directions with it.
pub fn sample_batch<R: RandomSource + ?Sized>(
    normal: Vec3,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Vec3>, SamplingError> {
    Hemisphere::new(normal)?.directions(rng).take(count).collect()
}

/// Endless iterator over uniformly sampled directions of a hemisphere.
///
/// The first error of the random source is yielded once, after that the
/// iterator is exhausted.
pub struct Directions<'a, R: RandomSource + ?Sized + 'a> {
    hemisphere: Hemisphere,
    rng: &'a mut R,
    failed: bool,
}

impl<'a, R: RandomSource + ?Sized + 'a> Directions<'a, R> {
    pub fn new(hemisphere: Hemisphere, rng: &'a mut R) -> Self {
        trace!(
            nx = hemisphere.normal().x,
            ny = hemisphere.normal().y,
            nz = hemisphere.normal().z,
            "starting direction stream"
        );

        Directions {
            hemisphere,
            rng,
            failed: false,
        }
    }

    pub fn hemisphere(&self) -> &Hemisphere {
        &self.hemisphere
    }
}

impl<'a, R: RandomSource + ?Sized + 'a> Iterator for Directions<'a, R> {
    type Item = Result<Vec3, SamplingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let sample = self.hemisphere.sample(&mut *self.rng);
        if sample.is_err() {
            self.failed = true;
        }

        Some(sample)
    }
}
