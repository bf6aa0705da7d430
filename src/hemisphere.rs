use basis::{normalize, NormalPolicy, OrthonormalBasis};
use error::SamplingError;
use geom::prelude::*;
use geom::Vec3;
use random::RandomSource;
use sequence::Directions;
use uniform::Uniform;

use std::f32::consts::PI;

/// Density of the uniform distribution over the hemisphere, one over its
/// solid angle of 2π.
pub const UNIFORM_HEMISPHERE_PDF: f32 = 0.5 / PI;

/// How far below the base plane a direction may dip from rounding and still
/// count as inside the hemisphere.
pub const HEMISPHERE_TOLERANCE: f32 = 1e-6;

/// Maps two uniform values in `[0, 1)` to a direction on the hemisphere
/// around local +z.
///
/// Both the height `z = u` and the azimuth `phi = 2πv` are uniform. The area
/// element of the unit sphere is `dz dphi`, so the resulting directions are
/// uniform with respect to solid angle. This is not cosine weighted sampling,
/// the density does not grow towards the pole.
pub fn local_direction(u: f32, v: f32) -> Vec3 {
    let z = u;
    // Rounding must never lead to the root of a negative number
    let r = (1.0 - u * u).max(0.0).sqrt();
    let phi = 2.0 * PI * v;

    Vec3::new(r * phi.cos(), r * phi.sin(), z)
}

/// Draws a direction on the hemisphere around local +z.
///
/// Consumes exactly two values from `rng`, `u` before `v`. Values outside
/// `[0, 1)` would leave the hemisphere and are refused.
pub fn sample_local<R: RandomSource + ?Sized>(rng: &mut R) -> Result<Vec3, SamplingError> {
    let (u, v) = rng.next_pair()?;
    Ok(local_direction(unit_interval(u)?, unit_interval(v)?))
}

fn unit_interval(value: f32) -> Result<f32, SamplingError> {
    // Also false for NaN
    if value >= 0.0 && value < 1.0 {
        Ok(value)
    } else {
        debug!(value, "random value outside [0, 1)");
        Err(SamplingError::RandomValueOutOfRange { value })
    }
}

/// Transforms a local direction into world space and renormalizes it to
/// cancel the drift of the linear combination.
pub fn to_world(local: Vec3, basis: &OrthonormalBasis) -> Result<Vec3, SamplingError> {
    normalize(basis.to_world(local), "direction")
}

/// Samples a direction around `normal` in one go.
///
/// Builds a fresh basis on every call, prefer a [`Hemisphere`](struct.Hemisphere.html)
/// when drawing more than one direction for the same normal.
pub fn sample_hemisphere<R: RandomSource + ?Sized>(
    normal: Vec3,
    rng: &mut R,
) -> Result<Vec3, SamplingError> {
    Hemisphere::new(normal)?.sample(rng)
}

/// The hemisphere of directions on the side of a normal, with the basis
/// cached for repeated sampling.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hemisphere {
    basis: OrthonormalBasis,
}

impl Hemisphere {
    pub fn new(normal: Vec3) -> Result<Self, SamplingError> {
        Self::with_policy(normal, NormalPolicy::default())
    }

    pub fn with_policy(normal: Vec3, policy: NormalPolicy) -> Result<Self, SamplingError> {
        OrthonormalBasis::with_policy(normal, policy).map(Self::from_basis)
    }

    pub fn from_basis(basis: OrthonormalBasis) -> Self {
        Hemisphere { basis }
    }

    pub fn basis(&self) -> &OrthonormalBasis {
        &self.basis
    }

    pub fn normal(&self) -> Vec3 {
        self.basis.normal
    }

    /// Draws a unit direction with a non-negative component along the normal.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Vec3, SamplingError> {
        let local = sample_local(rng)?;
        to_world(local, &self.basis)
    }

    /// Endless stream of directions drawn from `rng`.
    pub fn directions<'a, R: RandomSource + ?Sized>(&self, rng: &'a mut R) -> Directions<'a, R> {
        Directions::new(*self, rng)
    }

    /// Checks if `direction` lies on the side of the normal, allowing for
    /// rounding of directions sampled right at the base plane.
    pub fn contains(&self, direction: Vec3) -> bool {
        direction.dot(self.basis.normal) >= -HEMISPHERE_TOLERANCE
    }

    /// Probability density of `sample` producing `direction`, with respect to
    /// solid angle.
    pub fn pdf(&self, direction: Vec3) -> f32 {
        if self.contains(direction) {
            UNIFORM_HEMISPHERE_PDF
        } else {
            0.0
        }
    }
}

impl Uniform for Hemisphere {
    fn uniform<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Vec3, SamplingError> {
        self.sample(rng)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use basis::build_basis;
    use random::{FromRng, Replay};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sequence::sample_batch;

    fn test_normals() -> Vec<Vec3> {
        vec![
            Vec3::unit_x(),
            -Vec3::unit_x(),
            Vec3::unit_y(),
            Vec3::unit_z(),
            -Vec3::unit_z(),
            Vec3::new(1.0, 1.0, 1.0).normalize(),
            Vec3::new(-0.3, 0.1, -0.8).normalize(),
            Vec3::new(0.01, -0.02, 0.9995).normalize(),
        ]
    }

    #[test]
    fn test_samples_are_normalized_and_inside() {
        let mut rng = FromRng(StdRng::seed_from_u64(42));

        for normal in test_normals() {
            let hemisphere = Hemisphere::new(normal).unwrap();

            for _ in 0..1000 {
                let dir = hemisphere.sample(&mut rng).unwrap();
                assert_abs_diff_eq!(1.0, dir.magnitude(), epsilon = 1e-6);
                assert!(
                    dir.dot(normal) >= -1e-6,
                    "{:?} is not on the side of {:?}",
                    dir,
                    normal
                );
            }
        }
    }

    #[test]
    fn test_golden_direction_for_zero_draws() {
        let normal = Vec3::new(1.0, 1.0, 1.0).normalize();
        let basis = build_basis(normal).unwrap();
        let mut replay = Replay::new(vec![0.0, 0.0]);

        assert_eq!(Vec3::unit_x(), local_direction(0.0, 0.0));

        let dir = sample_hemisphere(normal, &mut replay).unwrap();
        assert_abs_diff_eq!(0.0, (dir - basis.tangent).magnitude(), epsilon = 1e-6);
        assert_eq!(2, replay.consumed());
    }

    #[test]
    fn test_pole_and_quarter_turn() {
        let pole = local_direction(1.0, 0.3);
        assert_eq!(0.0, pole.x.abs() + pole.y.abs());
        assert_eq!(1.0, pole.z);

        let nearly_pole = local_direction(1.0 - ::std::f32::EPSILON / 2.0, 0.7);
        assert!(nearly_pole.x.is_finite() && nearly_pole.y.is_finite());
        assert_abs_diff_eq!(1.0, nearly_pole.magnitude(), epsilon = 1e-6);

        let quarter = local_direction(0.0, 0.25);
        assert_abs_diff_eq!(0.0, quarter.x, epsilon = 1e-6);
        assert_abs_diff_eq!(1.0, quarter.y, epsilon = 1e-6);
        assert_eq!(0.0, quarter.z);
    }

    #[test]
    fn test_height_is_uniform() {
        const SAMPLES: usize = 100_000;
        const BINS: usize = 10;

        let normal = Vec3::new(1.0, 1.0, 1.0).normalize();
        let hemisphere = Hemisphere::new(normal).unwrap();
        let mut rng = FromRng(StdRng::seed_from_u64(1337));
        let mut counts = [0usize; BINS];

        for _ in 0..SAMPLES {
            let height = hemisphere.sample(&mut rng).unwrap().dot(normal);
            let bin = ((height.max(0.0) * BINS as f32) as usize).min(BINS - 1);
            counts[bin] += 1;
        }

        // Cosine weighted sampling would put 19 times as many samples in the
        // top bin as in the bottom one
        let expected = SAMPLES / BINS;
        for (bin, &count) in counts.iter().enumerate() {
            assert!(
                count > expected * 95 / 100 && count < expected * 105 / 100,
                "Height bin {} has {} samples, expected about {}, all bins: {:?}",
                bin,
                count,
                expected,
                counts
            );
        }
    }

    #[test]
    fn test_azimuth_is_uniform() {
        const SAMPLES: usize = 100_000;
        const BINS: usize = 8;

        let hemisphere = Hemisphere::new(Vec3::new(-0.3, 0.1, -0.8).normalize()).unwrap();
        let mut rng = FromRng(StdRng::seed_from_u64(7));
        let mut counts = [0usize; BINS];

        for _ in 0..SAMPLES {
            let local = hemisphere
                .basis()
                .to_local(hemisphere.sample(&mut rng).unwrap());
            let turns = (local.y.atan2(local.x) / (2.0 * PI) + 1.0) % 1.0;
            let bin = ((turns * BINS as f32) as usize).min(BINS - 1);
            counts[bin] += 1;
        }

        let expected = SAMPLES / BINS;
        for (bin, &count) in counts.iter().enumerate() {
            assert!(
                count > expected * 95 / 100 && count < expected * 105 / 100,
                "Azimuth bin {} has {} samples, expected about {}, all bins: {:?}",
                bin,
                count,
                expected,
                counts
            );
        }
    }

    #[test]
    fn test_same_seed_gives_identical_directions() {
        let normal = Vec3::new(-0.3, 0.1, -0.8).normalize();

        let first = sample_batch(normal, 256, &mut FromRng(StdRng::seed_from_u64(99))).unwrap();
        let second = sample_batch(normal, 256, &mut FromRng(StdRng::seed_from_u64(99))).unwrap();

        assert_eq!(256, first.len());
        assert_eq!(first, second);
    }

    #[test]
    fn test_exhausted_source_is_propagated() {
        let mut replay = Replay::new(vec![0.5]);

        assert_eq!(
            Err(SamplingError::RandomSourceExhausted { consumed: 1 }),
            sample_hemisphere(Vec3::unit_y(), &mut replay)
        );
    }

    #[test]
    fn test_invalid_normal_is_reported_before_drawing() {
        let mut replay = Replay::new(vec![0.5, 0.5]);

        assert!(sample_hemisphere(Vec3::new(0.0, 0.0, 0.0), &mut replay).is_err());
        assert_eq!(0, replay.consumed());
    }

    #[test]
    fn test_pdf() {
        let hemisphere = Hemisphere::new(Vec3::unit_y()).unwrap();

        assert_abs_diff_eq!(
            1.0 / (2.0 * PI),
            hemisphere.pdf(Vec3::new(0.6, 0.8, 0.0)),
            epsilon = 1e-7
        );
        assert_eq!(0.0, hemisphere.pdf(-Vec3::unit_y()));
    }

    #[test]
    fn test_pdf_on_the_base_plane() {
        let hemisphere = Hemisphere::new(Vec3::unit_y()).unwrap();

        assert!(hemisphere.contains(Vec3::new(1.0, -5e-7, 0.0)));
        assert_eq!(UNIFORM_HEMISPHERE_PDF, hemisphere.pdf(Vec3::new(1.0, -5e-7, 0.0)));
        assert!(!hemisphere.contains(Vec3::new(1.0, -1e-3, 0.0)));
        assert_eq!(0.0, hemisphere.pdf(Vec3::new(1.0, -1e-3, 0.0)));
    }

    #[test]
    fn test_values_outside_unit_interval_are_refused() {
        let refused = [
            (vec![-0.5, 0.25], -0.5),
            (vec![1.0, 0.25], 1.0),
            (vec![1.5, 0.25], 1.5),
            (vec![0.25, 1.0], 1.0),
            (vec![0.25, -1e-9], -1e-9),
        ];

        for &(ref values, value) in refused.iter() {
            let mut replay = Replay::new(values.clone());
            assert_eq!(
                Err(SamplingError::RandomValueOutOfRange { value }),
                sample_hemisphere(Vec3::unit_y(), &mut replay)
            );
            assert_eq!(2, replay.consumed());
        }

        let mut nan = Replay::new(vec![::std::f32::NAN, 0.5]);
        match sample_hemisphere(Vec3::unit_y(), &mut nan) {
            Err(SamplingError::RandomValueOutOfRange { value }) => assert!(value.is_nan()),
            other => panic!("Expected NaN to be refused, got {:?}", other),
        }
    }
}
