//! Uniform sampling of directions on the hemisphere around a surface normal,
//! e.g. for ambient occlusion or diffuse bounces in a path tracer:
//! * building a right-handed [`OrthonormalBasis`](struct.OrthonormalBasis.html) around a normal with [`build_basis`](fn.build_basis.html),
//! * drawing directions uniformly with respect to solid angle with a [`Hemisphere`](struct.Hemisphere.html), [`sample_hemisphere`](fn.sample_hemisphere.html) or the axis aligned [`UnitHemisphere`](enum.UnitHemisphere.html),
//! * streams of directions with [`Directions`](sequence/struct.Directions.html) and [`sample_batch`](sequence/fn.sample_batch.html).
//!
//! Randomness is always passed in as a [`RandomSource`](trait.RandomSource.html), wrap a
//! `rand` generator with [`FromRng`](struct.FromRng.html) for the common case:
//!
//! ```
//! extern crate hemisphere_sampling;
//! extern crate rand;
//!
//! use hemisphere_sampling::{FromRng, Hemisphere, Vec3};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! # fn main() {
//! let mut rng = FromRng(StdRng::seed_from_u64(1));
//! let hemisphere = Hemisphere::new(Vec3::new(0.0, 1.0, 0.0)).unwrap();
//! let dir = hemisphere.sample(&mut rng).unwrap();
//! assert!(dir.y >= 0.0);
//! # }
//! ```

#[cfg(test)]
#[macro_use]
extern crate approx;
extern crate cgmath;
extern crate rand;
#[macro_use]
extern crate tracing;

mod basis;
mod error;
mod geom;
mod hemisphere;
mod random;
mod uniform;
mod unit;
pub mod sequence;

pub use self::basis::{build_basis, NormalPolicy, OrthonormalBasis, DEGENERATE_EPSILON,
                      UNIT_TOLERANCE, UP_SWITCH_THRESHOLD};
pub use self::error::{InvalidNormalReason, SamplingError};
pub use self::geom::{prelude, Vec3};
pub use self::hemisphere::{local_direction, sample_hemisphere, sample_local, to_world,
                           Hemisphere, HEMISPHERE_TOLERANCE, UNIFORM_HEMISPHERE_PDF};
pub use self::random::{FromRng, RandomSource, Replay};
pub use self::uniform::Uniform;
pub use self::unit::*;
pub use self::sequence::{sample_batch, Directions};
