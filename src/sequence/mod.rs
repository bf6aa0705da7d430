//! Streams of directions drawn against one hemisphere.

mod directions;

pub use self::directions::{sample_batch, Directions};
