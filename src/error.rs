use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Why a normal was refused by the basis builder.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InvalidNormalReason {
    NonFinite,
    ZeroLength,
    NotUnit { length: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SamplingError {
    /// The normal handed to the basis builder violates its precondition.
    InvalidNormal {
        normal: [f32; 3],
        reason: InvalidNormalReason,
    },
    /// A vector that was about to be normalized had (almost) no length.
    Degenerate { stage: &'static str, length: f32 },
    /// A random source handed out a value outside `[0, 1)`.
    RandomValueOutOfRange { value: f32 },
    /// A finite random source ran out of values after handing out `consumed`.
    RandomSourceExhausted { consumed: usize },
    /// Another thread panicked while holding a shared random source.
    RandomSourcePoisoned,
}

impl Error for SamplingError {}

impl Display for InvalidNormalReason {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            InvalidNormalReason::NonFinite => write!(f, "has a NaN or infinite component"),
            InvalidNormalReason::ZeroLength => write!(f, "has zero length"),
            InvalidNormalReason::NotUnit { length } => {
                write!(f, "is not unit length (length {})", length)
            }
        }
    }
}

impl Display for SamplingError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            SamplingError::InvalidNormal { normal, reason } => write!(
                f,
                "Normal ({}, {}, {}) {}",
                normal[0], normal[1], normal[2], reason
            ),
            SamplingError::Degenerate { stage, length } => write!(
                f,
                "Degenerate {} with length {} cannot be normalized",
                stage, length
            ),
            SamplingError::RandomValueOutOfRange { value } => write!(
                f,
                "Random value {} is outside [0, 1)",
                value
            ),
            SamplingError::RandomSourceExhausted { consumed } => write!(
                f,
                "Random source exhausted after {} values",
                consumed
            ),
            SamplingError::RandomSourcePoisoned => {
                write!(f, "Shared random source is poisoned")
            }
        }
    }
}
