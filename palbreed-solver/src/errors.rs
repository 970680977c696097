use std::error::Error;
use std::fmt;

/// An error type for queries rejected before any search work
/// begins. A search that finds nothing within its constraints is
/// not an error; it returns an empty solution list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The query wants more traits than a single pal can carry.
    TooManyDesiredTraits { desired: usize, max: usize },
    /// The query's desired set contains random/unknown slots,
    /// which no concrete pal can be checked against.
    RandomDesiredTrait,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyDesiredTraits { desired, max } => write!(
                f,
                "query wants {} traits but a pal can carry at most {}",
                desired, max
            ),
            Self::RandomDesiredTrait => {
                write!(f, "query's desired traits must all be named")
            }
        }
    }
}

impl Error for SolverError {}
