use serde::{Deserialize, Serialize};

use std::fmt;

/// The gender of a pal, or of a candidate whose gender
/// has not been pinned down yet.
///
/// `Wildcard` marks a candidate that can be realized with
/// either concrete gender (a wild capture, or a bred child
/// before its gender matters). `OppositeWildcard` is
/// contextual: it marks the partner of a `Wildcard`, and is
/// resolved to whatever gender is opposite the one the
/// `Wildcard` ends up with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Gender {
    Male,
    Female,
    Wildcard,
    OppositeWildcard,
}

impl Gender {
    /// Returns the gender a partner must have.
    ///
    /// # Examples
    /// ```
    /// use palbreed::Gender;
    ///
    /// assert_eq!(Gender::Male.opposite(), Gender::Female);
    /// assert_eq!(Gender::Wildcard.opposite(), Gender::OppositeWildcard);
    /// ```
    pub fn opposite(self) -> Gender {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
            Gender::Wildcard => Gender::OppositeWildcard,
            Gender::OppositeWildcard => Gender::Wildcard,
        }
    }

    pub fn is_concrete(self) -> bool {
        matches!(self, Gender::Male | Gender::Female)
    }

    /// Whether two parents with these genders can be paired.
    ///
    /// Concrete genders must be opposites. A `Wildcard` can be
    /// paired with anything. An `OppositeWildcard` is bound to
    /// a `Wildcard` partner and is compatible with nothing else.
    ///
    /// # Examples
    /// ```
    /// use palbreed::Gender;
    ///
    /// assert!(Gender::Male.is_compatible_with(Gender::Female));
    /// assert!(!Gender::Male.is_compatible_with(Gender::Male));
    /// assert!(Gender::Wildcard.is_compatible_with(Gender::OppositeWildcard));
    /// assert!(!Gender::OppositeWildcard.is_compatible_with(Gender::Female));
    /// ```
    pub fn is_compatible_with(self, other: Gender) -> bool {
        match (self, other) {
            (Gender::Male, Gender::Female) | (Gender::Female, Gender::Male) => true,
            (Gender::Wildcard, _) | (_, Gender::Wildcard) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Wildcard => write!(f, "any"),
            Gender::OppositeWildcard => write!(f, "opposite"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_compatibility() {
        assert!(Gender::Female.is_compatible_with(Gender::Male));
        assert!(!Gender::Female.is_compatible_with(Gender::Female));
        assert!(!Gender::Male.is_compatible_with(Gender::Male));
    }

    #[test]
    fn wildcard_compatibility() {
        for g in [
            Gender::Male,
            Gender::Female,
            Gender::Wildcard,
            Gender::OppositeWildcard,
        ] {
            assert!(Gender::Wildcard.is_compatible_with(g));
            assert!(g.is_compatible_with(Gender::Wildcard));
        }
        assert!(!Gender::OppositeWildcard.is_compatible_with(Gender::OppositeWildcard));
    }

    #[test]
    fn opposites_are_involutive() {
        for g in [
            Gender::Male,
            Gender::Female,
            Gender::Wildcard,
            Gender::OppositeWildcard,
        ] {
            assert_eq!(g.opposite().opposite(), g);
        }
    }
}
