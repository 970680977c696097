use crate::{Gender, PalId, TraitSet};

use serde::{Deserialize, Serialize};

use std::fmt;

/// Where an owned pal is stored in-game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationType {
    Party,
    Palbox,
    Base,
}

/// Provenance of an owned pal: container plus slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PalLocation {
    pub kind: LocationType,
    pub index: u32,
}

impl fmt::Display for PalLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            LocationType::Party => "party",
            LocationType::Palbox => "palbox",
            LocationType::Base => "base",
        };
        write!(f, "{}#{}", kind, self.index)
    }
}

/// A pal the player already owns, as produced by an external
/// save decoder. Immutable input to the solver: fixed species,
/// gender, trait set and provenance.
///
/// # Examples
/// ```
/// use palbreed::{
///     Gender, LocationType, PalId, PalInstance, PalLocation, Trait, TraitSet,
/// };
///
/// let instance = PalInstance {
///     pal: PalId::base(1),
///     gender: Gender::Female,
///     traits: TraitSet::of([Trait::new("Swift")]),
///     location: PalLocation { kind: LocationType::Palbox, index: 3 },
/// };
/// assert_eq!(instance.traits.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalInstance {
    pub pal: PalId,
    pub gender: Gender,
    pub traits: TraitSet,
    pub location: PalLocation,
}

impl fmt::Display for PalInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pal {} at {} with traits {}",
            self.gender, self.pal, self.location, self.traits
        )
    }
}
