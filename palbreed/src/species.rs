use serde::{Deserialize, Serialize};

use std::fmt;

/// Pal identifier. Pals are identified by their
/// paldex number together with a variant flag,
/// since elemental variants (e.g. the ignis form
/// of a base pal) share a paldex number with
/// their base form but breed differently.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PalId {
    pub dex_no: u16,
    pub is_variant: bool,
}

impl PalId {
    pub fn base(dex_no: u16) -> PalId {
        PalId {
            dex_no,
            is_variant: false,
        }
    }

    pub fn variant(dex_no: u16) -> PalId {
        PalId {
            dex_no,
            is_variant: true,
        }
    }
}

impl fmt::Display for PalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_variant {
            write!(f, "{}.1", self.dex_no)
        } else {
            write!(f, "{}", self.dex_no)
        }
    }
}

/// A catalog entry for a single pal species.
///
/// The catalog itself is static external data; a `Pal`
/// carries only what the solver needs, which is its
/// identity (capture effort is monotone in the paldex
/// number, see [`GameConfig::capture_effort`]) and a
/// display name.
///
/// [`GameConfig::capture_effort`]: crate::GameConfig::capture_effort
///
/// # Examples
/// ```
/// use palbreed::{Pal, PalId};
///
/// let pal = Pal::new(PalId::base(1), "Lamball");
/// assert_eq!(pal.id.dex_no, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pal {
    pub id: PalId,
    pub name: String,
}

impl Pal {
    pub fn new(id: PalId, name: impl Into<String>) -> Pal {
        Pal {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Pal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
