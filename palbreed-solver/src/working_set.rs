use crate::PalReference;

use palbreed::{Gender, PalId, TraitSet};

use ahash::RandomState;

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

/// The class a candidate competes in: species, gender and the
/// canonical trait set. At most one candidate per class is ever
/// retained.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CandidateKey {
    pal: PalId,
    gender: Gender,
    traits: TraitSet,
}

impl CandidateKey {
    fn of(reference: &PalReference) -> CandidateKey {
        CandidateKey {
            pal: reference.pal(),
            gender: reference.gender(),
            traits: reference.traits().clone(),
        }
    }
}

/// The deduplicating frontier of the search: the set of
/// best-known candidates, one per (species, gender, trait-set)
/// class, lowest effort winning.
///
/// Dropping every dominated candidate is what keeps the pairing
/// combinatorics bounded across rounds; it is the sole pruning
/// mechanism of the search.
///
/// # Examples
/// ```
/// use palbreed::{GameConfig, Pal, PalId};
/// use palbreed_solver::{PalReference, WorkingSet};
///
/// let config = GameConfig::standard();
/// let pal = Pal::new(PalId::base(4), "Fuack");
///
/// let mut set = WorkingSet::new();
/// let changed = set.add_from([
///     PalReference::wild(&config, &pal, 0),
///     PalReference::wild(&config, &pal, 0),
/// ]);
/// // Both candidates share a class; one survives.
/// assert_eq!(changed, 1);
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WorkingSet {
    content: HashMap<CandidateKey, Arc<PalReference>, RandomState>,
}

impl WorkingSet {
    pub fn new() -> WorkingSet {
        WorkingSet::default()
    }

    pub fn from_initial(initial: impl IntoIterator<Item = PalReference>) -> WorkingSet {
        let mut set = WorkingSet::new();
        set.add_from(initial);
        set
    }

    /// Merges a batch of candidates, returning the number of
    /// classes that gained a first candidate or a strictly
    /// better one. A zero return means the batch taught the
    /// frontier nothing, which the solver uses to detect
    /// convergence.
    pub fn add_from(&mut self, new_refs: impl IntoIterator<Item = PalReference>) -> usize {
        let mut changed = 0;
        for reference in Self::prune_batch(new_refs) {
            match self.content.entry(CandidateKey::of(&reference)) {
                Entry::Occupied(mut existing) => {
                    if reference.effort() < existing.get().effort() {
                        existing.insert(Arc::new(reference));
                        changed += 1;
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(Arc::new(reference));
                    changed += 1;
                }
            }
        }
        changed
    }

    // Reduces an incoming batch to its best member per class, so
    // a class is counted at most once per merge.
    fn prune_batch(
        refs: impl IntoIterator<Item = PalReference>,
    ) -> impl Iterator<Item = PalReference> {
        let mut best: HashMap<CandidateKey, PalReference, RandomState> = HashMap::default();
        for reference in refs {
            match best.entry(CandidateKey::of(&reference)) {
                Entry::Occupied(mut existing) => {
                    if reference.effort() < existing.get().effort() {
                        existing.insert(reference);
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(reference);
                }
            }
        }
        best.into_values()
    }

    pub fn members(&self) -> impl Iterator<Item = &Arc<PalReference>> {
        self.content.values()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
