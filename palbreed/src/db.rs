use crate::{Pal, PalId};

use ahash::RandomState;

use std::collections::HashMap;

fn pair_key(a: PalId, b: PalId) -> (PalId, PalId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// The static breeding catalog: every known pal, the
/// breeding-compatibility map `(parent, parent) -> child`,
/// and the minimum-breeding-distance matrix derived from it.
///
/// The catalog is loaded once from external data and never
/// mutated. The distance matrix answers "at least how many
/// breeding steps separate species A from species B", which
/// the solver uses to discard parents that cannot reach the
/// target within the step budget.
///
/// # Examples
/// ```
/// use palbreed::{Pal, PalDb, PalId};
///
/// let a = PalId::base(1);
/// let b = PalId::base(2);
/// let c = PalId::base(3);
/// let db = PalDb::new(
///     vec![Pal::new(a, "A"), Pal::new(b, "B"), Pal::new(c, "C")],
///     [(a, b, c)],
/// );
///
/// assert_eq!(db.child_of(b, a), Some(c));
/// assert_eq!(db.min_breeding_steps(a, c), Some(1));
/// assert_eq!(db.min_breeding_steps(c, c), Some(0));
/// assert_eq!(db.min_breeding_steps(c, a), None);
/// ```
#[derive(Debug, Clone)]
pub struct PalDb {
    pals: Vec<Pal>,
    by_id: HashMap<PalId, usize, RandomState>,
    child_by_parents: HashMap<(PalId, PalId), PalId, RandomState>,
    min_steps: HashMap<(PalId, PalId), u32, RandomState>,
}

impl PalDb {
    /// Builds a catalog from the pal list and the compatibility
    /// triples `(parent, parent, child)`. Parent order within a
    /// triple is irrelevant. The minimum-breeding-distance matrix
    /// is computed here by relaxation over the compatibility map.
    pub fn new(
        pals: Vec<Pal>,
        pairs: impl IntoIterator<Item = (PalId, PalId, PalId)>,
    ) -> PalDb {
        let by_id = pals
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id, i))
            .collect();
        let child_by_parents: HashMap<_, _, RandomState> = pairs
            .into_iter()
            .map(|(a, b, child)| (pair_key(a, b), child))
            .collect();
        let min_steps = Self::compute_min_steps(&pals, &child_by_parents);
        PalDb {
            pals,
            by_id,
            child_by_parents,
            min_steps,
        }
    }

    // Backwards relaxation from each target: the target is 0 steps
    // from itself, and a parent of anything d steps away is at most
    // d + 1 steps away. Repeats until no distance improves.
    fn compute_min_steps(
        pals: &[Pal],
        child_by_parents: &HashMap<(PalId, PalId), PalId, RandomState>,
    ) -> HashMap<(PalId, PalId), u32, RandomState> {
        let mut matrix = HashMap::default();
        for target in pals {
            let mut dist: HashMap<PalId, u32, RandomState> = HashMap::default();
            dist.insert(target.id, 0);

            let mut changed = true;
            while changed {
                changed = false;
                for (&(a, b), &child) in child_by_parents {
                    let d = match dist.get(&child) {
                        Some(&d) => d,
                        None => continue,
                    };
                    for parent in [a, b] {
                        let entry = dist.entry(parent).or_insert(u32::MAX);
                        if *entry > d + 1 {
                            *entry = d + 1;
                            changed = true;
                        }
                    }
                }
            }

            for (from, d) in dist {
                matrix.insert((from, target.id), d);
            }
        }
        matrix
    }

    pub fn pals(&self) -> impl Iterator<Item = &Pal> {
        self.pals.iter()
    }

    pub fn pal(&self, id: PalId) -> Option<&Pal> {
        self.by_id.get(&id).map(|&i| &self.pals[i])
    }

    /// The child species bred from the given parents, in either
    /// order. `None` if the parents are not breeding-compatible.
    pub fn child_of(&self, a: PalId, b: PalId) -> Option<PalId> {
        self.child_by_parents.get(&pair_key(a, b)).copied()
    }

    /// Minimum number of breeding steps from `from` to `to`, or
    /// `None` if `to` is unreachable from `from`.
    pub fn min_breeding_steps(&self, from: PalId, to: PalId) -> Option<u32> {
        self.min_steps.get(&(from, to)).copied()
    }
}
