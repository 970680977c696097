use palbreed::{Gender, PalId, PalInstance, Trait, TraitSet};

use ahash::RandomState;

use std::collections::HashMap;
use std::sync::Arc;

/// Reduces the raw owned inventory to a minimal representative
/// set for the search.
///
/// For every (species, gender) present, instances are bucketed
/// by the largest subset of `desired` they carry (the empty
/// subset bucket included), and each bucket keeps the instance
/// with the fewest total traits. Two lamballs that both carry
/// "Runner" and nothing else useful are interchangeable to the
/// search, so only the leaner one is worth pairing.
///
/// The result is sorted, so downstream work is deterministic.
///
/// # Examples
/// ```
/// use palbreed::{
///     Gender, LocationType, PalId, PalInstance, PalLocation, Trait, TraitSet,
/// };
/// use palbreed_solver::relevant_instances;
/// use std::sync::Arc;
///
/// let at = |index| PalLocation { kind: LocationType::Palbox, index };
/// let lamball = PalId::base(1);
/// let desired = TraitSet::of([Trait::new("Runner")]);
///
/// let owned = vec![
///     // Carries the wanted trait plus baggage...
///     Arc::new(PalInstance {
///         pal: lamball,
///         gender: Gender::Male,
///         traits: TraitSet::of([Trait::new("Runner"), Trait::new("Clumsy")]),
///         location: at(0),
///     }),
///     // ...and a leaner copy that carries just the wanted trait.
///     Arc::new(PalInstance {
///         pal: lamball,
///         gender: Gender::Male,
///         traits: TraitSet::of([Trait::new("Runner")]),
///         location: at(1),
///     }),
/// ];
///
/// let kept = relevant_instances(&owned, &desired);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].location, at(1));
/// ```
pub fn relevant_instances(
    available: &[Arc<PalInstance>],
    desired: &TraitSet,
) -> Vec<Arc<PalInstance>> {
    let desired_named = desired.named();

    let mut groups: HashMap<(PalId, Gender), Vec<&Arc<PalInstance>>, RandomState> =
        HashMap::default();
    for instance in available {
        groups
            .entry((instance.pal, instance.gender))
            .or_default()
            .push(instance);
    }

    let mut kept: Vec<Arc<PalInstance>> = Vec::new();
    for group in groups.values() {
        // Bucket by the best-matching desired subset, as a bitmask
        // over the (at most four) desired traits.
        let mut best_by_subset: HashMap<u32, &Arc<PalInstance>, RandomState> =
            HashMap::default();
        for instance in group {
            let subset = best_matching_subset(desired_named, &instance.traits);
            best_by_subset
                .entry(subset)
                .and_modify(|current| {
                    if instance.traits.len() < current.traits.len() {
                        *current = instance;
                    }
                })
                .or_insert(instance);
        }
        kept.extend(best_by_subset.into_values().map(Arc::clone));
    }

    kept.sort_by(|a, b| {
        (a.pal, a.gender, &a.traits, a.location.index).cmp(&(
            b.pal,
            b.gender,
            &b.traits,
            b.location.index,
        ))
    });
    kept
}

// The largest subset of the desired traits fully carried by
// `traits`; ties go to the numerically larger mask so the choice
// is stable. Mask 0 (no overlap) always matches.
fn best_matching_subset(desired_named: &[Trait], traits: &TraitSet) -> u32 {
    let mut best = 0u32;
    for mask in 1..(1u32 << desired_named.len()) {
        if mask.count_ones() < best.count_ones() {
            continue;
        }
        let contained = desired_named
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .all(|(_, t)| traits.contains(t));
        if contained && (mask.count_ones() > best.count_ones() || mask > best) {
            best = mask;
        }
    }
    best
}
