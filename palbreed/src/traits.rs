use serde::{Deserialize, Serialize};

use std::fmt;

/// The maximum number of traits a single pal can carry.
pub const MAX_TOTAL_TRAITS: usize = 4;

/// An inheritable passive trait. Identity is the trait name.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Trait(String);

impl Trait {
    pub fn new(name: impl Into<String>) -> Trait {
        Trait(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An unordered set of traits on a pal or candidate.
///
/// Named traits are kept sorted and deduplicated. Slots whose
/// concrete trait is unknown or irrelevant (the random traits a
/// wild pal or a bred child may carry) are tracked as a plain
/// count: a random slot never equals any named trait, and two
/// sets with the same named traits and the same number of random
/// slots describe the same candidate. This makes `TraitSet`
/// directly usable as (part of) a deduplication key.
///
/// # Examples
/// ```
/// use palbreed::{Trait, TraitSet};
///
/// let mut traits = TraitSet::of([Trait::new("Swift"), Trait::new("Runner")]);
/// traits.insert(Trait::new("Swift"));
/// traits.add_random(2);
///
/// assert_eq!(traits.named().len(), 2);
/// assert_eq!(traits.random_count(), 2);
/// assert_eq!(traits.len(), 4);
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TraitSet {
    named: Vec<Trait>,
    random: usize,
}

impl TraitSet {
    pub fn new() -> TraitSet {
        TraitSet::default()
    }

    /// Builds a set from named traits, sorting and deduplicating.
    pub fn of(named: impl IntoIterator<Item = Trait>) -> TraitSet {
        let mut set = TraitSet::new();
        for t in named {
            set.insert(t);
        }
        set
    }

    /// Builds a set of `count` random slots and no named traits.
    pub fn random(count: usize) -> TraitSet {
        TraitSet {
            named: Vec::new(),
            random: count,
        }
    }

    pub fn insert(&mut self, t: Trait) {
        if let Err(pos) = self.named.binary_search(&t) {
            self.named.insert(pos, t);
        }
    }

    pub fn add_random(&mut self, count: usize) {
        self.random += count;
    }

    /// The named traits, sorted by name.
    pub fn named(&self) -> &[Trait] {
        &self.named
    }

    pub fn random_count(&self) -> usize {
        self.random
    }

    /// Total trait count, random slots included.
    pub fn len(&self) -> usize {
        self.named.len() + self.random
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.random == 0
    }

    pub fn contains(&self, t: &Trait) -> bool {
        self.named.binary_search(t).is_ok()
    }

    /// Whether every named trait of `other` is present here.
    /// Random slots never satisfy a named requirement.
    ///
    /// # Examples
    /// ```
    /// use palbreed::{Trait, TraitSet};
    ///
    /// let desired = TraitSet::of([Trait::new("Swift")]);
    /// let mut have = TraitSet::random(3);
    /// assert!(!have.is_named_superset_of(&desired));
    ///
    /// have.insert(Trait::new("Swift"));
    /// assert!(have.is_named_superset_of(&desired));
    /// ```
    pub fn is_named_superset_of(&self, other: &TraitSet) -> bool {
        other.named.iter().all(|t| self.contains(t))
    }

    /// The combined trait pool of two parents: the union of the
    /// named traits, plus every random slot from either side
    /// (random slots are pairwise distinct, so they accumulate).
    pub fn union(&self, other: &TraitSet) -> TraitSet {
        let mut combined = self.clone();
        for t in &other.named {
            combined.insert(t.clone());
        }
        combined.random += other.random;
        combined
    }

    /// The named traits shared with `other`. The result carries
    /// no random slots.
    pub fn intersection_named(&self, other: &TraitSet) -> TraitSet {
        TraitSet {
            named: self
                .named
                .iter()
                .filter(|t| other.contains(t))
                .cloned()
                .collect(),
            random: 0,
        }
    }

    /// How many traits here are not wanted by `desired`: named
    /// traits outside the desired set, plus all random slots.
    pub fn irrelevant_count(&self, desired: &TraitSet) -> usize {
        self.named.iter().filter(|t| !desired.contains(t)).count() + self.random
    }
}

impl FromIterator<Trait> for TraitSet {
    fn from_iter<I: IntoIterator<Item = Trait>>(iter: I) -> TraitSet {
        TraitSet::of(iter)
    }
}

impl fmt::Display for TraitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        let mut first = true;
        for t in &self.named {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", t)?;
            first = false;
        }
        if self.random > 0 {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "+{} random", self.random)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(names: &[&str]) -> TraitSet {
        TraitSet::of(names.iter().map(|n| Trait::new(*n)))
    }

    #[test]
    fn insert_deduplicates_and_sorts() {
        let set = named(&["Swift", "Runner", "Swift"]);
        assert_eq!(set.named().len(), 2);
        assert_eq!(set.named()[0].name(), "Runner");
        assert_eq!(set.named()[1].name(), "Swift");
    }

    #[test]
    fn random_slots_accumulate_in_union() {
        let a = TraitSet::random(2);
        let mut b = named(&["Swift"]);
        b.add_random(1);

        let pool = a.union(&b);
        assert_eq!(pool.random_count(), 3);
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn union_deduplicates_named() {
        let a = named(&["Swift", "Runner"]);
        let b = named(&["Runner", "Lucky"]);
        let pool = a.union(&b);
        assert_eq!(pool.named().len(), 3);
    }

    #[test]
    fn intersection_ignores_random() {
        let mut a = named(&["Swift", "Runner"]);
        a.add_random(2);
        let b = named(&["Runner", "Lucky"]);
        let shared = a.intersection_named(&b);
        assert_eq!(shared, named(&["Runner"]));
    }

    #[test]
    fn irrelevant_count_includes_random() {
        let mut have = named(&["Swift", "Brave"]);
        have.add_random(1);
        let desired = named(&["Swift"]);
        assert_eq!(have.irrelevant_count(&desired), 2);
    }

    #[test]
    fn identical_sets_are_equal_keys() {
        let mut a = named(&["Swift"]);
        a.add_random(2);
        let mut b = TraitSet::random(2);
        b.insert(Trait::new("Swift"));
        assert_eq!(a, b);
    }
}
