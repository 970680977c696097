use palbreed::{GameConfig, Gender, Pal, PalId, PalInstance, TraitSet};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// A pal the player already owns. Zero effort.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedPalReference {
    instance: Arc<PalInstance>,
}

impl OwnedPalReference {
    pub fn new(instance: Arc<PalInstance>) -> OwnedPalReference {
        OwnedPalReference { instance }
    }

    pub fn instance(&self) -> &Arc<PalInstance> {
        &self.instance
    }
}

/// A wild capture of some species, assumed to carry a number of
/// random traits that are irrelevant to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct WildPalReference {
    pal: PalId,
    gender: Gender,
    traits: TraitSet,
    effort: Duration,
}

impl WildPalReference {
    /// Effort is the species' capture time, scaled up by the odds
    /// of a wild individual carrying at most `irrelevant_traits`
    /// random traits (catch and release until one does).
    pub fn new(config: &GameConfig, pal: &Pal, irrelevant_traits: usize) -> WildPalReference {
        let at_most = config.tables.wild_at_most
            [irrelevant_traits.min(config.tables.wild_at_most.len() - 1)];
        let effort =
            Duration::from_secs_f64(config.capture_effort(pal).as_secs_f64() / f64::from(at_most));
        WildPalReference {
            pal: pal.id,
            gender: Gender::Wildcard,
            traits: TraitSet::random(irrelevant_traits),
            effort,
        }
    }
}

/// A child bred from two other candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct BredPalReference {
    pal: PalId,
    gender: Gender,
    parent1: Arc<PalReference>,
    parent2: Arc<PalReference>,
    traits: TraitSet,
    probability: f32,
    // Expected time spent on this breeding step alone; total
    // effort adds the parents'.
    self_effort: Duration,
    effort: Duration,
}

impl BredPalReference {
    /// `probability` is the per-attempt chance of a child whose
    /// traits satisfy this reference, and must be positive:
    /// zero-probability candidates are never constructed.
    pub fn new(
        config: &GameConfig,
        pal: PalId,
        parent1: Arc<PalReference>,
        parent2: Arc<PalReference>,
        traits: TraitSet,
        probability: f32,
    ) -> BredPalReference {
        debug_assert!(probability > 0.0 && probability <= 1.0);
        let self_effort =
            Duration::from_secs_f64(config.avg_breeding_time().as_secs_f64() / f64::from(probability));
        let effort = self_effort + parent1.effort() + parent2.effort();
        BredPalReference {
            pal,
            gender: Gender::Wildcard,
            parent1,
            parent2,
            traits,
            probability,
            self_effort,
            effort,
        }
    }

    pub fn parents(&self) -> (&Arc<PalReference>, &Arc<PalReference>) {
        (&self.parent1, &self.parent2)
    }

    pub fn probability(&self) -> f32 {
        self.probability
    }
}

/// One hypothesized way of obtaining an individual: it is either
/// already owned, caught wild, or bred from two other candidates.
///
/// This is the currency of the search. References are immutable
/// once constructed and parents are shared by `Arc`: the same
/// candidate may appear as a parent in many derivations without
/// its subtree ever being cloned. A returned reference therefore
/// exposes its complete derivation, and a renderer can walk the
/// parent links without re-running the solver.
///
/// # Examples
/// ```
/// use palbreed::{GameConfig, Pal, PalId};
/// use palbreed_solver::PalReference;
///
/// let config = GameConfig::standard();
/// let pal = Pal::new(PalId::base(7), "Foxparks");
/// let wild = PalReference::wild(&config, &pal, 0);
///
/// assert_eq!(wild.pal(), pal.id);
/// assert_eq!(wild.wild_participants(), 1);
/// assert!(wild.effort() > std::time::Duration::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PalReference {
    Owned(OwnedPalReference),
    Wild(WildPalReference),
    Bred(BredPalReference),
}

impl PalReference {
    pub fn owned(instance: Arc<PalInstance>) -> PalReference {
        PalReference::Owned(OwnedPalReference::new(instance))
    }

    pub fn wild(config: &GameConfig, pal: &Pal, irrelevant_traits: usize) -> PalReference {
        PalReference::Wild(WildPalReference::new(config, pal, irrelevant_traits))
    }

    pub fn pal(&self) -> PalId {
        match self {
            PalReference::Owned(o) => o.instance.pal,
            PalReference::Wild(w) => w.pal,
            PalReference::Bred(b) => b.pal,
        }
    }

    pub fn gender(&self) -> Gender {
        match self {
            PalReference::Owned(o) => o.instance.gender,
            PalReference::Wild(w) => w.gender,
            PalReference::Bred(b) => b.gender,
        }
    }

    pub fn traits(&self) -> &TraitSet {
        match self {
            PalReference::Owned(o) => &o.instance.traits,
            PalReference::Wild(w) => &w.traits,
            PalReference::Bred(b) => &b.traits,
        }
    }

    /// Expected real-world time to realize this candidate,
    /// retries included.
    pub fn effort(&self) -> Duration {
        match self {
            PalReference::Owned(_) => Duration::ZERO,
            PalReference::Wild(w) => w.effort,
            PalReference::Bred(b) => b.effort,
        }
    }

    /// Number of wild captures in this candidate's derivation.
    pub fn wild_participants(&self) -> usize {
        match self {
            PalReference::Owned(_) => 0,
            PalReference::Wild(_) => 1,
            PalReference::Bred(b) => {
                b.parent1.wild_participants() + b.parent2.wild_participants()
            }
        }
    }

    /// Number of breeding steps in this candidate's derivation,
    /// itself included if bred.
    pub fn bred_participants(&self) -> usize {
        match self {
            PalReference::Owned(_) | PalReference::Wild(_) => 0,
            PalReference::Bred(b) => {
                1 + b.parent1.bred_participants() + b.parent2.bred_participants()
            }
        }
    }

    /// Returns this candidate pinned to the given gender.
    ///
    /// Pinning a concrete gender on a `Wildcard` candidate costs
    /// effort under the uniform 50/50 gender model: a wild capture
    /// takes twice as many attempts, and a bred child halves its
    /// per-attempt probability. Pinning `OppositeWildcard` only
    /// tags the candidate and is free, and a candidate whose
    /// gender is already concrete is returned unchanged.
    pub fn with_guaranteed_gender(&self, gender: Gender) -> PalReference {
        if self.gender().is_concrete() {
            return self.clone();
        }
        match self {
            PalReference::Owned(o) => PalReference::Owned(o.clone()),
            PalReference::Wild(w) => {
                let mut pinned = w.clone();
                pinned.gender = gender;
                if gender.is_concrete() {
                    pinned.effort = w.effort * 2;
                }
                PalReference::Wild(pinned)
            }
            PalReference::Bred(b) => {
                let mut pinned = b.clone();
                pinned.gender = gender;
                if gender.is_concrete() {
                    pinned.probability = b.probability / 2.0;
                    pinned.self_effort = b.self_effort * 2;
                    pinned.effort =
                        pinned.self_effort + b.parent1.effort() + b.parent2.effort();
                }
                PalReference::Bred(pinned)
            }
        }
    }
}

impl fmt::Display for PalReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PalReference::Owned(o) => write!(f, "owned {}", o.instance),
            PalReference::Wild(w) => {
                write!(f, "wild {} {} {}", w.gender, w.pal, w.traits)
            }
            PalReference::Bred(b) => write!(
                f,
                "bred {} {} {} (p={:.3}) from {} x {}",
                b.gender,
                b.pal,
                b.traits,
                b.probability,
                b.parent1.pal(),
                b.parent2.pal(),
            ),
        }
    }
}
