use crate::logging::{RoundSnapshot, SolverObserver};
use crate::probability::inherited_trait_probability;
use crate::reference::{BredPalReference, PalReference};
use crate::selector::relevant_instances;
use crate::working_set::WorkingSet;
use crate::SolverError;

use palbreed::{
    GameConfig, Gender, PalDb, PalId, PalInstance, TraitSet, MAX_TOTAL_TRAITS,
};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use std::sync::Arc;
use std::time::Duration;

/// The query: which pal to produce, with which named traits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalSpecifier {
    pub pal: PalId,
    pub traits: TraitSet,
}

/// Search limits.
///
/// `max_effort` bounds the candidate space, not wall-clock time:
/// any candidate whose expected realization time exceeds it is
/// dropped on synthesis and can never re-enter the frontier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Number of search rounds, and the bound on breeding steps
    /// in any returned derivation.
    pub max_breeding_steps: usize,
    /// Most wild captures allowed in a single derivation.
    pub max_wild_pals: usize,
    /// Most traits outside the desired set tolerated on any
    /// participant. Values above 3 are clamped: a child never
    /// gains more than 3 random traits in one step.
    pub max_irrelevant_traits: usize,
    /// Upper bound on a candidate's expected realization time.
    pub max_effort: Duration,
}

/// Plans minimum-effort ways of obtaining a pal with a wanted
/// trait set, from owned pals and/or wild captures.
///
/// The search is an iterative deepening over "how could this
/// individual be obtained" candidates: each round pairs up every
/// compatible couple on the current frontier, synthesizes the
/// probability-weighted children they could produce, and merges
/// the survivors back into the frontier, keeping only the
/// cheapest candidate per (species, gender, trait-set) class.
/// It stops when a round teaches the frontier nothing or the
/// step budget runs out. Deterministic for identical inputs:
/// probabilities are computed, never sampled.
///
/// # Examples
/// ```
/// use palbreed::{
///     GameConfig, Gender, LocationType, Pal, PalDb, PalId, PalInstance,
///     PalLocation, Trait, TraitSet,
/// };
/// use palbreed_solver::{BreedingSolver, PalSpecifier, SolverConfig};
/// use std::time::Duration;
///
/// let lamball = PalId::base(1);
/// let cattiva = PalId::base(2);
/// let chikipi = PalId::base(3);
/// let db = PalDb::new(
///     vec![
///         Pal::new(lamball, "Lamball"),
///         Pal::new(cattiva, "Cattiva"),
///         Pal::new(chikipi, "Chikipi"),
///     ],
///     [(lamball, cattiva, chikipi)],
/// );
/// let config = GameConfig::standard();
///
/// let owned = vec![
///     PalInstance {
///         pal: lamball,
///         gender: Gender::Male,
///         traits: TraitSet::of([Trait::new("Swift")]),
///         location: PalLocation { kind: LocationType::Party, index: 0 },
///     },
///     PalInstance {
///         pal: cattiva,
///         gender: Gender::Female,
///         traits: TraitSet::of([Trait::new("Runner")]),
///         location: PalLocation { kind: LocationType::Party, index: 1 },
///     },
/// ];
///
/// let solver = BreedingSolver::new(
///     &config,
///     &db,
///     owned,
///     SolverConfig {
///         max_breeding_steps: 3,
///         max_wild_pals: 0,
///         max_irrelevant_traits: 0,
///         max_effort: Duration::from_secs(24 * 3600),
///     },
/// );
///
/// let solutions = solver
///     .solve(&PalSpecifier {
///         pal: chikipi,
///         traits: TraitSet::of([Trait::new("Runner"), Trait::new("Swift")]),
///     })
///     .unwrap();
///
/// assert!(!solutions.is_empty());
/// assert_eq!(solutions[0].pal(), chikipi);
/// assert_eq!(solutions[0].bred_participants(), 1);
/// ```
pub struct BreedingSolver<'a> {
    game_config: &'a GameConfig,
    db: &'a PalDb,
    owned: Vec<Arc<PalInstance>>,
    config: SolverConfig,
}

impl<'a> BreedingSolver<'a> {
    pub fn new(
        game_config: &'a GameConfig,
        db: &'a PalDb,
        owned: Vec<PalInstance>,
        config: SolverConfig,
    ) -> BreedingSolver<'a> {
        BreedingSolver {
            game_config,
            db,
            owned: owned.into_iter().map(Arc::new).collect(),
            config,
        }
    }

    /// Runs the search. Returns every frontier candidate that is
    /// the target species and carries all desired traits; the
    /// caller picks among them (e.g. fewest breeding steps). An
    /// empty result means no plan fits the limits, which is a
    /// normal outcome, not an error.
    pub fn solve(&self, spec: &PalSpecifier) -> Result<Vec<Arc<PalReference>>, SolverError> {
        self.solve_with(spec, &mut ())
    }

    /// Like [`solve`](Self::solve), with an observer that receives
    /// a snapshot after every round and may cancel the search
    /// between rounds (a cancelled search returns the solutions
    /// found so far).
    pub fn solve_with<O: SolverObserver>(
        &self,
        spec: &PalSpecifier,
        observer: &mut O,
    ) -> Result<Vec<Arc<PalReference>>, SolverError> {
        if spec.traits.random_count() > 0 {
            return Err(SolverError::RandomDesiredTrait);
        }
        if spec.traits.len() > MAX_TOTAL_TRAITS {
            return Err(SolverError::TooManyDesiredTraits {
                desired: spec.traits.len(),
                max: MAX_TOTAL_TRAITS,
            });
        }

        // The random-added table caps at 3 extra traits per step.
        let max_irrelevant = self.config.max_irrelevant_traits.min(MAX_TOTAL_TRAITS - 1);

        let within_steps = |pal: PalId, steps: usize| {
            self.db
                .min_breeding_steps(pal, spec.pal)
                .map_or(false, |d| d as usize <= steps)
        };

        let relevant: Vec<Arc<PalInstance>> = relevant_instances(&self.owned, &spec.traits)
            .into_iter()
            .filter(|i| i.traits.irrelevant_count(&spec.traits) <= max_irrelevant)
            .filter(|i| within_steps(i.pal, self.config.max_breeding_steps))
            .collect();

        let mut working_set = WorkingSet::from_initial(
            relevant.iter().map(|i| PalReference::owned(Arc::clone(i))),
        );

        if self.config.max_wild_pals > 0 {
            let wild: Vec<PalReference> = self
                .db
                .pals()
                .filter(|p| !relevant.iter().any(|i| i.pal == p.id))
                .filter(|p| within_steps(p.id, self.config.max_breeding_steps))
                .flat_map(|p| {
                    (0..=max_irrelevant).map(move |n| PalReference::wild(self.game_config, p, n))
                })
                .filter(|r| r.effort() <= self.config.max_effort)
                .collect();
            working_set.add_from(wild);
        }

        for round in 0..self.config.max_breeding_steps {
            if observer.cancelled() {
                break;
            }

            // Round-start snapshot, sorted so pairing order (and
            // thus any tie-breaking) is independent of the
            // frontier's randomized hash order.
            let mut snapshot: Vec<Arc<PalReference>> =
                working_set.members().cloned().collect();
            snapshot.sort_by(|a, b| {
                (a.pal(), a.gender(), a.traits(), a.effort()).cmp(&(
                    b.pal(),
                    b.gender(),
                    b.traits(),
                    b.effort(),
                ))
            });

            let remaining_rounds = self.config.max_breeding_steps - round - 1;

            // Each pair reads only the immutable snapshot; the
            // frontier is touched again only by the merge below.
            let candidates: Vec<PalReference> = (0..snapshot.len())
                .into_par_iter()
                .flat_map_iter(|i| {
                    let parent1 = &snapshot[i];
                    let mut out = Vec::new();
                    for parent2 in &snapshot[i + 1..] {
                        if !parent1.gender().is_compatible_with(parent2.gender()) {
                            continue;
                        }
                        if parent1.wild_participants() + parent2.wild_participants()
                            > self.config.max_wild_pals
                        {
                            continue;
                        }
                        let child_pal =
                            match self.db.child_of(parent1.pal(), parent2.pal()) {
                                Some(child) => child,
                                None => continue,
                            };
                        if !within_steps(child_pal, remaining_rounds) {
                            continue;
                        }
                        if parent1.bred_participants() + parent2.bred_participants()
                            >= self.config.max_breeding_steps
                        {
                            continue;
                        }
                        if max_irrelevant == 0 && !pair_can_help(spec, parent1, parent2) {
                            continue;
                        }
                        out.extend(self.breed_pair(
                            child_pal,
                            spec,
                            parent1,
                            parent2,
                            max_irrelevant,
                        ));
                    }
                    out
                })
                .collect();

            let emitted = candidates.len();
            let changed = working_set.add_from(candidates);
            observer.on_round(&RoundSnapshot {
                round,
                frontier_size: working_set.len(),
                candidates_emitted: emitted,
                changed,
            });

            if changed == 0 {
                break;
            }
        }

        let mut solutions: Vec<Arc<PalReference>> = working_set
            .members()
            .filter(|r| r.pal() == spec.pal && r.traits().is_named_superset_of(&spec.traits))
            .cloned()
            .collect();
        solutions.sort_by(|a, b| {
            (a.effort(), a.gender(), a.traits()).cmp(&(b.effort(), b.gender(), b.traits()))
        });
        Ok(solutions)
    }

    // Synthesizes every worthwhile child of one resolved pair:
    // one candidate per reachable final trait count, carrying the
    // cumulative probability of "all desired inherited traits
    // with at most that many irrelevant extras".
    fn breed_pair(
        &self,
        child_pal: PalId,
        spec: &PalSpecifier,
        parent1: &Arc<PalReference>,
        parent2: &Arc<PalReference>,
        max_irrelevant: usize,
    ) -> Vec<PalReference> {
        let (parent1, parent2) = self.preferred_parent_genders(parent1, parent2);

        let pool = parent1.traits().union(parent2.traits());
        let desired_from_pool = spec.traits.intersection_named(&pool);
        let desired_count = desired_from_pool.len();

        let mut results = Vec::new();
        let mut cumulative = 0.0f32;
        for final_count in desired_count..=MAX_TOTAL_TRAITS.min(desired_count + max_irrelevant) {
            cumulative += inherited_trait_probability(
                &self.game_config.tables,
                pool.len(),
                desired_count,
                final_count,
            );
            if cumulative <= 0.0 {
                continue;
            }

            let mut traits = desired_from_pool.clone();
            traits.add_random(final_count - desired_count);
            results.push(PalReference::Bred(BredPalReference::new(
                self.game_config,
                child_pal,
                Arc::clone(&parent1),
                Arc::clone(&parent2),
                traits,
                cumulative.min(1.0),
            )));
        }

        results.retain(|r| r.effort() <= self.config.max_effort);
        results
    }

    // Decides which concrete gender each parent should end up
    // with, for the least overall effort. Every compatible
    // concrete assignment is costed; when they all tie, the
    // unresolved reference is kept and only its partner is pinned
    // to the opposite (two wildcards become a free
    // wildcard/opposite-wildcard pair).
    fn preferred_parent_genders(
        &self,
        parent1: &Arc<PalReference>,
        parent2: &Arc<PalReference>,
    ) -> (Arc<PalReference>, Arc<PalReference>) {
        fn options(parent: &Arc<PalReference>) -> Vec<Arc<PalReference>> {
            if parent.gender() == Gender::Wildcard {
                vec![
                    Arc::new(parent.with_guaranteed_gender(Gender::Male)),
                    Arc::new(parent.with_guaranteed_gender(Gender::Female)),
                ]
            } else {
                vec![Arc::clone(parent)]
            }
        }

        let options1 = options(parent1);
        let options2 = options(parent2);
        let mut assignments: Vec<(&Arc<PalReference>, &Arc<PalReference>)> = Vec::new();
        for a in &options1 {
            for b in &options2 {
                if a.gender().is_compatible_with(b.gender()) {
                    assignments.push((a, b));
                }
            }
        }

        let optimal = assignments
            .iter()
            .map(|(a, b)| a.effort() + b.effort())
            .min()
            .expect("compatible parents always have a gender assignment");

        if assignments
            .iter()
            .all(|(a, b)| a.effort() + b.effort() == optimal)
        {
            // No assignment is preferable; keep whichever side is
            // still unresolved and pin its partner opposite.
            if parent2.gender() == Gender::Wildcard {
                let pinned = parent2.with_guaranteed_gender(parent1.gender().opposite());
                (Arc::clone(parent1), Arc::new(pinned))
            } else if parent1.gender() == Gender::Wildcard {
                let pinned = parent1.with_guaranteed_gender(parent2.gender().opposite());
                (Arc::new(pinned), Arc::clone(parent2))
            } else {
                (Arc::clone(parent1), Arc::clone(parent2))
            }
        } else {
            let (a, b) = assignments
                .into_iter()
                .min_by_key(|(a, b)| a.effort() + b.effort())
                .expect("assignment list is non-empty");
            (Arc::clone(a), Arc::clone(b))
        }
    }
}

// With no irrelevant traits allowed, a pair is pointless unless
// the parents carry something desired, or carry nothing stray at
// all: a child always directly inherits at least one trait when
// the pool is non-empty, so stray-only parents can never produce
// a clean child.
fn pair_can_help(spec: &PalSpecifier, parent1: &PalReference, parent2: &PalReference) -> bool {
    let combined = parent1.traits().union(parent2.traits());
    let any_relevant = combined
        .named()
        .iter()
        .any(|t| spec.traits.contains(t));
    let any_irrelevant = combined.irrelevant_count(&spec.traits) > 0;
    any_relevant || !any_irrelevant
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::SolverLogger;
    use palbreed::{LocationType, Pal, PalLocation, Trait};

    fn location(index: u32) -> PalLocation {
        PalLocation {
            kind: LocationType::Palbox,
            index,
        }
    }

    fn instance(pal: PalId, gender: Gender, names: &[&str], index: u32) -> PalInstance {
        PalInstance {
            pal,
            gender,
            traits: TraitSet::of(names.iter().map(|n| Trait::new(*n))),
            location: location(index),
        }
    }

    fn triangle_db() -> PalDb {
        // lamball x cattiva -> chikipi
        PalDb::new(
            vec![
                Pal::new(PalId::base(1), "Lamball"),
                Pal::new(PalId::base(2), "Cattiva"),
                Pal::new(PalId::base(3), "Chikipi"),
            ],
            [(PalId::base(1), PalId::base(2), PalId::base(3))],
        )
    }

    fn limits() -> SolverConfig {
        SolverConfig {
            max_breeding_steps: 4,
            max_wild_pals: 2,
            max_irrelevant_traits: 2,
            max_effort: Duration::from_secs(7 * 24 * 3600),
        }
    }

    fn desired(names: &[&str]) -> TraitSet {
        TraitSet::of(names.iter().map(|n| Trait::new(*n)))
    }

    #[test]
    fn rejects_oversized_queries() {
        let db = triangle_db();
        let config = GameConfig::standard();
        let solver = BreedingSolver::new(&config, &db, vec![], limits());
        let err = solver
            .solve(&PalSpecifier {
                pal: PalId::base(3),
                traits: desired(&["A", "B", "C", "D", "E"]),
            })
            .unwrap_err();
        assert_eq!(
            err,
            SolverError::TooManyDesiredTraits {
                desired: 5,
                max: MAX_TOTAL_TRAITS
            }
        );
    }

    #[test]
    fn rejects_random_markers_in_queries() {
        let db = triangle_db();
        let config = GameConfig::standard();
        let solver = BreedingSolver::new(&config, &db, vec![], limits());
        let err = solver
            .solve(&PalSpecifier {
                pal: PalId::base(3),
                traits: TraitSet::random(1),
            })
            .unwrap_err();
        assert_eq!(err, SolverError::RandomDesiredTrait);
    }

    #[test]
    fn owned_target_with_no_desired_traits_solves_in_round_zero() {
        let db = triangle_db();
        let config = GameConfig::standard();
        let target = PalId::base(3);
        let solver = BreedingSolver::new(
            &config,
            &db,
            vec![instance(target, Gender::Female, &["Clumsy"], 0)],
            SolverConfig {
                max_wild_pals: 0,
                ..limits()
            },
        );

        let solutions = solver
            .solve(&PalSpecifier {
                pal: target,
                traits: TraitSet::new(),
            })
            .unwrap();

        assert!(!solutions.is_empty());
        assert_eq!(solutions[0].effort(), Duration::ZERO);
        assert!(matches!(&*solutions[0], PalReference::Owned(_)));
    }

    #[test]
    fn no_wilds_and_no_ancestors_yields_empty_result() {
        let db = triangle_db();
        let config = GameConfig::standard();
        // Only an owned pal that cannot breed toward the target.
        let solver = BreedingSolver::new(
            &config,
            &db,
            vec![instance(PalId::base(3), Gender::Male, &[], 0)],
            SolverConfig {
                max_wild_pals: 0,
                ..limits()
            },
        );

        // Pal 1 is unreachable: nothing breeds into it.
        let solutions = solver
            .solve(&PalSpecifier {
                pal: PalId::base(1),
                traits: TraitSet::new(),
            })
            .unwrap();
        assert!(solutions.is_empty());
    }

    #[test]
    fn two_parent_exact_trait_pair_breeds_in_one_round() {
        let db = triangle_db();
        let config = GameConfig::standard();
        let solver = BreedingSolver::new(
            &config,
            &db,
            vec![
                instance(PalId::base(1), Gender::Male, &["Swift"], 0),
                instance(PalId::base(2), Gender::Female, &["Runner"], 1),
            ],
            SolverConfig {
                max_wild_pals: 0,
                max_irrelevant_traits: 0,
                ..limits()
            },
        );

        let mut logger = SolverLogger::new();
        let solutions = solver
            .solve_with(
                &PalSpecifier {
                    pal: PalId::base(3),
                    traits: desired(&["Runner", "Swift"]),
                },
                &mut logger,
            )
            .unwrap();

        assert_eq!(solutions.len(), 1);
        let bred = match &*solutions[0] {
            PalReference::Bred(b) => b,
            other => panic!("expected bred solution, got {}", other),
        };
        // Direct-inherit-2 roll followed by a zero-random-add roll.
        let expected = config.tables.direct[2] * config.tables.random_added[0];
        assert!((bred.probability() - expected).abs() < 1e-6);
        assert_eq!(solutions[0].traits(), &desired(&["Runner", "Swift"]));

        // Round 0 finds it; round 1 learns nothing and stops early.
        let rounds: Vec<&RoundSnapshot> = logger.iter().collect();
        assert_eq!(rounds.len(), 2);
        assert!(rounds[0].changed > 0);
        assert_eq!(rounds[1].changed, 0);
    }

    #[test]
    fn wild_captures_fill_in_for_missing_ancestors() {
        let db = triangle_db();
        let config = GameConfig::standard();
        let solver = BreedingSolver::new(&config, &db, vec![], limits());

        let solutions = solver
            .solve(&PalSpecifier {
                pal: PalId::base(3),
                traits: TraitSet::new(),
            })
            .unwrap();

        assert!(!solutions.is_empty());
        // Catching the target directly beats breeding toward it.
        assert!(matches!(&*solutions[0], PalReference::Wild(_)));
        assert!(solutions
            .iter()
            .all(|s| s.wild_participants() <= limits().max_wild_pals));
    }

    #[test]
    fn allowing_irrelevant_traits_never_worsens_the_best_plan() {
        let db = triangle_db();
        let config = GameConfig::standard();
        let owned = || {
            vec![
                instance(PalId::base(1), Gender::Male, &["Swift"], 0),
                instance(PalId::base(2), Gender::Female, &["Runner"], 1),
            ]
        };
        let spec = PalSpecifier {
            pal: PalId::base(3),
            traits: desired(&["Runner", "Swift"]),
        };

        let best_effort = |max_irrelevant: usize| {
            let solver = BreedingSolver::new(
                &config,
                &db,
                owned(),
                SolverConfig {
                    max_wild_pals: 0,
                    max_irrelevant_traits: max_irrelevant,
                    ..limits()
                },
            );
            solver
                .solve(&spec)
                .unwrap()
                .first()
                .map(|s| s.effort())
                .expect("a plan exists")
        };

        // Tolerating an extra junk trait can only help: accepting
        // "Runner, Swift + 1 random" outcomes raises the success
        // probability per attempt.
        assert!(best_effort(1) <= best_effort(0));
    }

    #[test]
    fn seeding_drops_instances_over_the_irrelevant_budget() {
        let db = triangle_db();
        let config = GameConfig::standard();
        let owned = || {
            vec![
                instance(PalId::base(1), Gender::Male, &["Swift"], 0),
                instance(PalId::base(2), Gender::Female, &["Runner", "Clumsy"], 1),
            ]
        };
        let spec = PalSpecifier {
            pal: PalId::base(3),
            traits: desired(&["Runner", "Swift"]),
        };
        let solve_at = |max_irrelevant: usize| {
            BreedingSolver::new(
                &config,
                &db,
                owned(),
                SolverConfig {
                    max_wild_pals: 0,
                    max_irrelevant_traits: max_irrelevant,
                    ..limits()
                },
            )
            .solve(&spec)
            .unwrap()
        };

        // At tolerance 0 the Clumsy carrier never enters the
        // frontier, leaving the male without a partner.
        assert!(solve_at(0).is_empty());
        // At tolerance 1 she participates and a plan exists.
        assert!(!solve_at(1).is_empty());
    }

    #[test]
    fn raising_the_wild_budget_never_worsens_the_best_plan() {
        let db = triangle_db();
        let config = GameConfig::standard();
        let spec = PalSpecifier {
            pal: PalId::base(3),
            traits: TraitSet::new(),
        };
        let best_effort = |max_wild_pals: usize| {
            BreedingSolver::new(
                &config,
                &db,
                vec![],
                SolverConfig {
                    max_wild_pals,
                    ..limits()
                },
            )
            .solve(&spec)
            .unwrap()
            .first()
            .map(|s| s.effort())
        };

        // With nothing owned, zero captures means no plan at all;
        // each extra capture can only widen the candidate space.
        assert_eq!(best_effort(0), None);
        let one = best_effort(1).expect("a single capture suffices");
        let two = best_effort(2).expect("a larger budget keeps the plan");
        assert!(two <= one);
    }

    #[test]
    fn wildcard_pair_resolves_to_free_opposites() {
        let db = triangle_db();
        let config = GameConfig::standard();
        let solver = BreedingSolver::new(&config, &db, vec![], limits());

        let wild1 = Arc::new(PalReference::wild(
            &config,
            db.pal(PalId::base(1)).unwrap(),
            0,
        ));
        let wild2 = Arc::new(PalReference::wild(
            &config,
            db.pal(PalId::base(2)).unwrap(),
            0,
        ));

        let (resolved1, resolved2) = solver.preferred_parent_genders(&wild1, &wild2);
        assert_eq!(resolved1.gender(), Gender::Wildcard);
        assert_eq!(resolved2.gender(), Gender::OppositeWildcard);
        // The tie keeps both efforts unpenalized.
        assert_eq!(resolved1.effort(), wild1.effort());
        assert_eq!(resolved2.effort(), wild2.effort());
    }

    #[test]
    fn wildcard_partner_of_a_concrete_parent_is_pinned_opposite() {
        let db = triangle_db();
        let config = GameConfig::standard();
        let solver = BreedingSolver::new(&config, &db, vec![], limits());

        let owned_ref = Arc::new(PalReference::owned(Arc::new(instance(
            PalId::base(1),
            Gender::Male,
            &[],
            0,
        ))));
        let wild = Arc::new(PalReference::wild(
            &config,
            db.pal(PalId::base(2)).unwrap(),
            0,
        ));

        let (resolved1, resolved2) = solver.preferred_parent_genders(&owned_ref, &wild);
        assert_eq!(resolved1.gender(), Gender::Male);
        assert_eq!(resolved2.gender(), Gender::Female);
        // Pinning a concrete gender on a wild capture costs twice
        // the catches.
        assert_eq!(resolved2.effort(), wild.effort() * 2);
    }

    #[test]
    fn cancellation_between_rounds_keeps_partial_results() {
        struct CancelImmediately;
        impl SolverObserver for CancelImmediately {
            fn cancelled(&self) -> bool {
                true
            }
        }

        let db = triangle_db();
        let config = GameConfig::standard();
        let solver = BreedingSolver::new(
            &config,
            &db,
            vec![
                instance(PalId::base(1), Gender::Male, &["Swift"], 0),
                instance(PalId::base(2), Gender::Female, &["Runner"], 1),
            ],
            SolverConfig {
                max_wild_pals: 0,
                ..limits()
            },
        );

        // Cancelled before the first round: the bred plan is never
        // synthesized, so the target-trait query has no solution.
        let solutions = solver
            .solve_with(
                &PalSpecifier {
                    pal: PalId::base(3),
                    traits: desired(&["Runner", "Swift"]),
                },
                &mut CancelImmediately,
            )
            .unwrap();
        assert!(solutions.is_empty());
    }

    #[test]
    fn identical_inputs_give_identical_plans() {
        let db = triangle_db();
        let config = GameConfig::standard();
        let spec = PalSpecifier {
            pal: PalId::base(3),
            traits: desired(&["Runner"]),
        };
        let solve_once = || {
            let solver = BreedingSolver::new(
                &config,
                &db,
                vec![
                    instance(PalId::base(1), Gender::Male, &["Runner"], 0),
                    instance(PalId::base(2), Gender::Female, &[], 1),
                ],
                limits(),
            );
            solver
                .solve(&spec)
                .unwrap()
                .iter()
                .map(|s| (s.effort(), s.traits().clone(), s.gender()))
                .collect::<Vec<_>>()
        };

        assert_eq!(solve_once(), solve_once());
    }

    #[test]
    fn derivations_respect_the_wild_budget() {
        let db = triangle_db();
        let config = GameConfig::standard();
        let solver = BreedingSolver::new(
            &config,
            &db,
            vec![],
            SolverConfig {
                max_wild_pals: 1,
                ..limits()
            },
        );

        // Breeding pal 3 from wilds needs two captures; only the
        // direct capture of pal 3 fits a budget of one.
        let solutions = solver
            .solve(&PalSpecifier {
                pal: PalId::base(3),
                traits: TraitSet::new(),
            })
            .unwrap();
        assert!(!solutions.is_empty());
        assert!(solutions.iter().all(|s| s.wild_participants() <= 1));
        assert!(solutions.iter().all(|s| s.bred_participants() == 0));
    }
}
