//! A breeding-plan solver for pal collections: given the pals a
//! player owns, the static breeding catalog, and a wanted
//! (species, trait-set) combination, it finds the ways of
//! obtaining that pal which cost the least expected time.
//!
//! The search works on [`PalReference`] candidates, each a
//! complete hypothesis of how one individual could be obtained
//! (owned as-is, caught wild, or bred from two other candidates).
//! Every round, [`BreedingSolver`] pairs up the current frontier,
//! synthesizes probability-weighted children, and merges them
//! back through the dominance-pruning [`WorkingSet`], until a
//! round changes nothing or the step budget runs out.
//!
//! Probabilities are computed from the inheritance tables, never
//! sampled, so identical inputs always produce identical plans.
//!
//! # Examples
//! ```
//! use palbreed::{
//!     GameConfig, Gender, LocationType, Pal, PalDb, PalId, PalInstance,
//!     PalLocation, Trait, TraitSet,
//! };
//! use palbreed_solver::{BreedingSolver, PalSpecifier, SolverConfig, SolverLogger};
//! use std::time::Duration;
//!
//! let lamball = PalId::base(1);
//! let cattiva = PalId::base(2);
//! let chikipi = PalId::base(3);
//! let db = PalDb::new(
//!     vec![
//!         Pal::new(lamball, "Lamball"),
//!         Pal::new(cattiva, "Cattiva"),
//!         Pal::new(chikipi, "Chikipi"),
//!     ],
//!     [(lamball, cattiva, chikipi)],
//! );
//! let config = GameConfig::standard();
//!
//! // A male with one wanted trait, a female with the other.
//! let owned = vec![
//!     PalInstance {
//!         pal: lamball,
//!         gender: Gender::Male,
//!         traits: TraitSet::of([Trait::new("Swift")]),
//!         location: PalLocation { kind: LocationType::Party, index: 0 },
//!     },
//!     PalInstance {
//!         pal: cattiva,
//!         gender: Gender::Female,
//!         traits: TraitSet::of([Trait::new("Runner")]),
//!         location: PalLocation { kind: LocationType::Party, index: 1 },
//!     },
//! ];
//!
//! let solver = BreedingSolver::new(
//!     &config,
//!     &db,
//!     owned,
//!     SolverConfig {
//!         max_breeding_steps: 3,
//!         max_wild_pals: 0,
//!         max_irrelevant_traits: 0,
//!         max_effort: Duration::from_secs(24 * 3600),
//!     },
//! );
//!
//! let mut logger = SolverLogger::new();
//! let solutions = solver
//!     .solve_with(
//!         &PalSpecifier {
//!             pal: chikipi,
//!             traits: TraitSet::of([Trait::new("Runner"), Trait::new("Swift")]),
//!         },
//!         &mut logger,
//!     )
//!     .unwrap();
//!
//! // The single-step plan: breed the two owned pals.
//! assert_eq!(solutions[0].bred_participants(), 1);
//! for snapshot in logger.iter() {
//!     println!("{}", snapshot);
//! }
//! ```

mod errors;
mod logging;
mod probability;
mod reference;
mod selector;
mod solver;
mod working_set;

pub use errors::SolverError;
pub use logging::{RoundSnapshot, SolverLogger, SolverObserver};
pub use probability::inherited_trait_probability;
pub use reference::{BredPalReference, OwnedPalReference, PalReference, WildPalReference};
pub use selector::relevant_instances;
pub use solver::{BreedingSolver, PalSpecifier, SolverConfig};
pub use working_set::WorkingSet;
