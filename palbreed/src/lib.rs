//! Data model for Palworld breeding calculations.
//!
//! This crate carries the static, immutable inputs a breeding
//! planner works from: the species catalog and its
//! breeding-compatibility map ([`PalDb`]), trait sets
//! ([`TraitSet`]), gender rules ([`Gender`]), the player's owned
//! pals ([`PalInstance`], produced by an external save decoder),
//! and the game constants and trait-inheritance probability
//! tables ([`GameConfig`]).
//!
//! The search engine that plans breeding steps on top of this
//! model lives in the companion
//! [`palbreed-solver`](https://crates.io/crates/palbreed-solver)
//! crate.
//!
//! # Example: building a tiny catalog
//! ```
//! use palbreed::{GameConfig, Pal, PalDb, PalId};
//!
//! let lamball = PalId::base(1);
//! let cattiva = PalId::base(2);
//! let chikipi = PalId::base(3);
//!
//! let db = PalDb::new(
//!     vec![
//!         Pal::new(lamball, "Lamball"),
//!         Pal::new(cattiva, "Cattiva"),
//!         Pal::new(chikipi, "Chikipi"),
//!     ],
//!     [(lamball, cattiva, chikipi)],
//! );
//!
//! assert_eq!(db.min_breeding_steps(lamball, chikipi), Some(1));
//!
//! let config = GameConfig::standard();
//! let effort = config.capture_effort(db.pal(chikipi).unwrap());
//! assert!(effort > config.capture_effort(db.pal(lamball).unwrap()));
//! ```

mod config;
mod db;
mod gender;
mod instance;
mod species;
mod traits;

pub use config::{GameConfig, InheritanceTables};
pub use db::PalDb;
pub use gender::Gender;
pub use instance::{LocationType, PalInstance, PalLocation};
pub use species::{Pal, PalId};
pub use traits::{Trait, TraitSet, MAX_TOTAL_TRAITS};
