use crate::{Pal, MAX_TOTAL_TRAITS};

use serde::{Deserialize, Serialize};

use std::time::Duration;

/// Trait-inheritance probability tables.
///
/// These are empirical community estimates, not verified game
/// mechanics, so they are carried as plain configuration data
/// rather than hard-coded constants; swap in your own values if
/// better numbers surface.
///
/// # Note
/// All entries are probabilities and should be in [0.0, 1.0];
/// each table should sum to at most 1.0 over its valid indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InheritanceTables {
    /// Probability of the child directly inheriting exactly `n`
    /// traits from the combined parent pool, indexed by `n`.
    /// Index 0 is unused: with a non-empty pool at least one
    /// trait is always inherited directly.
    pub direct: [f32; MAX_TOTAL_TRAITS + 1],
    /// Probability of exactly `r` random traits being added on
    /// top of the inherited ones, indexed by `r`. More than 3
    /// random additions never happen.
    pub random_added: [f32; MAX_TOTAL_TRAITS],
    /// Probability of a wild pal carrying at most `n` random
    /// traits, indexed by `n` (uniform over 0..=4).
    pub wild_at_most: [f32; MAX_TOTAL_TRAITS + 1],
}

impl InheritanceTables {
    /// The published estimates.
    pub const fn standard() -> InheritanceTables {
        InheritanceTables {
            direct: [0.0, 0.40, 0.30, 0.20, 0.10],
            random_added: [0.40, 0.30, 0.20, 0.10],
            wild_at_most: [0.20, 0.40, 0.60, 0.80, 1.00],
        }
    }
}

/// Game constants used by effort estimation.
///
/// # Examples
/// ```
/// use palbreed::GameConfig;
/// use std::time::Duration;
///
/// let config = GameConfig::standard();
/// assert_eq!(config.avg_breeding_time(), Duration::from_secs(600));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Nominal duration of one breeding attempt.
    pub breeding_time: Duration,
    /// Base time to track down and catch any wild pal.
    pub base_catch_time: Duration,
    /// Additional catch time per paldex number, a rough monotone
    /// stand-in for rarity.
    pub catch_time_per_dex_no: Duration,
    /// Whether several breeding farms can run at once. Effort
    /// figures assume one farm; callers scheduling a full plan
    /// can overlap independent steps when this is set.
    pub multiple_breeding_farms: bool,
    pub tables: InheritanceTables,
}

impl GameConfig {
    pub const fn standard() -> GameConfig {
        GameConfig {
            breeding_time: Duration::from_secs(5 * 60),
            base_catch_time: Duration::from_secs(3 * 60),
            catch_time_per_dex_no: Duration::from_secs(2),
            multiple_breeding_farms: true,
            tables: InheritanceTables::standard(),
        }
    }

    /// Effective duration of one breeding attempt. Parents are
    /// idle for roughly half of each day (night time), so the
    /// nominal attempt duration is doubled.
    pub fn avg_breeding_time(&self) -> Duration {
        self.breeding_time * 2
    }

    /// Estimated time to catch one wild pal of this species.
    pub fn capture_effort(&self, pal: &Pal) -> Duration {
        self.base_catch_time + self.catch_time_per_dex_no * u32::from(pal.id.dex_no)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PalId;

    #[test]
    fn standard_tables_are_distributions() {
        let tables = InheritanceTables::standard();
        let direct_sum: f32 = tables.direct.iter().sum();
        let random_sum: f32 = tables.random_added.iter().sum();
        assert!((direct_sum - 1.0).abs() < 1e-6);
        assert!((random_sum - 1.0).abs() < 1e-6);
        assert!((tables.wild_at_most[MAX_TOTAL_TRAITS] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn capture_effort_is_monotone_in_dex_no() {
        let config = GameConfig::standard();
        let common = Pal::new(PalId::base(1), "common");
        let rare = Pal::new(PalId::base(100), "rare");
        assert!(config.capture_effort(&rare) > config.capture_effort(&common));
    }
}
