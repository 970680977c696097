use palbreed::{InheritanceTables, MAX_TOTAL_TRAITS};

/// Largest combined parent trait pool: two parents carrying
/// four traits each, pairwise distinct.
pub(crate) const MAX_PARENT_POOL: usize = 2 * MAX_TOTAL_TRAITS;

// Binomial coefficients for the small n the trait model needs,
// precomputed instead of recomputed per candidate.
const CHOOSE: [[u64; MAX_PARENT_POOL + 1]; MAX_PARENT_POOL + 1] = pascals_triangle();

const fn pascals_triangle() -> [[u64; MAX_PARENT_POOL + 1]; MAX_PARENT_POOL + 1] {
    let mut triangle = [[0u64; MAX_PARENT_POOL + 1]; MAX_PARENT_POOL + 1];
    let mut n = 0;
    while n <= MAX_PARENT_POOL {
        triangle[n][0] = 1;
        let mut k = 1;
        while k <= n {
            triangle[n][k] = triangle[n - 1][k - 1] + triangle[n - 1][k];
            k += 1;
        }
        n += 1;
    }
    triangle
}

fn choose(n: usize, k: usize) -> f32 {
    if k > n {
        0.0
    } else {
        CHOOSE[n][k] as f32
    }
}

/// Probability that a single breeding event yields a child with
/// exactly `final_count` traits, among them all `desired_count`
/// wanted traits from the combined parent pool of `pool_size`
/// distinct traits.
///
/// Only counts matter: the wanted traits are assumed to be a
/// subset of the pool, and the containment term is the
/// hypergeometric ratio over draws from the pool.
///
/// The child's total trait count is the sum of a direct-inherit
/// roll and a random-addition roll, so the result accumulates
/// every split `k` direct + `final_count - k` random that is
/// actually possible. Rolls that inherit more traits than the
/// pool holds still happen but only yield the whole pool; with
/// an empty pool the direct roll is irrelevant and zero traits
/// are inherited with probability 1. Splits needing more than 3
/// random additions never occur and are skipped.
///
/// Callers accumulate this over increasing `final_count` to get
/// "all desired traits with at most N irrelevant extras".
///
/// # Examples
/// ```
/// use palbreed::InheritanceTables;
/// use palbreed_solver::inherited_trait_probability;
///
/// let tables = InheritanceTables::standard();
/// // Two parents jointly carrying exactly the two wanted traits:
/// // a direct-inherit-2 roll followed by a zero-random-add roll.
/// let p = inherited_trait_probability(&tables, 2, 2, 2);
/// assert!((p - tables.direct[2] * tables.random_added[0]).abs() < 1e-6);
/// ```
pub fn inherited_trait_probability(
    tables: &InheritanceTables,
    pool_size: usize,
    desired_count: usize,
    final_count: usize,
) -> f32 {
    if desired_count > final_count
        || final_count > MAX_TOTAL_TRAITS
        || desired_count > pool_size
    {
        return 0.0;
    }

    let mut probability = 0.0;

    for num_inherited in desired_count..=final_count {
        // A roll may ask for more traits than the pool holds; the
        // child then inherits the whole pool. That leaves the roll
        // probability untouched but changes how many random
        // additions are needed to reach `final_count`.
        let actual_inherited = num_inherited.min(pool_size);
        let irrelevant_from_parents = actual_inherited - desired_count;
        let random_added = final_count - actual_inherited;

        if random_added >= tables.random_added.len() {
            continue;
        }

        let got_required_from_parents = if num_inherited == 0 {
            // Zero direct traits only happens when there is nothing
            // to inherit, and then it always happens.
            if pool_size > 0 {
                continue;
            }
            1.0
        } else if pool_size == 0 {
            continue;
        } else if desired_count == 0 {
            tables.direct[num_inherited]
        } else if irrelevant_from_parents == 0 {
            // Exactly the wanted subset, out of all same-size draws.
            tables.direct[num_inherited] / choose(pool_size, desired_count)
        } else {
            // Draws of `actual_inherited` that contain the whole
            // wanted subset, with the rest from the unwanted pool.
            tables.direct[num_inherited]
                * choose(pool_size - desired_count, irrelevant_from_parents)
                / choose(pool_size, actual_inherited)
        };

        debug_assert!((0.0..=1.0).contains(&got_required_from_parents));

        probability += got_required_from_parents * tables.random_added[random_added];
    }

    debug_assert!((0.0..=1.0 + f32::EPSILON).contains(&probability));
    probability
}
