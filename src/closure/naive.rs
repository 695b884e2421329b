use std::time::Instant;

use super::{ClosureMethod, ClosureOutcome, multiply};
use crate::matrix::RelationMatrix;

/// Closure by repeated boolean multiplication.
///
/// Starting from the square of the relation, the accumulated matrix is
/// multiplied with the relation once per element. Each product absorbs the
/// entries seen so far&nbsp;(see [`multiply`]), so round `i` holds every pair
/// reachable in at most `i + 1` hops, and `n` rounds are enough to reach
/// anything reachable at all. With `n` products of `n^3` boolean operations
/// each, this is the quartic baseline the cubic algorithm is measured
/// against.
pub struct Naive;

impl ClosureMethod for Naive {
    const NAME: &'static str = "naive-algo";

    fn closure(relation: &RelationMatrix) -> Result<ClosureOutcome, &'static str> {
        let n = relation.dim();
        let mut matrix = multiply(relation, relation)?;
        // The first round above is untimed warmup; `elapsed` covers only the
        // remaining `n - 1` rounds.
        let start = Instant::now();
        for _ in 1..n {
            matrix = multiply(&matrix, relation)?;
        }
        let elapsed = start.elapsed();
        Ok(ClosureOutcome { matrix, elapsed })
    }
}
