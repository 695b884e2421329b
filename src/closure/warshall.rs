use std::time::Instant;

use super::{ClosureMethod, ClosureOutcome};
use crate::matrix::RelationMatrix;

/// Warshall's dynamic-programming closure.
///
/// Elements are admitted as intermediate hops one at a time: once element `i`
/// has been processed, `f[(j, k)]` holds whenever `k` is reachable from `j`
/// using only intermediates `<= i`. The whole computation is a single cubic
/// triple loop, mutating a working copy in place. No reflexive entries are
/// added: an element only relates to itself in the closure if it lies on a
/// cycle or already did in the input.
pub struct Warshall;

impl ClosureMethod for Warshall {
    const NAME: &'static str = "Warshall-algo";

    fn closure(relation: &RelationMatrix) -> Result<ClosureOutcome, &'static str> {
        let n = relation.dim();
        // The working copy is owned by this call, so mutating it in place
        // never aliases the caller's matrix.
        let mut matrix = relation.clone();
        let start = Instant::now();
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    matrix[(j, k)] = matrix[(j, k)] || (matrix[(j, i)] && matrix[(i, k)]);
                }
            }
        }
        let elapsed = start.elapsed();
        Ok(ClosureOutcome { matrix, elapsed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_not_mutated() {
        let chain = RelationMatrix::from_rows(&[[0, 1, 0], [0, 0, 1], [0, 0, 0]]);
        let copy = chain.clone();
        let _ = Warshall::closure(&chain).unwrap();
        assert_eq!(chain, copy);
    }

    #[test]
    fn no_reflexive_entries_added() {
        let chain = RelationMatrix::from_rows(&[[0, 1, 0], [0, 0, 1], [0, 0, 0]]);
        let closed = Warshall::closure(&chain).unwrap().matrix;
        for i in 0..closed.dim() {
            assert!(!closed[(i, i)]);
        }
    }

    #[test]
    fn cycle_closes_onto_itself() {
        let mut cycle = RelationMatrix::new(4);
        for i in 0..4 {
            cycle[(i, (i + 1) % 4)] = true;
        }
        let closed = Warshall::closure(&cycle).unwrap().matrix;
        let full = RelationMatrix::from_vec(vec![true; 16], 4);
        assert_eq!(closed, full);
    }
}
