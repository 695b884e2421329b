use crate::matrix::RelationMatrix;

/// Multiply two relation matrices of the same dimension under the boolean
/// (OR, AND) semiring, absorbing the direct entries of both operands:
///
/// `out[(i, j)] = a[(i, j)] OR b[(i, j)] OR (a[(i, k)] AND b[(k, j)])`
/// for any `k`.
///
/// The absorbed direct entries mean this is not a plain matrix product. When
/// iterated as `multiply(&reachable, &relation)` the result accumulates
/// "already reachable, or reachable in one more hop", which is what
/// [`Naive`](super::Naive) relies on. Changing this to a pure product would
/// change what the iteration converges to.
pub fn multiply(a: &RelationMatrix, b: &RelationMatrix) -> Result<RelationMatrix, &'static str> {
    if a.dim() != b.dim() {
        return Err("Matrix dimensions must match");
    }
    let n = a.dim();
    let mut out = RelationMatrix::new(n);
    for i in 0..n {
        for j in 0..n {
            let mut hop = false;
            for k in 0..n {
                hop = hop || (a[(i, k)] && b[(k, j)]);
            }
            out[(i, j)] = a[(i, j)] || b[(i, j)] || hop;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn mismatched_dimensions() {
        let a = RelationMatrix::new(3);
        let b = RelationMatrix::new(4);
        assert!(multiply(&a, &b).is_err());
    }

    // Squaring a chain gives reachability in at most two hops, and the
    // one-hop edges stay in because of the absorbed direct entries. A pure
    // product would drop them.
    #[test]
    fn chain_squared_absorbs_edges() {
        let chain = RelationMatrix::from_rows(&[[0, 1, 0], [0, 0, 1], [0, 0, 0]]);
        let expected = RelationMatrix::from_rows(&[[0, 1, 1], [0, 0, 1], [0, 0, 0]]);
        assert_eq!(multiply(&chain, &chain).unwrap(), expected);
    }

    #[test]
    fn empty_times_empty() {
        let empty = RelationMatrix::new(5);
        assert_eq!(multiply(&empty, &empty).unwrap(), empty);
    }

    #[quickcheck]
    fn product_absorbs_both_operands(a: RelationMatrix, seed: u64) -> bool {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let b = RelationMatrix::bernoulli(&mut rng, a.dim(), 50).unwrap();
        let out = multiply(&a, &b).unwrap();
        for i in 0..a.dim() {
            for j in 0..a.dim() {
                if (a[(i, j)] || b[(i, j)]) && !out[(i, j)] {
                    return false;
                }
            }
        }
        true
    }

    #[quickcheck]
    fn product_entries_justified(a: RelationMatrix, seed: u64) -> bool {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let b = RelationMatrix::bernoulli(&mut rng, a.dim(), 50).unwrap();
        let out = multiply(&a, &b).unwrap();
        for i in 0..a.dim() {
            for j in 0..a.dim() {
                if out[(i, j)] {
                    let direct = a[(i, j)] || b[(i, j)];
                    let hop = (0..a.dim()).any(|k| a[(i, k)] && b[(k, j)]);
                    if !(direct || hop) {
                        return false;
                    }
                }
            }
        }
        true
    }
}
