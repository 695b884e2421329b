use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
};

use rand::{
    Rng,
    distr::{Bernoulli, Distribution},
};

/// A binary relation on the set `{0, .., dim - 1}`, stored as a dense square
/// boolean matrix.
///
/// The entries are kept in row-major order, so `entries[i * dim + j]` is
/// `true` if and only if `i` relates to `j`. Indexing uses `(row, column)`
/// pairs. A matrix never changes its dimension after construction.
#[derive(Debug, PartialEq, Eq)]
pub struct RelationMatrix {
    dim: usize,
    entries: Vec<bool>,
}

impl Clone for RelationMatrix {
    fn clone(&self) -> Self {
        Self { dim: self.dim, entries: self.entries.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.dim = source.dim;
        self.entries.clone_from(&source.entries);
    }
}

impl RelationMatrix {
    /// The empty relation: no element relates to any other.
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self { dim, entries: vec![false; dim * dim] }
    }

    pub fn from_vec(entries: Vec<bool>, dim: usize) -> Self {
        assert!(dim * dim == entries.len());
        Self { entries, dim }
    }

    /// Build a matrix from rows of `0`/`1` values, the way they appear in a
    /// written report. Every nonzero value counts as `1`.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        let dim = rows.len();
        let mut entries = Vec::with_capacity(dim * dim);
        for row in rows {
            let row = row.as_ref();
            assert!(row.len() == dim);
            entries.extend(row.iter().map(|&v| v != 0));
        }
        Self { entries, dim }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Sample a random relation where each pair of elements is related with a
    /// chance of `density` percent, drawn independently per pair.
    ///
    /// Returns `Err` for an empty matrix order or a density outside of
    /// `1..=99`.
    pub fn bernoulli<R: Rng>(rng: &mut R, dim: usize, density: u8) -> Result<Self, &'static str> {
        if dim == 0 {
            return Err("Matrix order must be positive");
        }
        if !(1..=99).contains(&density) {
            return Err("Density percent must be in 1..=99");
        }

        let dist = Bernoulli::from_ratio(u32::from(density), 100).unwrap();
        let mut entries = Vec::with_capacity(dim * dim);
        for _ in 0..(dim * dim) {
            let related: bool = dist.sample(rng);
            entries.push(related);
        }
        Ok(Self { entries, dim })
    }

    /// Number of related pairs.
    pub fn edges(&self) -> usize {
        self.entries.iter().filter(|&&related| related).count()
    }
}

impl Display for RelationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dim == 0 {
            return Ok(());
        }
        for i in 0..self.dim {
            for j in 0..(self.dim - 1) {
                let v = if self[(i, j)] { '1' } else { '0' };
                write!(f, "{} ", v)?;
            }
            let v_last = if self[(i, self.dim - 1)] { '1' } else { '0' };
            writeln!(f, "{}", v_last)?;
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for RelationMatrix {
    type Output = bool;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(i < self.dim && j < self.dim);
        &self.entries[i * self.dim + j]
    }
}

impl IndexMut<(usize, usize)> for RelationMatrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        assert!(i < self.dim && j < self.dim);
        &mut self.entries[i * self.dim + j]
    }
}
