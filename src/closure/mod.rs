use std::time::Duration;

use crate::matrix::RelationMatrix;

/// The final matrix of one closure computation, together with how long the
/// timed part of the computation took.
#[derive(Debug, Clone)]
pub struct ClosureOutcome {
    pub matrix: RelationMatrix,
    pub elapsed: Duration,
}

/// Trait shared by every closure algorithm
pub trait ClosureMethod {
    /// Short name used to label charts and report files.
    const NAME: &'static str;

    /// Compute the transitive closure of `relation`: the smallest relation
    /// containing it where `a` relates to `c` whenever `a` relates to `b` and
    /// `b` relates to `c`. The input is never mutated; every implementation
    /// works on a copy it owns.
    ///
    /// The closure is a function of the relation alone, so every
    /// implementation given the same input has to produce the same matrix.
    fn closure(relation: &RelationMatrix) -> Result<ClosureOutcome, &'static str>;
}


mod multiply;
pub use multiply::multiply;
mod naive;
pub use naive::Naive;
mod warshall;
pub use warshall::Warshall;
