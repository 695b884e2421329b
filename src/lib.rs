//! This is a library for computing the transitive closure of a finite binary
//! relation, and for comparing how different closure algorithms behave on the
//! same inputs. A relation is stored as a dense square boolean
//! matrix&nbsp;(see [`matrix::RelationMatrix`]), and there are two ways to
//! close it:
//!
//! - [`Naive`](closure::Naive), which repeatedly multiplies the relation with
//!   an accumulated reachability matrix. Quartic in the number of elements.
//! - [`Warshall`](closure::Warshall), which admits one intermediate element at
//!   a time. Cubic in the number of elements.
//!
//! Both produce the same relation, and [`sweep`] runs them side by side over
//! a range of random matrices, recording the final matrices, the elapsed time
//! of each computation and whether the two outputs agree.

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod closure;
pub mod matrix;
pub mod sweep;
