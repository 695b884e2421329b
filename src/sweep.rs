//! Runs both closure algorithms side by side over a range of random
//! relations, collecting the material a report is rendered from.

use rand::{
    Rng, SeedableRng,
    distr::{Distribution, Uniform},
};
use rand_chacha::ChaCha8Rng;

use crate::{
    closure::{ClosureMethod, ClosureOutcome, Naive, Warshall},
    matrix::RelationMatrix,
};

/// Dimension of the first matrix in the reference sweep.
pub const DIM_START: usize = 10;
/// Number of trials in the reference sweep, ending at dimension 100.
pub const TRIALS: usize = 91;
/// Lowest density percent drawn for a generated matrix.
pub const DENSITY_LO: u8 = 10;
/// Highest density percent drawn for a generated matrix.
pub const DENSITY_HI: u8 = 89;

/// One random relation put through both closure algorithms.
#[derive(Debug, Clone)]
pub struct Trial {
    pub index: usize,
    pub dim: usize,
    /// Density percent the input matrix was drawn with.
    pub density: u8,
    pub naive: ClosureOutcome,
    pub warshall: ClosureOutcome,
    /// Whether both algorithms produced the same matrix. The closure is a
    /// function of the input alone, so `false` means one of the algorithms
    /// is broken, and the report has to say so.
    pub equal: bool,
}

/// Everything needed to run one trial. The trial is a pure function of these
/// values, so trials can run in any order, or concurrently, without sharing
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialParams {
    pub index: usize,
    pub dim: usize,
    pub density: u8,
    pub seed: u64,
}

impl TrialParams {
    /// Generate the input matrix from `seed` and run both algorithms on it,
    /// each on its own copy.
    pub fn run(&self) -> Result<Trial, &'static str> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let input = RelationMatrix::bernoulli(&mut rng, self.dim, self.density)?;
        let naive = Naive::closure(&input)?;
        let warshall = Warshall::closure(&input)?;
        let equal = naive.matrix == warshall.matrix;
        Ok(Trial {
            index: self.index,
            dim: self.dim,
            density: self.density,
            naive,
            warshall,
            equal,
        })
    }
}

/// A linear sweep of trials over matrix dimensions growing by one per trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sweep {
    /// Dimension of the first trial's matrix.
    pub start_dim: usize,
    /// Number of trials to run.
    pub trials: usize,
    /// Inclusive bounds of the density percent drawn per trial.
    pub density: (u8, u8),
    /// Master seed; every per-trial density and seed is derived from it.
    pub seed: u64,
}

impl Default for Sweep {
    fn default() -> Self {
        Self {
            start_dim: DIM_START,
            trials: TRIALS,
            density: (DENSITY_LO, DENSITY_HI),
            seed: 0,
        }
    }
}

impl Sweep {
    /// The parameters of every trial in the sweep, in order. Deriving the
    /// whole plan up front from the master seed keeps each trial independent
    /// of when and where it actually runs.
    pub fn plan(&self) -> Result<Vec<TrialParams>, &'static str> {
        if self.start_dim == 0 {
            return Err("Matrix order must be positive");
        }
        if self.trials == 0 {
            return Err("Sweep must contain at least one trial");
        }
        let (lo, hi) = self.density;
        if lo == 0 || hi > 99 || lo > hi {
            return Err("Density bounds must be ordered and in 1..=99");
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let dist = Uniform::new_inclusive(lo, hi).unwrap();
        let mut plan = Vec::with_capacity(self.trials);
        for index in 0..self.trials {
            plan.push(TrialParams {
                index,
                dim: self.start_dim + index,
                density: dist.sample(&mut rng),
                seed: rng.random(),
            });
        }
        Ok(plan)
    }

    /// Run every trial in order. A trial where the algorithms disagree does
    /// not stop the sweep; the disagreement is recorded in the trial itself.
    pub fn run(&self) -> Result<Vec<Trial>, &'static str> {
        let mut trials = Vec::with_capacity(self.trials);
        for params in self.plan()? {
            trials.push(params.run()?);
        }
        Ok(trials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_dimensions_increment() {
        let sweep = Sweep { start_dim: 10, trials: 5, ..Sweep::default() };
        let plan = sweep.plan().unwrap();
        let dims: Vec<usize> = plan.iter().map(|p| p.dim).collect();
        assert_eq!(dims, vec![10, 11, 12, 13, 14]);
        for params in &plan {
            assert!((DENSITY_LO..=DENSITY_HI).contains(&params.density));
        }
    }

    #[test]
    fn reference_sweep_shape() {
        let plan = Sweep::default().plan().unwrap();
        assert_eq!(plan.len(), TRIALS);
        assert_eq!(plan.first().unwrap().dim, DIM_START);
        assert_eq!(plan.last().unwrap().dim, 100);
    }

    #[test]
    fn invalid_sweeps_rejected() {
        assert!(Sweep { start_dim: 0, ..Sweep::default() }.plan().is_err());
        assert!(Sweep { trials: 0, ..Sweep::default() }.plan().is_err());
        assert!(Sweep { density: (50, 20), ..Sweep::default() }.plan().is_err());
        assert!(Sweep { density: (0, 20), ..Sweep::default() }.plan().is_err());
        assert!(Sweep { density: (20, 100), ..Sweep::default() }.plan().is_err());
    }

    #[test]
    fn sweep_runs_and_agrees() {
        let sweep = Sweep { start_dim: 2, trials: 8, seed: 7, ..Sweep::default() };
        let trials = sweep.run().unwrap();
        assert_eq!(trials.len(), 8);
        for (i, trial) in trials.iter().enumerate() {
            assert_eq!(trial.index, i);
            assert_eq!(trial.dim, 2 + i);
            assert_eq!(trial.naive.matrix.dim(), trial.dim);
            assert!(trial.equal);
        }
    }

    #[quickcheck]
    fn trial_deterministic(dim: u8, density: u8, seed: u64) -> bool {
        let params = TrialParams {
            index: 0,
            dim: usize::from(dim % 12) + 1,
            density: density % 99 + 1,
            seed,
        };
        let a = params.run().unwrap();
        let b = params.run().unwrap();
        a.naive.matrix == b.naive.matrix && a.warshall.matrix == b.warshall.matrix
    }

    #[quickcheck]
    fn trial_algorithms_agree(dim: u8, density: u8, seed: u64) -> bool {
        let params = TrialParams {
            index: 0,
            dim: usize::from(dim % 12) + 1,
            density: density % 99 + 1,
            seed,
        };
        params.run().unwrap().equal
    }

    #[quickcheck]
    fn plan_deterministic(seed: u64) -> bool {
        let sweep = Sweep { trials: 10, seed, ..Sweep::default() };
        sweep.plan().unwrap() == sweep.plan().unwrap()
    }
}
