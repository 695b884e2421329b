use transitive::sweep::{DENSITY_HI, DENSITY_LO, DIM_START, Sweep, TRIALS};

/// All parameters used for one comparison run.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RunConfig {
    /// Dimension of the first generated matrix; later trials grow by one.
    pub start_dim: usize,

    /// Number of matrices to sweep over.
    pub trials: usize,

    /// Inclusive bounds of the density percent drawn per matrix.
    pub density: (u8, u8),

    /// Fixed master seed, or `None` to draw a fresh one per run.
    pub seed: Option<u64>,

    /// Pixel width of each chart.
    pub width: usize,

    /// Pixel height of each chart.
    pub height: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            start_dim: DIM_START,
            trials: TRIALS,
            density: (DENSITY_LO, DENSITY_HI),
            seed: None,
            width: 2000,
            height: 800,
        }
    }
}

impl RunConfig {
    pub fn sweep(&self, seed: u64) -> Sweep {
        Sweep {
            start_dim: self.start_dim,
            trials: self.trials,
            density: self.density,
            seed,
        }
    }
}
