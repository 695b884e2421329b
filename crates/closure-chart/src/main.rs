//! Renders the closure comparison: runs the sweep, draws one timing scatter
//! chart per algorithm and writes the per-trial correctness report.

use std::{io, path::PathBuf};

use rand::Rng;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use transitive::{
    closure::{ClosureMethod, ClosureOutcome, Naive, Warshall},
    sweep::Trial,
};

use crate::config::RunConfig;

mod config;
mod plot;
mod report;

const NAIVE_COLOR: [u8; 3] = [230, 0, 73];
const WARSHALL_COLOR: [u8; 3] = [11, 180, 255];

fn main() -> io::Result<()> {
    let config = RunConfig::default();
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let sweep = config.sweep(seed);
    let plan = sweep.plan().map_err(io::Error::other)?;
    println!(
        "comparing closure algorithms over dimensions {}..={} (seed {})",
        sweep.start_dim,
        sweep.start_dim + sweep.trials - 1,
        seed
    );

    // Every trial is a pure function of its parameters, so the sweep fans
    // out over a worker pool.
    let trials: Vec<Trial> = plan
        .into_par_iter()
        .map(|params| params.run())
        .collect::<Result<_, &'static str>>()
        .map_err(io::Error::other)?;

    let unequal = trials.iter().filter(|t| !t.equal).count();
    if unequal == 0 {
        println!("all {} trials agree", trials.len());
    } else {
        println!(
            "{} of {} trials DISAGREE between the algorithms, see {}",
            unequal,
            trials.len(),
            report::REPORT_FILE
        );
    }

    save_chart(Naive::NAME, &trials, |t| &t.naive, NAIVE_COLOR, &config)?;
    save_chart(Warshall::NAME, &trials, |t| &t.warshall, WARSHALL_COLOR, &config)?;
    report::write_file(&trials)?;
    println!(
        "wrote {}.png, {}.png and {}",
        Naive::NAME,
        Warshall::NAME,
        report::REPORT_FILE
    );
    Ok(())
}

fn save_chart(
    name: &str,
    trials: &[Trial],
    pick: fn(&Trial) -> &ClosureOutcome,
    color: [u8; 3],
    config: &RunConfig,
) -> io::Result<()> {
    let points: Vec<(f64, f64)> = trials
        .iter()
        .map(|t| (t.dim as f64, pick(t).elapsed.as_secs_f64() * 1000.0))
        .collect();
    let image = plot::scatter(&points, config.width, config.height, color);
    let path = PathBuf::from(format!("{name}.png"));
    plot::save_png(&path, &image)
}
