use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use transitive::sweep::Trial;

pub const REPORT_FILE: &str = "output.txt";

/// Write the per-trial correctness report: dimensions, whether the two
/// algorithms agreed, and both final matrices row by row.
pub fn write<W: Write>(w: &mut W, trials: &[Trial]) -> io::Result<()> {
    for trial in trials {
        writeln!(
            w,
            "Input: {} : Matrix dimensions: {}x{}",
            trial.index + 1,
            trial.dim,
            trial.dim
        )?;
        writeln!(
            w,
            "Are matrices obtained using Warshall and Naive algo equal: {}",
            trial.equal
        )?;
        writeln!(w, "Matrix obtained using Naive Algo")?;
        writeln!(w, "{}", trial.naive.matrix)?;
        writeln!(w, "Matrix obtained using Warshall Algo")?;
        writeln!(w, "{}", trial.warshall.matrix)?;
    }
    Ok(())
}

pub fn write_file(trials: &[Trial]) -> io::Result<()> {
    let file = File::create(REPORT_FILE)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer, trials)
}
