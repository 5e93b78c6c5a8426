use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use crate::commands::eval;

/// Evaluate every non-blank line of `input`, writing one result per line.
///
/// Lines starting with `#` are comments. A failing line prints `error: ...`
/// and evaluation continues with the next one.
pub fn run_lines<R: BufRead, W: Write>(input: R, output: &mut W, radix: u32) -> Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match eval::evaluate(trimmed, radix) {
            Ok(value) => writeln!(output, "{value}")?,
            Err(e) => writeln!(output, "error: {e:#}")?,
        }
    }
    output.flush()?;
    Ok(())
}

pub fn run_repl(file: Option<&str>, radix: u32) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match file {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("Failed to open {path}"))?;
            run_lines(BufReader::new(f), &mut out, radix)
        }
        None => run_lines(io::stdin().lock(), &mut out, radix),
    }
}
