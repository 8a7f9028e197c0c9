//! Bray-Curtis Distance Matrix Binary
//!
//! Reads an OTU abundance table, computes every pairwise dissimilarity, and
//! writes the labeled matrix.

use anyhow::Context;
use braycurtis::*;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.level());
    let table = args
        .reader()
        .open(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let matrix = args
        .builder()
        .build(&table)
        .context("failed to build distance matrix")?;
    args.writer()
        .create(&args.output, &matrix)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    log::info!("wrote {}x{} matrix", matrix.len(), matrix.len());
    Ok(())
}
