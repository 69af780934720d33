use anyhow::{Context, Result};
use clap::Parser;
use pstats::cli::FindgenCli;
use pstats::findgen::write_indices;
use std::io::{self, BufWriter, Write};

fn main() -> Result<()> {
    let cli = FindgenCli::parse();

    let mut out = BufWriter::new(io::stdout().lock());
    write_indices(&mut out, cli.count, cli.offset, cli.reverse)
        .context("failed to write indices")?;
    out.flush().context("failed to flush indices")?;
    Ok(())
}
