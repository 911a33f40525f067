//! CLI entry point for the sliding-block puzzle search

use blockslide::io::cli::{Cli, Runner};
use clap::Parser;

fn main() -> blockslide::Result<()> {
    let cli = Cli::parse();
    Runner::new(cli).run().map(|_outcome| ())
}
