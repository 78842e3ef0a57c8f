//! CLI entry point for the trait collection generator

use clap::Parser;
use traitloom::io::cli::{Cli, Runner};
use traitloom::io::logging::init_logging;

fn main() -> traitloom::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet());
    let runner = Runner::new(cli);
    runner.process()
}
