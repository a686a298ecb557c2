use anyhow::Context;
use clap::Parser;
use smhi_metobs::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli).context("smhi-metobs failed")
}
