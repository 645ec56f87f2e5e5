use std::io;

use anyhow::Context;
use clap::Parser;
use todo::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    todo::cli::run(cli, &mut out).context("todo command failed")?;
    Ok(())
}
