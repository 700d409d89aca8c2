mod commands;
mod terminal;

use std::io;

use anyhow::Context;
use commands::CommandLine;
use greetr_common::{config::Config, script};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let _commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config::default();
    tracing::debug!(?cfg, "starting run");

    let mut stdout = io::stdout().lock();
    script::run(&cfg, &mut stdout).context("failed to write output to stdout")?;

    Ok(())
}
