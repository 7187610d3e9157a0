use std::io;
use std::process;

use anyhow::Context;
use clap::Parser;
use pikegrep::cli::{self, Config};
use pikegrep::error::EXIT_TROUBLE;

fn try_main(config: &Config) -> anyhow::Result<bool> {
    cli::init_logging(config.log_level)?;

    let selected = cli::run(config, io::stdin().lock(), io::stdout().lock())
        .context("failed to search standard input")?;
    Ok(selected)
}

// Usage: echo <input_text> | pikegrep [-v] [-c] [-q] -E <pattern>
fn main() {
    let config = Config::parse();
    match try_main(&config) {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("pikegrep: {err:#}");
            process::exit(EXIT_TROUBLE)
        }
    }
}
