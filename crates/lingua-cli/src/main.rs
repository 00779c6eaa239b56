//! `lingua` entry point

use anyhow::Result;
use clap::Parser;
use lingua_cli::{bootstrap, execute, Args, Outcome};
use lingua_common::init_logging;
use lingua_config::ConfigLoader;
use lingua_i18n::global;
use std::io;
use std::process::ExitCode;

fn run(args: Args) -> Result<Outcome> {
    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    if let Some(dir) = args.locales_dir {
        config.localization.locales_dir = Some(dir);
    }

    init_logging(config.logging.to_logging_config())?;
    bootstrap(&config, global::resolver())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&args.command, global::resolver(), &mut out)
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::Incomplete) => ExitCode::from(2),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
