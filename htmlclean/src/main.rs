// htmlclean/src/main.rs
//! htmlclean entry point.

use anyhow::Result;
use clap::Parser;
use htmlclean::cli::Cli;
use htmlclean::commands::clean::{error_msg, read_input, resolve_pipeline, run_clean, warn_msg, CleanOptions};
use htmlclean::logger;
use log::info;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(cli.log_level());
    info!("htmlclean started. Version: {}", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error_msg(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_pipeline(&cli)?;
    let input = read_input(cli.input_file.as_deref())?;

    if input.is_empty() && !cli.quiet {
        warn_msg("Input is empty; nothing to clean.");
    }

    run_clean(
        &config,
        CleanOptions {
            input,
            output_path: cli.output,
            diff: cli.diff,
            summary: cli.summary,
            quiet: cli.quiet,
        },
    )
}
