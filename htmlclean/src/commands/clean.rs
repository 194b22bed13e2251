//! Clean command implementation: reads HTML, runs the pipeline, writes the result.

use anyhow::{Context, Result};
use htmlclean_core::{CleanReport, HtmlCleaner, PipelineConfig};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::ui::{diff_viewer, output_format, removal_summary};

/// Options for a single clean run.
pub struct CleanOptions {
    pub input: String,
    pub output_path: Option<PathBuf>,
    pub diff: bool,
    pub summary: bool,
    pub quiet: bool,
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Picks the pipeline: `--config` file, then step flags, then the built-in default.
pub fn resolve_pipeline(cli: &Cli) -> Result<PipelineConfig> {
    if let Some(path) = &cli.config {
        let mut config = PipelineConfig::load_from_file(path)?;
        if cli.full {
            debug!("--full overrides the finish mode of {}", path.display());
            config.finish = cli.finish_mode();
        }
        return Ok(config);
    }
    if let Some(config) = cli.flag_pipeline() {
        debug!("Using pipeline from flags: {:?}", config);
        return Ok(config);
    }
    PipelineConfig::load_default()
}

/// Reads all input from `path`, or from stdin when `path` is `None`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            info!("Reading input from stdin...");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Runs the pipeline over `opts.input` and emits the result.
pub fn run_clean(config: &PipelineConfig, opts: CleanOptions) -> Result<()> {
    info!("Starting clean operation.");

    let (cleaned, report) = HtmlCleaner::new()?
        .load(opts.input.as_str())
        .apply_pipeline(config)
        .context("Cleaning failed")?;
    let cleaned = cleaned.unwrap_or_default();

    debug!(
        "Content cleaned. Original length: {}, cleaned length: {}",
        opts.input.len(),
        cleaned.len()
    );

    handle_primary_output(&opts, &cleaned)?;
    handle_removal_summary(&report, &opts)?;

    info!("Clean operation completed.");
    Ok(())
}

fn handle_primary_output(opts: &CleanOptions, cleaned: &str) -> Result<()> {
    if let Some(path) = &opts.output_path {
        if !opts.quiet {
            info_msg(format!("Writing cleaned content to file: {}", path.display()));
        }
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        if opts.diff {
            diff_viewer::print_diff(&opts.input, cleaned, &mut file, false)?;
        } else {
            writeln!(file, "{}", cleaned)?;
        }
    } else {
        info!("Writing cleaned content to stdout.");
        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        let mut writer = stdout.lock();
        if opts.diff {
            diff_viewer::print_diff(&opts.input, cleaned, &mut writer, supports_color)?;
        } else {
            writeln!(writer, "{}", cleaned)?;
        }
    }
    Ok(())
}

fn handle_removal_summary(report: &CleanReport, opts: &CleanOptions) -> Result<()> {
    if opts.summary && !opts.quiet {
        info!("Displaying removal summary.");
        let stderr_supports_color = io::stderr().is_terminal();
        removal_summary::print_summary(report, &mut io::stderr(), stderr_supports_color)?;
    }
    Ok(())
}
