// htmlclean/src/cli.rs
//! Command-line interface definition for the htmlclean binary.
//! License: MIT OR Apache-2.0

use clap::Parser;
use htmlclean_core::{CleanStep, FinishMode, PipelineConfig};
use log::LevelFilter;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "htmlclean",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strip scripts, styles, attributes and tags from HTML text",
    long_about = "htmlclean removes scripts, external background images, `styles` attributes, attributes and tags from HTML using simple pattern matching. It is not an HTML parser: matches never cross a line break and quoted spans are greedy.\n\nStep flags run in a fixed order: scripts, external styles, styles, attributes, tags. Without step flags or --config, scripts and tags are stripped.",
)]
pub struct Cli {
    /// Read input from a file instead of stdin.
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Write output to a file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Load the cleaning pipeline from a YAML file.
    #[arg(
        long = "config",
        value_name = "FILE",
        env = "HTMLCLEAN_CONFIG",
        conflicts_with_all = ["scripts", "external_styles", "styles", "attributes", "tags"]
    )]
    pub config: Option<PathBuf>,

    /// Remove <script>...</script> blocks.
    #[arg(long)]
    pub scripts: bool,

    /// Remove background / background-image url(...) declarations.
    #[arg(long = "external-styles")]
    pub external_styles: bool,

    /// Remove styles="..." assignments.
    #[arg(long)]
    pub styles: bool,

    /// Remove name="..." assignments.
    #[arg(long)]
    pub attributes: bool,

    /// Remove anything shaped like a tag.
    #[arg(long)]
    pub tags: bool,

    /// Finish by stripping scripts and tags in one pass before trimming.
    #[arg(long)]
    pub full: bool,

    /// Show a unified diff between input and output instead of the output.
    #[arg(long, short = 'D')]
    pub diff: bool,

    /// Print a per-step removal summary to stderr.
    #[arg(long)]
    pub summary: bool,

    /// Suppress informational messages and logging.
    #[arg(long, short = 'q', conflicts_with = "debug")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd')]
    pub debug: bool,
}

impl Cli {
    /// Steps selected by flags, in their fixed application order.
    pub fn selected_steps(&self) -> Vec<CleanStep> {
        [
            (self.scripts, CleanStep::Scripts),
            (self.external_styles, CleanStep::ExternalStyles),
            (self.styles, CleanStep::Styles),
            (self.attributes, CleanStep::Attributes),
            (self.tags, CleanStep::Tags),
        ]
        .into_iter()
        .filter_map(|(on, step)| on.then_some(step))
        .collect()
    }

    /// The pipeline described by flags alone, if any step flag or `--full` is set.
    pub fn flag_pipeline(&self) -> Option<PipelineConfig> {
        let steps = self.selected_steps();
        if steps.is_empty() && !self.full {
            return None;
        }
        Some(PipelineConfig::new(steps, self.finish_mode()))
    }

    pub fn finish_mode(&self) -> FinishMode {
        if self.full { FinishMode::Full } else { FinishMode::Trim }
    }

    /// Log level forced by flags; `None` defers to `RUST_LOG`.
    pub fn log_level(&self) -> Option<LevelFilter> {
        if self.quiet {
            Some(LevelFilter::Off)
        } else if self.debug {
            Some(LevelFilter::Debug)
        } else {
            None
        }
    }
}
