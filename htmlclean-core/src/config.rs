//! Pipeline configuration for `htmlclean-core`.
//!
//! A pipeline is an ordered list of cleaning steps plus the way the result is
//! extracted at the end. Pipelines are plain YAML documents:
//!
//! ```yaml
//! steps: [scripts, external_styles, tags]
//! finish: trim
//! ```
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::errors::HtmlCleanError;
use crate::sanitizers::rules::PatternKind;

/// One chainable transformation of the cleaner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanStep {
    /// Remove `<script ...>...</script>` blocks that fit on one line.
    Scripts,
    /// Remove `background`/`background-image` declarations that load a `url(...)`.
    ExternalStyles,
    /// Remove anything shaped like a tag.
    Tags,
    /// Remove `styles="..."` assignments.
    Styles,
    /// Remove `name="..."` assignments.
    Attributes,
}

impl CleanStep {
    pub const ALL: [CleanStep; 5] = [
        CleanStep::Scripts,
        CleanStep::ExternalStyles,
        CleanStep::Tags,
        CleanStep::Styles,
        CleanStep::Attributes,
    ];

    pub fn name(self) -> &'static str {
        self.pattern_kind().name()
    }

    /// The compiled pattern this step replaces with the empty string.
    pub fn pattern_kind(self) -> PatternKind {
        match self {
            CleanStep::Scripts => PatternKind::Scripts,
            CleanStep::ExternalStyles => PatternKind::ExternalStyles,
            CleanStep::Tags => PatternKind::Tags,
            CleanStep::Styles => PatternKind::Styles,
            CleanStep::Attributes => PatternKind::Attributes,
        }
    }
}

impl fmt::Display for CleanStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CleanStep {
    type Err = HtmlCleanError;

    /// Accepts the snake_case names and their kebab-case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        CleanStep::ALL
            .into_iter()
            .find(|step| step.name() == normalized)
            .ok_or_else(|| HtmlCleanError::InvalidStep(s.to_string()))
    }
}

/// How the final string is extracted once all steps have run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishMode {
    /// Trim leading and trailing whitespace.
    #[default]
    Trim,
    /// Strip scripts and tags in one pass, then trim.
    Full,
}

/// An ordered cleaning pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub steps: Vec<CleanStep>,
    pub finish: FinishMode,
}

impl PipelineConfig {
    pub fn new(steps: Vec<CleanStep>, finish: FinishMode) -> Self {
        Self { steps, finish }
    }

    /// Loads a pipeline from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading cleaning pipeline from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read pipeline file {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse pipeline file {}", path.display()))?;

        info!("Loaded {} step(s) from file {}.", config.steps.len(), path.display());
        Ok(config)
    }

    /// Loads the built-in pipeline: scripts, then tags, then trim.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default pipeline from embedded string...");
        let default_yaml = include_str!("../config/default_pipeline.yaml");
        Self::from_yaml_str(default_yaml).context("Failed to parse default pipeline")
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: PipelineConfig = serde_yml::from_str(text)?;
        for warning in config.lint() {
            warn!("{}", warning);
        }
        debug!("Parsed pipeline: steps={:?}, finish={:?}", config.steps, config.finish);
        Ok(config)
    }

    /// Returns human-readable warnings for orderings that make a step inert.
    ///
    /// These are legal pipelines; they just do less than they appear to.
    pub fn lint(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if let Some(tags_at) = self.steps.iter().position(|s| *s == CleanStep::Tags) {
            if self.steps[tags_at + 1..].contains(&CleanStep::Scripts) {
                warnings.push(
                    "Step 'scripts' runs after 'tags'; script markers are already gone, so script bodies will be kept."
                        .to_string(),
                );
            }
        }
        if self.steps.is_empty() && self.finish == FinishMode::Trim {
            warnings.push("Pipeline has no steps; input will only be trimmed.".to_string());
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_from_str_accepts_both_spellings() {
        assert_eq!("external_styles".parse::<CleanStep>().unwrap(), CleanStep::ExternalStyles);
        assert_eq!("External-Styles".parse::<CleanStep>().unwrap(), CleanStep::ExternalStyles);
        assert_eq!(" tags ".parse::<CleanStep>().unwrap(), CleanStep::Tags);
    }

    #[test]
    fn test_step_from_str_rejects_unknown() {
        let err = "style".parse::<CleanStep>().unwrap_err();
        assert!(matches!(err, HtmlCleanError::InvalidStep(ref s) if s == "style"));
    }

    #[test]
    fn test_step_display_round_trips_through_from_str() {
        for step in CleanStep::ALL {
            assert_eq!(step.to_string().parse::<CleanStep>().unwrap(), step);
        }
    }

    #[test]
    fn test_default_pipeline() {
        let config = PipelineConfig::load_default().unwrap();
        assert_eq!(config.steps, vec![CleanStep::Scripts, CleanStep::Tags]);
        assert_eq!(config.finish, FinishMode::Trim);
    }

    #[test]
    fn test_lint_flags_scripts_after_tags() {
        let config = PipelineConfig::new(vec![CleanStep::Tags, CleanStep::Scripts], FinishMode::Trim);
        assert_eq!(config.lint().len(), 1);

        let config = PipelineConfig::new(vec![CleanStep::Scripts, CleanStep::Tags], FinishMode::Trim);
        assert!(config.lint().is_empty());
    }

    #[test]
    fn test_missing_finish_defaults_to_trim() {
        let config = PipelineConfig::from_yaml_str("steps: [attributes]").unwrap();
        assert_eq!(config.steps, vec![CleanStep::Attributes]);
        assert_eq!(config.finish, FinishMode::Trim);
    }
}
