// htmlclean-core/src/cleaner.rs
//! The fluent `HtmlCleaner`.
//!
//! A cleaner holds one text buffer. Each `remove_*` call consumes the cleaner,
//! replaces the buffer with a freshly built string that has every match of the
//! step's pattern removed, and hands the cleaner back so calls can be chained.
//! `finish` and `full` end the chain and return the resulting text.
//!
//! ```rust
//! use htmlclean_core::HtmlCleaner;
//!
//! # fn main() -> Result<(), htmlclean_core::HtmlCleanError> {
//! let text = HtmlCleaner::new()?
//!     .load("<div><script>alert('x');</script>Hello</div>")
//!     .remove_scripts()?
//!     .remove_tags()?
//!     .finish();
//! assert_eq!(text.as_deref(), Some("Hello"));
//! # Ok(())
//! # }
//! ```
//!
//! This is pattern matching, not parsing. Matches never cross a line break,
//! and the `.*`-style spans are greedy, so several scripts or attribute values
//! on one line are removed as one span together with whatever sits between
//! them.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::Regex;
use std::sync::Arc;

use crate::config::{CleanStep, FinishMode, PipelineConfig};
use crate::errors::HtmlCleanError;
use crate::report::CleanReport;
use crate::sanitizers::compiler::{get_or_compile_patterns, CompiledPatterns};
use crate::sanitizers::rules::PatternKind;

/// Chainable, pattern-based HTML cleaner. See the module docs.
#[derive(Debug, Clone)]
pub struct HtmlCleaner {
    html: Option<String>,
    patterns: Arc<CompiledPatterns>,
    report: CleanReport,
}

impl HtmlCleaner {
    /// Creates an empty cleaner backed by the shared compiled pattern set.
    pub fn new() -> Result<Self, HtmlCleanError> {
        Ok(Self::with_patterns(get_or_compile_patterns()?))
    }

    pub fn with_patterns(patterns: Arc<CompiledPatterns>) -> Self {
        Self {
            html: None,
            patterns,
            report: CleanReport::new(),
        }
    }

    /// Replaces the buffer with `html` and clears the removal report.
    pub fn load(self, html: impl Into<String>) -> Self {
        self.load_optional(Some(html))
    }

    /// Like `load`, but `None` leaves the cleaner unloaded.
    ///
    /// Transformations on an unloaded cleaner fail with
    /// [`HtmlCleanError::NotLoaded`]; `finish` and `full` return `None`.
    pub fn load_optional<S: Into<String>>(mut self, html: Option<S>) -> Self {
        self.html = html.map(Into::into);
        self.report = CleanReport::new();
        debug!(
            "Loaded {} byte(s) into cleaner.",
            self.html.as_ref().map_or(0, String::len)
        );
        self
    }

    /// Removes `<script ...>...</script>` spans.
    ///
    /// Greedy: with two scripts on one line, everything from the first
    /// `<script` to the last `</script>` goes, including text between them.
    pub fn remove_scripts(self) -> Result<Self, HtmlCleanError> {
        self.apply_step(CleanStep::Scripts)
    }

    /// Removes `background: url(...)` and `background-image: url(...)`
    /// declarations together with a trailing `;`.
    pub fn remove_external_styles(self) -> Result<Self, HtmlCleanError> {
        self.apply_step(CleanStep::ExternalStyles)
    }

    /// Removes every `<...>` span. Text inside `<script>` blocks is kept.
    pub fn remove_tags(self) -> Result<Self, HtmlCleanError> {
        self.apply_step(CleanStep::Tags)
    }

    /// Removes `styles="..."` assignments. Note the plural: `style="..."` is
    /// left untouched.
    pub fn remove_styles(self) -> Result<Self, HtmlCleanError> {
        self.apply_step(CleanStep::Styles)
    }

    /// Removes `name="..."` assignments wherever they appear, inside a tag or not.
    pub fn remove_attributes(self) -> Result<Self, HtmlCleanError> {
        self.apply_step(CleanStep::Attributes)
    }

    /// Runs a single step by name.
    pub fn apply_step(mut self, step: CleanStep) -> Result<Self, HtmlCleanError> {
        let html = self
            .html
            .as_deref()
            .ok_or(HtmlCleanError::NotLoaded(operation_name(step)))?;
        let pattern = self.patterns.get(step.pattern_kind());
        let (cleaned, removed) = strip_matches(&pattern.regex, html);
        self.report.record(pattern.name(), removed);
        self.html = Some(cleaned);
        Ok(self)
    }

    pub fn apply_steps(self, steps: &[CleanStep]) -> Result<Self, HtmlCleanError> {
        steps.iter().try_fold(self, |cleaner, step| cleaner.apply_step(*step))
    }

    /// Runs every step of `config`, then extracts with its finish mode.
    ///
    /// An unloaded cleaner with no steps passes through as `None`.
    pub fn apply_pipeline(
        self,
        config: &PipelineConfig,
    ) -> Result<(Option<String>, CleanReport), HtmlCleanError> {
        Ok(self.apply_steps(&config.steps)?.extract(config.finish))
    }

    /// Ends the chain with the given finish mode, returning the report as well.
    pub fn extract(self, mode: FinishMode) -> (Option<String>, CleanReport) {
        match mode {
            FinishMode::Trim => self.finish_with_report(),
            FinishMode::Full => self.full_with_report(),
        }
    }

    /// Strips scripts and tags in one pass and trims the result.
    ///
    /// An absent or empty buffer is returned unchanged.
    pub fn full(self) -> Option<String> {
        self.full_with_report().0
    }

    pub fn full_with_report(mut self) -> (Option<String>, CleanReport) {
        match self.html.take() {
            Some(html) if !html.is_empty() => {
                let pattern = self.patterns.get(PatternKind::Full);
                let (cleaned, removed) = strip_matches(&pattern.regex, &html);
                self.report.record(pattern.name(), removed);
                (Some(trim_text(&cleaned).to_string()), self.report)
            }
            passthrough => (passthrough, self.report),
        }
    }

    /// Returns the buffer with leading and trailing whitespace removed.
    ///
    /// An absent or empty buffer is returned unchanged.
    pub fn finish(self) -> Option<String> {
        self.finish_with_report().0
    }

    pub fn finish_with_report(self) -> (Option<String>, CleanReport) {
        let html = self.html.map(|html| {
            let trimmed = trim_text(&html);
            if trimmed.len() == html.len() {
                html
            } else {
                trimmed.to_string()
            }
        });
        (html, self.report)
    }

    /// The current buffer, if loaded.
    pub fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }

    pub fn report(&self) -> &CleanReport {
        &self.report
    }
}

fn operation_name(step: CleanStep) -> &'static str {
    match step {
        CleanStep::Scripts => "remove_scripts",
        CleanStep::ExternalStyles => "remove_external_styles",
        CleanStep::Tags => "remove_tags",
        CleanStep::Styles => "remove_styles",
        CleanStep::Attributes => "remove_attributes",
    }
}

/// Builds a new string with every match of `regex` removed.
/// Returns the new string and the removed spans in order.
fn strip_matches(regex: &Regex, input: &str) -> (String, Vec<String>) {
    let mut cleaned = String::with_capacity(input.len());
    let mut removed = Vec::new();
    let mut last_end = 0usize;
    for m in regex.find_iter(input) {
        cleaned.push_str(&input[last_end..m.start()]);
        removed.push(m.as_str().to_string());
        last_end = m.end();
    }
    cleaned.push_str(&input[last_end..]);
    (cleaned, removed)
}

/// Trims every leading and trailing character at or below U+0020
/// (ASCII control characters and space). Other Unicode whitespace stays.
fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}
