// htmlclean-core/src/lib.rs
//! # htmlclean Core Library
//!
//! `htmlclean-core` strips scripts, external background images, inline
//! `styles`, attributes and tags out of HTML text through a small set of
//! pattern-replace steps chained on an owned [`HtmlCleaner`].
//!
//! It is not an HTML parser. There is no DOM, nested or malformed markup is
//! not handled, and nothing here is safe against input crafted to slip past
//! the patterns. Every quirk of the patterns (greedy spans, no matching across
//! line breaks, the `styles=` attribute name) is intentional and covered by
//! tests.
//!
//! ## Modules
//!
//! * `cleaner`: The fluent [`HtmlCleaner`].
//! * `config`: [`CleanStep`], [`FinishMode`] and YAML-backed [`PipelineConfig`].
//! * `sanitizers`: Pattern sources and the shared compiled pattern set.
//! * `report`: Per-step removal reporting.
//! * `headless`: One-shot cleaning of a string with a pipeline.
//! * `errors`: The [`HtmlCleanError`] type.
//!
//! ## Usage Example
//!
//! ```rust
//! use htmlclean_core::HtmlCleaner;
//!
//! fn main() -> Result<(), htmlclean_core::HtmlCleanError> {
//!     let text = HtmlCleaner::new()?
//!         .load(r##"<a href="#" class="btn">Johny Rage</a>"##)
//!         .full();
//!     assert_eq!(text.as_deref(), Some("Johny Rage"));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Chained transformations return `Result<HtmlCleaner, HtmlCleanError>`; the
//! only runtime failure is calling one before anything was loaded. File and
//! configuration helpers return `anyhow::Result` with context attached.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod cleaner;
pub mod config;
pub mod errors;
pub mod headless;
pub mod report;
pub mod sanitizers;

pub use cleaner::HtmlCleaner;
pub use config::{CleanStep, FinishMode, PipelineConfig};
pub use errors::HtmlCleanError;
pub use headless::headless_clean_string;
pub use report::{CleanReport, RemovalSummaryItem};
pub use sanitizers::compiler::{compile_patterns, get_or_compile_patterns, CompiledPattern, CompiledPatterns};
pub use sanitizers::rules::PatternKind;
