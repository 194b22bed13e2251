// htmlclean/src/ui/mod.rs
//! Terminal output helpers: status messages, diffs and removal summaries.

pub mod diff_viewer;
pub mod output_format;
pub mod removal_summary;
