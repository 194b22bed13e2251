// htmlclean/src/lib.rs
//! # htmlclean CLI
//!
//! Command-line front end for `htmlclean-core`: reads HTML from a file or
//! stdin, runs a cleaning pipeline over it and writes the text out.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::clean::{run_clean, CleanOptions};
