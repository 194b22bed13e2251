//! Pattern definitions and compilation for the HTML cleaner.
//!
//! The cleaner does not parse HTML. Every transformation is a single
//! pattern-replace over the whole buffer, and this module owns those patterns:
//! `rules` describes their sources and `compiler` turns them into a shared,
//! process-wide `CompiledPatterns` set.

pub mod compiler;
pub mod rules;
