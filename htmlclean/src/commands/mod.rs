// htmlclean/src/commands/mod.rs
//! Command implementations for the htmlclean binary.

pub mod clean;
