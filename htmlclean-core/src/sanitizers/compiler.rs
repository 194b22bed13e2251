//! compiler.rs - Compiles and caches the built-in cleaning patterns.
//!
//! The pattern set never changes at runtime, so it is compiled once and the
//! result is shared behind an `Arc` by every `HtmlCleaner` in the process.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::sync::{Arc, RwLock};

use crate::errors::HtmlCleanError;
use crate::sanitizers::rules::PatternKind;

/// Upper bound for the compiled size of a single pattern.
const PATTERN_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A single compiled cleaning pattern.
#[derive(Debug)]
pub struct CompiledPattern {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// Which built-in pattern this is.
    pub kind: PatternKind,
}

impl CompiledPattern {
    /// The stable rule name, e.g. `"scripts"`.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// The full set of compiled patterns, one per `PatternKind`.
#[derive(Debug)]
pub struct CompiledPatterns {
    patterns: Vec<CompiledPattern>,
}

impl CompiledPatterns {
    /// Returns the compiled pattern for `kind`.
    pub fn get(&self, kind: PatternKind) -> &CompiledPattern {
        &self.patterns[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.iter()
    }
}

lazy_static! {
    /// Process-wide cache of the compiled pattern set.
    static ref COMPILED_PATTERNS_CACHE: RwLock<Option<Arc<CompiledPatterns>>> = RwLock::new(None);
}

/// Compiles every built-in pattern, failing on the first one that does not build.
pub fn compile_patterns() -> Result<CompiledPatterns, HtmlCleanError> {
    debug!("Starting compilation of {} cleaning patterns.", PatternKind::ALL.len());

    let mut patterns = Vec::with_capacity(PatternKind::ALL.len());

    for kind in PatternKind::ALL {
        let source = kind.source();
        debug!("Attempting to compile pattern '{}': {:?}", kind, source);

        // Line-terminator handling is spelled out in the sources themselves,
        // so the builder flags stay at their defaults.
        let regex = RegexBuilder::new(&source)
            .multi_line(false)
            .dot_matches_new_line(false)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map_err(|e| HtmlCleanError::PatternCompilation(kind.name().to_string(), e))?;

        debug!(
            target: "htmlclean_core::sanitizer",
            "Pattern '{}' compiled successfully.",
            kind
        );
        patterns.push(CompiledPattern { regex, kind });
    }

    debug!("Finished compiling patterns. Total compiled: {}.", patterns.len());
    Ok(CompiledPatterns { patterns })
}

/// Gets the shared `CompiledPatterns`, compiling them on first use.
pub fn get_or_compile_patterns() -> Result<Arc<CompiledPatterns>, HtmlCleanError> {
    {
        let cache = COMPILED_PATTERNS_CACHE
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(patterns) = cache.as_ref() {
            return Ok(Arc::clone(patterns));
        }
    }

    debug!("Compiled patterns not found in cache. Compiling now.");
    let compiled = Arc::new(compile_patterns()?);

    let mut cache = COMPILED_PATTERNS_CACHE
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    // Another thread may have won the race; keep whichever landed first.
    let shared = cache.get_or_insert_with(|| Arc::clone(&compiled));
    Ok(Arc::clone(shared))
}
