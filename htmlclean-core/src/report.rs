//! report.rs - Records what each cleaning step removed.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

/// What one applied step removed from the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalSummaryItem {
    /// Rule name of the step, e.g. `"scripts"`.
    pub step: String,
    /// Number of spans removed.
    pub occurrences: usize,
    /// The removed spans, in buffer order.
    pub removed_texts: Vec<String>,
}

/// Per-step removal history of a single cleaner.
///
/// A step applied twice shows up twice, in application order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    items: Vec<RemovalSummaryItem>,
}

impl CleanReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, step: &str, removed_texts: Vec<String>) {
        debug!("Step '{}' removed {} span(s).", step, removed_texts.len());
        for text in &removed_texts {
            debug!("Step '{}' removed: {:?}", step, text);
        }
        self.items.push(RemovalSummaryItem {
            step: step.to_string(),
            occurrences: removed_texts.len(),
            removed_texts,
        });
    }

    pub fn items(&self) -> &[RemovalSummaryItem] {
        &self.items
    }

    /// Total spans removed across all steps.
    pub fn total_occurrences(&self) -> usize {
        self.items.iter().map(|item| item.occurrences).sum()
    }

    /// Total occurrences recorded for the named step.
    pub fn occurrences_for(&self, step: &str) -> usize {
        self.items
            .iter()
            .filter(|item| item.step == step)
            .map(|item| item.occurrences)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
