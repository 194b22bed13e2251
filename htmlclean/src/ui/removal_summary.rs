// htmlclean/src/ui/removal_summary.rs
//! Prints the per-step removal summary.

use anyhow::Result;
use htmlclean_core::CleanReport;
use owo_colors::AnsiColors;
use std::io::Write;

use crate::ui::output_format::paint;

/// Writes one line per step (in first-applied order) with its total removals.
pub fn print_summary<W: Write>(report: &CleanReport, writer: &mut W, supports_color: bool) -> Result<()> {
    writeln!(writer, "{}", paint("--- Removal Summary ---", AnsiColors::Yellow, supports_color))?;

    let mut totals: Vec<(&str, usize)> = Vec::new();
    for item in report.items() {
        match totals.iter_mut().find(|(step, _)| *step == item.step) {
            Some((_, count)) => *count += item.occurrences,
            None => totals.push((item.step.as_str(), item.occurrences)),
        }
    }

    if report.total_occurrences() == 0 {
        writeln!(writer, "No content removed.")?;
    } else {
        for (step, count) in totals.into_iter().filter(|(_, count)| *count > 0) {
            writeln!(
                writer,
                "{} ({} occurrences)",
                paint(step, AnsiColors::Magenta, supports_color),
                count
            )?;
        }
    }
    writeln!(writer, "{}", paint("--- End Summary ---", AnsiColors::Yellow, supports_color))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use htmlclean_core::HtmlCleaner;

    #[test]
    fn test_summary_lists_steps_with_removals() {
        let (_, report) = HtmlCleaner::new()
            .unwrap()
            .load("<p><script>x()</script>hi</p>")
            .remove_scripts()
            .unwrap()
            .remove_styles()
            .unwrap()
            .remove_tags()
            .unwrap()
            .finish_with_report();

        let mut out = Vec::new();
        print_summary(&report, &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("scripts (1 occurrences)"));
        assert!(text.contains("tags (2 occurrences)"));
        assert!(!text.contains("styles"));
    }

    #[test]
    fn test_summary_when_nothing_removed() {
        let mut out = Vec::new();
        print_summary(&CleanReport::new(), &mut out, false).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No content removed."));
    }
}
