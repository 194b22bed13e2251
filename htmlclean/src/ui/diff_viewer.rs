// htmlclean/src/ui/diff_viewer.rs
//! Line diff between the original HTML and the cleaned text.

use anyhow::Result;
use diffy::{create_patch, Line as DiffLine};
use owo_colors::AnsiColors;
use std::io::Write;

use crate::ui::output_format::paint;

/// Writes a unified-style diff: removed lines in red (`- `), added lines in
/// green (`+ `), context lines indented.
pub fn print_diff<W: Write>(
    original: &str,
    cleaned: &str,
    writer: &mut W,
    supports_color: bool,
) -> Result<()> {
    let patch = create_patch(original, cleaned);

    writeln!(writer, "{}", paint("--- Diff View ---", AnsiColors::Yellow, supports_color))?;

    let mut changes = 0usize;
    for hunk in patch.hunks() {
        for line_change in hunk.lines() {
            match line_change {
                DiffLine::Delete(s) => {
                    changes += 1;
                    let line = format!("- {}", s.trim_end_matches('\n'));
                    writeln!(writer, "{}", paint(&line, AnsiColors::Red, supports_color))?;
                }
                DiffLine::Insert(s) => {
                    changes += 1;
                    let line = format!("+ {}", s.trim_end_matches('\n'));
                    writeln!(writer, "{}", paint(&line, AnsiColors::Green, supports_color))?;
                }
                DiffLine::Context(s) => {
                    writeln!(writer, "  {}", s.trim_end_matches('\n'))?;
                }
            }
        }
    }

    if changes == 0 {
        writeln!(writer, "No changes detected.")?;
    }
    writeln!(writer, "{}", paint("--- End Diff ---", AnsiColors::Yellow, supports_color))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_marks_removed_and_added_lines() {
        let mut out = Vec::new();
        print_diff("<b>x</b>\nsame\n", "x\nsame\n", &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("- <b>x</b>\n"));
        assert!(text.contains("+ x\n"));
        assert!(text.contains("  same\n"));
    }

    #[test]
    fn test_diff_without_changes() {
        let mut out = Vec::new();
        print_diff("a\n", "a\n", &mut out, false).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No changes detected."));
    }
}
