// htmlclean/src/ui/output_format.rs
//! Coloured status messages for stderr.

use owo_colors::{AnsiColors, OwoColorize};
use std::io::{self, Write};

/// Paints `text` in `color` when `enabled`, otherwise returns it unchanged.
pub fn paint(text: &str, color: AnsiColors, enabled: bool) -> String {
    if enabled {
        text.color(color).to_string()
    } else {
        text.to_string()
    }
}

fn print_message<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    color: AnsiColors,
    supports_color: bool,
) -> io::Result<()> {
    writeln!(writer, "{} {}", paint(prefix, color, supports_color), msg)
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    print_message(writer, "[info]", msg, AnsiColors::Cyan, supports_color)
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    print_message(writer, "[warn]", msg, AnsiColors::Yellow, supports_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    print_message(writer, "[error]", msg, AnsiColors::Red, supports_color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output_without_color() {
        let mut out = Vec::new();
        print_warn_message(&mut out, "careful", false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[warn] careful\n");
    }

    #[test]
    fn test_color_adds_escape_codes() {
        let painted = paint("x", AnsiColors::Red, true);
        assert!(painted.contains("\u{1b}["));
        assert!(painted.contains('x'));
    }
}
