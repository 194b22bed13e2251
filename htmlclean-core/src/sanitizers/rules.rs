//! rules.rs - Sources of the built-in cleaning patterns.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;

/// Any character except a line terminator (`\n`, `\r`, U+0085, U+2028, U+2029).
///
/// Used wherever a pattern says "any character", so a span never crosses a
/// line break. Multi-line scripts and attribute values are left alone.
const LINE_CHAR: &str = r"[^\n\r\x{85}\x{2028}\x{2029}]";

/// ASCII whitespace: space, tab, newline, vertical tab, form feed, carriage return.
const ASCII_SPACE: &str = r"[\t\n\x0B\x0C\r ]";

/// Identifies one of the built-in cleaning patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Scripts,
    ExternalStyles,
    Tags,
    Styles,
    Attributes,
    /// Scripts or tags, in a single pass.
    Full,
}

impl PatternKind {
    /// All kinds, in compilation order. `CompiledPatterns` indexes by this order.
    pub const ALL: [PatternKind; 6] = [
        PatternKind::Scripts,
        PatternKind::ExternalStyles,
        PatternKind::Tags,
        PatternKind::Styles,
        PatternKind::Attributes,
        PatternKind::Full,
    ];

    /// Stable rule name used in logs and removal reports.
    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Scripts => "scripts",
            PatternKind::ExternalStyles => "external_styles",
            PatternKind::Tags => "tags",
            PatternKind::Styles => "styles",
            PatternKind::Attributes => "attributes",
            PatternKind::Full => "full",
        }
    }

    /// Position of this kind inside `ALL`.
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// The regular expression source for this kind.
    ///
    /// * `Scripts`: `<script`, anything on the same line (greedy), `</script>`.
    /// * `ExternalStyles`: `background:` or `background-image:` with a `url(...)`
    ///   value and an optional trailing `;`.
    /// * `Tags`: `<`, any run of non-`>` characters, `>`.
    /// * `Styles`: `styles="..."`, greedy to the last quote on the line. The
    ///   attribute name really is `styles`; a plain `style="..."` is not matched.
    /// * `Attributes`: a lowercase name followed by `="..."`, greedy to the last
    ///   quote on the line, wherever it appears.
    /// * `Full`: `Scripts` or `Tags`, the script alternative tried first.
    pub fn source(self) -> String {
        match self {
            PatternKind::Scripts => script_source(),
            PatternKind::ExternalStyles => format!(
                r"background(-image)?:{ws}?url{ws}*\({ws}*(?P<url>[^)]*){ws}*\){ws}*;?",
                ws = ASCII_SPACE
            ),
            PatternKind::Tags => tag_source().to_string(),
            PatternKind::Styles => format!(r#"styles="{}*""#, LINE_CHAR),
            PatternKind::Attributes => format!(r#"[a-z]*="{}*""#, LINE_CHAR),
            PatternKind::Full => format!("{}|{}", script_source(), tag_source()),
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn script_source() -> String {
    format!("<script{}*</script>", LINE_CHAR)
}

fn tag_source() -> &'static str {
    "<[^>]*>"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_all_order() {
        for (i, kind) in PatternKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_full_source_combines_scripts_and_tags() {
        let full = PatternKind::Full.source();
        assert!(full.starts_with(&PatternKind::Scripts.source()));
        assert!(full.ends_with(&PatternKind::Tags.source()));
    }

    #[test]
    fn test_styles_pattern_keeps_plural_name() {
        assert!(PatternKind::Styles.source().starts_with("styles=\""));
    }
}
