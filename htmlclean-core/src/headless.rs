// htmlclean-core/src/headless.rs
//! Convenience wrapper for one-shot, non-interactive cleaning.

use anyhow::{Context, Result};
use crate::cleaner::HtmlCleaner;
use crate::config::PipelineConfig;

/// Cleans `content` with every step of `config` and returns the final text.
///
/// Empty input comes back as an empty string.
pub fn headless_clean_string(config: &PipelineConfig, content: &str) -> Result<String> {
    let (cleaned, _) = HtmlCleaner::new()
        .context("Failed to initialise HTML cleaner")?
        .load(content)
        .apply_pipeline(config)
        .context("Failed to apply cleaning pipeline")?;

    Ok(cleaned.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CleanStep, FinishMode};
    use anyhow::Result;

    #[test]
    fn test_headless_clean_string_default_pipeline() -> Result<()> {
        let config = PipelineConfig::load_default()?;
        let content = "  <div><script>alert('x');</script><b>Johny</b> Rage</div>\n";

        let cleaned = headless_clean_string(&config, content)?;

        assert_eq!(cleaned, "Johny Rage");
        Ok(())
    }

    #[test]
    fn test_headless_clean_string_full_finish() -> Result<()> {
        let config = PipelineConfig::new(vec![CleanStep::ExternalStyles], FinishMode::Full);
        let content = r#"<p style="background:url(x.png);">text</p>"#;

        assert_eq!(headless_clean_string(&config, content)?, "text");
        Ok(())
    }

    #[test]
    fn test_headless_clean_string_empty_input() -> Result<()> {
        let config = PipelineConfig::load_default()?;
        assert_eq!(headless_clean_string(&config, "")?, "");
        Ok(())
    }
}
