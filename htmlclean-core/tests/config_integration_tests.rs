// htmlclean-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use htmlclean_core::{headless_clean_string, CleanStep, FinishMode, HtmlCleaner, PipelineConfig};

fn write_pipeline(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_from_file() -> Result<()> {
    let file = write_pipeline(
        r#"
steps:
  - scripts
  - external_styles
  - attributes
finish: full
"#,
    )?;
    let config = PipelineConfig::load_from_file(file.path())?;
    assert_eq!(
        config.steps,
        vec![CleanStep::Scripts, CleanStep::ExternalStyles, CleanStep::Attributes]
    );
    assert_eq!(config.finish, FinishMode::Full);
    Ok(())
}

#[test]
fn test_load_from_file_rejects_unknown_step() -> Result<()> {
    let file = write_pipeline("steps: [scripts, style]\n")?;
    let err = PipelineConfig::load_from_file(file.path()).unwrap_err();
    assert!(
        format!("{:#}", err).contains("Failed to parse pipeline file"),
        "unexpected error: {:#}",
        err
    );
    Ok(())
}

#[test]
fn test_load_from_file_rejects_unknown_field() -> Result<()> {
    let file = write_pipeline("steps: [tags]\nfinsh: full\n")?;
    assert!(PipelineConfig::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_load_from_missing_file() {
    let err = PipelineConfig::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read pipeline file"));
}

#[test]
fn test_empty_steps_only_trims() -> Result<()> {
    let file = write_pipeline("steps: []\n")?;
    let config = PipelineConfig::load_from_file(file.path())?;
    assert!(config.steps.is_empty());
    assert_eq!(headless_clean_string(&config, "  <b>x</b>\n")?, "<b>x</b>");
    Ok(())
}

#[test]
fn test_file_pipeline_matches_manual_chain() -> Result<()> {
    let file = write_pipeline("steps: [scripts, external_styles, tags]\nfinish: trim\n")?;
    let config = PipelineConfig::load_from_file(file.path())?;
    let input = "<div style=\"background-image:url(p.jpg);\"><script>x()</script>Johny Rage</div>";

    let via_pipeline = headless_clean_string(&config, input)?;
    let via_chain = HtmlCleaner::new()?
        .load(input)
        .remove_scripts()?
        .remove_external_styles()?
        .remove_tags()?
        .finish()
        .unwrap_or_default();

    assert_eq!(via_pipeline, "Johny Rage");
    assert_eq!(via_pipeline, via_chain);
    Ok(())
}

#[test]
fn test_apply_pipeline_reports_steps_and_full_finish() -> Result<()> {
    let config = PipelineConfig::new(vec![CleanStep::Styles, CleanStep::ExternalStyles], FinishMode::Full);
    let (text, report) = HtmlCleaner::new()?
        .load("<p styles=\"x\">a</p>")
        .apply_pipeline(&config)?;

    assert_eq!(text.as_deref(), Some("a"));
    let steps: Vec<&str> = report.items().iter().map(|i| i.step.as_str()).collect();
    assert_eq!(steps, vec!["styles", "external_styles", "full"]);
    assert_eq!(report.occurrences_for("full"), 2);
    Ok(())
}

#[test]
fn test_pipeline_serializes_with_snake_case_names() -> Result<()> {
    let config = PipelineConfig::new(vec![CleanStep::ExternalStyles], FinishMode::Full);
    let yaml = serde_yml::to_string(&config)?;
    assert!(yaml.contains("external_styles"));
    assert!(yaml.contains("full"));
    assert_eq!(PipelineConfig::from_yaml_str(&yaml)?, config);
    Ok(())
}
