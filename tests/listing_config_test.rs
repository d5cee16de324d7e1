use anyhow::Result;
use salon_booking::utils::validation::Validate;
use salon_booking::{
    render_appointments, sample_appointments, AppointmentSummary, OutputFormat, SalonConfig,
};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_listing_in_configured_format() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"
[salon]
name = "Maude Beauty"
email = "contato@maudebeauty.com"

[output]
format = "tsv"
"#
    )?;

    let config = SalonConfig::from_file(file.path())?;
    config.validate()?;

    let rendered = render_appointments(&sample_appointments(), config.output_format()?)?;
    let rows: Vec<Vec<&str>> = rendered.lines().map(|l| l.split('\t').collect()).collect();

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].len(), 7);
    assert_eq!(rows[2][1], "Ana Santos");
    assert_eq!(rows[2][6], "Pendente");
    Ok(())
}

#[test]
fn test_sample_summary() {
    let summary = AppointmentSummary::from_appointments(&sample_appointments());
    assert_eq!(summary.total, 3);
    assert_eq!(summary.confirmed, 2);
    assert_eq!(summary.pending, 1);
    assert_eq!(summary.cancelled, 0);
}

#[test]
fn test_json_listing_fields() -> Result<()> {
    let json = render_appointments(&sample_appointments(), OutputFormat::Json)?;
    let value: serde_json::Value = serde_json::from_str(&json)?;

    assert_eq!(value[0]["service"], "Aplicação de Cabelo");
    assert_eq!(value[0]["date"], "2025-06-15");
    assert_eq!(value[2]["status"], "Confirmado");
    Ok(())
}

#[test]
fn test_missing_config_file() {
    let err = SalonConfig::from_file("/definitely/not/here/salon.toml").unwrap_err();
    assert_eq!(
        err.severity(),
        salon_booking::utils::error::ErrorSeverity::Critical
    );
}
