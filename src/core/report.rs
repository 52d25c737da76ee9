use crate::config::OutputFormat;
use crate::domain::model::RadiationReport;
use crate::utils::error::Result;

/// Renders a report for stdout in the requested format.
pub fn format_report(report: &RadiationReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.statements().join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{PowerBudget, VisibleColor, WienPeak};
    use crate::domain::units::{Temperature, Wavelength};

    fn sample_report() -> RadiationReport {
        RadiationReport {
            temperature: Temperature::sun(),
            sample_count: 900,
            peak: WienPeak {
                wavelength: Wavelength::from_nanometers(501.8),
                spectral_radiance: 8.2e13,
            },
            visible_intensity: 2.3e7,
            power: PowerBudget {
                total_power: 3.8e26,
                flux_at_distance: 1366.0,
                intercepted_power: 1.7e17,
                fraction: 4.5e-10,
            },
            dominant_color: Some(VisibleColor::Cyan),
            plot_path: None,
            generated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_text_report_has_four_statements() {
        let text = format_report(&sample_report(), OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("501.8 nm"));
        assert!(lines[1].starts_with("The total intensity emitted by the sun is"));
        assert!(lines[2].contains("reaches earth"));
        assert_eq!(lines[3], "Cyan is the most intense");
    }

    #[test]
    fn test_json_report_fields() {
        let json = format_report(&sample_report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["sample_count"], 900);
        assert_eq!(value["dominant_color"], "Cyan");
        assert_eq!(value["temperature"], 5775.0);
        assert!(value["plot_path"].is_null());
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_invisible_peak_statement() {
        let mut report = sample_report();
        report.dominant_color = None;
        let text = format_report(&report, OutputFormat::Text).unwrap();
        assert!(text.ends_with("Not visible to human eye"));
    }
}
