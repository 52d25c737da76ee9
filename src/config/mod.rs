pub mod toml_config;

use crate::adapters::plot::SUPPORTED_PLOT_EXTENSIONS;
use crate::core::constants::{
    DEFAULT_STEP_NM, DEFAULT_SWEEP_END_NM, DEFAULT_SWEEP_START_NM, VISIBLE_LOWER_NM,
    VISIBLE_UPPER_NM,
};
use crate::core::radiation::sample_count;
use crate::domain::ports::{ConfigProvider, OrbitGeometry, WavelengthRange};
use crate::domain::units::Temperature;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_positive, validate_range, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PLOT_OUTPUT: &str = "planck_radiance.svg";
pub const DEFAULT_PLOT_SIZE: (u32, u32) = (1000, 600);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The four result statements
    #[default]
    Text,
    /// The full report as JSON
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "sun-radiation")]
#[command(about = "Blackbody radiation of a sun-temperature emitter")]
pub struct CliConfig {
    /// Emitter temperature in Kelvin
    #[arg(long, default_value_t = 5775.0)]
    pub temperature: f64,

    #[arg(long, default_value_t = DEFAULT_SWEEP_START_NM)]
    pub sweep_start_nm: f64,

    #[arg(long, default_value_t = DEFAULT_SWEEP_END_NM)]
    pub sweep_end_nm: f64,

    #[arg(long, default_value_t = DEFAULT_STEP_NM)]
    pub sweep_step_nm: f64,

    #[arg(long, default_value_t = VISIBLE_LOWER_NM)]
    pub band_lower_nm: f64,

    #[arg(long, default_value_t = VISIBLE_UPPER_NM)]
    pub band_upper_nm: f64,

    #[arg(long, default_value_t = DEFAULT_STEP_NM)]
    pub band_step_nm: f64,

    /// Plot file (.svg, .png or .bmp)
    #[arg(long, default_value = DEFAULT_PLOT_OUTPUT)]
    pub plot_output: String,

    #[arg(long, help = "Skip rendering the spectrum plot")]
    pub no_plot: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Log process statistics after each phase")]
    pub monitor: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn temperature(&self) -> Temperature {
        Temperature::from_kelvin(self.temperature)
    }

    fn sweep(&self) -> WavelengthRange {
        WavelengthRange::new(self.sweep_start_nm, self.sweep_end_nm, self.sweep_step_nm)
    }

    fn visible_band(&self) -> WavelengthRange {
        WavelengthRange::new(self.band_lower_nm, self.band_upper_nm, self.band_step_nm)
    }

    fn geometry(&self) -> OrbitGeometry {
        OrbitGeometry::sun_earth()
    }

    fn plot_output(&self) -> Option<&str> {
        if self.no_plot {
            None
        } else {
            Some(&self.plot_output)
        }
    }

    fn plot_size(&self) -> (u32, u32) {
        DEFAULT_PLOT_SIZE
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

/// 所有設定來源共用的檢查
pub fn validate_provider<C: ConfigProvider>(config: &C) -> Result<()> {
    validate_positive("temperature", config.temperature().to_kelvin())?;

    sample_count("sweep", &config.sweep())?;
    sample_count("band", &config.visible_band())?;

    config.geometry().validate()?;

    if let Some(output) = config.plot_output() {
        validate_path("plot.output", output)?;
        validate_file_extension("plot.output", output, &SUPPORTED_PLOT_EXTENSIONS)?;

        let (width, height) = config.plot_size();
        validate_range("plot.width", width, 200, 8000)?;
        validate_range("plot.height", height, 200, 8000)?;
    }

    Ok(())
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_run() {
        let config = CliConfig::parse_from(["sun-radiation"]);

        assert_eq!(config.temperature().to_kelvin(), 5775.0);
        assert_eq!(config.sweep(), WavelengthRange::new(100.0, 1000.0, 1.0));
        assert_eq!(config.visible_band(), WavelengthRange::new(400.0, 700.0, 1.0));
        assert_eq!(config.plot_output(), Some(DEFAULT_PLOT_OUTPUT));
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = CliConfig::parse_from([
            "sun-radiation",
            "--temperature",
            "3000",
            "--band-lower-nm",
            "380",
            "--no-plot",
            "--format",
            "json",
        ]);

        assert_eq!(config.temperature().to_kelvin(), 3000.0);
        assert_eq!(config.visible_band().lower_nm, 380.0);
        assert_eq!(config.plot_output(), None);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = CliConfig::parse_from(["sun-radiation"]);
        config.temperature = -10.0;
        assert!(config.validate().is_err());

        let mut config = CliConfig::parse_from(["sun-radiation"]);
        config.band_upper_nm = 300.0;
        assert!(config.validate().is_err());

        let mut config = CliConfig::parse_from(["sun-radiation"]);
        config.plot_output = "spectrum.gif".to_string();
        assert!(config.validate().is_err());

        config.no_plot = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_unbounded_sample_count() {
        let config = CliConfig::parse_from(["sun-radiation", "--sweep-step-nm", "1e-12"]);
        assert!(matches!(
            config.validate(),
            Err(crate::utils::error::RadiationError::InvalidConfigValueError { .. })
        ));

        let config = CliConfig::parse_from(["sun-radiation", "--band-step-nm", "1e-9"]);
        assert!(config.validate().is_err());
    }
}
