use crate::config::{validate_provider, OutputFormat, DEFAULT_PLOT_OUTPUT, DEFAULT_PLOT_SIZE};
use crate::core::constants::{
    DEFAULT_STEP_NM, DEFAULT_SWEEP_END_NM, DEFAULT_SWEEP_START_NM, EARTH_RADIUS_M,
    SUN_EARTH_DISTANCE_M, SUN_RADIUS_M, VISIBLE_LOWER_NM, VISIBLE_UPPER_NM,
};
use crate::domain::ports::{ConfigProvider, OrbitGeometry, WavelengthRange};
use crate::domain::units::Temperature;
use crate::utils::error::{RadiationError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub emitter: EmitterConfig,
    pub sweep: Option<RangeConfig>,
    pub band: Option<RangeConfig>,
    pub geometry: Option<GeometryConfig>,
    pub plot: Option<PlotConfig>,
    pub output: Option<OutputConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmitterConfig {
    pub name: Option<String>,
    pub temperature_k: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeConfig {
    pub lower_nm: f64,
    pub upper_nm: f64,
    pub step_nm: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryConfig {
    pub emitter_radius_m: Option<f64>,
    pub receiver_radius_m: Option<f64>,
    pub distance_m: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    pub enabled: bool,
    pub output: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RadiationError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RadiationError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SUN_TEMPERATURE})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RadiationError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(plot) = &self.plot {
            if plot.enabled {
                validate_required_field("plot.output", &plot.output)?;
            }
        }

        if let Some(monitoring) = &self.monitoring {
            if let Some(format) = &monitoring.log_format {
                crate::utils::validation::validate_one_of(
                    "monitoring.log_format",
                    format,
                    &["compact", "json"],
                )?;
            }
        }

        validate_provider(self)
    }

    pub fn emitter_name(&self) -> &str {
        self.emitter.name.as_deref().unwrap_or("Sun")
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }

    /// 取得監控設定
    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.log_format.as_deref())
            == Some("json")
    }

    fn range(config: &Option<RangeConfig>, lower: f64, upper: f64) -> WavelengthRange {
        match config {
            Some(range) => WavelengthRange::new(
                range.lower_nm,
                range.upper_nm,
                range.step_nm.unwrap_or(DEFAULT_STEP_NM),
            ),
            None => WavelengthRange::new(lower, upper, DEFAULT_STEP_NM),
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn temperature(&self) -> Temperature {
        Temperature::from_kelvin(self.emitter.temperature_k)
    }

    fn sweep(&self) -> WavelengthRange {
        Self::range(&self.sweep, DEFAULT_SWEEP_START_NM, DEFAULT_SWEEP_END_NM)
    }

    fn visible_band(&self) -> WavelengthRange {
        Self::range(&self.band, VISIBLE_LOWER_NM, VISIBLE_UPPER_NM)
    }

    fn geometry(&self) -> OrbitGeometry {
        let geometry = self.geometry.as_ref();
        OrbitGeometry {
            emitter_radius_m: geometry
                .and_then(|g| g.emitter_radius_m)
                .unwrap_or(SUN_RADIUS_M),
            receiver_radius_m: geometry
                .and_then(|g| g.receiver_radius_m)
                .unwrap_or(EARTH_RADIUS_M),
            distance_m: geometry
                .and_then(|g| g.distance_m)
                .unwrap_or(SUN_EARTH_DISTANCE_M),
        }
    }

    fn plot_output(&self) -> Option<&str> {
        match &self.plot {
            Some(plot) if !plot.enabled => None,
            Some(plot) => plot.output.as_deref(),
            None => Some(DEFAULT_PLOT_OUTPUT),
        }
    }

    fn plot_size(&self) -> (u32, u32) {
        let plot = self.plot.as_ref();
        (
            plot.and_then(|p| p.width).unwrap_or(DEFAULT_PLOT_SIZE.0),
            plot.and_then(|p| p.height).unwrap_or(DEFAULT_PLOT_SIZE.1),
        )
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
