pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{NullRenderer, PlottersRenderer};
pub use crate::config::{toml_config::TomlConfig, OutputFormat};
pub use crate::core::{analysis::RadiationEngine, report::format_report};
pub use crate::domain::model::{PowerBudget, RadiationReport, Spectrum, VisibleColor, WienPeak};
pub use crate::domain::units::{Temperature, Wavelength};
pub use crate::utils::error::{RadiationError, Result};
