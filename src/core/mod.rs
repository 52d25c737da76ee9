pub mod analysis;
pub mod color;
pub mod constants;
pub mod geometry;
pub mod integrator;
pub mod radiation;
pub mod report;
pub mod wien;

pub use crate::domain::model::{PowerBudget, RadiationReport, Spectrum, VisibleColor, WienPeak};
pub use crate::domain::ports::{ConfigProvider, OrbitGeometry, SpectrumRenderer, WavelengthRange};
pub use crate::utils::error::Result;
