use crate::domain::model::{Spectrum, WienPeak};
use crate::domain::units::Temperature;
use crate::utils::error::Result;

/// Half-open wavelength interval `[lower_nm, upper_nm)` sampled every `step_nm`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavelengthRange {
    pub lower_nm: f64,
    pub upper_nm: f64,
    pub step_nm: f64,
}

impl WavelengthRange {
    pub fn new(lower_nm: f64, upper_nm: f64, step_nm: f64) -> Self {
        Self {
            lower_nm,
            upper_nm,
            step_nm,
        }
    }
}

/// Radii and separation of an emitter/receiver pair, all in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitGeometry {
    pub emitter_radius_m: f64,
    pub receiver_radius_m: f64,
    pub distance_m: f64,
}

pub trait ConfigProvider {
    fn temperature(&self) -> Temperature;
    fn sweep(&self) -> WavelengthRange;
    fn visible_band(&self) -> WavelengthRange;
    fn geometry(&self) -> OrbitGeometry;
    /// `None` 表示不輸出圖檔
    fn plot_output(&self) -> Option<&str>;
    fn plot_size(&self) -> (u32, u32);
}

pub trait SpectrumRenderer {
    /// Draws the spectrum and returns where it was written, if anywhere.
    fn render(
        &self,
        spectrum: &Spectrum,
        peak: &WienPeak,
        temperature: Temperature,
    ) -> Result<Option<String>>;
}
