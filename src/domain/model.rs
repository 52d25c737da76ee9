use crate::domain::units::{Temperature, Wavelength};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parallel wavelength / radiance samples, kept only for plotting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Spectrum {
    pub wavelengths_nm: Vec<f64>,
    pub radiances: Vec<f64>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.wavelengths_nm.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths_nm.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.wavelengths_nm
            .iter()
            .copied()
            .zip(self.radiances.iter().copied())
    }

    /// Smallest strictly positive radiance, used as the floor of a log axis.
    pub fn min_positive_radiance(&self) -> Option<f64> {
        self.radiances
            .iter()
            .copied()
            .filter(|r| *r > 0.0 && r.is_finite())
            .fold(None, |acc, r| Some(acc.map_or(r, |m: f64| m.min(r))))
    }

    pub fn max_radiance(&self) -> Option<f64> {
        self.radiances
            .iter()
            .copied()
            .filter(|r| r.is_finite())
            .fold(None, |acc, r| Some(acc.map_or(r, |m: f64| m.max(r))))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WienPeak {
    pub wavelength: Wavelength,
    /// W/m³·sr
    pub spectral_radiance: f64,
}

impl WienPeak {
    pub fn wavelength_nm(&self) -> f64 {
        self.wavelength.as_nanometers()
    }
}

impl fmt::Display for WienPeak {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "The peak spectral intensity of the curve {} W/m³·sr is at wavelength: {:.1} nm",
            self.spectral_radiance,
            self.wavelength_nm()
        )
    }
}

/// Radiated and intercepted power of a spherical emitter seen from a planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerBudget {
    /// W
    pub total_power: f64,
    /// W/m² at the planet's orbit
    pub flux_at_distance: f64,
    /// W
    pub intercepted_power: f64,
    pub fraction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisibleColor {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
}

impl fmt::Display for VisibleColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            VisibleColor::Red => "Red",
            VisibleColor::Orange => "Orange",
            VisibleColor::Yellow => "Yellow",
            VisibleColor::Green => "Green",
            VisibleColor::Cyan => "Cyan",
            VisibleColor::Blue => "Blue",
            VisibleColor::Purple => "Purple",
        };
        write!(f, "{}", str)
    }
}

/// 單次計算的全部結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadiationReport {
    pub temperature: Temperature,
    pub sample_count: usize,
    pub peak: WienPeak,
    /// W/m²
    pub visible_intensity: f64,
    pub power: PowerBudget,
    pub dominant_color: Option<VisibleColor>,
    pub plot_path: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl RadiationReport {
    pub fn intensity_statement(&self) -> String {
        format!(
            "The total intensity emitted by the sun is {} W/m²",
            self.visible_intensity
        )
    }

    pub fn fraction_statement(&self) -> String {
        format!(
            "The fraction of the sun's total power that reaches earth and its atmosphere is: {}",
            self.power.fraction
        )
    }

    pub fn color_statement(&self) -> String {
        match self.dominant_color {
            Some(color) => format!("{} is the most intense", color),
            None => "Not visible to human eye".to_string(),
        }
    }

    /// 四行文字輸出，順序與計算順序相同
    pub fn statements(&self) -> Vec<String> {
        vec![
            self.peak.to_string(),
            self.intensity_statement(),
            self.fraction_statement(),
            self.color_statement(),
        ]
    }
}
