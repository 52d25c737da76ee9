use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute temperature, stored in Kelvin.
///
/// ```rust
/// use sun_radiation::domain::units::Temperature;
///
/// let sun = Temperature::from_kelvin(5775.0);
/// assert_eq!(sun.powi(4), 5775.0_f64.powi(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Temperature(f64);

impl Temperature {
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    /// Raise to integer power
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }

    /// Effective temperature of the Sun treated as a perfect blackbody.
    pub fn sun() -> Self {
        Self::from_kelvin(5775.0)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} K", self.0)
    }
}

/// Electromagnetic wavelength, stored in meters.
///
/// Most of the crate talks in nanometers at its edges (sweeps, plots, color
/// bands) and in meters inside Planck's law.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Wavelength(f64);

impl Wavelength {
    pub const NANOMETER: f64 = 1e-9;

    pub fn from_meters(value: f64) -> Self {
        Self(value)
    }

    pub fn from_nanometers(value: f64) -> Self {
        Self(value * Self::NANOMETER)
    }

    pub fn as_meters(&self) -> f64 {
        self.0
    }

    pub fn as_nanometers(&self) -> f64 {
        self.0 / Self::NANOMETER
    }
}

impl fmt::Display for Wavelength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.1} nm", self.as_nanometers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_temperature_conversions() {
        assert_eq!(Temperature::from_kelvin(300.0).to_string(), "300 K");
        assert_relative_eq!(Temperature::sun().to_kelvin(), 5775.0);
        assert_relative_eq!(Temperature::from_kelvin(10.0).powi(4), 10_000.0);
    }

    #[test]
    fn test_wavelength_conversions() {
        let green = Wavelength::from_nanometers(550.0);
        assert_relative_eq!(green.as_meters(), 5.5e-7, max_relative = 1e-12);
        assert_relative_eq!(green.as_nanometers(), 550.0, max_relative = 1e-12);
        assert_eq!(green.to_string(), "550.0 nm");
    }
}
