use crate::core::constants::WIEN_DISPLACEMENT;
use crate::core::radiation::spectral_radiance;
use crate::domain::model::WienPeak;
use crate::domain::units::{Temperature, Wavelength};
use crate::utils::error::{RadiationError, Result};

impl WienPeak {
    /// Peak-emission wavelength `b / T` and the radiance Planck's law gives there.
    pub fn compute(temperature: Temperature) -> Result<Self> {
        let t = temperature.to_kelvin();
        if !t.is_finite() || t <= 0.0 {
            return Err(RadiationError::domain(
                "temperature",
                t,
                "must be a positive number of Kelvin",
            ));
        }

        let wavelength = Wavelength::from_meters(WIEN_DISPLACEMENT / t);
        let spectral_radiance = spectral_radiance(wavelength, temperature)?;

        Ok(Self {
            wavelength,
            spectral_radiance,
        })
    }
}

/// Peak wavelength in nanometers, printing the peak statement when `print` is set.
pub fn peak_wavelength_nm(temperature: Temperature, print: bool) -> Result<f64> {
    let peak = WienPeak::compute(temperature)?;
    if print {
        println!("{}", peak);
    }
    Ok(peak.wavelength_nm())
}
