use crate::core::radiation::{sample_points, spectral_radiance};
use crate::domain::ports::WavelengthRange;
use crate::domain::units::{Temperature, Wavelength};
use crate::utils::error::Result;

/// Left Riemann sum of spectral radiance over `band`, in W/m².
///
/// Each rectangle is `radiance(λᵢ) · Δλ` with `Δλ` the band step in meters;
/// the upper edge is excluded, so 400..700 nm at 1 nm sums 300 rectangles.
pub fn integrate_band(band: &WavelengthRange, temperature: Temperature) -> Result<f64> {
    let step_m = Wavelength::from_nanometers(band.step_nm).as_meters();

    let mut total = 0.0;
    for nm in sample_points(band)? {
        total += spectral_radiance(Wavelength::from_nanometers(nm), temperature)? * step_m;
    }

    tracing::debug!(
        "Integrated {}–{} nm in {} nm steps: {:.6e} W/m²",
        band.lower_nm,
        band.upper_nm,
        band.step_nm,
        total
    );

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::STEFAN_BOLTZMANN;
    use approx::assert_relative_eq;

    fn visible() -> WavelengthRange {
        WavelengthRange::new(400.0, 700.0, 1.0)
    }

    #[test]
    fn test_visible_band_at_sun_temperature() {
        let total = integrate_band(&visible(), Temperature::sun()).unwrap();
        assert_relative_eq!(total, 2.3026e7, max_relative = 1e-3);
    }

    #[test]
    fn test_visible_band_is_fraction_of_total_exitance() {
        let sun = Temperature::sun();
        let total = integrate_band(&visible(), sun).unwrap();
        let exitance = STEFAN_BOLTZMANN * sun.powi(4);
        let share = total / exitance;
        assert!(share > 0.3 && share < 0.45, "visible share {share}");
    }

    #[test]
    fn test_finer_step_stays_close() {
        let sun = Temperature::sun();
        let coarse = integrate_band(&visible(), sun).unwrap();
        let fine = integrate_band(&WavelengthRange::new(400.0, 700.0, 0.25), sun).unwrap();
        assert_relative_eq!(coarse, fine, max_relative = 1e-2);
    }

    #[test]
    fn test_integral_grows_with_temperature() {
        let cool = integrate_band(&visible(), Temperature::from_kelvin(3000.0)).unwrap();
        let hot = integrate_band(&visible(), Temperature::sun()).unwrap();
        assert!(cool > 0.0);
        assert!(hot > cool);
    }

    #[test]
    fn test_invalid_band_rejected() {
        let sun = Temperature::sun();
        assert!(integrate_band(&WavelengthRange::new(700.0, 400.0, 1.0), sun).is_err());
        assert!(integrate_band(&WavelengthRange::new(400.0, 700.0, -1.0), sun).is_err());
    }
}
