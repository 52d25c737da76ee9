use crate::core::constants::{BOLTZMANN, MAX_SAMPLES, PLANCK, SPEED_OF_LIGHT};
use crate::domain::model::Spectrum;
use crate::domain::ports::WavelengthRange;
use crate::domain::units::{Temperature, Wavelength};
use crate::utils::error::{RadiationError, Result};
use std::f64::consts::PI;

/// Planck's law for spectral radiance, `2πhc² / (λ⁵ (e^(hc/λkT) − 1))`, in W/m³·sr.
///
/// Wavelength and temperature must both be positive and finite. For very
/// short wavelengths the exponential overflows to infinity and the radiance
/// collapses to `0.0`; that is a property of the formula in `f64`, not an error.
pub fn spectral_radiance(wavelength: Wavelength, temperature: Temperature) -> Result<f64> {
    let lambda = wavelength.as_meters();
    let t = temperature.to_kelvin();

    if !lambda.is_finite() || lambda <= 0.0 {
        return Err(RadiationError::domain(
            "wavelength",
            lambda,
            "must be a positive number of meters",
        ));
    }
    if !t.is_finite() || t <= 0.0 {
        return Err(RadiationError::domain(
            "temperature",
            t,
            "must be a positive number of Kelvin",
        ));
    }

    let numerator = 2.0 * PI * PLANCK * SPEED_OF_LIGHT.powi(2);
    let exponent = (PLANCK * SPEED_OF_LIGHT) / (lambda * BOLTZMANN * t);
    let denominator = lambda.powi(5) * exponent.exp_m1();

    let radiance = numerator / denominator;
    if radiance == 0.0 || !radiance.is_finite() {
        tracing::trace!(
            "Radiance underflow at {} (exponent {:.3e})",
            wavelength,
            exponent
        );
        return Ok(0.0);
    }

    Ok(radiance)
}

/// Number of samples `range` produces, rejected above `MAX_SAMPLES`.
pub fn sample_count(field_name: &str, range: &WavelengthRange) -> Result<usize> {
    crate::utils::validation::validate_interval(field_name, range.lower_nm, range.upper_nm)?;
    crate::utils::validation::validate_positive(&format!("{}.step_nm", field_name), range.step_nm)?;

    let count = ((range.upper_nm - range.lower_nm) / range.step_nm).ceil();
    if !count.is_finite() || count > MAX_SAMPLES as f64 {
        return Err(RadiationError::InvalidConfigValueError {
            field: format!("{}.step_nm", field_name),
            value: range.step_nm.to_string(),
            reason: format!(
                "Step yields {:.0} samples, at most {} allowed",
                count, MAX_SAMPLES
            ),
        });
    }
    Ok(count as usize)
}

/// Wavelengths of `[lower, upper)` every `step`, in nanometers.
pub(crate) fn sample_points(range: &WavelengthRange) -> Result<Vec<f64>> {
    let count = sample_count("range", range)?;
    Ok((0..count)
        .map(|i| range.lower_nm + i as f64 * range.step_nm)
        .filter(|nm| *nm < range.upper_nm)
        .collect())
}

/// Evaluates Planck's law across a wavelength sweep for plotting.
pub fn sweep(range: &WavelengthRange, temperature: Temperature) -> Result<Spectrum> {
    let wavelengths_nm = sample_points(range)?;
    let radiances = wavelengths_nm
        .iter()
        .map(|nm| spectral_radiance(Wavelength::from_nanometers(*nm), temperature))
        .collect::<Result<Vec<f64>>>()?;

    tracing::debug!(
        "Swept {} wavelengths from {} nm to {} nm at {}",
        wavelengths_nm.len(),
        range.lower_nm,
        range.upper_nm,
        temperature
    );

    Ok(Spectrum {
        wavelengths_nm,
        radiances,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_radiance_at_wien_peak() {
        let peak = Wavelength::from_meters(2.898e-3 / 5775.0);
        let radiance = spectral_radiance(peak, Temperature::sun()).unwrap();
        assert_relative_eq!(radiance, 8.2287e13, max_relative = 1e-3);
    }

    #[test]
    fn test_radiance_is_non_negative() {
        for t in [300.0, 3000.0, 5775.0, 30000.0] {
            for nm in [1.0, 10.0, 100.0, 500.0, 1000.0, 1e5] {
                let r = spectral_radiance(
                    Wavelength::from_nanometers(nm),
                    Temperature::from_kelvin(t),
                )
                .unwrap();
                assert!(r >= 0.0, "radiance at {nm} nm, {t} K was {r}");
                assert!(r.is_finite());
            }
        }
    }

    #[test]
    fn test_exponential_overflow_gives_zero() {
        let r = spectral_radiance(Wavelength::from_nanometers(1.0), Temperature::sun()).unwrap();
        assert_eq!(r, 0.0);
    }

    #[test]
    fn test_non_positive_inputs_are_domain_errors() {
        let sun = Temperature::sun();
        assert!(matches!(
            spectral_radiance(Wavelength::from_meters(0.0), sun),
            Err(RadiationError::DomainError { .. })
        ));
        assert!(spectral_radiance(Wavelength::from_meters(-5e-7), sun).is_err());
        assert!(spectral_radiance(Wavelength::from_meters(f64::NAN), sun).is_err());
        assert!(spectral_radiance(
            Wavelength::from_nanometers(500.0),
            Temperature::from_kelvin(0.0)
        )
        .is_err());
    }

    #[test]
    fn test_default_sweep_is_half_open() {
        let range = WavelengthRange::new(100.0, 1000.0, 1.0);
        let spectrum = sweep(&range, Temperature::sun()).unwrap();

        assert_eq!(spectrum.len(), 900);
        assert_eq!(spectrum.wavelengths_nm.first(), Some(&100.0));
        assert_eq!(spectrum.wavelengths_nm.last(), Some(&999.0));
        assert_eq!(spectrum.radiances.len(), spectrum.wavelengths_nm.len());
    }

    #[test]
    fn test_sweep_peaks_near_wien_wavelength() {
        let range = WavelengthRange::new(100.0, 1000.0, 1.0);
        let spectrum = sweep(&range, Temperature::sun()).unwrap();

        let (peak_nm, _) = spectrum
            .points()
            .fold((0.0, 0.0), |best, p| if p.1 > best.1 { p } else { best });
        assert!((peak_nm - 501.8_f64).abs() <= 1.0, "peak at {peak_nm} nm");
    }

    #[test]
    fn test_sweep_rejects_bad_ranges() {
        let sun = Temperature::sun();
        assert!(sweep(&WavelengthRange::new(1000.0, 100.0, 1.0), sun).is_err());
        assert!(sweep(&WavelengthRange::new(100.0, 1000.0, 0.0), sun).is_err());
        assert!(sweep(&WavelengthRange::new(0.0, 1000.0, 1.0), sun).is_err());
    }

    #[test]
    fn test_tiny_step_exceeds_sample_limit() {
        let range = WavelengthRange::new(100.0, 1000.0, 1e-12);
        assert!(matches!(
            sample_count("sweep", &range),
            Err(RadiationError::InvalidConfigValueError { .. })
        ));
        assert!(sweep(&range, Temperature::sun()).is_err());

        let fine = WavelengthRange::new(100.0, 1000.0, 0.5);
        assert_eq!(sample_count("sweep", &fine).unwrap(), 1800);
    }
}
