use crate::core::constants::{
    EARTH_RADIUS_M, STEFAN_BOLTZMANN, SUN_EARTH_DISTANCE_M, SUN_RADIUS_M,
};
use crate::domain::model::PowerBudget;
use crate::domain::ports::OrbitGeometry;
use crate::domain::units::Temperature;
use crate::utils::error::{RadiationError, Result};
use crate::utils::validation::validate_positive;
use std::f64::consts::PI;

impl OrbitGeometry {
    pub fn sun_earth() -> Self {
        Self {
            emitter_radius_m: SUN_RADIUS_M,
            receiver_radius_m: EARTH_RADIUS_M,
            distance_m: SUN_EARTH_DISTANCE_M,
        }
    }

    /// Fraction of an isotropic emitter's output falling on the receiver's disc,
    /// `πr² / 4πd²`.
    pub fn intercepted_fraction(&self) -> f64 {
        (PI * self.receiver_radius_m.powi(2)) / (4.0 * PI * self.distance_m.powi(2))
    }

    pub fn validate(&self) -> Result<()> {
        validate_positive("geometry.emitter_radius_m", self.emitter_radius_m)?;
        validate_positive("geometry.receiver_radius_m", self.receiver_radius_m)?;
        validate_positive("geometry.distance_m", self.distance_m)?;
        if self.distance_m <= self.emitter_radius_m + self.receiver_radius_m {
            return Err(RadiationError::InvalidConfigValueError {
                field: "geometry.distance_m".to_string(),
                value: self.distance_m.to_string(),
                reason: "Bodies overlap at this distance".to_string(),
            });
        }
        Ok(())
    }
}

/// Stefan–Boltzmann output of the emitter and the share its receiver intercepts.
pub fn power_budget(geometry: &OrbitGeometry, temperature: Temperature) -> Result<PowerBudget> {
    geometry.validate()?;
    let t = temperature.to_kelvin();
    if !t.is_finite() || t <= 0.0 {
        return Err(RadiationError::domain(
            "temperature",
            t,
            "must be a positive number of Kelvin",
        ));
    }

    let total_power =
        4.0 * PI * geometry.emitter_radius_m.powi(2) * STEFAN_BOLTZMANN * temperature.powi(4);
    // 平方反比：總功率平均分佈在半徑為 d 的球面
    let flux_at_distance = total_power / (4.0 * PI * geometry.distance_m.powi(2));
    // 只有面向太陽的圓盤接收能量
    let intercepted_power = flux_at_distance * PI * geometry.receiver_radius_m.powi(2);

    Ok(PowerBudget {
        total_power,
        flux_at_distance,
        intercepted_power,
        fraction: intercepted_power / total_power,
    })
}
