//! Physical constants (SI) and the Sun–Earth geometry used by default.

/// Planck constant, J·s
pub const PLANCK: f64 = 6.626e-34;
/// Speed of light in vacuum, m/s
pub const SPEED_OF_LIGHT: f64 = 3.00e8;
/// Boltzmann constant, J/K
pub const BOLTZMANN: f64 = 1.38e-23;
/// Stefan–Boltzmann constant, W/(m²·K⁴)
pub const STEFAN_BOLTZMANN: f64 = 5.670e-8;
/// Wien displacement constant, m·K
pub const WIEN_DISPLACEMENT: f64 = 2.898e-3;

pub const SUN_RADIUS_M: f64 = 696_340e3;
pub const EARTH_RADIUS_M: f64 = 6_370e3;
/// Mean Sun–Earth distance (1 AU)
pub const SUN_EARTH_DISTANCE_M: f64 = 1.496e11;

pub const DEFAULT_SWEEP_START_NM: f64 = 100.0;
pub const DEFAULT_SWEEP_END_NM: f64 = 1000.0;
pub const VISIBLE_LOWER_NM: f64 = 400.0;
pub const VISIBLE_UPPER_NM: f64 = 700.0;
pub const DEFAULT_STEP_NM: f64 = 1.0;
/// Upper bound on samples per sweep or band
pub const MAX_SAMPLES: usize = 1_000_000;
