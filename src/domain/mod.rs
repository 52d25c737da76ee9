// Domain layer: physical quantities, result models and ports. No rendering or CLI concerns here.

pub mod model;
pub mod ports;
pub mod units;
