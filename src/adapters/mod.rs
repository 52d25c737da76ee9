// Adapters layer: concrete implementations of the domain ports (plot rendering).

pub mod plot;

pub use plot::{NullRenderer, PlottersRenderer};
