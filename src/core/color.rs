use crate::core::wien::peak_wavelength_nm;
use crate::domain::model::VisibleColor;
use crate::domain::units::Temperature;
use crate::utils::error::Result;

/// Lower (inclusive) and upper bounds in nanometers, ordered red to purple.
/// Only the red band includes its upper edge.
const BANDS: [(VisibleColor, f64, f64); 7] = [
    (VisibleColor::Red, 625.0, 740.0),
    (VisibleColor::Orange, 590.0, 625.0),
    (VisibleColor::Yellow, 565.0, 590.0),
    (VisibleColor::Green, 520.0, 565.0),
    (VisibleColor::Cyan, 500.0, 520.0),
    (VisibleColor::Blue, 435.0, 500.0),
    (VisibleColor::Purple, 380.0, 435.0),
];

impl VisibleColor {
    /// Named band containing `wavelength_nm`, or `None` outside 380–740 nm.
    pub fn classify(wavelength_nm: f64) -> Option<Self> {
        BANDS
            .iter()
            .find(|(color, lower, upper)| {
                wavelength_nm >= *lower
                    && (wavelength_nm < *upper
                        || (*color == VisibleColor::Red && wavelength_nm <= *upper))
            })
            .map(|(color, _, _)| *color)
    }
}

/// Color of the emitter's peak wavelength; the Wien step stays silent here.
pub fn dominant_color(temperature: Temperature) -> Result<Option<VisibleColor>> {
    let wavelength_nm = peak_wavelength_nm(temperature, false)?;
    let color = VisibleColor::classify(wavelength_nm);
    tracing::debug!("Peak {:.1} nm classified as {:?}", wavelength_nm, color);
    Ok(color)
}
