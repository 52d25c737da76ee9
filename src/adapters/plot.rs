use crate::domain::model::{Spectrum, WienPeak};
use crate::domain::ports::SpectrumRenderer;
use crate::domain::units::Temperature;
use crate::utils::error::{RadiationError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::fs;
use std::path::Path;

pub const SUPPORTED_PLOT_EXTENSIONS: [&str; 3] = ["svg", "png", "bmp"];

/// Writes the radiance curve to an image file, picking the backend from the extension.
#[derive(Debug, Clone)]
pub struct PlottersRenderer {
    output_path: String,
    size: (u32, u32),
}

impl PlottersRenderer {
    pub fn new(output_path: String, size: (u32, u32)) -> Self {
        Self { output_path, size }
    }
}

impl SpectrumRenderer for PlottersRenderer {
    fn render(
        &self,
        spectrum: &Spectrum,
        peak: &WienPeak,
        temperature: Temperature,
    ) -> Result<Option<String>> {
        // 低溫時整段輻射度下溢為 0，對數軸無法繪製
        if !spectrum.is_empty() && spectrum.min_positive_radiance().is_none() {
            tracing::warn!(
                "⚠️ Every radiance sample at {} underflows to zero, skipping plot",
                temperature
            );
            return Ok(None);
        }

        let path = Path::new(&self.output_path);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("svg") => {
                let root = SVGBackend::new(path, self.size).into_drawing_area();
                draw_spectrum(&root, spectrum, peak, temperature)?;
            }
            Some("png") | Some("bmp") => {
                let root = BitMapBackend::new(path, self.size).into_drawing_area();
                draw_spectrum(&root, spectrum, peak, temperature)?;
            }
            _ => {
                return Err(RadiationError::InvalidConfigValueError {
                    field: "plot_output".to_string(),
                    value: self.output_path.clone(),
                    reason: format!(
                        "Unsupported plot format. Allowed extensions: {}",
                        SUPPORTED_PLOT_EXTENSIONS.join(", ")
                    ),
                })
            }
        }

        tracing::info!("🖼️ Spectrum plot written to {}", self.output_path);
        Ok(Some(self.output_path.clone()))
    }
}

/// Renderer used with `--no-plot`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl SpectrumRenderer for NullRenderer {
    fn render(
        &self,
        _spectrum: &Spectrum,
        _peak: &WienPeak,
        _temperature: Temperature,
    ) -> Result<Option<String>> {
        tracing::debug!("Plot rendering disabled");
        Ok(None)
    }
}

fn draw_spectrum<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spectrum: &Spectrum,
    peak: &WienPeak,
    temperature: Temperature,
) -> Result<()> {
    let (x_min, x_max) = match (spectrum.wavelengths_nm.first(), spectrum.wavelengths_nm.last()) {
        (Some(first), Some(last)) if last > first => (*first, *last),
        _ => {
            return Err(RadiationError::plot(
                "spectrum needs at least two distinct wavelengths",
            ))
        }
    };
    let (y_min, y_max) = match (spectrum.min_positive_radiance(), spectrum.max_radiance()) {
        (Some(min), Some(max)) => (min * 0.5, max.max(peak.spectral_radiance) * 2.0),
        _ => return Err(RadiationError::plot("spectrum has no positive radiance")),
    };

    root.fill(&WHITE).map_err(RadiationError::plot)?;

    let mut chart = ChartBuilder::on(root)
        .caption(
            "Planck Spectral Radiance vs Wavelength",
            ("sans-serif", 24).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, (y_min..y_max).log_scale())
        .map_err(RadiationError::plot)?;

    chart
        .configure_mesh()
        .x_labels(10)
        .x_label_formatter(&|x| format!("{x:.0}"))
        .y_label_formatter(&|y| format!("{y:.0e}"))
        .x_desc("Wavelength (nm)")
        .y_desc("Spectral Radiance (W/m³·sr)")
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(RadiationError::plot)?;

    chart
        .draw_series(LineSeries::new(
            spectrum.points().filter(|(_, r)| *r > 0.0),
            BLUE.stroke_width(2),
        ))
        .map_err(RadiationError::plot)?
        .label(format!("Black Body at T = {}", temperature))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    let peak_nm = peak.wavelength_nm();
    chart
        .draw_series(DashedLineSeries::new(
            vec![(peak_nm, y_min), (peak_nm, y_max)],
            10,
            6,
            RED.stroke_width(2),
        ))
        .map_err(RadiationError::plot)?
        .label("Highest spectral radiance")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.9))
        .border_style(BLACK)
        .draw()
        .map_err(RadiationError::plot)?;

    root.present().map_err(RadiationError::plot)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::radiation::sweep;
    use crate::domain::ports::WavelengthRange;
    use tempfile::TempDir;

    fn sun_spectrum() -> (Spectrum, WienPeak) {
        let spectrum = sweep(
            &WavelengthRange::new(100.0, 1000.0, 1.0),
            Temperature::sun(),
        )
        .unwrap();
        let peak = WienPeak::compute(Temperature::sun()).unwrap();
        (spectrum, peak)
    }

    #[test]
    fn test_svg_plot_written() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("plots").join("planck.svg");
        let renderer = PlottersRenderer::new(output.to_string_lossy().to_string(), (800, 500));

        let (spectrum, peak) = sun_spectrum();
        let written = renderer.render(&spectrum, &peak, Temperature::sun()).unwrap();

        assert_eq!(written.as_deref(), Some(output.to_string_lossy().as_ref()));
        let svg = std::fs::read_to_string(&output).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Planck Spectral Radiance vs Wavelength"));
        assert!(svg.contains("Black Body at T = 5775 K"));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("planck.pdf");
        let renderer = PlottersRenderer::new(output.to_string_lossy().to_string(), (800, 500));

        let (spectrum, peak) = sun_spectrum();
        let err = renderer
            .render(&spectrum, &peak, Temperature::sun())
            .unwrap_err();
        assert!(matches!(err, RadiationError::InvalidConfigValueError { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_empty_spectrum_is_plot_error() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("empty.svg");
        let renderer = PlottersRenderer::new(output.to_string_lossy().to_string(), (800, 500));

        let peak = WienPeak::compute(Temperature::sun()).unwrap();
        let err = renderer
            .render(&Spectrum::default(), &peak, Temperature::sun())
            .unwrap_err();
        assert!(matches!(err, RadiationError::PlotError { .. }));
    }

    #[test]
    fn test_underflowed_spectrum_skips_plot() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("cold.svg");
        let renderer = PlottersRenderer::new(output.to_string_lossy().to_string(), (800, 500));

        let cold = Temperature::from_kelvin(10.0);
        let spectrum = sweep(&WavelengthRange::new(100.0, 1000.0, 1.0), cold).unwrap();
        let peak = WienPeak::compute(cold).unwrap();

        let written = renderer.render(&spectrum, &peak, cold).unwrap();
        assert!(written.is_none());
        assert!(!output.exists());
    }

    #[test]
    fn test_null_renderer_writes_nothing() {
        let (spectrum, peak) = sun_spectrum();
        let written = NullRenderer
            .render(&spectrum, &peak, Temperature::sun())
            .unwrap();
        assert!(written.is_none());
    }
}
