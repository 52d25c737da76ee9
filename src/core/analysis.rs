use crate::core::color::dominant_color;
use crate::core::geometry::power_budget;
use crate::core::integrator::integrate_band;
use crate::core::radiation::sweep;
use crate::domain::model::{RadiationReport, WienPeak};
use crate::domain::ports::{ConfigProvider, SpectrumRenderer};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct RadiationEngine<C: ConfigProvider, R: SpectrumRenderer> {
    config: C,
    renderer: R,
    monitor: SystemMonitor,
}

impl<C: ConfigProvider, R: SpectrumRenderer> RadiationEngine<C, R> {
    pub fn new(config: C, renderer: R) -> Self {
        Self::new_with_monitoring(config, renderer, false)
    }

    pub fn new_with_monitoring(config: C, renderer: R, monitor_enabled: bool) -> Self {
        Self {
            config,
            renderer,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// 依序執行：掃描、繪圖、Wien 峰值、可見光積分、功率比例、顏色分類
    pub fn run(&self) -> Result<RadiationReport> {
        let temperature = self.config.temperature();
        tracing::info!("🌞 Starting blackbody analysis at {}", temperature);
        self.monitor.log_stats("Start");

        // Sweep
        let sweep_range = self.config.sweep();
        tracing::info!(
            "Sweeping {}–{} nm...",
            sweep_range.lower_nm,
            sweep_range.upper_nm
        );
        let spectrum = sweep(&sweep_range, temperature)?;
        self.monitor.log_stats("Sweep");

        // Peak
        let peak = WienPeak::compute(temperature)?;
        tracing::info!(
            "Wien peak at {} ({:.4e} W/m³·sr)",
            peak.wavelength,
            peak.spectral_radiance
        );

        // Plot
        let plot_path = self.renderer.render(&spectrum, &peak, temperature)?;
        self.monitor.log_stats("Plot");

        // Visible band
        let band = self.config.visible_band();
        tracing::info!("Integrating {}–{} nm...", band.lower_nm, band.upper_nm);
        let visible_intensity = integrate_band(&band, temperature)?;
        self.monitor.log_stats("Integrate");

        // Power fraction
        let power = power_budget(&self.config.geometry(), temperature)?;
        tracing::info!(
            "Receiver intercepts {:.4e} of {:.4e} W",
            power.fraction,
            power.total_power
        );

        // Color
        let dominant_color = dominant_color(temperature)?;
        self.monitor.log_stats("Classify");
        self.monitor.log_final_stats();

        Ok(RadiationReport {
            temperature,
            sample_count: spectrum.len(),
            peak,
            visible_intensity,
            power,
            dominant_color,
            plot_path,
            generated_at: chrono::Utc::now(),
        })
    }
}
