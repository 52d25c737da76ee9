use clap::Parser;
use sun_radiation::core::ConfigProvider;
use sun_radiation::utils::{logger, validation::Validate};
use sun_radiation::{format_report, NullRenderer, PlottersRenderer, RadiationEngine, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-radiation")]
#[command(about = "Blackbody radiation analysis driven by a TOML configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "radiation.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show the configuration without computing anything
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code().max(1));
        }
    };

    logger::init_logger(args.verbose, config.json_logs());

    tracing::info!("🚀 Starting TOML-based radiation analysis");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code().max(1));
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No computation will occur");
        display_config_summary(&config);
        return Ok(());
    }

    // 決定監控設定
    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    let format = config.output_format();

    let plot_output = config.plot_output().map(str::to_string);
    let result = match plot_output {
        Some(output) => {
            let renderer = PlottersRenderer::new(output, config.plot_size());
            RadiationEngine::new_with_monitoring(config, renderer, monitor_enabled).run()
        }
        None => RadiationEngine::new_with_monitoring(config, NullRenderer, monitor_enabled).run(),
    };

    match result.and_then(|report| format_report(&report, format)) {
        Ok(output) => {
            tracing::info!("✅ Analysis completed successfully!");
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!(
                "❌ Analysis failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code().max(1));
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    let sweep = config.sweep();
    let band = config.visible_band();
    let geometry = config.geometry();

    println!("📋 Configuration Summary:");
    println!("  Emitter: {} at {}", config.emitter_name(), config.temperature());
    println!(
        "  Sweep: {}–{} nm every {} nm",
        sweep.lower_nm, sweep.upper_nm, sweep.step_nm
    );
    println!(
        "  Visible band: {}–{} nm every {} nm",
        band.lower_nm, band.upper_nm, band.step_nm
    );
    println!(
        "  Geometry: emitter radius {:.4e} m, receiver radius {:.4e} m, distance {:.4e} m",
        geometry.emitter_radius_m, geometry.receiver_radius_m, geometry.distance_m
    );
    match config.plot_output() {
        Some(output) => {
            let (width, height) = config.plot_size();
            println!("  Plot: {} ({}x{})", output, width, height);
        }
        None => println!("  Plot: disabled"),
    }
    println!("  Output format: {:?}", config.output_format());
    println!("  Monitoring: {}", config.monitoring_enabled());
    println!();
    println!("✅ Dry run complete. Remove --dry-run to run the analysis.");
}
