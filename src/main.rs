use clap::Parser;
use sun_radiation::core::ConfigProvider;
use sun_radiation::utils::{logger, validation::Validate};
use sun_radiation::{
    format_report, CliConfig, NullRenderer, PlottersRenderer, RadiationEngine, RadiationError,
};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, config.log_json);

    tracing::info!("Starting sun-radiation");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let format = config.format;
    let monitor = config.monitor;
    let plot_output = config.plot_output().map(str::to_string);
    let result = match plot_output {
        Some(output) => {
            let renderer = PlottersRenderer::new(output, config.plot_size());
            RadiationEngine::new_with_monitoring(config, renderer, monitor).run()
        }
        None => RadiationEngine::new_with_monitoring(config, NullRenderer, monitor).run(),
    };

    match result.and_then(|report| format_report(&report, format)) {
        Ok(output) => {
            tracing::info!("✅ Analysis completed successfully!");
            println!("{}", output);
        }
        Err(e) => fail(&e),
    }
}

fn fail(e: &RadiationError) -> ! {
    // 記錄詳細錯誤信息
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
