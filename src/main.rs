use clap::Parser;
use quakemap::core::ConfigProvider;
use quakemap::utils::{logger, validation::Validate};
use quakemap::{CliConfig, LocalStorage, MapEngine, MapPipeline, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, cli.log_json);

    tracing::info!("Starting quakemap");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = cli.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建存儲和管道,然後運行
    let result = match cli.config.clone() {
        Some(path) => {
            let config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("❌ Could not load config file {}: {}", path, e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            };
            let storage = LocalStorage::new(config.output_path().to_string());
            let pipeline = MapPipeline::new(storage, config);
            MapEngine::new_with_monitoring(pipeline, monitor_enabled)
                .run()
                .await
        }
        None => {
            let storage = LocalStorage::new(cli.output_path.clone());
            let pipeline = MapPipeline::new(storage, cli);
            MapEngine::new_with_monitoring(pipeline, monitor_enabled)
                .run()
                .await
        }
    };

    match result {
        Ok(output_path) => {
            tracing::info!("✅ Map build completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Map build completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Map build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                quakemap::utils::error::ErrorSeverity::Low => 0,
                quakemap::utils::error::ErrorSeverity::Medium => 2,
                quakemap::utils::error::ErrorSeverity::High => 1,
                quakemap::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
