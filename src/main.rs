use anyhow::Context;
use clap::Parser;
use logicflow_observer::app::bootstrap;
use logicflow_observer::utils::{logger, validation::Validate};
use logicflow_observer::{CliArgs, LocalStorage, ObserverEngine};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    let config = args
        .resolve_config()
        .context("failed to load configuration")?;
    tracing::debug!("Resolved config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let storage = LocalStorage::new();

    if !args.no_bootstrap {
        bootstrap::ensure_sample_data(&storage, &config.input_path)
            .context("failed to create sample data")?;
    }

    let engine = ObserverEngine::new(storage, config);

    match engine.run() {
        Ok(summary) => {
            tracing::info!(
                "✅ {} rows analyzed, {} anomalies reported",
                summary.rows_analyzed,
                summary.issue_count
            );
            println!("📁 Report saved to: {}", summary.report_path.display());
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Observer run failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            Err(e).context("observer run failed")
        }
    }
}
