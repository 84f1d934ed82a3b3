use clap::Parser;
use namefmt::utils::{error::NameError, logger};
use namefmt::{CliConfig, LocalStorage, Mode, NameEngine, NamePipeline};

fn fail(e: &NameError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 設定檔要在日誌初始化前讀取，才能套用其中的日誌等級
    let file_config = match config.load_file_config() {
        Ok(file_config) => file_config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let level = file_config.as_ref().and_then(|f| f.log_level());
    if config.log_json {
        logger::init_json_logger(config.verbose, level);
    } else {
        logger::init_cli_logger(config.verbose, level);
    }

    tracing::debug!("CLI config: {:?}", config);

    let mode = match config.mode(file_config.as_ref()) {
        Ok(mode) => mode,
        Err(e) => fail(&e),
    };

    match mode {
        Mode::Single(parts) => {
            tracing::debug!("Formatting single name: {:?}", parts);
            println!("{}", parts);
        }
        Mode::Batch(run_config) => {
            let storage = LocalStorage::new(".");
            let pipeline = NamePipeline::new(storage, run_config);
            let engine = NameEngine::new(pipeline);

            match engine.run().await {
                Ok(output_path) => {
                    println!("✅ Names formatted successfully!");
                    println!("📁 Output saved to: {}", output_path);
                }
                Err(e) => fail(&e),
            }
        }
    }

    Ok(())
}
