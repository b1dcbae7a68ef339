use clap::Parser;
use iss_spotter::utils::{logger, validation::Validate};
use iss_spotter::{render, CliConfig, SpotterClient, SpotterEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting iss-spotter CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = SpotterClient::new(config);
    let engine = SpotterEngine::new(client);

    match engine.run().await {
        Ok(passes) => {
            if passes.is_empty() {
                tracing::info!("No upcoming passes reported for this location");
            }
            for line in render::render_passes(&passes) {
                println!("{}", line);
            }
        }
        Err(e) => {
            tracing::error!("❌ Flyover lookup failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ It didn't work! {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
