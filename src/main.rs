use anyhow::Context;
use clap::Parser;
use rating_client::utils::{error::ErrorCategory, logger, validation::Validate};
use rating_client::{App, CliArgs, ViewProps};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.logging.json {
        logger::init_json_logger(config.logging.verbose);
    } else {
        logger::init_cli_logger(config.logging.verbose);
    }

    tracing::info!("Starting rating-client");
    tracing::debug!("Client config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let mut app = App::from_config(&config).context("failed to set up the reviews API client")?;
    let props = ViewProps {
        rating: args.rating.clone(),
    };

    match app.open(&args.path, props).await {
        Ok(page) => {
            tracing::debug!("Rendered route '{}' ({:?})", page.route, page.navigation);
            println!("{}", page.output);
            if page.request_failed {
                std::process::exit(2);
            }
        }
        Err(e) => {
            tracing::error!("❌ {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            let exit_code = match e.category() {
                ErrorCategory::Request => 2,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
