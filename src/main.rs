use clap::Parser;
use image_service_client::cli::{execute, exit_code, Outcome};
use image_service_client::utils::logger;
use image_service_client::{CliConfig, ServiceClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let client = match cli.client_config().and_then(ServiceClient::with_config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };
    tracing::debug!("Using image service at {}", client.base_url());

    let mut stdout = std::io::stdout();
    match execute(&client, &cli.command, &mut stdout).await {
        Ok(Outcome::Success) => Ok(()),
        Ok(Outcome::Unhealthy) => std::process::exit(1),
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?})",
                e,
                e.category()
            );
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    }
}
