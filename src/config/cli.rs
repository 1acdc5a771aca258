use crate::config::toml_config::TomlConfig;
use crate::config::ClientConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "image-service-client")]
#[command(about = "Talk to the image & scraper service from the command line")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Service base URL (overrides config file and GO_IMAGE_SERVICE_URL)")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "TOML file with a [client] section")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Request timeout in seconds")]
    pub timeout_secs: Option<u64>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Probe /health
    Health,
    /// Show the service banner
    Info,
    /// Render a combat scene from a JSON file into a PNG
    Combat {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
    },
    /// Search Pinterest images
    Pinterest {
        query: String,
        #[arg(long)]
        max_results: Option<u32>,
    },
    /// Search VS Battles characters by name
    VsbSearch { name: String },
    /// Fetch a VS Battles character page
    VsbDetail { url: String },
}

impl CliConfig {
    /// Base URL priority: `--base-url`, then the config file, then the
    /// environment, then the default.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        let mut config = file.into_client_config(self.base_url.as_deref())?;
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
            config.validate()?;
        }

        Ok(config)
    }
}
