//! Shared connection arguments for publishing commands.

use std::path::PathBuf;

use clap::Args;
use pagepush_config::{CliSettings, Config, ConfigError};
use pagepush_confluence::ConfluenceClient;

use crate::error::CliError;
use crate::output::Output;

/// Connection settings shared by the publish and render commands.
#[derive(Args)]
pub(crate) struct ConnectionArgs {
    /// Path to configuration file (default: auto-discover pagepush.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page service base URL (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Personal access token for bearer authentication (overrides config).
    #[arg(long)]
    token: Option<String>,
}

impl ConnectionArgs {
    /// Build a client from config file, environment, and CLI overrides.
    pub(crate) fn client(&self, output: &Output) -> Result<ConfluenceClient, CliError> {
        let cli_settings = CliSettings {
            base_url: self.base_url.clone(),
            access_token: self.token.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let confluence = require_confluence_config(&config, output)?;
        Ok(ConfluenceClient::new(
            &confluence.base_url,
            &confluence.access_token,
        ))
    }
}

fn require_confluence_config<'a>(
    config: &'a Config,
    output: &Output,
) -> Result<&'a pagepush_config::ConfluenceConfig, CliError> {
    config.require_confluence().map_err(|err| {
        if matches!(err, ConfigError::Validation(_)) {
            output.info("Connection settings are required. Either add to pagepush.toml:");
            output.info("\n[confluence]");
            output.info(r#"base_url = "https://confluence.example.com""#);
            output.info(r#"access_token = "${CONFLUENCE_PAT}""#);
            output.info("\nor set the CONFLUENCE_URL and CONFLUENCE_PAT environment variables.");
        }
        CliError::Config(err)
    })
}
