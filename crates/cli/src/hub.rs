//! `tlink hub` — saved hub endpoint management.

use clap::Subcommand;

use tradelink_hub_client::config::{
    config_file_path, load_config, resolve_api_base, save_config, HubConfig,
};

use crate::CliError;

#[derive(Subcommand)]
pub enum HubCommands {
    /// Save the hub API base URL for future commands
    #[command(after_help = "\
Examples:
  tlink hub set-url https://hub.tradelink.app/api
  tlink hub set-url http://localhost:4800")]
    SetUrl {
        /// Hub API base URL
        url: String,
    },

    /// Show the resolved hub endpoint and where it comes from
    Show,
}

pub fn cmd_hub(command: HubCommands) -> Result<(), CliError> {
    match command {
        HubCommands::SetUrl { url } => cmd_set_url(url),
        HubCommands::Show => cmd_show(),
    }
}

fn cmd_set_url(url: String) -> Result<(), CliError> {
    let url = url.trim().to_string();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(CliError::args(format!("invalid hub URL: {:?}", url))
            .with_hint("the URL must start with http:// or https://"));
    }

    save_config(&HubConfig {
        api_base: url.clone(),
    })
    .map_err(CliError::io)?;

    let path = config_file_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "config file".to_string());
    println!("saved {} to {}", url, path);
    Ok(())
}

fn cmd_show() -> Result<(), CliError> {
    println!("api_base: {}", resolve_api_base(None));
    match config_file_path() {
        Some(path) if load_config().is_some() => {
            println!("saved:    {}", path.display());
        }
        Some(path) => {
            println!("saved:    (none, would write to {})", path.display());
        }
        None => {
            println!("saved:    (no config directory available)");
        }
    }
    Ok(())
}
