use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use mds_core::modules::config as core_config;
use mds_types::GatewayConfig;

use crate::cli::ConfigCommands;

pub fn handle_config_command(cmd: ConfigCommands, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommands::Show { json } => show_config(config_path, json),
    }
}

pub fn show_config(config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = core_config::load_config(config_path)?.redacted();
    println!("{}", render_config(&config, json)?);
    Ok(())
}

fn render_config(config: &GatewayConfig, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(config)?);
    }

    let password = if config.mds.credentials.password.is_empty() {
        "(not set)".dimmed().to_string()
    } else {
        config.mds.credentials.password.clone()
    };

    Ok([
        "Server:".cyan().bold().to_string(),
        format!("  Listen: {}", config.server.get_socket_addr()),
        format!("  LAN access: {}", config.server.allow_lan_access),
        "MDS Service:".cyan().bold().to_string(),
        format!("  URL: {}", config.mds.service_url),
        format!("  Account: {}", config.mds.credentials.qualified_username()),
        format!("  Password: {}", password),
        format!("  Request timeout: {}s", config.mds.request_timeout),
        format!("  Search terms: {}", config.mds.search_term_quoting),
    ]
    .join("\n"))
}
