use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mds-server",
    about = "MDS Gateway - flat HTTP operations over Master Data Services",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true, env = "MDS_CONFIG", help = "Path to the JSON config file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Start the gateway (default if no command specified)")]
    Serve {
        #[arg(short, long, help = "Listen port, overrides the config file and MDS_PORT")]
        port: Option<u16>,
    },

    #[command(subcommand, about = "Inspect configuration")]
    Config(ConfigCommands),

    #[command(about = "Print the health-check greeting")]
    SayHello,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Show the effective configuration (password masked)")]
    Show {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["mds-server"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_serve_port_and_global_config() {
        let cli =
            Cli::try_parse_from(["mds-server", "serve", "--port", "9000", "--config", "gw.json"])
                .unwrap();
        assert!(matches!(cli.command, Some(Commands::Serve { port: Some(9000) })));
        assert_eq!(cli.config, Some(PathBuf::from("gw.json")));
    }

    #[test]
    fn test_config_show_json() {
        let cli = Cli::try_parse_from(["mds-server", "config", "show", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Config(ConfigCommands::Show { json: true }))));
    }
}
