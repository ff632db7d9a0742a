use clap::{Args, Subcommand};

use super::OutputFormat;
use crate::config::Config;

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration values
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl ConfigCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ConfigSubcommand::Show { format } => {
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(config)?);
                    }
                    OutputFormat::Text => {
                        println!("Configuration");
                        println!("=============\n");
                        println!("Config file: {}", Config::default_config_path().display());
                        println!();
                        println!("data_dir: {}", config.data_dir.display());
                        println!("server_url: {}", config.server_url);
                        println!(
                            "api_key: {}",
                            if config.api_key.is_some() { "(set)" } else { "(not set)" }
                        );
                        println!("restaurant_doc: {}", config.restaurant_doc);
                    }
                }
                Ok(())
            }
        }
    }
}
