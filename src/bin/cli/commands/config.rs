//! Configuration command handlers for the PPT-GEN CLI

use std::path::PathBuf;

use pptgen_client::{ClientConfig, ClientError, ClientResult};

use crate::ConfigCommands;

pub async fn handle_config_command(cmd: ConfigCommands, config: &ClientConfig) -> ClientResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("Current CLI Configuration:");
            println!("══════════════════════════\n");

            println!("Generation Endpoint:");
            println!("  URL: {}", config.api.base_url);
            println!("  Timeout: {}ms", config.api.timeout_ms);
            println!();

            println!("CLI Settings:");
            println!("  Poll interval: {}ms", config.cli.poll_interval_ms);
            println!();

            println!("Config file search order:");
            println!("  1. ./pptgen-client.toml");
            println!("  2. ./config/pptgen-client.toml");
            println!("  3. ~/.pptgen/config.toml");
            println!("  4. {{config dir}}/pptgen/config.toml");
            println!();

            println!(
                "Environment overrides: PPTGEN_API_URL, PPTGEN_API_TIMEOUT_MS, PPTGEN_POLL_INTERVAL_MS"
            );
        }
        ConfigCommands::Init { output, force } => {
            let path = match output {
                Some(path) => PathBuf::from(path),
                None => ClientConfig::default_config_path()?,
            };

            if path.exists() && !force {
                eprintln!(
                    "✗ Config file already exists: {} (use --force to overwrite)",
                    path.display()
                );
                return Err(ClientError::invalid_input(format!(
                    "Config file already exists: {}",
                    path.display()
                )));
            }

            let default_config = ClientConfig::default();
            default_config.save_to_file(&path)?;

            println!("✓ Wrote default configuration to {}", path.display());
        }
    }

    Ok(())
}
