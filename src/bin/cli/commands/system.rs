//! System command handlers for the PPT-GEN CLI

use pptgen_client::{ClientConfig, ClientResult, GenerationApiClient, GenerationApiConfig};

use crate::SystemCommands;

pub async fn handle_system_command(cmd: SystemCommands, config: &ClientConfig) -> ClientResult<()> {
    match cmd {
        SystemCommands::Health => {
            println!("Checking generation service health...");

            let client = GenerationApiClient::new(GenerationApiConfig::from(&config.api))?;

            match client.health().await {
                Ok(health) => {
                    println!("  ✓ Generation service is healthy: {}", health.status);
                }
                Err(e) => {
                    eprintln!("  ✗ Generation service health check failed: {}", e);
                    return Err(e);
                }
            }
        }
        SystemCommands::Info => {
            println!("PPT-GEN CLI Information:");
            println!("════════════════════════\n");

            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();

            println!("Generation Endpoint:");
            println!("  URL: {}", config.api.base_url);
            println!("  Timeout: {}ms", config.api.timeout_ms);
        }
    }

    Ok(())
}
