//! # PPT-GEN CLI Tool
//!
//! Command-line interface for the presentation-generation API.
//! Submits generation requests, fetches result metadata, downloads
//! generated presentations, and checks service health.

mod cli;

use clap::{Parser, Subcommand};
use pptgen_client::ClientConfig;
use tracing::info;

use cli::{handle_config_command, handle_presentation_command, handle_system_command};

#[derive(Parser, Debug)]
#[command(name = "pptgen-cli")]
#[command(about = "Command-line interface for the PPT-GEN presentation generator")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Configuration file path (default: ~/.pptgen/config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Verbose output level (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Subcommands
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Presentation generation operations
    #[command(subcommand)]
    Presentation(PresentationCommands),

    /// System-level operations
    #[command(subcommand)]
    System(SystemCommands),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Debug, Subcommand)]
pub enum PresentationCommands {
    /// Submit a new generation request
    Generate {
        /// Presentation topic
        #[arg(short, long)]
        topic: String,
        /// Template name or id (minimalistic, colourful, professional, dark or 1-4)
        #[arg(long, default_value = "minimalistic")]
        template: String,
        /// Include code samples in the generated slides
        #[arg(long)]
        include_code: bool,
        /// Wait for the result and print the download URL
        #[arg(short, long)]
        wait: bool,
    },
    /// Fetch result metadata for the current presentation
    Info {
        /// Poll until the result is available
        #[arg(short, long)]
        wait: bool,
    },
    /// Download a generated presentation
    Download {
        /// Presentation identifier (fetched from the result endpoint when omitted)
        #[arg(value_name = "PRESENTATION_ID")]
        presentation_id: Option<String>,
        /// Output file path
        #[arg(short, long, default_value = "presentation.pptx")]
        output: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum SystemCommands {
    /// Generation service health check
    Health,
    /// System information
    Info,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show current CLI configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Output file path (default: ~/.pptgen/config.toml)
        #[arg(short, long)]
        output: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> pptgen_client::ClientResult<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level
    let log_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Load configuration with precedence: --config > env > config file > defaults
    let config = if let Some(config_path) = cli.config {
        ClientConfig::load_from_file(std::path::Path::new(&config_path))?
    } else {
        ClientConfig::load()?
    };

    info!(
        api_url = %config.api.base_url,
        "PPT-GEN CLI starting"
    );

    // Execute command
    match cli.command {
        Commands::Presentation(presentation_cmd) => {
            handle_presentation_command(presentation_cmd, &config).await
        }
        Commands::System(system_cmd) => handle_system_command(system_cmd, &config).await,
        Commands::Config(config_cmd) => handle_config_command(config_cmd, &config).await,
    }
}
