use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use psstbin_cli::api::ApiClient;
use psstbin_cli::cli::{handle_create, handle_get, handle_status, CreateArgs, GetArgs, StatusArgs};
use psstbin_cli::config::{paths::PsstPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "psstbin",
    version,
    about = "PsstBin - encrypted, ephemeral, one-time pastes",
    long_about = "Command-line client for the PsstBin one-time paste service. \
                  Pastes can be encrypted locally with AES-256-GCM before \
                  upload, so the server never sees the plaintext or the \
                  password."
)]
struct Cli {
    /// Custom API base URL
    #[arg(long, global = true, env = "PSSTBIN_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new paste
    Create(CreateArgs),

    /// Retrieve a paste by id (one-time read)
    Get(GetArgs),

    /// Fetch metadata of a paste (consumes the paste)
    Status(StatusArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PsstPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(api_url) = cli.api_url {
        settings.api_url = api_url;
    }

    let client = ApiClient::new(
        settings.api_url.clone(),
        Duration::from_secs(settings.request_timeout_seconds),
    )?;

    match cli.command {
        Commands::Create(args) => handle_create(&client, &settings, args)?,
        Commands::Get(args) => handle_get(&client, args)?,
        Commands::Status(args) => handle_status(&client, args)?,
        Commands::Config => show_config(&paths, &settings),
    }

    Ok(())
}

fn show_config(paths: &PsstPaths, settings: &Settings) {
    println!("PsstBin Configuration");
    println!("=====================");
    println!();
    println!("Config file: {}", paths.settings_file().display());
    println!("API URL: {}", settings.api_url);
    println!("Default expiry: {} seconds", settings.default_expiry_seconds);
    println!("Request timeout: {} seconds", settings.request_timeout_seconds);
}
