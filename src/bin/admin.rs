//! CLI administration tool for the redirect gateway.
//!
//! Talks to the same backend and loads the same signature database as the
//! server, which makes it handy for checking a deployment without sending
//! traffic through it.
//!
//! # Usage
//!
//! ```bash
//! # Look up where an alias points
//! cargo run --bin admin -- resolve abc123
//!
//! # Classify a user agent
//! cargo run --bin admin -- classify "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
//!
//! # Verify the signature database and backend connection
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see [`redirect_gateway::config`].

use redirect_gateway::config::{self, Config};
use redirect_gateway::domain::backend::{BackendError, LinkBackend};
use redirect_gateway::domain::device_classifier::DeviceClassifier;
use redirect_gateway::infrastructure::grpc::BackendClient;
use redirect_gateway::infrastructure::user_agent::UapSignatureDatabase;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for inspecting the redirect gateway's collaborators.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Resolve an alias through the backend
    Resolve {
        /// Alias to look up
        alias: String,
    },

    /// Classify a user-agent string
    Classify {
        /// Raw User-Agent header value
        user_agent: String,
    },

    /// Check the signature database and the backend connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Resolve { alias } => resolve(&config, &alias).await?,
        Commands::Classify { user_agent } => classify(&config, &user_agent)?,
        Commands::Check => check(&config).await?,
    }

    Ok(())
}

async fn connect(config: &Config) -> Result<BackendClient> {
    BackendClient::connect(&config.backend_url(), config.backend_timeout)
        .await
        .context("Failed to connect to backend")
}

fn load_classifier(config: &Config) -> Result<DeviceClassifier> {
    let database = UapSignatureDatabase::load(&config.regexes_path)
        .context("Failed to load signature database")?;
    Ok(DeviceClassifier::new(Arc::new(database)))
}

/// Prints the destination and expiry of an alias.
async fn resolve(config: &Config, alias: &str) -> Result<()> {
    if alias.is_empty() {
        anyhow::bail!("Alias must not be empty");
    }

    let client = connect(config).await?;
    let result = client.resolve_alias(alias).await;
    client.close();

    match result {
        Ok(lookup) => {
            println!("{}", "Alias resolved".green().bold());
            println!("  Alias:   {}", alias.cyan());
            println!("  Target:  {}", lookup.original_url.bright_white());
            match lookup.expires_at {
                Some(expires_at) if lookup.is_expired_at(Utc::now()) => {
                    println!("  Expires: {} {}", expires_at, "(expired)".red().bold());
                }
                Some(expires_at) => println!("  Expires: {}", expires_at),
                None => println!("  Expires: {}", "never".dimmed()),
            }
        }
        Err(BackendError::NotFound) => {
            println!("{} {}", "Alias not found:".yellow().bold(), alias);
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to resolve alias: {}", e)),
    }

    Ok(())
}

/// Prints the device category and raw signals for a user agent.
fn classify(config: &Config, user_agent: &str) -> Result<()> {
    let classifier = load_classifier(config)?;
    let signals = classifier.signals(user_agent);
    let device_type = classifier.classify(user_agent);

    println!("{} {}", "Device type:".bright_white().bold(), device_type.to_string().cyan());
    println!("  User agent family: {}", signals.user_agent_family);
    println!("  Device family:     {}", signals.device_family);
    println!("  OS family:         {}", signals.os_family);

    Ok(())
}

/// Verifies that every startup dependency is in place.
async fn check(config: &Config) -> Result<()> {
    println!("{}", "Checking startup dependencies".bright_blue().bold());

    let mut failed = false;

    match load_classifier(config) {
        Ok(_) => println!("  {} Signature database ({})", "ok".green(), config.regexes_path),
        Err(e) => {
            failed = true;
            println!("  {} Signature database: {:#}", "failed".red(), e);
        }
    }

    match connect(config).await {
        Ok(client) => {
            println!("  {} Backend ({})", "ok".green(), config.backend_url());
            client.close();
        }
        Err(e) => {
            failed = true;
            println!("  {} Backend: {:#}", "failed".red(), e);
        }
    }

    if failed {
        anyhow::bail!("One or more checks failed");
    }

    println!("{}", "All checks passed".green().bold());
    Ok(())
}
