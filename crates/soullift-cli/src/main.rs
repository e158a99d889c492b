//! SoulLift CLI - Seed prompt generation and profile management
//!
//! Simple CLI for interacting with the SoulLift API.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;
use std::fs;

use api::{GenerateSeedsRequest, SoulLiftClient};
use config::Config;

#[derive(Parser)]
#[command(name = "soullift")]
#[command(about = "SoulLift CLI - seed prompts and profile management", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate seed prompts for a recipient
    Seeds {
        /// The feeling the message should create (prompts if omitted)
        #[arg(short, long)]
        feeling: Option<String>,
        /// Tone of the prompts
        #[arg(short, long)]
        tone: Option<String>,
        /// Recipient role (e.g. "Mom", "best friend")
        #[arg(short, long)]
        recipient: Option<String>,
        /// Occasion (e.g. "birthday")
        #[arg(short, long)]
        occasion: Option<String>,
        /// Recipient name
        #[arg(short, long)]
        name: Option<String>,
        /// Recipient age
        #[arg(long)]
        recipient_age: Option<u32>,
        /// Writer age
        #[arg(long)]
        writer_age: Option<u32>,
        /// Return the raw model lines without validation
        #[arg(long)]
        raw: bool,
    },

    /// Validate candidate seed lines (one per line)
    Validate {
        /// Read candidates from file (stdin if omitted)
        #[arg(short, long)]
        file: Option<String>,
        /// Recipient name for the name-usage check
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Profile store operations
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Get a profile entry
    Get {
        /// Profile key
        key: String,
    },
    /// Set a profile entry (value is JSON, or a bare string)
    Set {
        /// Profile key
        key: String,
        /// Value to store
        value: String,
    },
    /// Remove a profile entry
    Remove {
        /// Profile key
        key: String,
    },
    /// List all profile entries
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Seeds {
            feeling,
            tone,
            recipient,
            occasion,
            name,
            recipient_age,
            writer_age,
            raw,
        } => {
            cmd_seeds(
                feeling,
                tone,
                recipient,
                occasion,
                name,
                recipient_age,
                writer_age,
                raw,
            )
            .await
        }
        Commands::Validate { file, name } => cmd_validate(file, name).await,
        Commands::Profile { action } => cmd_profile(action).await,
        Commands::Config => cmd_config().await,
    }
}

// ============================================
// Command Implementations
// ============================================

#[allow(clippy::too_many_arguments)]
async fn cmd_seeds(
    feeling: Option<String>,
    tone: Option<String>,
    recipient: Option<String>,
    occasion: Option<String>,
    name: Option<String>,
    recipient_age: Option<u32>,
    writer_age: Option<u32>,
    raw: bool,
) -> Result<()> {
    let config = Config::load()?;
    let client = SoulLiftClient::new(&config.base_url);

    let core_feeling = match feeling {
        Some(f) => f,
        None => Input::new()
            .with_prompt("What should the recipient feel?")
            .interact_text()
            .context("Failed to read input")?,
    };

    if core_feeling.trim().is_empty() {
        bail!("The feeling cannot be empty");
    }

    let request = GenerateSeedsRequest {
        core_feeling,
        tone: tone.or(config.default_tone),
        recipient,
        occasion,
        recipient_name: name,
        recipient_age,
        writer_age,
        validate: !raw,
    };

    let batch = client.generate_seeds(&request).await?;

    // Seeds go to stdout (clean for piping), diagnostics to stderr.
    for seed in &batch.seeds {
        println!("{}", seed);
    }

    if !batch.issues.is_empty() {
        eprintln!("\n{}", "Validator diagnostics:".yellow().bold());
        for issue in &batch.issues {
            eprintln!("  {} {}", "!".yellow(), issue);
        }
    }

    eprintln!(
        "\n{} {} seeds via {}/{} ({})",
        "✓".green(),
        batch.seeds.len(),
        batch.provider,
        batch.model,
        batch.id.to_string().dimmed()
    );

    Ok(())
}

async fn cmd_validate(file: Option<String>, name: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let client = SoulLiftClient::new(&config.base_url);

    let content = match file {
        Some(path) => {
            fs::read_to_string(&path).with_context(|| format!("Failed to read file: {}", path))?
        }
        None => std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")?,
    };

    let prompts: Vec<String> = content
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();

    if prompts.is_empty() {
        bail!("No candidate lines to validate");
    }

    let result = client.validate_seeds(prompts, name).await?;

    println!(
        "{} accepted:",
        result.valid.len().to_string().green().bold()
    );
    for line in &result.valid {
        println!("  {} {}", "✓".green(), line);
    }

    if !result.issues.is_empty() {
        println!("\n{}", "Issues:".yellow().bold());
        for issue in &result.issues {
            println!("  {} {}", "!".yellow(), issue);
        }
    }

    Ok(())
}

async fn cmd_profile(action: ProfileAction) -> Result<()> {
    let config = Config::load()?;
    let client = SoulLiftClient::new(&config.base_url);

    match action {
        ProfileAction::Get { key } => {
            let profile = client.get_profile(&key).await?;
            println!("{}", serde_json::to_string_pretty(&profile.value)?);
        }

        ProfileAction::Set { key, value } => {
            // Accept proper JSON, fall back to storing the raw string.
            let value: serde_json::Value = serde_json::from_str(&value)
                .unwrap_or_else(|_| serde_json::Value::String(value));

            let profile = client.set_profile(&key, value).await?;
            println!("{} Profile entry '{}' saved", "✓".green(), profile.key.cyan());
        }

        ProfileAction::Remove { key } => {
            client.delete_profile(&key).await?;
            println!("{} Profile entry '{}' removed", "✓".green(), key.cyan());
        }

        ProfileAction::List => {
            let profiles = client.list_profiles().await?;

            if profiles.is_empty() {
                println!("No profile entries.");
                return Ok(());
            }

            println!("{}", "Profile entries:".bold());
            for profile in profiles {
                let preview = truncate_string(&profile.value.to_string(), 60);
                println!("  {} {}", profile.key.cyan(), preview.dimmed());
            }
        }
    }

    Ok(())
}

async fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    // Write the default file on first run so there is something to edit.
    if !Config::config_path()?.exists() {
        config.save()?;
    }

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  Default Tone: {}",
        config.default_tone.as_deref().unwrap_or("None").cyan()
    );

    let client = SoulLiftClient::new(&config.base_url);
    match client.health().await {
        Ok(true) => println!("  API: {}", "reachable".green()),
        _ => println!("  API: {}", "unreachable".red()),
    }

    Ok(())
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_by_chars() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("0123456789ab", 10), "0123456789...");
        assert_eq!(truncate_string("héllo wörld", 5), "héllo...");
    }
}
