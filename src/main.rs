mod config;

use anyhow::{Context, Result};
use apns_token::SigningRequest;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;

// ─── CLI ─────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "apns-token",
    version,
    about = "Sign provider authentication tokens for Apple Push Notification service"
)]
struct Cli {
    /// Output format.
    #[arg(long, default_value = "text", global = true)]
    format: Format,

    /// Override data directory (default: ./apns-token or ~/.apns-token).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Clone, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Cmd {
    /// Create a new data directory with a template config.
    Init {
        /// Create in ~/.apns-token instead of ./apns-token.
        #[arg(long)]
        global: bool,
    },

    /// Print a signed provider token.
    Token {
        /// Issued-at time (RFC 3339). Default: now.
        #[arg(long)]
        issued_at: Option<String>,
        /// Override the configured key id.
        #[arg(long)]
        key_id: Option<String>,
        /// Override the configured team id.
        #[arg(long)]
        team_id: Option<String>,
    },
}

// ─── Entry ───────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apns_token=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Cmd::Init { global } => cmd_init(global),
        Cmd::Token {
            issued_at,
            key_id,
            team_id,
        } => {
            let data_dir = config::resolve_data_dir(cli.data_dir.as_deref())?;
            if !data_dir.join("config.toml").exists() {
                anyhow::bail!(
                    "No config found. Run `apns-token init` first.\n\
                     Looked in: {}",
                    data_dir.display()
                );
            }
            let cfg = config::Config::load(&data_dir)?;
            cmd_token(&cfg, issued_at, key_id, team_id, &cli.format).await
        }
    }
}

// ─── init ────────────────────────────────────────────────────────────────────

fn cmd_init(global: bool) -> Result<()> {
    let dir = config::init_data_dir(global)?;
    std::fs::create_dir_all(&dir)?;

    let cfg_path = dir.join("config.toml");
    if cfg_path.exists() {
        eprintln!("Config already exists: {}", cfg_path.display());
    } else {
        std::fs::write(&cfg_path, config::CONFIG_TEMPLATE)?;
        eprintln!("Created {}", cfg_path.display());
    }

    eprintln!("Initialized in {}", dir.display());
    eprintln!();
    eprintln!("Next steps:");
    eprintln!("  1. Edit {} with your team id, key id and .p8 key", cfg_path.display());
    eprintln!("  2. Run `apns-token token` to sign a token");
    Ok(())
}

// ─── token ───────────────────────────────────────────────────────────────────

async fn cmd_token(
    cfg: &config::Config,
    issued_at: Option<String>,
    key_id: Option<String>,
    team_id: Option<String>,
    fmt: &Format,
) -> Result<()> {
    let issued_at = match issued_at {
        Some(s) => DateTime::parse_from_rfc3339(&s)
            .with_context(|| format!("invalid --issued-at '{s}', expected RFC 3339"))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };
    let key_id = key_id.unwrap_or_else(|| cfg.apns.key_id.clone());
    let team_id = team_id.unwrap_or_else(|| cfg.apns.team_id.clone());

    let request = SigningRequest::new(
        cfg.apns.private_key.clone(),
        key_id.as_str(),
        team_id.as_str(),
    )
    .issued_at(issued_at);
    let token = apns_token::create_token(request)
        .await
        .context("failed to create provider token")?;
    info!(kid = %key_id, iss = %team_id, "token created");

    match fmt {
        Format::Json => {
            let out = serde_json::json!({
                "token": token,
                "key_id": key_id,
                "team_id": team_id,
                "issued_at": issued_at.to_rfc3339(),
                "iat": issued_at.timestamp(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Text => println!("{token}"),
    }
    Ok(())
}
