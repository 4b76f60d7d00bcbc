//! medahost - trust gateway and asset host for the Meda Shooter runtime

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use medahost::gateway::token;
use medahost::{BootParams, GatewayConfig, Session};

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "medahost",
    about = "Trust gateway and asset host for the embedded Meda Shooter runtime",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level
    #[clap(long, default_value = "info", global = true)]
    log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the Unity build with correct compression headers
    Serve {
        /// Listen port
        #[clap(long, default_value_t = 3000)]
        port: u16,

        /// Directory containing the built page and unity-builds/ assets
        #[clap(long, default_value = "build")]
        build_dir: PathBuf,
    },

    /// Evaluate trust for a set of boot parameters and print the result
    Inspect {
        /// Claimed embedding origin
        #[clap(long)]
        origin: Option<String>,

        /// Authorization token (base64 origin:millis)
        #[clap(long)]
        token: Option<String>,

        /// Candidate wallet identifier
        #[clap(long)]
        wallet: Option<String>,
    },

    /// Development token tooling
    Token {
        #[clap(subcommand)]
        command: TokenCommand,
    },
}

#[derive(Subcommand, Debug)]
enum TokenCommand {
    /// Mint a token for an origin (dev/test only - tokens are unsigned)
    Issue {
        /// Origin the token asserts
        #[clap(long)]
        origin: String,

        /// Backdate the issuance by this many milliseconds
        #[clap(long, default_value_t = 0)]
        age_ms: i64,
    },

    /// Decode a token and print its claims
    Decode { token: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_filter_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve { port, build_dir } => {
            let addr = SocketAddr::from(([0, 0, 0, 0], port));
            medahost::server::serve(addr, build_dir).await?;
        }
        Command::Inspect {
            origin,
            token,
            wallet,
        } => {
            let config = GatewayConfig::from_env();
            let params = BootParams {
                origin,
                token,
                wallet,
            };
            let session = Session::initialize(&config, &params, now_ms());

            let report = serde_json::json!({
                "status": session.status(),
                "security_enabled": session.security_enabled(),
                "wallet": session.wallet(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Token { command } => match command {
            TokenCommand::Issue { origin, age_ms } => {
                println!("{}", token::issue(&origin, now_ms() - age_ms));
            }
            TokenCommand::Decode { token: raw } => {
                let claims = token::decode(&raw).context("token did not decode")?;
                let age_ms = now_ms().saturating_sub(claims.issued_at_ms);
                let report = serde_json::json!({
                    "origin": claims.origin,
                    "issued_at_ms": claims.issued_at_ms,
                    "age_ms": age_ms,
                    "within_freshness_window": age_ms < token::TOKEN_MAX_AGE_MS,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        },
    }

    Ok(())
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
