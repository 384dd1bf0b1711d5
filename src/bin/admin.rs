//! CLI administration tool for link-shortener.
//!
//! Inspects the database and registers or looks up links without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Link count, counter position and server version
//! cargo run --bin admin -- db info
//!
//! # Register a URL (same dedup and allocation rules as the API)
//! cargo run --bin admin -- link add https://www.freecodecamp.org
//!
//! # Look up a code
//! cargo run --bin admin -- link show 1
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_HOST`, `DB_USER`, ...): PostgreSQL connection

use link_shortener::application::services::{LinkRegistry, UrlValidator};
use link_shortener::config::Config;
use link_shortener::domain::entities::{SHORT_LINK_NAMESPACE, parse_short_code};
use link_shortener::domain::repositories::{CounterRepository, ShortLinkRepository};
use link_shortener::infrastructure::dns::DnsResolver;
use link_shortener::infrastructure::persistence::{PgCounterRepository, PgShortLinkRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Register and inspect links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[derive(Subcommand)]
enum LinkAction {
    /// Register a URL and print its short code
    Add {
        url: String,

        /// Require the hostname to resolve
        #[arg(long)]
        check_dns: bool,
    },

    /// Show the URL registered under a code
    Show { code: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Link { action } => handle_link_action(action, pool).await?,
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let pool = Arc::new(pool.clone());
            let links = PgShortLinkRepository::new(pool.clone());
            let counters = PgCounterRepository::new(pool);

            let links_count = links
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;
            let last_code = counters
                .find(SHORT_LINK_NAMESPACE)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to read counter: {}", e))?
                .map(|c| c.seq)
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Links:      {}",
                links_count.to_string().bright_green().bold()
            );
            println!(
                "  Last code:  {}",
                last_code.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}

async fn handle_link_action(action: LinkAction, pool: PgPool) -> Result<()> {
    let pool = Arc::new(pool);
    let links = Arc::new(PgShortLinkRepository::new(pool.clone()));

    match action {
        LinkAction::Add { url, check_dns } => {
            let validator = UrlValidator::new(check_dns, Arc::new(DnsResolver::new()));
            let valid = validator
                .validate(&url)
                .await
                .map_err(|e| anyhow::anyhow!("Rejected '{}': {}", url, e))?;

            let registry = LinkRegistry::new(links, Arc::new(PgCounterRepository::new(pool)));
            let link = registry
                .register(valid)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to register link: {}", e))?;

            println!("{}", "✅ Link registered".green().bold());
            println!("  Code: {}", link.short_code.to_string().bright_yellow().bold());
            println!("  URL:  {}", link.original_url.cyan());
        }
        LinkAction::Show { code } => {
            let code = parse_short_code(&code).map_err(|e| anyhow::anyhow!("{}: '{}'", e, code))?;

            let link = links
                .find_by_code(code)
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
                .context("No short URL found")?;

            println!("  Code:    {}", link.short_code.to_string().bright_yellow());
            println!("  URL:     {}", link.original_url.cyan());
            println!(
                "  Created: {}",
                link.created_at
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
                    .bright_black()
            );
        }
    }

    Ok(())
}
