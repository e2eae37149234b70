//! Ironrail CLI - seeding and account management tools.
//!
//! # Usage
//!
//! ```bash
//! # Apply predefined accounts from a YAML seed file (idempotent)
//! ir-cli seed users --file seeds.yaml
//!
//! # Validate a seed file without writing
//! ir-cli seed users --file seeds.yaml --dry-run
//!
//! # Create a single account directly
//! ir-cli user create -n "Station Admin" -e admin@example.com -p <password> -r admin
//! ```
//!
//! # Commands
//!
//! - `seed users` - Apply predefined accounts from a YAML file
//! - `user create` - Create a single account

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ir-cli")]
#[command(author, version, about = "Ironrail CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed predefined data
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum SeedTarget {
    /// Apply predefined user accounts from a YAML file
    Users {
        /// Path to the YAML seed file
        #[arg(short, long)]
        file: String,

        /// Parse and validate the file without writing to the database
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a new user account
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (hashed before storage)
        #[arg(short, long)]
        password: String,

        /// Account role (`admin`, `customer`)
        #[arg(short, long, default_value = "customer")]
        role: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { target } => match target {
            SeedTarget::Users { file, dry_run } => {
                commands::seed::users(&file, dry_run).await?;
            }
        },
        Commands::User { action } => match action {
            UserAction::Create {
                name,
                email,
                password,
                role,
            } => {
                commands::user::create(&name, &email, &password, &role).await?;
            }
        },
    }
    Ok(())
}
