//! Seed predefined user accounts from a YAML file.
//!
//! Reads seed entries, hashes their passwords, and inserts each only if no
//! record with that email exists. Running the same file repeatedly never
//! duplicates accounts.

use std::path::Path;

use tracing::info;

use ironrail_api::config::HashingConfig;
use ironrail_api::db::{self, users::UserRepository};
use ironrail_api::seed;
use ironrail_api::services::auth::PasswordHasher;

/// Apply a seed file.
///
/// # Arguments
///
/// * `file_path` - Path to the YAML seed file
/// * `dry_run` - If true, parse and report without writing
///
/// # Errors
///
/// Returns an error if environment variables are missing, the file cannot be
/// read or parsed, or database operations fail.
pub async fn users(file_path: &str, dry_run: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Read and validate the file before connecting to the database
    let path = Path::new(file_path);
    let seeds = seed::load_from_path(path).await?;
    info!(path = %file_path, count = seeds.len(), "Parsed seed file");

    if dry_run {
        for entry in &seeds {
            info!(email = %entry.email, role = %entry.role, "would seed");
        }
        info!("Dry run complete, nothing written");
        return Ok(());
    }

    let (database_url, database_name) = super::database_env()?;

    let database = db::connect(&database_url, &database_name).await?;
    info!(database = %database_name, "Connected to database");

    db::ensure_indexes(&database).await?;

    // Hash every seed password up front; plaintext never reaches the store
    let hasher = PasswordHasher::new(&HashingConfig::default())?;
    let records = seed::build_records(&seeds, &hasher)?;

    let outcome = UserRepository::new(&database)
        .seed_if_absent(records)
        .await?;

    info!("Seeding complete!");
    info!("  Inserted: {}", outcome.inserted);
    info!("  Skipped (already exist): {}", outcome.skipped);

    Ok(())
}
