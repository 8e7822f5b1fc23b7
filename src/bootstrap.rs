use crate::config::BootstrapConfig;
use crate::database::schema::{self, CollectionsReport};
use crate::database::MongoDB;
use crate::seeds::admin_user_seed::{seed_admin_user, SeedOutcome};
use crate::utils::error::BootstrapError;

pub const COMPLETION_MESSAGE: &str = "MongoDB initialization completed successfully!";

/// What a bootstrap run did.
#[derive(Debug, Clone)]
pub struct BootstrapReport {
    pub collections: CollectionsReport,
    pub indexes: Vec<String>,
    pub seed: SeedOutcome,
}

/// Brings an empty (or already initialized) database to the expected state:
/// collections, then indexes, then the admin seed. Stops at the first error.
pub async fn initialize(db: &MongoDB, config: &BootstrapConfig) -> Result<BootstrapReport, BootstrapError> {
    log::info!("📦 Ensuring collections in '{}'...", db.database().name());
    let collections = schema::ensure_collections(db).await?;

    log::info!("🔧 Creating database indexes...");
    let indexes = schema::ensure_indexes(db).await?;
    log::info!("✅ Database indexes ready");

    log::info!("🌱 Seeding admin user (policy: {})...", config.admin.policy);
    let seed = seed_admin_user(db, &config.admin).await?;

    Ok(BootstrapReport { collections, indexes, seed })
}
