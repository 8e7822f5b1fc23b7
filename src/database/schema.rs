//! Collections and indexes every fresh database must have.

use crate::database::MongoDB;
use crate::models::{AuditLog, Calculation, User};
use crate::utils::error::{server_code, BootstrapError};
use mongodb::bson::Document;
use mongodb::options::IndexOptions;
use mongodb::IndexModel;

// NamespaceExists
const NAMESPACE_EXISTS: i32 = 48;

pub const COLLECTIONS: [&str; 3] = [User::COLLECTION, Calculation::COLLECTION, AuditLog::COLLECTION];

/// Single-field index declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSpec {
    pub collection: &'static str,
    pub field: &'static str,
    /// 1 ascending, -1 descending
    pub direction: i32,
    pub unique: bool,
}

pub const INDEXES: [IndexSpec; 6] = [
    IndexSpec { collection: User::COLLECTION, field: "email", direction: 1, unique: true },
    IndexSpec { collection: User::COLLECTION, field: "username", direction: 1, unique: true },
    IndexSpec { collection: Calculation::COLLECTION, field: "userId", direction: 1, unique: false },
    IndexSpec { collection: Calculation::COLLECTION, field: "createdAt", direction: -1, unique: false },
    IndexSpec { collection: AuditLog::COLLECTION, field: "timestamp", direction: -1, unique: false },
    IndexSpec { collection: AuditLog::COLLECTION, field: "userId", direction: 1, unique: false },
];

impl IndexSpec {
    /// Server default name, e.g. `createdAt_-1`.
    pub fn name(&self) -> String {
        format!("{}_{}", self.field, self.direction)
    }

    pub fn keys(&self) -> Document {
        let mut keys = Document::new();
        keys.insert(self.field, self.direction);
        keys
    }

    fn model(&self) -> IndexModel {
        let options = IndexOptions::builder()
            .name(self.name())
            .unique(self.unique.then_some(true))
            .build();

        IndexModel::builder().keys(self.keys()).options(options).build()
    }
}

/// Outcome of `ensure_collections`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CollectionsReport {
    pub created: Vec<String>,
    pub existing: Vec<String>,
}

/// Creates the collections in `COLLECTIONS` that are not there yet.
pub async fn ensure_collections(db: &MongoDB) -> Result<CollectionsReport, BootstrapError> {
    let present = db.database().list_collection_names().await?;
    let mut report = CollectionsReport::default();

    for name in COLLECTIONS {
        if present.iter().any(|p| p == name) {
            log::info!("   ℹ️  Collection already exists: {}", name);
            report.existing.push(name.to_string());
            continue;
        }

        match db.database().create_collection(name).await {
            Ok(()) => {
                log::info!("   ✅ Collection created: {}", name);
                report.created.push(name.to_string());
            }
            Err(e) if server_code(&e) == Some(NAMESPACE_EXISTS) => {
                log::debug!("   ℹ️  Collection appeared concurrently: {}", name);
                report.existing.push(name.to_string());
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(report)
}

/// Creates every index in `INDEXES`. Re-creating an identical index is a
/// no-op on the server, so this is safe to run on an initialized database.
pub async fn ensure_indexes(db: &MongoDB) -> Result<Vec<String>, BootstrapError> {
    let mut ensured = Vec::with_capacity(INDEXES.len());

    for spec in INDEXES.iter() {
        let collection = db.collection::<Document>(spec.collection);
        let result = collection.create_index(spec.model()).await?;

        log::info!(
            "   ✅ Index ready: {}({}){}",
            spec.collection,
            result.index_name,
            if spec.unique { " [unique]" } else { "" }
        );
        ensured.push(format!("{}.{}", spec.collection, result.index_name));
    }

    Ok(ensured)
}
