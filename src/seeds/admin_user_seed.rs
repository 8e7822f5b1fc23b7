use crate::config::{AdminSeed, SeedPolicy};
use crate::database::MongoDB;
use crate::models::{Role, User};
use crate::utils::crypto::{encode_seed_password, generate_password};
use crate::utils::error::BootstrapError;
use chrono::Utc;
use mongodb::bson::{doc, DateTime as BsonDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted,
    /// An admin with the same username or email was already there.
    Skipped,
    /// The existing admin was overwritten in place.
    Updated,
}

/// Seeds the default administrative account according to `seed.policy`.
pub async fn seed_admin_user(db: &MongoDB, seed: &AdminSeed) -> Result<SeedOutcome, BootstrapError> {
    let collection = db.collection::<User>(User::COLLECTION);

    if seed.policy == SeedPolicy::Skip {
        let existing = collection
            .count_documents(doc! {
                "$or": [{ "username": &seed.username }, { "email": &seed.email }]
            })
            .await?;

        if existing > 0 {
            log::info!("👤 Admin user '{}' already in DB — skipping seed", seed.username);
            return Ok(SeedOutcome::Skipped);
        }
    }

    let password = stored_password(seed)?;
    let now = BsonDateTime::from_millis(Utc::now().timestamp_millis());
    let admin = build_admin_user(seed, password, now);

    match seed.policy {
        SeedPolicy::Fail | SeedPolicy::Skip => {
            collection.insert_one(&admin).await?;
            log::info!("   ✅ Admin user '{}' inserted into {}", admin.username, User::COLLECTION);
            Ok(SeedOutcome::Inserted)
        }
        SeedPolicy::Upsert => {
            let result = collection
                .update_one(
                    doc! { "username": &admin.username },
                    doc! {
                        "$set": {
                            "email": &admin.email,
                            "password": &admin.password,
                            "role": admin.role.as_str(),
                            "enabled": admin.enabled,
                            "updatedAt": admin.updated_at,
                        },
                        "$setOnInsert": { "createdAt": admin.created_at },
                    },
                )
                .upsert(true)
                .await?;

            if result.upserted_id.is_some() {
                log::info!("   ✅ Admin user '{}' inserted into {}", admin.username, User::COLLECTION);
                Ok(SeedOutcome::Inserted)
            } else {
                log::info!("   🔄 Admin user '{}' updated", admin.username);
                Ok(SeedOutcome::Updated)
            }
        }
    }
}

/// Resolves and hashes the seed credential, generating one when none is configured.
fn stored_password(seed: &AdminSeed) -> Result<String, BootstrapError> {
    let secret = match &seed.password {
        Some(secret) => secret.clone(),
        None => {
            let generated = generate_password();
            log::warn!(
                "🔑 SEED_ADMIN_PASSWORD not set — generated password for '{}': {}",
                seed.username,
                generated
            );
            generated
        }
    };

    encode_seed_password(&secret, seed.hash, seed.bcrypt_cost)
}

fn build_admin_user(seed: &AdminSeed, password: String, now: BsonDateTime) -> User {
    User {
        id: None,
        username: seed.username.clone(),
        email: seed.email.clone(),
        password,
        full_name: None,
        role: Role::Admin,
        enabled: true,
        created_at: now,
        updated_at: now,
    }
}
