use crate::utils::error::BootstrapError;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "springdemo";
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";

/// What to do when the seed admin already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Insert unconditionally; a re-run hits the unique index and aborts.
    Fail,
    /// Leave an existing admin untouched.
    #[default]
    Skip,
    /// Overwrite credential, role and email, keeping `createdAt`.
    Upsert,
}

impl FromStr for SeedPolicy {
    type Err = BootstrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(SeedPolicy::Fail),
            "skip" => Ok(SeedPolicy::Skip),
            "upsert" => Ok(SeedPolicy::Upsert),
            other => Err(BootstrapError::Configuration(format!(
                "SEED_POLICY must be one of fail|skip|upsert, got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for SeedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SeedPolicy::Fail => "fail",
            SeedPolicy::Skip => "skip",
            SeedPolicy::Upsert => "upsert",
        };
        f.write_str(name)
    }
}

/// How the configured seed credential is turned into the stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordHash {
    #[default]
    Bcrypt,
    /// The configured value already is a hash and is stored as-is.
    Prehashed,
}

impl FromStr for PasswordHash {
    type Err = BootstrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bcrypt" => Ok(PasswordHash::Bcrypt),
            "prehashed" => Ok(PasswordHash::Prehashed),
            other => Err(BootstrapError::Configuration(format!(
                "SEED_PASSWORD_HASH must be bcrypt or prehashed, got '{}'",
                other
            ))),
        }
    }
}

/// Seed admin account settings.
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub username: String,
    pub email: String,
    /// `None` means a random credential is generated at seed time.
    pub password: Option<String>,
    pub hash: PasswordHash,
    pub bcrypt_cost: u32,
    pub policy: SeedPolicy,
}

#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    pub uri: String,
    pub database: String,
    pub timeout: Duration,
    pub admin: AdminSeed,
}

impl BootstrapConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, BootstrapError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BootstrapError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let timeout_secs: u64 = get("MONGODB_TIMEOUT_SECS", "5").parse().map_err(|e| {
            BootstrapError::Configuration(format!("MONGODB_TIMEOUT_SECS: {}", e))
        })?;

        let bcrypt_cost: u32 = get("SEED_BCRYPT_COST", &bcrypt::DEFAULT_COST.to_string())
            .parse()
            .map_err(|e| BootstrapError::Configuration(format!("SEED_BCRYPT_COST: {}", e)))?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(BootstrapError::Configuration(format!(
                "SEED_BCRYPT_COST must be between 4 and 31, got {}",
                bcrypt_cost
            )));
        }

        let hash: PasswordHash = get("SEED_PASSWORD_HASH", "bcrypt").parse()?;
        let password = lookup("SEED_ADMIN_PASSWORD").filter(|v| !v.is_empty());
        if hash == PasswordHash::Prehashed && password.is_none() {
            return Err(BootstrapError::Configuration(
                "SEED_PASSWORD_HASH=prehashed requires SEED_ADMIN_PASSWORD".to_string(),
            ));
        }

        Ok(Self {
            uri: get("MONGODB_URI", DEFAULT_URI),
            database: get("MONGODB_DATABASE", DEFAULT_DATABASE),
            timeout: Duration::from_secs(timeout_secs),
            admin: AdminSeed {
                username: get("SEED_ADMIN_USERNAME", DEFAULT_ADMIN_USERNAME),
                email: get("SEED_ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL),
                password,
                hash,
                bcrypt_cost,
                policy: get("SEED_POLICY", "skip").parse()?,
            },
        })
    }
}
