use crate::config::PasswordHash;
use crate::utils::error::BootstrapError;
use uuid::Uuid;

/// Turns the configured seed credential into what gets stored in `users.password`.
pub fn encode_seed_password(
    secret: &str,
    algorithm: PasswordHash,
    cost: u32,
) -> Result<String, BootstrapError> {
    match algorithm {
        PasswordHash::Bcrypt => Ok(bcrypt::hash(secret, cost)?),
        PasswordHash::Prehashed => {
            if secret.is_empty() {
                return Err(BootstrapError::Credential(
                    "prehashed seed password is empty".to_string(),
                ));
            }
            Ok(secret.to_string())
        }
    }
}

/// Random one-off credential for when none is configured.
pub fn generate_password() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcrypt_hash_verifies() {
        let hashed = encode_seed_password("s3cret", PasswordHash::Bcrypt, 4).unwrap();
        assert_ne!(hashed, "s3cret");
        assert!(hashed.starts_with("$2"));
        assert!(bcrypt::verify("s3cret", &hashed).unwrap());
        assert!(!bcrypt::verify("wrong", &hashed).unwrap());
    }

    #[test]
    fn test_prehashed_is_stored_verbatim() {
        let hash = "$2a$10$abcdefghijklmnopqrstuuC1m4t3Wm3Ex0ZyL9yqX3o1YtHn0F0Ae";
        let stored = encode_seed_password(hash, PasswordHash::Prehashed, 10).unwrap();
        assert_eq!(stored, hash);
    }

    #[test]
    fn test_empty_prehashed_is_rejected() {
        let result = encode_seed_password("", PasswordHash::Prehashed, 10);
        assert!(matches!(result, Err(BootstrapError::Credential(_))));
    }

    #[test]
    fn test_invalid_cost_is_credential_error() {
        let result = encode_seed_password("s3cret", PasswordHash::Bcrypt, 2);
        assert!(matches!(result, Err(BootstrapError::Credential(_))));
    }

    #[test]
    fn test_generated_passwords_differ() {
        let a = generate_password();
        let b = generate_password();
        assert_eq!(a.len(), 32);
        assert_ne!(a, b);
    }
}
