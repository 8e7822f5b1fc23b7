use mongodb::error::{ErrorKind, WriteFailure};
use thiserror::Error;

/// Everything that can abort a bootstrap run.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    #[error("Credential error: {0}")]
    Credential(String),
}

/// Coarse class of a server error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Unavailable,
    Constraint,
    Permission,
    Other,
}

// DuplicateKey, DuplicateKeyValue, and the legacy sharded duplicate code
const DUPLICATE_KEY_CODES: [i32; 3] = [11000, 11001, 12582];
// Unauthorized, AuthenticationFailed, AtlasError
const PERMISSION_CODES: [i32; 3] = [13, 18, 8000];
// HostUnreachable, HostNotFound, NetworkTimeout, ShutdownInProgress,
// InterruptedAtShutdown, NotWritablePrimary, PrimarySteppedDown
const UNAVAILABLE_CODES: [i32; 7] = [6, 7, 89, 91, 11600, 10107, 189];

/// Maps a MongoDB server error code onto the bootstrap error taxonomy.
pub fn classify_code(code: i32) -> ErrorClass {
    if DUPLICATE_KEY_CODES.contains(&code) {
        ErrorClass::Constraint
    } else if PERMISSION_CODES.contains(&code) {
        ErrorClass::Permission
    } else if UNAVAILABLE_CODES.contains(&code) {
        ErrorClass::Unavailable
    } else {
        ErrorClass::Other
    }
}

impl BootstrapError {
    fn from_class(class: ErrorClass, message: String) -> Self {
        match class {
            ErrorClass::Unavailable => BootstrapError::StorageUnavailable(message),
            ErrorClass::Constraint => BootstrapError::ConstraintViolation(message),
            ErrorClass::Permission => BootstrapError::PermissionDenied(message),
            ErrorClass::Other => BootstrapError::Storage(message),
        }
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, BootstrapError::ConstraintViolation(_))
    }
}

/// Server error code carried by a driver error, if any.
pub fn server_code(err: &mongodb::error::Error) -> Option<i32> {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => Some(e.code),
        ErrorKind::Write(WriteFailure::WriteConcernError(e)) => Some(e.code),
        ErrorKind::Command(e) => Some(e.code),
        _ => None,
    }
}

impl From<mongodb::error::Error> for BootstrapError {
    fn from(err: mongodb::error::Error) -> Self {
        let message = err.to_string();

        let class = match (server_code(&err), err.kind.as_ref()) {
            (Some(code), _) => classify_code(code),
            (None, ErrorKind::Authentication { .. }) => ErrorClass::Permission,
            (None, ErrorKind::ServerSelection { .. })
            | (None, ErrorKind::Io(_))
            | (None, ErrorKind::ConnectionPoolCleared { .. })
            | (None, ErrorKind::DnsResolve { .. }) => ErrorClass::Unavailable,
            _ => ErrorClass::Other,
        };

        BootstrapError::from_class(class, message)
    }
}

impl From<bcrypt::BcryptError> for BootstrapError {
    fn from(err: bcrypt::BcryptError) -> Self {
        BootstrapError::Credential(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_is_constraint_violation() {
        assert_eq!(classify_code(11000), ErrorClass::Constraint);
        assert_eq!(classify_code(11001), ErrorClass::Constraint);
    }

    #[test]
    fn test_unauthorized_is_permission_denied() {
        assert_eq!(classify_code(13), ErrorClass::Permission);
        assert_eq!(classify_code(8000), ErrorClass::Permission);
    }

    #[test]
    fn test_network_codes_are_unavailable() {
        assert_eq!(classify_code(89), ErrorClass::Unavailable);
        assert_eq!(classify_code(10107), ErrorClass::Unavailable);
    }

    #[test]
    fn test_unknown_code_is_generic_storage_error() {
        // NamespaceExists
        assert_eq!(classify_code(48), ErrorClass::Other);
        let err = BootstrapError::from_class(classify_code(48), "exists".into());
        assert!(matches!(err, BootstrapError::Storage(_)));
    }

    #[test]
    fn test_io_error_maps_to_storage_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err: BootstrapError = mongodb::error::Error::from(io).into();
        assert!(matches!(err, BootstrapError::StorageUnavailable(_)));
    }

    #[test]
    fn test_bcrypt_error_maps_to_credential() {
        let err: BootstrapError = bcrypt::BcryptError::CostNotAllowed(2).into();
        assert!(matches!(err, BootstrapError::Credential(_)));
        assert!(err.to_string().starts_with("Credential error"));
    }
}
