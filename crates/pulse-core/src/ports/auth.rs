//! Inbound credential-check port.

/// Verifies a username/password pair against the configured credentials.
///
/// Implementations must compare in constant time with respect to the
/// configured values.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Invalid authorization header: {0}")]
    InvalidHeader(String),

    #[error("Invalid credentials")]
    InvalidCredentials,
}
