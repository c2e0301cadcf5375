//! Static credential verification for the inbound Basic-auth boundary.

use subtle::ConstantTimeEq;

use pulse_core::ports::CredentialVerifier;

/// Verifier holding the single username/password pair configured at
/// startup.
///
/// Both fields are always compared, so a mismatched username costs the
/// same as a mismatched password.
pub struct StaticCredentialVerifier {
    username: String,
    password: String,
}

impl StaticCredentialVerifier {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool {
        let user_ok = username.as_bytes().ct_eq(self.username.as_bytes());
        let pass_ok = password.as_bytes().ct_eq(self.password.as_bytes());
        bool::from(user_ok & pass_ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_the_configured_pair() {
        let verifier = StaticCredentialVerifier::new("admin", "hunter2");
        assert!(verifier.verify("admin", "hunter2"));
    }

    #[test]
    fn test_rejects_any_mismatch() {
        let verifier = StaticCredentialVerifier::new("admin", "hunter2");
        assert!(!verifier.verify("admin", "wrong"));
        assert!(!verifier.verify("root", "hunter2"));
        assert!(!verifier.verify("", ""));
        assert!(!verifier.verify("admin", "hunter22"));
    }
}
