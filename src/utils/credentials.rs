// src/utils/credentials.rs

/// Decides whether a supplied password matches the stored one.
///
/// Login goes through this trait only, so a hashing scheme can replace
/// [`PlainTextVerifier`] without changing stores or handlers.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, supplied: &str, stored: &str) -> bool;
}

/// Exact, case-sensitive comparison against the stored plain-text password.
///
/// Passwords are kept unhashed; this is a known weakness of the current system.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextVerifier;

impl CredentialVerifier for PlainTextVerifier {
    fn verify(&self, supplied: &str, stored: &str) -> bool {
        supplied == stored
    }
}
