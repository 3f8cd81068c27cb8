use lawdesk_core::Credentials;

use crate::service::AuthError;

/// Decides whether a set of credentials may log in.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, credentials: &Credentials) -> Result<(), AuthError>;
}

/// Produces the bearer token handed back after a successful login.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, email: &str) -> String;
}

/// Demo verifier: every credential pair is accepted.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAnyCredentials;

impl CredentialVerifier for AcceptAnyCredentials {
    fn verify(&self, _credentials: &Credentials) -> Result<(), AuthError> {
        Ok(())
    }
}

/// Deterministic placeholder tokens of the form `demo-token-for-<email>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoTokenIssuer;

impl DemoTokenIssuer {
    pub const PREFIX: &'static str = "demo-token-for-";
}

impl TokenIssuer for DemoTokenIssuer {
    fn issue(&self, email: &str) -> String {
        format!("{}{}", Self::PREFIX, email)
    }
}
