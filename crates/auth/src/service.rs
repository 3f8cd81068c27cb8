use lawdesk_core::{Credentials, ProfileUpdate, Registration};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::profile::UserProfile;
use crate::provider::{AcceptAnyCredentials, CredentialVerifier, DemoTokenIssuer, TokenIssuer};

/// Identifier returned for every registration. It is a placeholder, not a
/// unique user id: nothing is stored.
pub const PLACEHOLDER_USER_ID: u64 = 123;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email required")]
    MissingEmail,

    #[error("Name required")]
    MissingName,

    #[error("Invalid credentials: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: u64,
    pub email: String,
    pub name: Option<String>,
}

pub struct AuthService {
    verifier: Box<dyn CredentialVerifier>,
    issuer: Box<dyn TokenIssuer>,
}

impl AuthService {
    pub fn new(verifier: Box<dyn CredentialVerifier>, issuer: Box<dyn TokenIssuer>) -> Self {
        Self { verifier, issuer }
    }

    /// Accepts any credentials and hands out `demo-token-for-<email>`.
    pub fn demo() -> Self {
        Self::new(Box::new(AcceptAnyCredentials), Box::new(DemoTokenIssuer))
    }

    pub fn login(&self, credentials: &Credentials) -> Result<String, AuthError> {
        if credentials.email.is_empty() {
            tracing::warn!("Login rejected: empty email");
            return Err(AuthError::MissingEmail);
        }

        self.verifier.verify(credentials)?;

        tracing::info!("Issued token for {}", credentials.email);
        Ok(self.issuer.issue(&credentials.email))
    }

    /// Echoes the registration back. No uniqueness check, no persistence.
    pub fn register(&self, registration: Registration) -> RegisteredUser {
        tracing::info!("Registered {}", registration.email);
        RegisteredUser {
            id: PLACEHOLDER_USER_ID,
            email: registration.email,
            name: registration.name,
        }
    }

    /// Echoes the edited fields onto a placeholder profile. An empty photo
    /// means "no photo".
    pub fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile, AuthError> {
        if update.name.trim().is_empty() {
            tracing::warn!("Profile update rejected: empty name");
            return Err(AuthError::MissingName);
        }

        let photo = update.photo.filter(|photo| !photo.is_empty());
        tracing::info!("Updated profile for {}", update.name);
        Ok(UserProfile::placeholder(update.name, photo))
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::demo()
    }
}
