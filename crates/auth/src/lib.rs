pub mod profile;
pub mod provider;
pub mod service;

pub use profile::{UserProfile, UserStatus};
pub use provider::{AcceptAnyCredentials, CredentialVerifier, DemoTokenIssuer, TokenIssuer};
pub use service::{AuthError, AuthService, RegisteredUser, PLACEHOLDER_USER_ID};
