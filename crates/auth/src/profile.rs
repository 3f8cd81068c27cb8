use serde::{Deserialize, Serialize};

/// Subscription tier shown in the sidebar. Serialized with the labels the
/// frontend displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    #[serde(rename = "Базовый")]
    Basic,
    #[serde(rename = "Студент")]
    Student,
    #[serde(rename = "Юр. Лицо")]
    LegalEntity,
    #[serde(rename = "Депутат")]
    Deputy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub status: UserStatus,
    pub requests_used: u32,
    pub requests_limit: u32,
    pub photo: Option<String>,
}

impl UserProfile {
    pub const PLACEHOLDER_REQUESTS_USED: u32 = 15;
    pub const PLACEHOLDER_REQUESTS_LIMIT: u32 = 100;

    /// Profile with the demo tier and quota; nothing is looked up.
    pub fn placeholder(name: String, photo: Option<String>) -> Self {
        Self {
            name,
            status: UserStatus::Basic,
            requests_used: Self::PLACEHOLDER_REQUESTS_USED,
            requests_limit: Self::PLACEHOLDER_REQUESTS_LIMIT,
            photo,
        }
    }
}
