use auth::UserProfile;
use corpus::SearchHit;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileResponse {
    pub success: bool,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    /// Falls back to the configured default when omitted.
    #[serde(default)]
    pub top_k: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: i64,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    pub sources: Vec<Source>,
}

impl QueryResponse {
    /// Builds the placeholder answer from the matching hits, keeping their order.
    pub fn from_hits(query: &str, hits: Vec<SearchHit>) -> Self {
        let sources: Vec<Source> = hits
            .into_iter()
            .filter(SearchHit::is_match)
            .map(|hit| Source {
                id: hit.id,
                title: hit.title,
                content: hit.text,
            })
            .collect();

        let answer = if sources.is_empty() {
            format!("По запросу «{}» документы не найдены.", query)
        } else {
            format!(
                "По запросу «{}» найдено документов: {}.",
                query,
                sources.len()
            )
        };

        Self { answer, sources }
    }
}
