use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub title: String,
    pub text: String,
}

impl Document {
    pub fn new(id: i64, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            text: text.into(),
        }
    }
}

/// A document annotated with its relevance to one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub score: f32,
}

impl SearchHit {
    pub fn new(document: &Document, score: f32) -> Self {
        Self {
            id: document.id,
            title: document.title.clone(),
            text: document.text.clone(),
            score,
        }
    }

    pub fn is_match(&self) -> bool {
        self.score > 0.0
    }
}
