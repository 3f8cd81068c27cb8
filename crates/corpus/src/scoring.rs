use crate::models::Document;

pub trait RelevanceScorer: Send + Sync {
    fn score(&self, query: &str, document: &Document) -> f32;
    fn name(&self) -> &str;
}

/// Binary scorer: 1.0 when the query occurs in the title or the body,
/// compared in Unicode lowercase, otherwise 0.0.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubstringScorer;

impl SubstringScorer {
    pub const MATCH: f32 = 1.0;
    pub const NO_MATCH: f32 = 0.0;

    pub fn new() -> Self {
        Self
    }
}

impl RelevanceScorer for SubstringScorer {
    fn score(&self, query: &str, document: &Document) -> f32 {
        let query = query.to_lowercase();
        let matches = document.title.to_lowercase().contains(&query)
            || document.text.to_lowercase().contains(&query);

        if matches {
            Self::MATCH
        } else {
            Self::NO_MATCH
        }
    }

    fn name(&self) -> &str {
        "substring"
    }
}
