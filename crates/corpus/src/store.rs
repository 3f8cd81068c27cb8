use std::cmp::Ordering;
use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Document, SearchHit};
use crate::scoring::{RelevanceScorer, SubstringScorer};

#[derive(Error, Debug, PartialEq)]
pub enum CorpusError {
    #[error("Document {0} not found")]
    NotFound(i64),

    #[error("Duplicate document id {0}")]
    DuplicateId(i64),
}

/// Read-only document collection, built once at startup.
///
/// Documents keep their insertion order and are never mutated afterwards, so
/// the store can be shared between requests without locking.
pub struct DocumentStore {
    documents: Vec<Document>,
    scorer: Box<dyn RelevanceScorer>,
}

impl DocumentStore {
    pub fn new(documents: Vec<Document>) -> Result<Self, CorpusError> {
        Self::with_scorer(documents, Box::new(SubstringScorer::new()))
    }

    pub fn with_scorer(
        documents: Vec<Document>,
        scorer: Box<dyn RelevanceScorer>,
    ) -> Result<Self, CorpusError> {
        let mut seen = HashSet::with_capacity(documents.len());
        for document in &documents {
            if !seen.insert(document.id) {
                return Err(CorpusError::DuplicateId(document.id));
            }
        }

        tracing::info!(
            "Document store ready: documents={}, scorer={}",
            documents.len(),
            scorer.name()
        );

        Ok(Self { documents, scorer })
    }

    /// The fixed demo corpus served by the backend.
    pub fn builtin() -> Self {
        Self {
            documents: builtin_documents(),
            scorer: Box::new(SubstringScorer::new()),
        }
    }

    pub fn list(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, id: i64) -> Result<&Document, CorpusError> {
        self.documents
            .iter()
            .find(|document| document.id == id)
            .ok_or(CorpusError::NotFound(id))
    }

    /// Scores every document, best first, keeping at most `top_k` hits.
    /// Equal scores keep corpus order.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<SearchHit> {
        let mut hits: Vec<SearchHit> = self
            .documents
            .iter()
            .map(|document| SearchHit::new(document, self.scorer.score(query, document)))
            .collect();

        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        hits.truncate(top_k);

        tracing::debug!(
            "DocumentStore::search: query_len={}, top_k={}, returned={}",
            query.chars().count(),
            top_k,
            hits.len()
        );

        hits
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

fn builtin_documents() -> Vec<Document> {
    vec![
        Document::new(1, "Закон о труде", "Текст закона о труде..."),
        Document::new(2, "Инструкция по безопасности", "Текст инструкции..."),
        Document::new(3, "Закон о защите данных", "Текст закона о данных..."),
    ]
}
