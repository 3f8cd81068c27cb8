pub mod models;
pub mod scoring;
pub mod store;

pub use models::{Document, SearchHit};
pub use scoring::{RelevanceScorer, SubstringScorer};
pub use store::{CorpusError, DocumentStore};
