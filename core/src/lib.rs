pub mod corpus;
pub mod document;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod index;
pub mod tokenizer;

pub use document::{DocId, Document, DocumentInput, DocumentStore};
pub use engine::{Engine, ReindexMode, SearchOptions, MAX_RESULTS};
pub use error::{IndexError, Result};
pub use highlight::{highlight_term, HighlightMode};
pub use index::{Appearance, InvertedIndex, QueryResult};
