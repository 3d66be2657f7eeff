use crate::corpus::split_corpus;
use crate::document::{Document, DocumentInput, DocumentStore};
use crate::error::{IndexError, Result};
use crate::highlight::{highlight_with, HighlightMode};
use crate::index::{InvertedIndex, QueryResult};
use serde::Deserialize;

/// Maximum number of formatted results returned by [`Engine::search`].
pub const MAX_RESULTS: usize = 11;

/// What happens when a document id is indexed more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReindexMode {
    /// Keep earlier postings; the id is listed again for every term.
    #[default]
    Append,
    /// Drop the id's earlier postings before adding the new ones.
    Replace,
}

impl std::str::FromStr for ReindexMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "append" => Ok(Self::Append),
            "replace" => Ok(Self::Replace),
            other => Err(format!("unknown reindex mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub max_results: usize,
    pub highlight: HighlightMode,
    pub reindex: ReindexMode,
    /// Lowercase queries before lookup so they match the lowercased corpus.
    pub lowercase_query: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: MAX_RESULTS,
            highlight: HighlightMode::default(),
            reindex: ReindexMode::default(),
            lowercase_query: false,
        }
    }
}

/// One indexing/query session: the document store, the inverted index over
/// it, and the options both are driven with.
#[derive(Debug, Default)]
pub struct Engine {
    store: DocumentStore,
    index: InvertedIndex,
    options: SearchOptions,
}

impl Engine {
    pub fn new(options: SearchOptions) -> Self {
        Self { store: DocumentStore::new(), index: InvertedIndex::new(), options }
    }

    pub fn options(&self) -> &SearchOptions { &self.options }

    pub fn store(&self) -> &DocumentStore { &self.store }

    pub fn store_mut(&mut self) -> &mut DocumentStore { &mut self.store }

    pub fn index(&self) -> &InvertedIndex { &self.index }

    /// Index a document and store it, returning the stored record.
    ///
    /// An empty id is treated as a missing one and rejected with
    /// [`IndexError::InvalidDocument`] before any state changes.
    pub fn index_document(&mut self, document: Document) -> Result<&Document> {
        if document.id.is_empty() {
            return Err(IndexError::InvalidDocument { field: "id" });
        }
        if self.options.reindex == ReindexMode::Replace {
            let dropped = self.index.remove_document(&document.id);
            if dropped > 0 {
                tracing::debug!(doc_id = %document.id, dropped, "replaced stale postings");
            }
        }
        let terms = self.index.add_document(&document);
        tracing::debug!(doc_id = %document.id, terms, "indexed document");
        Ok(self.store.add(document))
    }

    /// Validate an untyped record, then index it.
    pub fn index_input(&mut self, input: DocumentInput) -> Result<&Document> {
        let document = Document::try_from(input)?;
        self.index_document(document)
    }

    /// Split a raw corpus into documents and index each of them.
    pub fn ingest_corpus(&mut self, raw: &str) -> Result<usize> {
        let docs = split_corpus(raw);
        let count = docs.len();
        for doc in docs {
            self.index_document(doc)?;
        }
        tracing::info!(num_docs = count, num_terms = self.index.num_terms(), "ingested corpus");
        Ok(count)
    }

    pub fn lookup_query(&self, query: &str) -> QueryResult<'_> {
        if self.options.lowercase_query {
            // Keys borrow from the index, so the lowercased query can be dropped.
            let lowered = query.to_lowercase();
            self.index.lookup_query(&lowered)
        } else {
            self.index.lookup_query(query)
        }
    }

    /// Resolve the query and format at most `max_results` highlighted
    /// documents, term by term in query order.
    pub fn search(&self, query: &str) -> Vec<String> {
        self.format_results(&self.lookup_query(query))
    }

    pub fn format_results(&self, result: &QueryResult<'_>) -> Vec<String> {
        let limit = self.options.max_results;
        let mut out = Vec::with_capacity(limit.min(result.total_appearances()));
        for (term, appearances) in result.iter() {
            for appearance in appearances {
                if out.len() == limit {
                    return out;
                }
                match self.store.require(&appearance.doc_id) {
                    Ok(doc) => out.push(highlight_with(self.options.highlight, &doc.id, term, &doc.text)),
                    Err(err) => tracing::warn!(%term, error = %err, "skipping posting"),
                }
            }
        }
        out
    }

    /// Empty the inverted index. Stored documents are kept.
    pub fn clear_index(&mut self) {
        self.index.clear();
    }

    /// Remove a document from the store along with all of its postings.
    pub fn remove_document(&mut self, id: &str) -> Option<Document> {
        self.index.remove_document(id);
        self.store.remove(id)
    }
}
