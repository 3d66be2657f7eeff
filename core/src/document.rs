use crate::error::{IndexError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type DocId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<DocId>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into() }
    }
}

/// Untyped document record as it arrives over the wire, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentInput {
    pub id: Option<String>,
    pub text: Option<String>,
}

impl From<Document> for DocumentInput {
    fn from(doc: Document) -> Self {
        Self { id: Some(doc.id), text: Some(doc.text) }
    }
}

impl TryFrom<DocumentInput> for Document {
    type Error = IndexError;

    fn try_from(input: DocumentInput) -> Result<Self> {
        let id = input.id.ok_or(IndexError::InvalidDocument { field: "id" })?;
        let text = input.text.ok_or(IndexError::InvalidDocument { field: "text" })?;
        Ok(Document { id, text })
    }
}

/// In-memory store of the documents that have been indexed.
#[derive(Debug, Default)]
pub struct DocumentStore {
    docs: HashMap<DocId, Document>,
}

impl DocumentStore {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.docs.get(id)
    }

    /// Like [`get`](Self::get), but reports a missing id as an error.
    pub fn require(&self, id: &str) -> Result<&Document> {
        self.docs
            .get(id)
            .ok_or_else(|| IndexError::DocumentNotFound { id: id.to_string() })
    }

    /// Inserts the document, replacing any record with the same id.
    pub fn add(&mut self, document: Document) -> &Document {
        let id = document.id.clone();
        self.docs.insert(id.clone(), document);
        &self.docs[&id]
    }

    /// Removes the record keyed by `id` (a document's `id` field). Absent ids
    /// are ignored.
    pub fn remove(&mut self, id: &str) -> Option<Document> {
        self.docs.remove(id)
    }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_overwrites_same_id() {
        let mut store = DocumentStore::new();
        store.add(Document::new("0", "first"));
        store.add(Document::new("0", "second"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("0").unwrap().text, "second");
    }

    #[test]
    fn remove_then_get_is_absent() {
        let mut store = DocumentStore::new();
        store.add(Document::new("0", "the cat sat"));
        assert!(store.remove("0").is_some());
        assert!(store.get("0").is_none());
        assert!(matches!(store.require("0"), Err(IndexError::DocumentNotFound { .. })));
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut store = DocumentStore::new();
        store.add(Document::new("1", "kept"));
        assert!(store.remove("42").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn input_without_text_is_invalid() {
        let input = DocumentInput { id: Some("3".into()), text: None };
        let err = Document::try_from(input).unwrap_err();
        assert!(matches!(err, IndexError::InvalidDocument { field: "text" }));
    }
}
