use crate::document::{DocId, Document};
use crate::tokenizer::{split_query, tokenize};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

/// Occurrence count of one term within one document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct Appearance {
    pub doc_id: DocId,
    pub frequency: u32,
}

#[derive(Debug, Default)]
pub struct InvertedIndex {
    /// term -> postings in insertion order
    postings: HashMap<String, Vec<Appearance>>,
    /// doc_id -> every term it has contributed postings to
    doc_terms: HashMap<DocId, HashSet<String>>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Append one posting per distinct term of the document.
    ///
    /// Postings already present for the same id are left alone, so indexing a
    /// document twice lists it twice. Returns the number of distinct terms.
    pub fn add_document(&mut self, document: &Document) -> usize {
        let terms = tokenize(&document.text);
        let mut tf: HashMap<String, u32> = HashMap::new();
        for term in terms {
            *tf.entry(term).or_insert(0) += 1;
        }

        let distinct = tf.len();
        let touched = self.doc_terms.entry(document.id.clone()).or_default();
        for (term, frequency) in tf {
            touched.insert(term.clone());
            self.postings
                .entry(term)
                .or_default()
                .push(Appearance { doc_id: document.id.clone(), frequency });
        }
        distinct
    }

    /// Drop every posting that belongs to `doc_id`. Terms left without
    /// postings are removed. Returns the number of postings dropped.
    pub fn remove_document(&mut self, doc_id: &str) -> usize {
        let Some(terms) = self.doc_terms.remove(doc_id) else { return 0 };
        let mut removed = 0;
        for term in terms {
            if let Some(list) = self.postings.get_mut(&term) {
                let before = list.len();
                list.retain(|a| a.doc_id != doc_id);
                removed += before - list.len();
                if list.is_empty() {
                    self.postings.remove(&term);
                }
            }
        }
        removed
    }

    pub fn postings(&self, term: &str) -> Option<&[Appearance]> {
        self.postings.get(term).map(Vec::as_slice)
    }

    /// Resolve each space-separated query term to its postings list.
    ///
    /// Terms missing from the index are left out of the result entirely.
    pub fn lookup_query(&self, query: &str) -> QueryResult<'_> {
        let mut result = QueryResult::default();
        for term in split_query(query) {
            if result.contains_key(term) {
                continue;
            }
            if let Some((key, list)) = self.postings.get_key_value(term) {
                result.entries.push((key.as_str(), list.as_slice()));
            }
        }
        result
    }

    /// Empty the term mapping.
    pub fn clear(&mut self) {
        self.postings.clear();
        self.doc_terms.clear();
    }

    pub fn num_terms(&self) -> usize { self.postings.len() }

    pub fn is_empty(&self) -> bool { self.postings.is_empty() }
}

/// Postings grouped by query term, in the order the terms were queried.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryResult<'a> {
    entries: Vec<(&'a str, &'a [Appearance])>,
}

impl<'a> QueryResult<'a> {
    pub fn get(&self, term: &str) -> Option<&'a [Appearance]> {
        self.entries.iter().find(|(t, _)| *t == term).map(|(_, list)| *list)
    }

    pub fn contains_key(&self, term: &str) -> bool {
        self.entries.iter().any(|(t, _)| *t == term)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a [Appearance])> + '_ {
        self.entries.iter().copied()
    }

    pub fn terms(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|(t, _)| *t)
    }

    /// Total postings across all matched terms.
    pub fn total_appearances(&self) -> usize {
        self.entries.iter().map(|(_, list)| list.len()).sum()
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl Serialize for QueryResult<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (term, list) in &self.entries {
            map.serialize_entry(term, list)?;
        }
        map.end()
    }
}
