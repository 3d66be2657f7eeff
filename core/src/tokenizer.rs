use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PUNCT: Regex = Regex::new(r"[^\w\s]").expect("valid regex");
}

/// Remove every character that is neither a word character nor whitespace.
pub fn strip_punctuation(text: &str) -> String {
    PUNCT.replace_all(text, "").into_owned()
}

/// Tokenize text into terms: strip punctuation, then split on single spaces.
///
/// Input is expected to be lowercased already. Consecutive spaces produce
/// empty terms, and empty input yields exactly one empty term.
pub fn tokenize(text: &str) -> Vec<String> {
    strip_punctuation(text).split(' ').map(str::to_string).collect()
}

/// Split a query into terms on single spaces, without any normalization.
pub fn split_query(query: &str) -> impl Iterator<Item = &str> {
    query.split(' ')
}
