use crate::document::Document;

/// Separator between documents in an uploaded corpus.
pub const DOCUMENT_SEPARATOR: &str = "\n\n";

/// Split raw corpus text into documents.
///
/// Line endings are normalized to `\n` (`\r\n` first, then lone `\r`), the
/// text is lowercased and split on blank lines; each document's id is its
/// zero-based position.
pub fn split_corpus(raw: &str) -> Vec<Document> {
    normalize_newlines(raw)
        .to_lowercase()
        .split(DOCUMENT_SEPARATOR)
        .enumerate()
        .map(|(i, text)| Document::new(i.to_string(), text))
        .collect()
}

fn normalize_newlines(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_blank_lines_with_positional_ids() {
        let docs = split_corpus("The Cat\n\nA Dog\nbarks\n\nend");
        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2"]);
        assert_eq!(docs[0].text, "the cat");
        assert_eq!(docs[1].text, "a dog\nbarks");
    }

    #[test]
    fn empty_corpus_is_single_empty_document() {
        let docs = split_corpus("");
        assert_eq!(docs, vec![Document::new("0", "")]);
    }

    #[test]
    fn crlf_corpus_splits_like_lf() {
        let docs = split_corpus("The cat\r\n\r\nthe dog\r\n");
        assert_eq!(docs, vec![Document::new("0", "the cat"), Document::new("1", "the dog\n")]);
    }

    #[test]
    fn lone_carriage_returns_become_newlines() {
        let docs = split_corpus("a\r\rb\rc");
        assert_eq!(docs, vec![Document::new("0", "a"), Document::new("1", "b\nc")]);
    }
}
