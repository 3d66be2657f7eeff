use regex::Regex;
use serde::Deserialize;

/// How query terms are marked inside a document's text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightMode {
    /// Literal substring replacement; also marks the term inside longer words.
    #[default]
    Substring,
    /// Only whole words bounded by non-word characters are marked.
    Token,
}

impl std::str::FromStr for HighlightMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "token" => Ok(Self::Token),
            other => Err(format!("unknown highlight mode: {other}")),
        }
    }
}

/// Wrap every occurrence of `term` in `text` with brackets and prefix the
/// document id: `--- document {id}: {text}`.
pub fn highlight_term(id: &str, term: &str, text: &str) -> String {
    highlight_with(HighlightMode::Substring, id, term, text)
}

pub fn highlight_with(mode: HighlightMode, id: &str, term: &str, text: &str) -> String {
    let replaced = match mode {
        HighlightMode::Substring => text.replace(term, &format!("[{term}]")),
        HighlightMode::Token => mark_words(term, text),
    };
    format!("--- document {id}: {replaced}")
}

fn mark_words(term: &str, text: &str) -> String {
    if term.is_empty() {
        return text.to_string();
    }
    let pattern = format!(r"\b{}\b", regex::escape(term));
    match Regex::new(&pattern) {
        Ok(re) => re.replace_all(text, "[$0]").into_owned(),
        Err(err) => {
            tracing::warn!(%term, error = %err, "could not build highlight pattern");
            text.to_string()
        }
    }
}
