use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anything that is not a letter, digit, whitespace or one of the
    // punctuation marks that occur inside skill names (node.js, c++, c#, ci/cd).
    static ref UNSAFE_CHARS: Regex = Regex::new(r"[^\p{Alphabetic}\p{N}\s.+#/\-]").unwrap();
    static ref WHITESPACE_RUNS: Regex = Regex::new(r"\s+").unwrap();
}

/// Cleans raw extracted text for term search.
///
/// Lowercases, drops characters outside the safe set without leaving a gap,
/// collapses every whitespace run to a single space and trims both ends.
/// `normalize(normalize(s)) == normalize(s)` for every input.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lowered = text.to_lowercase();
    let stripped = UNSAFE_CHARS.replace_all(&lowered, "");
    WHITESPACE_RUNS.replace_all(&stripped, " ").trim().to_string()
}
