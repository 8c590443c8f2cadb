//! Case-insensitive substring matching for question search.

/// True iff `search_term` occurs anywhere in `question_text`, ignoring
/// case. The empty term is a substring of everything, so it matches all.
pub fn matches(question_text: &str, search_term: &str) -> bool {
    question_text
        .to_lowercase()
        .contains(&search_term.to_lowercase())
}
