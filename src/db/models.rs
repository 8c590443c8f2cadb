//! Domain models for the trivia database.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use serde::{Deserialize, Serialize};

/// A labeled grouping for questions (e.g., "Sports").
///
/// The label is called `type` on the wire and in the database; the Rust
/// field is `kind` because `type` is a keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A single trivia prompt with its answer, category, difficulty, and rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Foreign key to [`Category::id`].
    pub category: i64,
    pub difficulty: i64,
    pub rating: i64,
}

/// Field set for inserting a question; the id is generated by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
    pub rating: i64,
}
