use async_trait::async_trait;
use crate::books::domain::model::BookEntity;

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Resolves book metadata for an ISBN from an external service.
///
/// A lookup either produces a complete record or nothing: misses, network failures and
/// malformed responses all come back as `None`.
#[async_trait]
pub trait MetadataLookup: Sync + Send {
    async fn resolve(&self, isbn: &str) -> Option<BookEntity>;
}

// AuthorLookup is the outcome of resolving one author reference of a book
#[derive(Debug, PartialEq, Clone)]
pub enum AuthorLookup {
    Resolved(String),
    Skipped {
        key: String,
        reason: String,
    },
}

impl AuthorLookup {
    pub fn skipped(key: &str, reason: &str) -> Self {
        AuthorLookup::Skipped { key: key.to_string(), reason: reason.to_string() }
    }
}

// joins resolved author names in lookup order, skipped authors leave no trace
pub fn join_authors(outcomes: &[AuthorLookup]) -> String {
    let names: Vec<&str> = outcomes.iter().filter_map(|outcome| match outcome {
        AuthorLookup::Resolved(name) => Some(name.as_str()),
        AuthorLookup::Skipped { .. } => None,
    }).collect();
    if names.is_empty() {
        UNKNOWN_AUTHOR.to_string()
    } else {
        names.join(", ")
    }
}
