use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::metadata::{join_authors, AuthorLookup, MetadataLookup, UNKNOWN_TITLE};

// OpenLibraryLookup resolves an isbn through the Open Library edition endpoint
// ({base}/isbn/{isbn}.json) and then each referenced author ({base}{author key}.json).
#[derive(Debug, Clone)]
pub struct OpenLibraryLookup {
    client: Client,
    base_url: Url,
}

impl OpenLibraryLookup {
    pub fn new(base_url: &str, timeout: Duration) -> LibraryResult<Self> {
        let base_url = Url::parse(base_url).map_err(|err| LibraryError::validation(
            format!("invalid metadata url {} {}", base_url, err).as_str(), None))?;
        if base_url.cannot_be_a_base() {
            return Err(LibraryError::validation(
                format!("metadata url {} cannot be a base", base_url).as_str(), None));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| LibraryError::runtime(
                format!("failed to create metadata client {}", err).as_str(), None))?;
        Ok(Self {
            client,
            base_url,
        })
    }

    fn book_url(&self, isbn: &str) -> LibraryResult<Url> {
        self.url_for(&["isbn", format!("{}.json", isbn).as_str()])
    }

    fn author_url(&self, key: &str) -> LibraryResult<Url> {
        let mut segments: Vec<String> = key.split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        match segments.last_mut() {
            Some(last) => last.push_str(".json"),
            None => return Err(LibraryError::validation(
                format!("empty author key {:?}", key).as_str(), None)),
        }
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
        self.url_for(&segments)
    }

    fn url_for(&self, segments: &[&str]) -> LibraryResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LibraryError::validation(
                format!("metadata url {} cannot be a base", self.base_url).as_str(), None))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json(&self, url: Url) -> LibraryResult<Value> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(LibraryError::from_status(url.as_str(), status.as_u16()));
        }
        Ok(response.json::<Value>().await?)
    }

    async fn fetch_book(&self, isbn: &str) -> LibraryResult<BookEntity> {
        let data = self.get_json(self.book_url(isbn)?).await?;
        if !data.is_object() {
            return Err(LibraryError::serialization(
                format!("unexpected book payload for {}: {}", isbn, data).as_str()));
        }
        let title = data.get("title").and_then(Value::as_str).unwrap_or(UNKNOWN_TITLE);

        let mut outcomes = vec![];
        for key in author_keys(&data) {
            outcomes.push(self.lookup_author(key).await);
        }
        Ok(BookEntity::new(title, join_authors(&outcomes).as_str(), isbn))
    }

    async fn lookup_author(&self, key: &str) -> AuthorLookup {
        let res = match self.author_url(key) {
            Ok(url) => self.get_json(url).await,
            Err(err) => Err(err),
        };
        let outcome = match res {
            Ok(data) => match data.get("name").and_then(Value::as_str) {
                Some(name) if !name.trim().is_empty() => AuthorLookup::Resolved(name.to_string()),
                _ => AuthorLookup::skipped(key, "author has no name"),
            },
            Err(err) => AuthorLookup::skipped(key, err.to_string().as_str()),
        };
        if let AuthorLookup::Skipped { key, reason } = &outcome {
            debug!("skipping author {}: {}", key, reason);
        }
        outcome
    }
}

// author keys referenced by an edition, in order, e.g. "/authors/OL113314A"
fn author_keys(data: &Value) -> Vec<&str> {
    data.get("authors")
        .and_then(Value::as_array)
        .map(|authors| authors.iter()
            .filter_map(|author| author.get("key").and_then(Value::as_str))
            .collect())
        .unwrap_or_default()
}

#[async_trait]
impl MetadataLookup for OpenLibraryLookup {
    async fn resolve(&self, isbn: &str) -> Option<BookEntity> {
        match self.fetch_book(isbn).await {
            Ok(book) => {
                info!("resolved isbn {} to {}", isbn, book);
                Some(book)
            }
            Err(LibraryError::NotFound { message }) => {
                info!("isbn {} not found: {}", isbn, message);
                None
            }
            Err(err) => {
                warn!("lookup for isbn {} failed: {}", isbn, err);
                None
            }
        }
    }
}
