use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::Value;

use crate::utils::testing::serve;

// A stand-in for the Open Library edition and author endpoints. Files named "slow*" answer
// after three seconds, files named "broken*" answer with a server error.
#[derive(Debug, Default)]
pub(crate) struct StubLibrary {
    books: HashMap<String, Value>,
    authors: HashMap<String, Value>,
}

impl StubLibrary {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_book(mut self, isbn: &str, data: Value) -> Self {
        self.books.insert(isbn.to_string(), data);
        self
    }

    pub(crate) fn with_author(mut self, id: &str, name: &str) -> Self {
        self.authors.insert(id.to_string(), serde_json::json!({ "name": name }));
        self
    }

    pub(crate) fn with_author_data(mut self, id: &str, data: Value) -> Self {
        self.authors.insert(id.to_string(), data);
        self
    }

    pub(crate) async fn start(self) -> String {
        let app = Router::new()
            .route("/isbn/:file", get(find_book))
            .route("/authors/:file", get(find_author))
            .with_state(Arc::new(self));
        serve(app).await
    }
}

async fn find_book(State(stub): State<Arc<StubLibrary>>,
                   Path(file): Path<String>) -> Result<Json<Value>, StatusCode> {
    answer(&stub.books, file.as_str()).await
}

async fn find_author(State(stub): State<Arc<StubLibrary>>,
                     Path(file): Path<String>) -> Result<Json<Value>, StatusCode> {
    answer(&stub.authors, file.as_str()).await
}

async fn answer(entries: &HashMap<String, Value>, file: &str) -> Result<Json<Value>, StatusCode> {
    let id = file.strip_suffix(".json").ok_or(StatusCode::NOT_FOUND)?;
    if id.starts_with("slow") {
        tokio::time::sleep(Duration::from_secs(3)).await;
    }
    if id.starts_with("broken") {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    entries.get(id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}
