pub mod service;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    // resolves the isbn through the metadata service and stores the result
    async fn add_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookEntity>;
    // stores a caller supplied book as is
    async fn add_book(&self, book: &BookEntity) -> LibraryResult<BookEntity>;
    async fn remove_book(&self, isbn: &str) -> LibraryResult<BookEntity>;
    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookEntity>;
    async fn list_books(&self) -> LibraryResult<Vec<BookEntity>>;
    async fn stats(&self) -> LibraryResult<CatalogStats>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_books: usize,
    pub library_file: String,
    pub api_version: String,
}
