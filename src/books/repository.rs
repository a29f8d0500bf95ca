pub mod json_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    // linear scan by exact isbn match
    async fn find_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookEntity>>;

    // removes the first book with matching isbn and reports whether one was removed
    async fn remove(&self, isbn: &str) -> LibraryResult<bool>;

    // rewrites the whole library file from memory
    async fn persist(&self) -> LibraryResult<()>;

    // replaces the in-memory catalog with the library file contents
    async fn reload(&self) -> LibraryResult<usize>;

    fn location(&self) -> String;
}
