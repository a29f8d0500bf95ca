use std::collections::HashMap;
use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::catalog::domain::{CatalogService, CatalogStats};
use crate::core::domain::API_VERSION;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::gateway::metadata::MetadataLookup;

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    metadata_lookup: Box<dyn MetadataLookup>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(book_repository: Box<dyn BookRepository>,
                      metadata_lookup: Box<dyn MetadataLookup>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            book_repository,
            metadata_lookup,
            events_publisher,
        }
    }

    async fn ensure_absent(&self, isbn: &str) -> LibraryResult<()> {
        if self.book_repository.find_by_isbn(isbn).await?.is_some() {
            return Err(LibraryError::duplicate_key(
                format!("Book with ISBN {} already exists", isbn).as_str()));
        }
        Ok(())
    }

    async fn store(&self, book: BookEntity, source: &str) -> LibraryResult<BookEntity> {
        self.book_repository.create(&book).await?;
        info!("Added: {}", book);
        let metadata = HashMap::from([("source".to_string(), source.to_string())]);
        self.publish(DomainEvent::added("books", book.isbn.as_str(), &metadata, &book)?).await;
        Ok(book)
    }

    // the change is already persisted, a failed announcement must not undo it
    async fn publish(&self, event: DomainEvent) {
        if let Err(err) = self.events_publisher.publish(&event).await {
            warn!("failed to publish {} event for {}: {}", event.kind, event.key, err);
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookEntity> {
        let isbn = isbn.trim();
        if isbn.is_empty() {
            return Err(LibraryError::validation("ISBN is required", Some("400".to_string())));
        }
        self.ensure_absent(isbn).await?;
        let book = self.metadata_lookup.resolve(isbn).await.ok_or_else(|| LibraryError::not_found(
            format!("Book with ISBN {} not found in Open Library", isbn).as_str()))?;
        self.store(book, "openlibrary").await
    }

    async fn add_book(&self, book: &BookEntity) -> LibraryResult<BookEntity> {
        let book = BookEntity::new(book.title.trim(), book.author.trim(), book.isbn.trim());
        if book.title.is_empty() || book.author.is_empty() || book.isbn.is_empty() {
            return Err(LibraryError::validation("Title, author, and ISBN are all required",
                                                Some("400".to_string())));
        }
        self.ensure_absent(book.isbn.as_str()).await?;
        self.store(book, "manual").await
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<BookEntity> {
        let book = self.book_repository.get(isbn).await?;
        if !self.book_repository.remove(isbn).await? {
            return Err(LibraryError::not_found(format!("Book with ISBN {} not found", isbn).as_str()));
        }
        info!("Removed book with ISBN: {}", isbn);
        self.publish(DomainEvent::deleted("books", isbn, &HashMap::new(), &book)?).await;
        Ok(book)
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookEntity> {
        self.book_repository.get(isbn).await
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookEntity>> {
        self.book_repository.list().await
    }

    async fn stats(&self) -> LibraryResult<CatalogStats> {
        Ok(CatalogStats {
            total_books: self.book_repository.count().await?,
            library_file: self.book_repository.location(),
            api_version: API_VERSION.to_string(),
        })
    }
}
