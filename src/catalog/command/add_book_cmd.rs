use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

// AddBookCommand adds a book by resolving its isbn through the metadata service
pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) isbn: String,
}

impl AddBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    #[serde(flatten)]
    pub book: BookEntity,
}

impl AddBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book_by_isbn(req.isbn.as_str())
            .await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory::testing::temp_catalog;
    use crate::core::command::{Command, CommandError};
    use crate::gateway::openlibrary::stub::StubLibrary;

    #[tokio::test]
    async fn test_should_run_add_book() {
        let url = StubLibrary::new()
            .with_book("978-0-452-28423-4", json!({"title": "1984", "authors": [{"key": "/authors/OL113314A"}]}))
            .with_author("OL113314A", "George Orwell")
            .start().await;
        let (_dir, _, svc) = temp_catalog(url.as_str()).await;
        let cmd = AddBookCommand::new(svc);

        let res = cmd.execute(AddBookCommandRequest::new("978-0-452-28423-4"))
            .await.expect("should add book");
        assert_eq!("1984", res.book.title.as_str());
        assert_eq!("George Orwell", res.book.author.as_str());

        let res = cmd.execute(AddBookCommandRequest::new("978-0-452-28423-4")).await;
        assert!(matches!(res, Err(CommandError::DuplicateKey { .. })));
    }

    #[tokio::test]
    async fn test_should_not_add_unknown_isbn() {
        let url = StubLibrary::new().start().await;
        let (_dir, _, svc) = temp_catalog(url.as_str()).await;
        let res = AddBookCommand::new(svc).execute(AddBookCommandRequest::new("invalid-isbn")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
