use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) isbn: String,
}

impl GetBookCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct GetBookCommandResponse {
    #[serde(flatten)]
    book: BookEntity,
}

impl GetBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_isbn(req.isbn.as_str())
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::fixtures::sample_book;
    use crate::catalog::command::add_manual_book_cmd::{AddManualBookCommand, AddManualBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::factory::testing::temp_catalog;
    use crate::core::command::{Command, CommandError};
    use crate::utils::testing::unreachable_url;

    #[tokio::test]
    async fn test_should_run_get_book() {
        let (_dir, _, svc) = temp_catalog(unreachable_url().as_str()).await;
        let add_cmd = AddManualBookCommand::new(svc.clone());
        let get_cmd = GetBookCommand::new(svc);

        let book = sample_book(0);
        let _ = add_cmd.execute(AddManualBookCommandRequest::new(
            book.title.as_str(), book.author.as_str(), book.isbn.as_str())).await.expect("should add book");
        let loaded = get_cmd.execute(GetBookCommandRequest::new(book.isbn.clone())).await.expect("should get book");
        assert_eq!(book, loaded.book);

        let res = get_cmd.execute(GetBookCommandRequest::new("nonexistent".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
