use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddManualBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddManualBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddManualBookCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) isbn: String,
}

impl AddManualBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
        }
    }
    pub fn build_book(&self) -> BookEntity {
        BookEntity::new(self.title.as_str(), self.author.as_str(), self.isbn.as_str())
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddManualBookCommandResponse {
    #[serde(flatten)]
    pub book: BookEntity,
}

impl AddManualBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddManualBookCommandRequest, AddManualBookCommandResponse> for AddManualBookCommand {
    async fn execute(&self, req: AddManualBookCommandRequest) -> Result<AddManualBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book)
            .await.map_err(CommandError::from).map(AddManualBookCommandResponse::new)
    }
}
