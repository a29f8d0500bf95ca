use std::path::Path;
use crate::books::repository::BookRepository;
use crate::books::repository::json_book_repository::JsonBookRepository;
use crate::core::domain::Configuration;

pub(crate) async fn create_book_repository(config: &Configuration) -> Box<dyn BookRepository> {
    Box::new(JsonBookRepository::open(Path::new(config.library_file.as_str())).await)
}
