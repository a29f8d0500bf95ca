use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// BookEntity is a single catalog record. The isbn is the catalog key and is taken as given,
// without checksum or format validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookEntity {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} (ISBN: {})", self.title, self.author, self.isbn)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Identifiable;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("1984", "George Orwell", "978-0-452-28423-4");
        assert_eq!("1984", book.title.as_str());
        assert_eq!("George Orwell", book.author.as_str());
        assert_eq!("978-0-452-28423-4", book.id().as_str());
    }

    #[tokio::test]
    async fn test_should_format_book() {
        let book = BookEntity::new("The Great Gatsby", "F. Scott Fitzgerald", "978-0-7432-7356-5");
        assert_eq!("The Great Gatsby by F. Scott Fitzgerald (ISBN: 978-0-7432-7356-5)", book.to_string());
    }

    #[tokio::test]
    async fn test_should_serialize_record_shape() {
        let book = BookEntity::new("To Kill a Mockingbird", "Harper Lee", "978-0-06-112008-4");
        let val = serde_json::to_value(&book).expect("should serialize");
        assert_eq!(serde_json::json!({
            "title": "To Kill a Mockingbird",
            "author": "Harper Lee",
            "isbn": "978-0-06-112008-4"
        }), val);
    }

    #[tokio::test]
    async fn test_should_reject_incomplete_record() {
        let res = serde_json::from_str::<BookEntity>(r#"{"title": "No Author", "isbn": "1"}"#);
        assert!(res.is_err());
    }
}
