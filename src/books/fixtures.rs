use lazy_static::lazy_static;
use crate::books::domain::model::BookEntity;

lazy_static! {
    pub(crate) static ref SAMPLE_BOOKS: Vec<BookEntity> = vec![
        BookEntity::new("1984", "George Orwell", "978-0-452-28423-4"),
        BookEntity::new("The Great Gatsby", "F. Scott Fitzgerald", "978-0-7432-7356-5"),
        BookEntity::new("To Kill a Mockingbird", "Harper Lee", "978-0-06-112008-4"),
    ];
}

pub(crate) fn sample_book(i: usize) -> BookEntity {
    SAMPLE_BOOKS[i].clone()
}
