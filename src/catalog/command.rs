pub mod add_book_cmd;
pub mod add_manual_book_cmd;
pub mod get_book_cmd;
pub mod get_stats_cmd;
pub mod list_books_cmd;
pub mod remove_book_cmd;
