use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::add_manual_book_cmd::{AddManualBookCommand, AddManualBookCommandRequest, AddManualBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::get_stats_cmd::{GetStatsCommand, GetStatsCommandRequest, GetStatsCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, parse_body, MessageResponse, ServerError};

pub(crate) async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to Library Management API! Visit /docs for interactive documentation."))
}

pub(crate) async fn health() -> Json<MessageResponse> {
    Json(MessageResponse::new("API is healthy"))
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalog).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    body: Bytes) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = parse_body(&body)?;
    let res = AddBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn add_manual_book(
    State(state): State<AppState>,
    body: Bytes) -> Result<Json<AddManualBookCommandResponse>, ServerError> {
    let req: AddManualBookCommandRequest = parse_body(&body)?;
    let res = AddManualBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { isbn };
    let res = GetBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest { isbn };
    let res = RemoveBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn stats(
    State(state): State<AppState>) -> Result<Json<GetStatsCommandResponse>, ServerError> {
    let res = GetStatsCommand::new(state.catalog).execute(GetStatsCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) fn routes<B>(state: AppState) -> Router<(), B>
where
    B: axum::body::HttpBody<Data = Bytes> + Send + 'static,
    B::Error: Into<axum::BoxError>,
{
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/stats", get(stats))
        .route("/books", get(list_books).post(add_book))
        .route("/books/manual", post(add_manual_book))
        .route("/books/:isbn",
               get(find_book_by_isbn).delete(remove_book))
        .with_state(state)
}
