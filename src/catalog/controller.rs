use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::Value;
use crate::authors::dto::AuthorDto;
use crate::books::dto::SaveBookDto;
use crate::catalog::command::add_author_cmd::{AddAuthorCommand, AddAuthorCommandRequest, AddAuthorCommandResponse};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::add_publisher_cmd::{AddPublisherCommand, AddPublisherCommandRequest, AddPublisherCommandResponse};
use crate::catalog::command::get_author_cmd::{GetAuthorCommand, GetAuthorCommandRequest, GetAuthorCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::get_publisher_cmd::{GetPublisherCommand, GetPublisherCommandRequest, GetPublisherCommandResponse};
use crate::catalog::command::list_authors_cmd::{ListAuthorsCommand, ListAuthorsCommandRequest, ListAuthorsCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::list_publishers_cmd::{ListPublishersCommand, ListPublishersCommandRequest, ListPublishersCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::publishers::dto::PublisherDto;

async fn build_service(state: AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.store).await
}

pub async fn get_all_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let svc = build_service(state).await;
    let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest {}).await?;
    Ok(Json(res))
}

pub async fn get_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let svc = build_service(state).await;
    let res = GetBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let book: SaveBookDto = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = AddBookCommand::new(svc).execute(AddBookCommandRequest::new(book)).await?;
    Ok(Json(res))
}

pub async fn update_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
    json: Json<Value>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let book: SaveBookDto = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = UpdateBookCommand::new(svc).execute(UpdateBookCommandRequest::new(book_id, book)).await?;
    Ok(Json(res))
}

pub async fn delete_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest { book_id };
    let svc = build_service(state).await;
    let res = RemoveBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub async fn get_all_authors(
    State(state): State<AppState>) -> Result<Json<ListAuthorsCommandResponse>, ServerError> {
    let svc = build_service(state).await;
    let res = ListAuthorsCommand::new(svc).execute(ListAuthorsCommandRequest {}).await?;
    Ok(Json(res))
}

pub async fn get_author_by_id(
    State(state): State<AppState>,
    Path(author_id): Path<i64>) -> Result<Json<GetAuthorCommandResponse>, ServerError> {
    let req = GetAuthorCommandRequest { author_id };
    let svc = build_service(state).await;
    let res = GetAuthorCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub async fn add_author(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddAuthorCommandResponse>, ServerError> {
    let author: AuthorDto = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = AddAuthorCommand::new(svc).execute(AddAuthorCommandRequest::new(author)).await?;
    Ok(Json(res))
}

pub async fn get_all_publishers(
    State(state): State<AppState>) -> Result<Json<ListPublishersCommandResponse>, ServerError> {
    let svc = build_service(state).await;
    let res = ListPublishersCommand::new(svc).execute(ListPublishersCommandRequest {}).await?;
    Ok(Json(res))
}

pub async fn get_publisher_by_id(
    State(state): State<AppState>,
    Path(publisher_id): Path<i64>) -> Result<Json<GetPublisherCommandResponse>, ServerError> {
    let req = GetPublisherCommandRequest { publisher_id };
    let svc = build_service(state).await;
    let res = GetPublisherCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub async fn add_publisher(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddPublisherCommandResponse>, ServerError> {
    let publisher: PublisherDto = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state).await;
    let res = AddPublisherCommand::new(svc).execute(AddPublisherCommandRequest::new(publisher)).await?;
    Ok(Json(res))
}
