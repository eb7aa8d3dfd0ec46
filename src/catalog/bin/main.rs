include!("../../lib.rs");

use std::net::SocketAddr;
use axum::{
    routing::get,
    Router,
};
use crate::catalog::controller::{add_author, add_book, add_publisher, delete_book_by_id,
                                 get_all_authors, get_all_books, get_all_publishers,
                                 get_author_by_id, get_book_by_id, get_publisher_by_id,
                                 update_book_by_id};
use crate::core::controller::AppState;
use crate::core::repository::RepositoryStore;
use crate::utils::telemetry::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let env = std::env::var("CATALOG_ENV").unwrap_or_else(|_| "dev".to_string());
    let state = AppState::new(env.as_str(), RepositoryStore::Memory);
    let addr: SocketAddr = state.config.bind_address.parse()?;

    let app = Router::new()
        .route("/books", get(get_all_books).post(add_book))
        .route("/books/:id",
               get(get_book_by_id).put(update_book_by_id).delete(delete_book_by_id))
        .route("/authors", get(get_all_authors).post(add_author))
        .route("/authors/:id", get(get_author_by_id))
        .route("/publishers", get(get_all_publishers).post(add_publisher))
        .route("/publishers/:id", get(get_publisher_by_id))
        .with_state(state);

    tracing::info!(address = addr.to_string().as_str(), "starting catalog service");
    axum::Server::bind(&addr).serve(app.into_make_service()).await?;
    Ok(())
}
