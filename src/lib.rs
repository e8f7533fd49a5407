/// Post Service Library
///
/// A small resource API over posts and their comments. Handlers own no
/// state; all durable state lives behind the `PostStore` trait in `db`.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers for the post resource
/// - `models`: Data structures for posts and comments
/// - `db`: Persistence layer contract and Postgres implementation
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

pub use config::Config;
pub use error::{AppError, Result};
