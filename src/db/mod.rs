/// Persistence layer
///
/// `PostStore` is the contract the handlers depend on; `PgPostStore`
/// is its Postgres implementation. Handlers never see sqlx types.
mod pg;
mod store;

pub use pg::PgPostStore;
pub use store::{InsertOutcome, PostStore, StoreError};

#[cfg(test)]
pub use store::MockPostStore;
