// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_passion;
mod postgres_profile_search;
mod postgres_saved_search;

pub use error::map_sqlx;
pub use postgres_passion::PostgresPassionRepository;
pub use postgres_profile_search::PostgresProfileSearchGateway;
pub use postgres_saved_search::PostgresSavedSearchRepository;
