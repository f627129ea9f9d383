// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_listing;

pub use error::map_sqlx;
pub use postgres_listing::PostgresListingSlugRepository;
