// src/infrastructure/repositories/postgres_listing.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::listing::{ListingSlug, ListingSlugRepository};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresListingSlugRepository {
    pool: PgPool,
}

impl PostgresListingSlugRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingSlugRepository for PostgresListingSlugRepository {
    async fn exists_by_slug(&self, slug: &ListingSlug) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(r#"SELECT EXISTS(SELECT 1 FROM "Bounties" WHERE slug = $1)"#)
            .bind(slug.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}
