// tests/support/mocks/listings.rs
use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use listing_slugs::domain::errors::{DomainError, DomainResult};
use listing_slugs::domain::listing::{ListingSlug, ListingSlugRepository};

/// 既存スラグを保持するインメモリのリスティングリポジトリ
#[derive(Default)]
pub struct InMemoryListingRepo {
    slugs: Mutex<HashSet<String>>,
    lookups: Mutex<Vec<String>>,
}

impl InMemoryListingRepo {
    pub fn with_slugs<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slugs: Mutex::new(slugs.into_iter().map(Into::into).collect()),
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn insert(&self, slug: &str) {
        self.slugs.lock().unwrap().insert(slug.to_string());
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl ListingSlugRepository for InMemoryListingRepo {
    async fn exists_by_slug(&self, slug: &ListingSlug) -> DomainResult<bool> {
        self.lookups.lock().unwrap().push(slug.as_str().to_string());
        Ok(self.slugs.lock().unwrap().contains(slug.as_str()))
    }
}

/// 常に失敗するリポジトリ（ストア障害の再現用）
pub struct FailingListingRepo;

#[async_trait]
impl ListingSlugRepository for FailingListingRepo {
    async fn exists_by_slug(&self, _slug: &ListingSlug) -> DomainResult<bool> {
        Err(DomainError::Persistence("connection reset by peer".into()))
    }
}
