use crate::domain::errors::DomainResult;
use crate::domain::listing::value_objects::ListingSlug;
use async_trait::async_trait;

/// Existence lookup against the listing/bounty store.
///
/// Implementations answer for the literal slug only; they never normalize.
/// An `Err` means the store could not be consulted, which callers must not
/// confuse with "no such slug".
#[async_trait]
pub trait ListingSlugRepository: Send + Sync {
    async fn exists_by_slug(&self, slug: &ListingSlug) -> DomainResult<bool>;
}
