use crate::domain::listing::ListingSlug;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SlugDto {
    pub slug: String,
}

impl From<ListingSlug> for SlugDto {
    fn from(slug: ListingSlug) -> Self {
        Self { slug: slug.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SlugAvailabilityDto {
    pub slug: String,
    pub available: bool,
}
