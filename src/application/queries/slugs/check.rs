use super::SlugQueryService;
use crate::{
    application::{dto::SlugAvailabilityDto, error::ApplicationResult},
    domain::listing::ListingSlug,
};

/// Availability of an exact slug, as typed by the caller.
pub struct CheckSlugQuery {
    pub slug: String,
}

impl SlugQueryService {
    pub async fn check_availability(
        &self,
        query: CheckSlugQuery,
    ) -> ApplicationResult<SlugAvailabilityDto> {
        let slug = ListingSlug::new(query.slug)?;
        let available = self.slug_service.check_availability(&slug).await?;
        Ok(SlugAvailabilityDto {
            slug: slug.into(),
            available,
        })
    }
}
