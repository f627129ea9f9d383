use super::SlugQueryService;
use crate::{
    application::{dto::SlugDto, error::ApplicationResult},
    domain::listing::ListingTitle,
};

pub struct GenerateSlugQuery {
    pub title: String,
}

impl SlugQueryService {
    pub async fn generate_unique_slug(&self, query: GenerateSlugQuery) -> ApplicationResult<SlugDto> {
        let title = ListingTitle::new(query.title)?;
        let slug = self.slug_service.generate_unique_slug(&title).await?;
        Ok(slug.into())
    }
}
