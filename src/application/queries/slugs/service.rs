// src/application/queries/slugs/service.rs
use std::sync::Arc;

use crate::domain::listing::ListingSlugService;

pub struct SlugQueryService {
    pub(super) slug_service: Arc<ListingSlugService>,
}

impl SlugQueryService {
    pub fn new(slug_service: Arc<ListingSlugService>) -> Self {
        Self { slug_service }
    }
}
