// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{ports::util::SlugGenerator, queries::slugs::SlugQueryService},
    domain::listing::{ListingSlugRepository, ListingSlugService, SlugPolicy},
};

pub struct ApplicationServices {
    pub slug_queries: Arc<SlugQueryService>,
}

impl ApplicationServices {
    pub fn new(
        listing_repo: Arc<dyn ListingSlugRepository>,
        slugger: Arc<dyn SlugGenerator>,
        slug_policy: SlugPolicy,
    ) -> Self {
        let slug_service = Arc::new(ListingSlugService::new(
            Arc::clone(&listing_repo),
            Arc::clone(&slugger),
            slug_policy,
        ));

        let slug_queries = Arc::new(SlugQueryService::new(Arc::clone(&slug_service)));

        Self { slug_queries }
    }
}
