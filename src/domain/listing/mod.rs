pub mod repository;
pub mod services;
pub mod value_objects;

pub use repository::ListingSlugRepository;
pub use services::{CheckFailurePolicy, ListingSlugService, SlugAvailability, SlugPolicy};
pub use value_objects::{ListingSlug, ListingTitle};
