pub mod slugs;

pub use slugs::{SlugAvailabilityDto, SlugDto};
