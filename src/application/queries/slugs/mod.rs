mod check;
mod generate;
mod service;

pub use check::CheckSlugQuery;
pub use generate::GenerateSlugQuery;
pub use service::SlugQueryService;
