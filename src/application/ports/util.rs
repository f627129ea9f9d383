// src/application/ports/util.rs

/// Turns free-form text into a slug candidate.
///
/// Implementations must be deterministic. The result may be empty when the
/// input has nothing usable; callers validate the shape.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
