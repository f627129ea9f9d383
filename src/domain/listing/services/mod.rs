// src/domain/listing/services/mod.rs
use std::{collections::HashSet, fmt, str::FromStr, sync::Arc};

pub use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::listing::repository::ListingSlugRepository;
use crate::domain::listing::value_objects::{ListingSlug, ListingTitle};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Outcome of a single existence lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugAvailability {
    Available,
    Taken,
    CheckFailed(String),
}

/// What to do when the store cannot answer an existence lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckFailurePolicy {
    /// Treat the slug as free. Matches the behaviour browser clients have
    /// always seen, at the cost of masking store outages.
    #[default]
    FailOpen,
    /// Surface the failure to the caller as `DomainError::Unavailable`.
    FailClosed,
}

impl FromStr for CheckFailurePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fail-open" | "open" => Ok(Self::FailOpen),
            "fail-closed" | "closed" => Ok(Self::FailClosed),
            other => Err(format!(
                "unknown check failure policy `{other}` (expected fail-open or fail-closed)"
            )),
        }
    }
}

impl fmt::Display for CheckFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FailOpen => f.write_str("fail-open"),
            Self::FailClosed => f.write_str("fail-closed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugPolicy {
    /// Upper bound on candidates considered by one generation, base included.
    pub max_attempts: u32,
    pub on_check_failure: CheckFailurePolicy,
}

impl Default for SlugPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            on_check_failure: CheckFailurePolicy::default(),
        }
    }
}

/// Domain service responsible for producing unique slugs for listings.
///
/// Uniqueness here is a best-effort pre-check: two concurrent requests can
/// both see a candidate as free. The `UNIQUE` constraint on the store's slug
/// column is what actually rejects the second writer.
pub struct ListingSlugService {
    repo: Arc<dyn ListingSlugRepository>,
    generator: Arc<dyn SlugGenerator>,
    policy: SlugPolicy,
}

impl ListingSlugService {
    pub fn new(
        repo: Arc<dyn ListingSlugRepository>,
        generator: Arc<dyn SlugGenerator>,
        policy: SlugPolicy,
    ) -> Self {
        Self {
            repo,
            generator,
            policy,
        }
    }

    pub fn normalize(&self, title: &ListingTitle) -> DomainResult<ListingSlug> {
        self.normalize_str(title.as_str())
    }

    fn normalize_str(&self, input: &str) -> DomainResult<ListingSlug> {
        ListingSlug::canonical(self.generator.slugify(input))
    }

    /// Ask the store about `slug` without applying any failure policy.
    pub async fn probe(&self, slug: &ListingSlug) -> SlugAvailability {
        match self.repo.exists_by_slug(slug).await {
            Ok(true) => SlugAvailability::Taken,
            Ok(false) => SlugAvailability::Available,
            Err(err) => SlugAvailability::CheckFailed(err.to_string()),
        }
    }

    /// `Ok(true)` when no record holds `slug`, with lookup failures resolved
    /// by the configured policy.
    pub async fn check_unique(&self, slug: &ListingSlug) -> DomainResult<bool> {
        match self.probe(slug).await {
            SlugAvailability::Available => Ok(true),
            SlugAvailability::Taken => Ok(false),
            SlugAvailability::CheckFailed(reason) => self.resolve_failure(slug, &reason),
        }
    }

    fn resolve_failure(&self, slug: &ListingSlug, reason: &str) -> DomainResult<bool> {
        match self.policy.on_check_failure {
            CheckFailurePolicy::FailOpen => {
                tracing::warn!(%slug, %reason, "slug existence check failed, treating slug as available");
                Ok(true)
            }
            CheckFailurePolicy::FailClosed => {
                tracing::warn!(%slug, %reason, "slug existence check failed");
                Err(DomainError::Unavailable(format!(
                    "slug existence check failed: {reason}"
                )))
            }
        }
    }

    /// Literal availability of a caller-supplied slug. No normalization.
    pub async fn check_availability(&self, slug: &ListingSlug) -> DomainResult<bool> {
        self.check_unique(slug).await
    }

    /// Normalize `title` and return the first free candidate among the base
    /// slug and `normalize(title + "-" + i)` for `i = 1, 2, ...`.
    pub async fn generate_unique_slug(&self, title: &ListingTitle) -> DomainResult<ListingSlug> {
        let base = self.normalize(title)?;
        let mut tried: HashSet<ListingSlug> = HashSet::new();
        let mut candidate = base.clone();
        let mut suffix: u64 = 0;

        for _ in 0..self.policy.max_attempts {
            // A generator that strips the suffix would hand back a slug we
            // already know is taken.
            if tried.insert(candidate.clone()) {
                if self.check_unique(&candidate).await? {
                    if suffix > 0 {
                        tracing::debug!(%base, slug = %candidate, suffix, "resolved slug collision");
                    }
                    return Ok(candidate);
                }
                tracing::debug!(slug = %candidate, "slug already taken");
            }

            suffix += 1;
            candidate = self.normalize_str(&format!("{}-{suffix}", title.as_str()))?;
        }

        tracing::warn!(%base, attempts = self.policy.max_attempts, "slug space exhausted");
        Err(DomainError::SlugSpaceExhausted {
            base: base.into(),
            attempts: self.policy.max_attempts,
        })
    }
}
