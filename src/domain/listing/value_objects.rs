use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingTitle(String);

impl ListingTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ListingTitle> for String {
    fn from(value: ListingTitle) -> Self {
        value.0
    }
}

/// A slug as stored on a listing record.
///
/// `new` accepts any non-blank string so that availability checks can be run
/// against exactly what a caller typed. `canonical` additionally enforces the
/// shape produced by normalization: `[a-z0-9-]`, no leading, trailing or
/// doubled hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingSlug(String);

impl ListingSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn canonical(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "title does not contain any characters usable in a slug".into(),
            ));
        }
        if !is_canonical(&value) {
            return Err(DomainError::Validation(format!(
                "`{value}` is not a lowercase hyphen-delimited slug"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_canonical(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

impl fmt::Display for ListingSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ListingSlug> for String {
    fn from(value: ListingSlug) -> Self {
        value.0
    }
}
