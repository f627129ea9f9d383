use std::sync::Arc;

use listing_slugs::application::queries::slugs::{CheckSlugQuery, GenerateSlugQuery};
use listing_slugs::application::{ApplicationError, dto::SlugDto};
use listing_slugs::domain::errors::DomainError;
use listing_slugs::domain::listing::SlugPolicy;

mod support;

use support::InMemoryListingRepo;

#[tokio::test]
async fn generated_slug_becomes_unavailable_once_persisted() {
    let repo = Arc::new(InMemoryListingRepo::default());
    let services = support::build_test_services(repo.clone(), SlugPolicy::default());
    let queries = &services.slug_queries;

    let first = queries
        .generate_unique_slug(GenerateSlugQuery {
            title: "Weekly Bounty".into(),
        })
        .await
        .unwrap();
    assert_eq!(
        first,
        SlugDto {
            slug: "weekly-bounty".into()
        }
    );

    repo.insert(&first.slug);

    let availability = queries
        .check_availability(CheckSlugQuery {
            slug: first.slug.clone(),
        })
        .await
        .unwrap();
    assert!(!availability.available);
    assert_eq!(availability.slug, "weekly-bounty");

    let second = queries
        .generate_unique_slug(GenerateSlugQuery {
            title: "Weekly Bounty".into(),
        })
        .await
        .unwrap();
    assert_eq!(second.slug, "weekly-bounty-1");
}

#[tokio::test]
async fn availability_check_is_idempotent() {
    let repo = Arc::new(InMemoryListingRepo::with_slugs(["grant-round"]));
    let services = support::build_test_services(repo, SlugPolicy::default());

    for slug in ["grant-round", "grant-round-2"] {
        let first = services
            .slug_queries
            .check_availability(CheckSlugQuery { slug: slug.into() })
            .await
            .unwrap();
        let second = services
            .slug_queries
            .check_availability(CheckSlugQuery { slug: slug.into() })
            .await
            .unwrap();
        assert_eq!(first, second);
    }
}

#[tokio::test]
async fn generation_is_deterministic_for_the_same_store_state() {
    let repo = Arc::new(InMemoryListingRepo::with_slugs(["ama-session"]));
    let services = support::build_test_services(repo, SlugPolicy::default());

    let mut seen = Vec::new();
    for _ in 0..3 {
        let dto = services
            .slug_queries
            .generate_unique_slug(GenerateSlugQuery {
                title: "AMA: Session".into(),
            })
            .await
            .unwrap();
        seen.push(dto.slug);
    }
    assert_eq!(seen, vec!["ama-session-1"; 3]);
}

#[tokio::test]
async fn blank_title_is_a_validation_error() {
    let services = support::build_test_services(
        Arc::new(InMemoryListingRepo::default()),
        SlugPolicy::default(),
    );

    let err = services
        .slug_queries
        .generate_unique_slug(GenerateSlugQuery { title: "  ".into() })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
}
