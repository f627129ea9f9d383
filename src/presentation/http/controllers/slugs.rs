// src/presentation/http/controllers/slugs.rs
use crate::application::{
    error::ApplicationError,
    queries::slugs::{CheckSlugQuery, GenerateSlugQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::QueryParams;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const SLUG_TAKEN_MESSAGE: &str = "Slug already exists";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SlugParams {
    /// Listing title to derive a slug from, or the exact slug when `check=true`.
    pub slug: Option<String>,
    /// `true` checks availability of `slug` as-is instead of generating one.
    pub check: Option<String>,
}

impl SlugParams {
    fn is_check(&self) -> bool {
        self.check.as_deref() == Some("true")
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlugCheckResponse {
    pub slug_exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SlugResponse {
    pub slug: String,
}

/// Body of a successful lookup: a generated slug, or the availability flag in
/// check mode.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum SlugOutcome {
    Generated(SlugResponse),
    Checked(SlugCheckResponse),
}

/// 400 bodies: a taken slug in check mode, or a request error.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum SlugBadRequest {
    Taken(SlugCheckResponse),
    Invalid(ErrorResponse),
}

#[utoipa::path(
    get,
    path = "/api/listings/slug",
    params(SlugParams),
    responses(
        (status = 200, description = "Generated slug, or `{\"slugExists\": false}` when checking a free slug.", body = SlugOutcome),
        (status = 400, description = "Slug taken (`check=true`), missing or malformed parameters, or a title with no usable characters.", body = SlugBadRequest),
        (status = 409, description = "No free suffixed slug within the attempt limit.", body = ErrorResponse),
        (status = 503, description = "Store unavailable under the fail-closed policy.", body = ErrorResponse)
    ),
    tag = "Listings"
)]
pub async fn slug(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<SlugParams>,
) -> HttpResult<(StatusCode, Json<SlugOutcome>)> {
    let check = params.is_check();
    let slug = params
        .slug
        .ok_or_else(|| HttpError::from_error(ApplicationError::missing_parameter("slug")))?;

    if check {
        check_slug(&state, slug).await
    } else {
        generate_slug(&state, slug).await
    }
}

async fn check_slug(state: &HttpState, slug: String) -> HttpResult<(StatusCode, Json<SlugOutcome>)> {
    let availability = state
        .services
        .slug_queries
        .check_availability(CheckSlugQuery { slug })
        .await
        .into_http()?;

    if availability.available {
        let body = SlugCheckResponse {
            slug_exists: false,
            error: None,
        };
        Ok((StatusCode::OK, Json(SlugOutcome::Checked(body))))
    } else {
        let body = SlugCheckResponse {
            slug_exists: true,
            error: Some(SLUG_TAKEN_MESSAGE.into()),
        };
        Ok((StatusCode::BAD_REQUEST, Json(SlugOutcome::Checked(body))))
    }
}

async fn generate_slug(
    state: &HttpState,
    title: String,
) -> HttpResult<(StatusCode, Json<SlugOutcome>)> {
    let generated = state
        .services
        .slug_queries
        .generate_unique_slug(GenerateSlugQuery { title })
        .await
        .into_http()?;

    let body = SlugResponse {
        slug: generated.slug,
    };
    Ok((StatusCode::OK, Json(SlugOutcome::Generated(body))))
}
