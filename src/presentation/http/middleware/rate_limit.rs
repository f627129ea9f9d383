// src/presentation/http/middleware/rate_limit.rs
use crate::config::RateLimitConfig;
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type SlugRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client limiter keyed on forwarding headers, falling back to the peer
/// address. Returns `None` for a zero rate or burst.
pub fn rate_limit_layer(limits: RateLimitConfig) -> Option<SlugRateLimitLayer> {
    if limits.per_second == 0 {
        return None;
    }

    let mut builder = GovernorConfigBuilder::default();
    builder.per_millisecond((1000 / limits.per_second).max(1));
    builder.burst_size(limits.burst);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

    Some(GovernorLayer::new(config))
}
