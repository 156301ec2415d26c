// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Sustained requests per client IP. Typing in the discovery form issues a
/// debounced search per pause, so the burst allowance covers quick paging.
const REPLENISH_PER_SECOND: u64 = 5;
const BURST_SIZE: u32 = 30;

pub type ApiRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

pub fn rate_limit_layer() -> ApiRateLimitLayer {
    static RATE_LIMITER: OnceLock<ApiRateLimitLayer> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(REPLENISH_PER_SECOND);
            builder.burst_size(BURST_SIZE);
            let config = builder
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .expect("valid rate limit configuration");

            GovernorLayer::new(config)
        })
        .clone()
}
