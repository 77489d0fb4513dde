//! Middleware stack for the API server
//!
//! Provides tracing, request ID generation, timeouts, CORS and rate limiting.
//! Timeouts and throttled requests answer with the regular JSON error body.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    error_handling::HandleErrorLayer,
    http::{header, HeaderValue, Method, Request},
    response::{IntoResponse, Response},
    BoxError, Router,
};
use panel_common::{AppError, CorsConfig, RateLimitConfig};
use tower::{timeout::error::Elapsed, ServiceBuilder};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorError,
    GovernorLayer,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};

use crate::response::ApiError;
use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Requests running longer than this get 503 Service Unavailable
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Apply request ID, tracing and timeout layers
pub fn apply_middleware(router: Router<AppState>) -> Router<AppState> {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(
                header::HeaderName::from_static(REQUEST_ID_HEADER),
                MakeRequestUuid,
            ))
            .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
                REQUEST_ID_HEADER,
            )))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request<Body>| {
                        let request_id = request
                            .headers()
                            .get(REQUEST_ID_HEADER)
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or("unknown");

                        tracing::info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = %request_id,
                        )
                    })
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .timeout(REQUEST_TIMEOUT),
    )
}

/// Turn a failure raised by the middleware stack into an error response
pub async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        warn!(timeout = ?REQUEST_TIMEOUT, "Request timed out");
        ApiError::from(AppError::RequestTimeout)
    } else {
        ApiError::from(AppError::Internal(anyhow::anyhow!("{err}")))
    }
}

/// Render a governor rejection as a JSON error, keeping its rate limit headers
pub fn rate_limit_response(err: GovernorError) -> Response {
    match err {
        GovernorError::TooManyRequests { wait_time, headers } => {
            warn!(wait_time, "Rate limit exceeded");
            let mut response =
                ApiError::from(AppError::RateLimitExceeded { wait_secs: wait_time })
                    .into_response();
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
        GovernorError::UnableToExtractKey => ApiError::from(AppError::Internal(
            anyhow::anyhow!("rate limiter could not extract a key"),
        ))
        .into_response(),
        GovernorError::Other { code, msg, .. } => ApiError::from(AppError::Internal(
            anyhow::anyhow!("rate limiter rejected request ({code}): {}", msg.unwrap_or_default()),
        ))
        .into_response(),
    }
}

/// Apply a global rate limit
///
/// An unusable configuration (zero rate or burst) leaves the router unlimited.
pub fn apply_rate_limit(router: Router<AppState>, config: &RateLimitConfig) -> Router<AppState> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(config.requests_per_second.into())
        .burst_size(config.burst)
        .key_extractor(GlobalKeyExtractor)
        .error_handler(rate_limit_response)
        .finish();

    match governor_conf {
        Some(conf) => router.layer(GovernorLayer {
            config: Arc::new(conf),
        }),
        None => {
            warn!(
                requests_per_second = config.requests_per_second,
                burst = config.burst,
                "Rate limiter configuration rejected, requests are not limited"
            );
            router
        }
    }
}

/// Create CORS layer from configuration
pub fn cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::PUT, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            header::HeaderName::from_static("x-ratelimit-limit"),
            header::HeaderName::from_static("x-ratelimit-remaining"),
            header::HeaderName::from_static("x-ratelimit-reset"),
        ]);

    if config.allowed_origins.is_empty() {
        if is_production {
            tracing::warn!(
                "CORS: No allowed origins configured in production mode. \
                 Requests from browsers will be blocked."
            );
            return base_layer.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()));
        }

        tracing::warn!(
            "CORS: Allowing any origin (development mode). \
             Configure CORS_ALLOWED_ORIGINS for production."
        );
        return base_layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!(origin = %origin, "Invalid CORS origin");
                None
            })
        })
        .collect();

    tracing::info!(count = origins.len(), "CORS: Allowing configured origins");
    base_layer.allow_origin(AllowOrigin::list(origins))
}
