//! CORS layer configuration.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use ibroker_core::config::CorsConfig;

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == "*")
}

fn parse_headers(values: &[String]) -> Vec<HeaderName> {
    values.iter().filter_map(|h| h.parse().ok()).collect()
}

/// Builds a CORS tower layer from configuration.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    let wildcard_origin = is_wildcard(&config.allowed_origins);
    if wildcard_origin {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    layer = layer.allow_methods(methods);

    let wildcard_headers = is_wildcard(&config.allowed_headers);
    if wildcard_headers {
        layer = layer.allow_headers(Any);
    } else {
        layer = layer.allow_headers(parse_headers(&config.allowed_headers));
    }

    layer = layer.expose_headers(parse_headers(&config.exposed_headers));

    // Credentials cannot be combined with wildcards.
    if config.allow_credentials {
        if wildcard_origin || wildcard_headers {
            warn!("Ignoring cors.allow_credentials: origins and headers must be listed explicitly");
        } else {
            layer = layer.allow_credentials(true);
        }
    }

    layer.max_age(Duration::from_secs(config.max_age_seconds))
}
