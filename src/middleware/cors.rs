use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::Config;

/// Credentialed CORS for the configured origins. A wildcard echoes the
/// caller's origin, since `*` cannot be combined with credentials.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let allow_origin = match config.allowed_origins() {
        None => AllowOrigin::mirror_request(),
        Some(origins) => {
            let values: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %origin, "ignoring malformed CORS origin");
                        None
                    }
                })
                .collect();
            AllowOrigin::list(values)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
