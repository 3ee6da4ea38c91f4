//! Server-wide middleware construction helpers.

use actix_cors::Cors;

/// Build CORS middleware from the configured allowlist.
///
/// An empty list (or an entry of `*`) allows any origin, which is the
/// development default. With a concrete allowlist, credentialed
/// requests are permitted from those origins only.
pub fn build_cors(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_any_origin();
    } else {
        for origin in allowed_origins {
            cors = cors.allowed_origin(origin);
        }
        cors = cors.supports_credentials();
    }

    cors
}
