//! Command metadata taken from request headers.

use http::HeaderMap;

use crate::domain::foundation::CommandMetadata;

pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Builds metadata for a command issued over HTTP. The caller's
/// correlation id is kept when present; otherwise one is generated later.
pub fn command_metadata(headers: &HeaderMap) -> CommandMetadata {
    let metadata = CommandMetadata::new().with_source("http");
    match headers
        .get(CORRELATION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
    {
        Some(correlation_id) => metadata.with_correlation_id(correlation_id),
        None => metadata,
    }
}
