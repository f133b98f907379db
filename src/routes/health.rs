//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is
//! running. The check deliberately does not touch the completion provider:
//! the service stays useful (via fallback texts) even when the provider is down.

/// Health check handler.
pub async fn health() -> &'static str {
    "ok"
}
