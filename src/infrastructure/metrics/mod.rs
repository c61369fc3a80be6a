//! Prometheus Metrics Module
//!
//! Application-wide metrics collection.
//!
//! # Metrics Collected
//! - Sessions started, by start mode
//! - Sessions completed, by termination reason
//! - Guesses processed, by classification outcome

use once_cell::sync::Lazy;
use prometheus::{IntCounterVec, Opts, Registry};

/// Global metrics registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// Sessions started, labeled by start mode ("random", "custom")
pub static SESSIONS_STARTED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("sessions_started_total", "Total game sessions started")
            .namespace("anagrams_bot"),
        &["mode"],
    )
    .expect("Failed to create SESSIONS_STARTED_TOTAL metric")
});

/// Sessions completed, labeled by termination reason
/// ("exhausted", "quit", "expired")
pub static SESSIONS_COMPLETED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("sessions_completed_total", "Total game sessions completed")
            .namespace("anagrams_bot"),
        &["reason"],
    )
    .expect("Failed to create SESSIONS_COMPLETED_TOTAL metric")
});

/// Guesses processed, labeled by outcome
/// ("scored", "already_used", "too_short", "unknown")
pub static GUESSES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("guesses_total", "Total guesses processed").namespace("anagrams_bot"),
        &["outcome"],
    )
    .expect("Failed to create GUESSES_TOTAL metric")
});

/// Register all metrics with the registry
fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(SESSIONS_STARTED_TOTAL.clone()))
        .expect("Failed to register SESSIONS_STARTED_TOTAL");
    registry
        .register(Box::new(SESSIONS_COMPLETED_TOTAL.clone()))
        .expect("Failed to register SESSIONS_COMPLETED_TOTAL");
    registry
        .register(Box::new(GUESSES_TOTAL.clone()))
        .expect("Failed to register GUESSES_TOTAL");
}
