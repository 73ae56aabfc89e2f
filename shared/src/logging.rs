//! Shared logging utilities for consistent tracing across planning runs

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::types::PlanId;

/// Filter directive used when `RUST_LOG` is not set
fn default_filter(base_level: &str) -> String {
    format!("planner={base_level},shared={base_level}")
}

/// Initialize the tracing subscriber with an optional log level
///
/// `RUST_LOG` takes precedence when present. Calling this more than once is
/// harmless; later calls keep the first subscriber.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{fmt, EnvFilter};

    let base_level = log_level.unwrap_or("info");
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(base_level)));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Initialize tracing at the default level
pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for plan-aware info logging
#[macro_export]
macro_rules! plan_info {
    ($plan_id:expr, $($arg:tt)*) => {
        tracing::info!(
            plan = %$plan_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for plan-aware warning logging
#[macro_export]
macro_rules! plan_warn {
    ($plan_id:expr, $($arg:tt)*) => {
        tracing::warn!(
            plan = %$plan_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for plan-aware error logging
#[macro_export]
macro_rules! plan_error {
    ($plan_id:expr, $($arg:tt)*) => {
        tracing::error!(
            plan = %$plan_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for plan-aware debug logging
#[macro_export]
macro_rules! plan_debug {
    ($plan_id:expr, $($arg:tt)*) => {
        tracing::debug!(
            plan = %$plan_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(details: &str) {
    info!(timestamp = format_timestamp(), "🚀 Starting {}", details);
}

/// Contextual logging helper for error conditions
pub fn log_error(context: &str, error: &dyn std::fmt::Display) {
    error!(
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(plan_id: &PlanId, message: &str) {
    info!(
        plan = %plan_id,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

/// Contextual logging helper for progress updates
pub fn log_progress(plan_id: &PlanId, action: &str, details: &str) {
    info!(
        plan = %plan_id,
        timestamp = format_timestamp(),
        "📋 {}: {}",
        action,
        details
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_format() {
        let stamp = format_timestamp();
        // HH:MM:SS.mmm
        assert_eq!(stamp.len(), 12);
        assert_eq!(&stamp[2..3], ":");
        assert_eq!(&stamp[8..9], ".");
    }

    #[test]
    fn test_default_filter_covers_workspace_crates() {
        let filter = default_filter("debug");
        assert_eq!(filter, "planner=debug,shared=debug");
    }

    #[test]
    fn test_repeated_init_does_not_panic() {
        init_tracing_with_level(Some("warn"));
        init_tracing();
        log_progress(&PlanId::new(), "Sourcing", "no-op");
    }
}
