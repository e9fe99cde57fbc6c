//! Telemetry helpers for applications embedding `chart-modebar`.
//!
//! Events emitted under the `chart_modebar` target:
//! - `trace`: `capabilities`, `zoomable_2d` before deriving default groups.
//! - `debug`: `groups` when custom `modeBarButtons` replace the toolbar.
//! - `debug`: `derived`, `added`, `removed_names` after the default path.
//! - `debug`: `groups` on widget create/update, plus a bare event on destroy.
//!
//! Hosts either call `init_default_tracing` or wire their own subscriber,
//! e.g. `RUST_LOG=chart_modebar=debug`.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
