//! Tracing subscriber initialization with structured logging.
//!
//! # Usage
//!
//! ```no_run
//! build_info_observe::tracing_setup::init_tracing().unwrap();
//! ```
//!
//! Verbosity follows `RUST_LOG`; builder diagnostics are emitted at `debug`
//! under the `build_info_core` target, e.g. `RUST_LOG=build_info_core=debug`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize the global tracing subscriber.
///
/// Installs a structured `fmt` layer with target visibility and span close
/// timing, filtered by `EnvFilter::from_default_env()`.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!("tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use build_info_core::builder::PatternArtifactsBuilder;

    use super::*;

    #[test]
    fn test_init_tracing_once() {
        assert!(init_tracing().is_ok());
        assert!(init_tracing().is_err());

        // Builder diagnostics go through the installed subscriber.
        let err = PatternArtifactsBuilder::new().build().unwrap_err();
        assert_eq!(err.to_string(), "BuildPatternArtifacts must have a name.");
    }
}
