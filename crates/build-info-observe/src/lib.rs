//! Observability setup for processes embedding build-info.

pub mod tracing_setup;
