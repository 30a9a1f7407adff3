//! Fluent builders that validate required fields before producing a record.

pub mod pattern_artifacts;

pub use pattern_artifacts::PatternArtifactsBuilder;
