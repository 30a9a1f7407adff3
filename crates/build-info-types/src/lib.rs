//! Shared build-metadata types for build-info.
//!
//! This crate contains the data types exchanged between build-info
//! components: the build timestamp format, pattern artifacts and the
//! `BuildPatternArtifacts` record, plus their error type.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod build;
pub mod dependency;
pub mod error;
