//! Pattern artifact types.
//!
//! A build publishes artifacts; a consumer resolves artifact search patterns
//! against that set. Each pattern yields a `PatternResult`, and the results
//! for one build are collected in a `BuildPatternArtifacts` record together
//! with the build's identity and location.

use serde::{Deserialize, Serialize};

/// One artifact matched by a search pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternArtifact {
    /// Location of the artifact in the repository.
    pub uri: String,
    /// Last modification time, in milliseconds since the Unix epoch.
    pub last_modified: i64,
    /// Size in bytes.
    pub size: i64,
    pub sha1: Option<String>,
    pub md5: Option<String>,
}

impl PatternArtifact {
    pub fn new(
        uri: impl Into<String>,
        last_modified: i64,
        size: i64,
        sha1: Option<String>,
        md5: Option<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            last_modified,
            size,
            sha1,
            md5,
        }
    }
}

/// The artifacts matched by a single search pattern, in match order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternResult {
    #[serde(default)]
    pattern_artifacts: Vec<PatternArtifact>,
}

impl PatternResult {
    /// Create an empty result (the pattern matched nothing).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_artifacts(pattern_artifacts: Vec<PatternArtifact>) -> Self {
        Self { pattern_artifacts }
    }

    pub fn add_artifact(&mut self, artifact: PatternArtifact) {
        self.pattern_artifacts.push(artifact);
    }

    pub fn pattern_artifacts(&self) -> &[PatternArtifact] {
        &self.pattern_artifacts
    }
}

/// Pattern results for one build, tied to the build's identity and location.
///
/// Immutable once constructed: fields are private and only readable through
/// accessors. Usually assembled with `PatternArtifactsBuilder` from
/// `build-info-core`, which validates the required fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildPatternArtifacts {
    build_name: String,
    build_number: String,
    /// Build start time in `build::STARTED_FORMAT`.
    started: String,
    url: String,
    #[serde(default)]
    pattern_results: Vec<PatternResult>,
}

impl BuildPatternArtifacts {
    /// Create a record with no pattern results.
    pub fn new(
        build_name: impl Into<String>,
        build_number: impl Into<String>,
        started: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            build_name: build_name.into(),
            build_number: build_number.into(),
            started: started.into(),
            url: url.into(),
            pattern_results: Vec::new(),
        }
    }

    /// Replace the pattern results wholesale.
    pub fn with_pattern_results(mut self, pattern_results: Vec<PatternResult>) -> Self {
        self.pattern_results = pattern_results;
        self
    }

    pub fn build_name(&self) -> &str {
        &self.build_name
    }

    pub fn build_number(&self) -> &str {
        &self.build_number
    }

    /// The build start time, as text in `build::STARTED_FORMAT`.
    pub fn timestamp(&self) -> &str {
        &self.started
    }

    pub fn uri(&self) -> &str {
        &self.url
    }

    pub fn pattern_results(&self) -> &[PatternResult] {
        &self.pattern_results
    }

    pub fn into_pattern_results(self) -> Vec<PatternResult> {
        self.pattern_results
    }
}
