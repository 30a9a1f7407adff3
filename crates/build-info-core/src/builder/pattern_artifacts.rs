//! Builder for `BuildPatternArtifacts` records.
//!
//! Fields may be set in any order and any number of times; nothing is
//! validated until [`PatternArtifactsBuilder::build`], which checks the
//! required fields in a fixed order and reports the first one missing.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use build_info_types::build::format_started;
use build_info_types::dependency::{BuildPatternArtifacts, PatternResult};
use build_info_types::error::{BuildInfoError, RequiredField};

/// Accumulates the fields of a [`BuildPatternArtifacts`] record.
///
/// Setters take `&mut self` and hand the same builder back, so calls chain:
///
/// ```
/// use build_info_core::builder::PatternArtifactsBuilder;
/// use build_info_types::dependency::PatternResult;
///
/// let record = PatternArtifactsBuilder::new()
///     .build_name("acme")
///     .build_number("42")
///     .timestamp("2012-02-16T10:15:30.123+0000")
///     .uri("http://ci.example.com/acme/42")
///     .pattern_result(PatternResult::new())
///     .build()
///     .unwrap();
/// assert_eq!(record.pattern_results().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternArtifactsBuilder {
    build_name: Option<String>,
    build_number: Option<String>,
    timestamp: Option<String>,
    uri: Option<String>,
    pattern_results: Vec<PatternResult>,
}

impl PatternArtifactsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build_name(&mut self, build_name: impl Into<String>) -> &mut Self {
        self.build_name = Some(build_name.into());
        self
    }

    pub fn build_number(&mut self, build_number: impl Into<String>) -> &mut Self {
        self.build_number = Some(build_number.into());
        self
    }

    /// Set the build start time from text already in `build::STARTED_FORMAT`.
    pub fn timestamp(&mut self, timestamp: impl Into<String>) -> &mut Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Set the build start time from a date, formatted with
    /// `build::STARTED_FORMAT`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildInfoError::InvalidArgument`] when `date` is `None`; the
    /// previously stored timestamp is left as it was.
    pub fn timestamp_date<Tz>(
        &mut self,
        date: Option<&DateTime<Tz>>,
    ) -> Result<&mut Self, BuildInfoError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let date = date.ok_or_else(|| {
            BuildInfoError::InvalidArgument("Cannot format a null date.".to_string())
        })?;
        self.timestamp = Some(format_started(date));
        Ok(self)
    }

    pub fn uri(&mut self, uri: impl Into<String>) -> &mut Self {
        self.uri = Some(uri.into());
        self
    }

    /// Append a pattern result. Duplicates are kept.
    pub fn pattern_result(&mut self, pattern_result: PatternResult) -> &mut Self {
        self.pattern_results.push(pattern_result);
        self
    }

    /// Pattern results accumulated so far, in insertion order.
    pub fn pattern_results(&self) -> &[PatternResult] {
        &self.pattern_results
    }

    /// Validate the accumulated fields and produce a record.
    ///
    /// The record receives its own copy of the pattern results; the builder
    /// is left untouched and later changes to it do not reach the record.
    ///
    /// # Errors
    ///
    /// Returns [`BuildInfoError::MissingField`] for the first unset field,
    /// checked as name, number, timestamp, uri.
    pub fn build(&self) -> Result<BuildPatternArtifacts, BuildInfoError> {
        let build_name = require(&self.build_name, RequiredField::Name)?;
        let build_number = require(&self.build_number, RequiredField::Number)?;
        let timestamp = require(&self.timestamp, RequiredField::Timestamp)?;
        let uri = require(&self.uri, RequiredField::Uri)?;

        tracing::debug!(
            build_name,
            build_number,
            pattern_results = self.pattern_results.len(),
            "built pattern artifacts record"
        );

        Ok(
            BuildPatternArtifacts::new(build_name, build_number, timestamp, uri)
                .with_pattern_results(self.pattern_results.clone()),
        )
    }
}

fn require(value: &Option<String>, field: RequiredField) -> Result<&str, BuildInfoError> {
    value.as_deref().ok_or_else(|| {
        tracing::debug!(%field, "pattern artifacts record is missing a required field");
        BuildInfoError::MissingField(field)
    })
}
