use std::fmt;

use thiserror::Error;

/// A field that must be set before a `BuildPatternArtifacts` can be built.
///
/// Variants are declared in the order the builder checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Name,
    Number,
    Timestamp,
    Uri,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::Name => write!(f, "name"),
            RequiredField::Number => write!(f, "number"),
            RequiredField::Timestamp => write!(f, "timestamp"),
            RequiredField::Uri => write!(f, "uri"),
        }
    }
}

/// Errors related to assembling and reading build-metadata records.
#[derive(Debug, Error)]
pub enum BuildInfoError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("BuildPatternArtifacts must have a {0}.")]
    MissingField(RequiredField),

    #[error("invalid build timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let err = BuildInfoError::MissingField(RequiredField::Name);
        assert_eq!(err.to_string(), "BuildPatternArtifacts must have a name.");

        let err = BuildInfoError::MissingField(RequiredField::Uri);
        assert_eq!(err.to_string(), "BuildPatternArtifacts must have a uri.");
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = BuildInfoError::InvalidArgument("Cannot format a null date.".to_string());
        assert_eq!(err.to_string(), "Cannot format a null date.");
    }

    #[test]
    fn test_invalid_timestamp_display() {
        let err = BuildInfoError::InvalidTimestamp {
            value: "yesterday".to_string(),
            reason: "input contains invalid characters".to_string(),
        };
        assert!(err.to_string().contains("yesterday"));
        assert!(err.to_string().contains("invalid characters"));
    }

    #[test]
    fn test_required_field_order() {
        let fields = [
            RequiredField::Name,
            RequiredField::Number,
            RequiredField::Timestamp,
            RequiredField::Uri,
        ];
        let names: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
        assert_eq!(names, ["name", "number", "timestamp", "uri"]);
    }
}
