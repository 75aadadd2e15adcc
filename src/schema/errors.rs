//! Validation error types.

use std::fmt;

use serde::Serialize;

/// A single non-conformant field found during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Field path (e.g., "contact.email" or "tags[1]")
    pub field: String,
    /// Expected type or condition
    pub expected: String,
    /// Actual value or type found
    pub actual: String,
}

impl FieldIssue {
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: "field to be present".into(),
            actual: "missing".into(),
        }
    }

    pub fn null_value(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: "non-null value".into(),
            actual: "null".into(),
        }
    }

    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}': expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

/// Inbound payload does not conform to a schema.
///
/// Carries every offending field found in one pass over the payload.
#[derive(Debug, Clone)]
pub struct ValidationError {
    schema: String,
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(schema: impl Into<String>, issues: Vec<FieldIssue>) -> Self {
        Self {
            schema: schema.into(),
            issues,
        }
    }

    /// Name of the schema the payload was checked against.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// All non-conformant fields, in payload traversal order.
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed for '{}': ", self.schema)?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display() {
        let issue = FieldIssue::type_mismatch("age", "int", "string");
        let display = format!("{}", issue);
        assert!(display.contains("age"));
        assert!(display.contains("int"));
        assert!(display.contains("string"));
    }

    #[test]
    fn test_error_lists_every_issue() {
        let err = ValidationError::new(
            "requestticket",
            vec![FieldIssue::missing("name"), FieldIssue::missing("email")],
        );
        let display = format!("{}", err);
        assert!(display.contains("name"));
        assert!(display.contains("email"));
        assert_eq!(err.issues().len(), 2);
        assert_eq!(err.schema(), "requestticket");
    }

    #[test]
    fn test_issue_serializes_field_paths() {
        let issue = FieldIssue::null_value("message");
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["field"], "message");
        assert_eq!(json["actual"], "null");
    }
}
