//! Payload validation against a declared schema.
//!
//! Validation semantics:
//! - the payload must be a JSON object
//! - all required fields must be present
//! - present fields must exactly match their declared type
//! - null is never a valid field value
//! - undeclared fields are ignored and dropped from the validated record
//!
//! Validation does not mutate its input, performs no coercion, and reports
//! every violation found rather than stopping at the first.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::errors::{FieldIssue, ValidationError};
use super::types::{FieldDef, FieldType, Schema};

/// A payload that has passed schema validation and is safe to persist
/// without further checks.
///
/// Holds exactly the schema-declared fields of the original payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidatedRecord(Map<String, Value>);

impl ValidatedRecord {
    /// The validated field map.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the record, yielding it as a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl Schema {
    /// Validates an untyped payload against this schema.
    ///
    /// Returns the validated record on success, or a `ValidationError`
    /// enumerating every non-conformant field.
    pub fn validate(&self, payload: &Value) -> Result<ValidatedRecord, ValidationError> {
        let Some(payload_obj) = payload.as_object() else {
            let issue = FieldIssue::type_mismatch("$root", "object", json_type_name(payload));
            return Err(ValidationError::new(&self.name, vec![issue]));
        };

        let mut issues = Vec::new();
        check_object(payload_obj, &self.fields, "", &mut issues);
        if !issues.is_empty() {
            return Err(ValidationError::new(&self.name, issues));
        }

        let mut validated = Map::new();
        for name in self.fields.keys() {
            if let Some(value) = payload_obj.get(name) {
                validated.insert(name.clone(), value.clone());
            }
        }
        Ok(ValidatedRecord(validated))
    }
}

/// Checks declared fields of an object, appending issues for violations.
fn check_object(
    obj: &Map<String, Value>,
    fields: &BTreeMap<String, FieldDef>,
    path_prefix: &str,
    issues: &mut Vec<FieldIssue>,
) {
    for (field_name, field_def) in fields {
        let field_path = make_path(path_prefix, field_name);
        match obj.get(field_name) {
            Some(Value::Null) => issues.push(FieldIssue::null_value(field_path)),
            Some(value) => check_value(value, &field_def.field_type, &field_path, issues),
            None => {
                if field_def.required {
                    issues.push(FieldIssue::missing(field_path));
                }
            }
        }
    }
}

/// Checks a single value against its declared type.
fn check_value(value: &Value, expected: &FieldType, field_path: &str, issues: &mut Vec<FieldIssue>) {
    match expected {
        FieldType::String => {
            if !value.is_string() {
                issues.push(type_issue(field_path, expected, value));
            }
        }
        FieldType::Int => {
            // Must be an integer, not a float
            if !value.is_i64() && !value.is_u64() {
                issues.push(type_issue(field_path, expected, value));
            }
        }
        FieldType::Bool => {
            if !value.is_boolean() {
                issues.push(type_issue(field_path, expected, value));
            }
        }
        FieldType::Float => {
            // Integers are acceptable where a float is declared
            if !value.is_number() {
                issues.push(type_issue(field_path, expected, value));
            }
        }
        FieldType::Object { fields } => match value.as_object() {
            Some(obj) => check_object(obj, fields, field_path, issues),
            None => issues.push(type_issue(field_path, expected, value)),
        },
        FieldType::Array { element_type } => match value.as_array() {
            Some(elements) => {
                for (i, element) in elements.iter().enumerate() {
                    let element_path = format!("{}[{}]", field_path, i);
                    if element.is_null() {
                        issues.push(FieldIssue::null_value(element_path));
                    } else {
                        check_value(element, element_type, &element_path, issues);
                    }
                }
            }
            None => issues.push(type_issue(field_path, expected, value)),
        },
    }
}

fn type_issue(field_path: &str, expected: &FieldType, actual: &Value) -> FieldIssue {
    FieldIssue::type_mismatch(field_path, expected.type_name(), json_type_name(actual))
}

/// Returns the JSON type name for issue messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Creates a field path from prefix and field name.
fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::SchemaRegistry;
    use super::*;
    use serde_json::json;

    fn ticket_schema() -> Schema {
        SchemaRegistry::builtin().request_ticket().clone()
    }

    #[test]
    fn test_valid_ticket_passes() {
        let payload = json!({
            "name": "Alice",
            "email": "alice@example.com",
            "message": "hi"
        });

        let record = ticket_schema().validate(&payload).unwrap();
        assert_eq!(record.fields().len(), 3);
        assert_eq!(record.fields()["name"], "Alice");
    }

    #[test]
    fn test_optional_fields_accepted() {
        let payload = json!({
            "name": "Alice",
            "email": "alice@example.com",
            "message": "hi",
            "phone": "+1-555-0100",
            "company": "Acme"
        });

        let record = ticket_schema().validate(&payload).unwrap();
        assert_eq!(record.fields().len(), 5);
    }

    #[test]
    fn test_empty_payload_reports_all_required_fields() {
        let result = ticket_schema().validate(&json!({}));
        let err = result.unwrap_err();

        let fields: Vec<&str> = err.issues().iter().map(|i| i.field.as_str()).collect();
        assert_eq!(err.issues().len(), 3);
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"email"));
        assert!(fields.contains(&"message"));
    }

    #[test]
    fn test_mixed_violations_collected_in_one_pass() {
        let payload = json!({
            "name": 42,
            "message": null
        });

        let err = ticket_schema().validate(&payload).unwrap_err();
        let fields: Vec<&str> = err.issues().iter().map(|i| i.field.as_str()).collect();
        // wrong type, missing required, and null all reported together
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"email"));
        assert!(fields.contains(&"message"));
        assert_eq!(err.issues().len(), 3);
    }

    #[test]
    fn test_type_mismatch_details() {
        let payload = json!({
            "name": 42,
            "email": "alice@example.com",
            "message": "hi"
        });

        let err = ticket_schema().validate(&payload).unwrap_err();
        assert_eq!(err.issues().len(), 1);
        let issue = &err.issues()[0];
        assert_eq!(issue.field, "name");
        assert_eq!(issue.expected, "string");
        assert_eq!(issue.actual, "int");
    }

    #[test]
    fn test_null_rejected_even_for_optional_field() {
        let payload = json!({
            "name": "Alice",
            "email": "alice@example.com",
            "message": "hi",
            "phone": null
        });

        let err = ticket_schema().validate(&payload).unwrap_err();
        assert_eq!(err.issues()[0].field, "phone");
        assert_eq!(err.issues()[0].actual, "null");
    }

    #[test]
    fn test_undeclared_fields_dropped_from_record() {
        let payload = json!({
            "name": "Alice",
            "email": "alice@example.com",
            "message": "hi",
            "unexpected": "value"
        });

        let record = ticket_schema().validate(&payload).unwrap();
        assert!(!record.fields().contains_key("unexpected"));
        assert_eq!(record.fields().len(), 3);
    }

    #[test]
    fn test_non_object_payload_rejected() {
        let err = ticket_schema().validate(&json!("just a string")).unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert_eq!(err.issues()[0].field, "$root");
        assert_eq!(err.issues()[0].expected, "object");
    }

    #[test]
    fn test_float_field_accepts_integers() {
        let registry = SchemaRegistry::builtin();
        let payload = json!({
            "name": "Widget",
            "price": 100,
            "in_stock": true
        });

        assert!(registry.product().validate(&payload).is_ok());
    }

    #[test]
    fn test_int_field_rejects_floats() {
        let registry = SchemaRegistry::builtin();
        let payload = json!({
            "name": "Bea",
            "email": "bea@example.com",
            "active": true,
            "age": 29.5
        });

        let err = registry.user().validate(&payload).unwrap_err();
        assert_eq!(err.issues()[0].field, "age");
        assert_eq!(err.issues()[0].expected, "int");
        assert_eq!(err.issues()[0].actual, "float");
    }

    #[test]
    fn test_array_element_violations_use_indexed_paths() {
        let registry = SchemaRegistry::builtin();
        let payload = json!({
            "name": "Widget",
            "price": 9.5,
            "in_stock": true,
            "tags": ["new", 7, null]
        });

        let err = registry.product().validate(&payload).unwrap_err();
        let fields: Vec<&str> = err.issues().iter().map(|i| i.field.as_str()).collect();
        assert!(fields.contains(&"tags[1]"));
        assert!(fields.contains(&"tags[2]"));
    }

    #[test]
    fn test_nested_object_validation() {
        let mut address_fields = BTreeMap::new();
        address_fields.insert("city".to_string(), FieldDef::required_string());
        address_fields.insert("zip".to_string(), FieldDef::required_string());

        let mut fields = BTreeMap::new();
        fields.insert(
            "address".to_string(),
            FieldDef {
                field_type: FieldType::Object {
                    fields: address_fields,
                },
                required: true,
            },
        );
        let schema = Schema::new("site", "Site", fields);

        let payload = json!({ "address": { "city": "NYC" } });
        let err = schema.validate(&payload).unwrap_err();
        assert_eq!(err.issues()[0].field, "address.zip");

        let payload = json!({ "address": { "city": "NYC", "zip": "10001" } });
        assert!(schema.validate(&payload).is_ok());
    }

    #[test]
    fn test_validation_does_not_mutate_payload() {
        let payload = json!({
            "name": "Alice",
            "email": "alice@example.com",
            "message": "hi",
            "extra": true
        });
        let before = payload.clone();

        let _ = ticket_schema().validate(&payload);
        assert_eq!(payload, before);
    }

    #[test]
    fn test_record_serializes_as_plain_object() {
        let payload = json!({
            "name": "Alice",
            "email": "alice@example.com",
            "message": "hi"
        });

        let record = ticket_schema().validate(&payload).unwrap();
        assert_eq!(record.clone().into_value(), payload);
        assert_eq!(serde_json::to_value(&record).unwrap(), payload);
    }
}
