//! Schema type definitions for the entities this service exposes.
//!
//! Three entities exist:
//! - `RequestTicket` is validated and persisted
//! - `User` and `Product` are schema-only, published for client tooling
//!   that introspects `/schema`
//!
//! Field ordering is deterministic so descriptions are stable across calls.

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

/// Supported field types.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
    /// Boolean
    Bool,
    /// 64-bit floating point
    Float,
    /// Nested object with its own field schema
    Object {
        /// Nested field definitions
        fields: BTreeMap<String, FieldDef>,
    },
    /// Homogeneous array with single element type
    Array {
        /// Element type (boxed to allow recursive types)
        element_type: Box<FieldType>,
    },
}

impl FieldType {
    /// Returns the type name used in validation issues.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Bool => "bool",
            FieldType::Float => "float",
            FieldType::Object { .. } => "object",
            FieldType::Array { .. } => "array",
        }
    }

    /// Structural description of this type, JSON Schema style.
    fn describe(&self) -> Value {
        match self {
            FieldType::String => json!({ "type": "string" }),
            FieldType::Int => json!({ "type": "integer" }),
            FieldType::Bool => json!({ "type": "boolean" }),
            FieldType::Float => json!({ "type": "number" }),
            FieldType::Object { fields } => describe_fields(fields),
            FieldType::Array { element_type } => json!({
                "type": "array",
                "items": element_type.describe(),
            }),
        }
    }
}

/// A named field's declared type and optionality.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Field data type
    pub field_type: FieldType,
    /// Whether the field must be present
    pub required: bool,
}

impl FieldDef {
    pub fn required_string() -> Self {
        Self {
            field_type: FieldType::String,
            required: true,
        }
    }

    pub fn optional_string() -> Self {
        Self {
            field_type: FieldType::String,
            required: false,
        }
    }

    pub fn required_int() -> Self {
        Self {
            field_type: FieldType::Int,
            required: true,
        }
    }

    pub fn optional_int() -> Self {
        Self {
            field_type: FieldType::Int,
            required: false,
        }
    }

    pub fn required_bool() -> Self {
        Self {
            field_type: FieldType::Bool,
            required: true,
        }
    }

    pub fn required_float() -> Self {
        Self {
            field_type: FieldType::Float,
            required: true,
        }
    }

    pub fn optional_array(element_type: FieldType) -> Self {
        Self {
            field_type: FieldType::Array {
                element_type: Box::new(element_type),
            },
            required: false,
        }
    }
}

/// A declarative entity schema: named fields with types and optionality.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Registry key and collection name (e.g. "requestticket")
    pub name: String,
    /// Display title (e.g. "RequestTicket")
    pub title: String,
    /// Field definitions, ordered by name
    pub fields: BTreeMap<String, FieldDef>,
}

impl Schema {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        fields: BTreeMap<String, FieldDef>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            fields,
        }
    }

    /// Structural description suitable for serialization to a client.
    pub fn describe(&self) -> Value {
        let mut description = Map::new();
        description.insert("title".into(), Value::String(self.title.clone()));
        if let Value::Object(body) = describe_fields(&self.fields) {
            description.extend(body);
        }
        Value::Object(description)
    }
}

fn describe_fields(fields: &BTreeMap<String, FieldDef>) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for (name, def) in fields {
        properties.insert(name.clone(), def.field_type.describe());
        if def.required {
            required.push(Value::String(name.clone()));
        }
    }
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// The statically declared schemas this service publishes.
///
/// `request_ticket` is the only schema actually enforced on a write path;
/// `user` and `product` exist solely to be introspected.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    user: Schema,
    product: Schema,
    request_ticket: Schema,
}

impl SchemaRegistry {
    /// Builds the registry with the built-in entity schemas.
    pub fn builtin() -> Self {
        Self {
            user: user_schema(),
            product: product_schema(),
            request_ticket: request_ticket_schema(),
        }
    }

    pub fn user(&self) -> &Schema {
        &self.user
    }

    pub fn product(&self) -> &Schema {
        &self.product
    }

    pub fn request_ticket(&self) -> &Schema {
        &self.request_ticket
    }

    /// Descriptions of all published schemas, keyed by schema name.
    pub fn describe_all(&self) -> Value {
        json!({
            "user": self.user.describe(),
            "product": self.product.describe(),
            "requestticket": self.request_ticket.describe(),
        })
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn request_ticket_schema() -> Schema {
    let mut fields = BTreeMap::new();
    fields.insert("name".into(), FieldDef::required_string());
    fields.insert("email".into(), FieldDef::required_string());
    fields.insert("message".into(), FieldDef::required_string());
    fields.insert("phone".into(), FieldDef::optional_string());
    fields.insert("company".into(), FieldDef::optional_string());
    Schema::new("requestticket", "RequestTicket", fields)
}

fn user_schema() -> Schema {
    let mut fields = BTreeMap::new();
    fields.insert("name".into(), FieldDef::required_string());
    fields.insert("email".into(), FieldDef::required_string());
    fields.insert("active".into(), FieldDef::required_bool());
    fields.insert("age".into(), FieldDef::optional_int());
    Schema::new("user", "User", fields)
}

fn product_schema() -> Schema {
    let mut fields = BTreeMap::new();
    fields.insert("name".into(), FieldDef::required_string());
    fields.insert("price".into(), FieldDef::required_float());
    fields.insert("description".into(), FieldDef::optional_string());
    fields.insert("in_stock".into(), FieldDef::required_bool());
    fields.insert("tags".into(), FieldDef::optional_array(FieldType::String));
    Schema::new("product", "Product", fields)
}
