//! Constraint extraction from JSON-Schema property objects.
//!
//! Rather than probing arbitrary dictionaries, validation rules become a
//! closed set of typed variants, each extracted by an explicit optional-field
//! check. The checks run in a fixed vocabulary order (enum, pattern,
//! minLength, maxLength, minimum, maximum, format), so two properties with
//! the same constraint keys in different source order always render
//! identically.

use std::fmt;

use serde_json::{Map, Number, Value};

/// One validation rule declared on a schema property.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    Enum(Vec<Value>),
    Pattern(String),
    MinLength(u64),
    MaxLength(u64),
    Minimum(Number),
    Maximum(Number),
    Format(String),
}

impl Constraint {
    /// Probe one property object in the fixed vocabulary order.
    fn extract(property: &Map<String, Value>) -> Vec<Self> {
        let mut constraints = Vec::new();
        if let Some(values) = property.get("enum").and_then(Value::as_array) {
            constraints.push(Self::Enum(values.clone()));
        }
        if let Some(pattern) = property.get("pattern").and_then(Value::as_str) {
            constraints.push(Self::Pattern(pattern.to_string()));
        }
        if let Some(len) = property.get("minLength").and_then(Value::as_u64) {
            constraints.push(Self::MinLength(len));
        }
        if let Some(len) = property.get("maxLength").and_then(Value::as_u64) {
            constraints.push(Self::MaxLength(len));
        }
        if let Some(bound) = property.get("minimum").and_then(Value::as_number) {
            constraints.push(Self::Minimum(bound.clone()));
        }
        if let Some(bound) = property.get("maximum").and_then(Value::as_number) {
            constraints.push(Self::Maximum(bound.clone()));
        }
        if let Some(format) = property.get("format").and_then(Value::as_str) {
            constraints.push(Self::Format(format.to_string()));
        }
        constraints
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enum(values) => {
                let joined = values
                    .iter()
                    .map(scalar_text)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "enum: [{joined}]")
            }
            Self::Pattern(pattern) => write!(f, "pattern: {pattern}"),
            Self::MinLength(len) => write!(f, "minLength: {len}"),
            Self::MaxLength(len) => write!(f, "maxLength: {len}"),
            Self::Minimum(bound) => write!(f, "min: {bound}"),
            Self::Maximum(bound) => write!(f, "max: {bound}"),
            Self::Format(format) => write!(f, "format: {format}"),
        }
    }
}

// Enum members print bare (no quotes around strings), matching the
// human-readable table style rather than JSON.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// A schema field summarized for display.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    /// Declared `type`, or `"N/A"` when absent.
    pub type_name: String,
    pub required: bool,
    pub constraints: Vec<Constraint>,
}

impl FieldDescriptor {
    /// One constraint per line. Empty when the property declared none,
    /// distinct from an explicit `"N/A"`.
    #[must_use]
    pub fn constraints_text(&self) -> String {
        self.constraints
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Derive ordered field descriptors from a JSON-Schema fragment.
///
/// Walks `properties` in the object's own declared order; `required`
/// membership comes from the fragment's `required` array. A fragment without
/// `properties` yields no descriptors.
#[must_use]
pub fn field_descriptors(definition: &Value) -> Vec<FieldDescriptor> {
    let Some(properties) = definition.get("properties").and_then(Value::as_object) else {
        return Vec::new();
    };
    let required: Vec<&str> = definition
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    properties
        .iter()
        .map(|(name, property)| FieldDescriptor {
            name: name.clone(),
            type_name: property
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("N/A")
                .to_string(),
            required: required.iter().any(|field| field == name),
            constraints: property
                .as_object()
                .map(Constraint::extract)
                .unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn render_order_is_fixed_by_vocabulary_not_input() {
        // maximum declared before minLength in the source object
        let definition: Value =
            serde_json::from_str(r#"{"properties": {"qty": {"maximum": 10, "minLength": 3}}}"#)
                .unwrap();
        let fields = field_descriptors(&definition);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].constraints_text(), "minLength: 3\nmax: 10");
    }

    #[test]
    fn same_keys_different_source_order_render_identically() {
        let forward: Value = serde_json::from_str(
            r#"{"properties": {"f": {"pattern": "^a", "enum": ["a", "b"], "format": "email"}}}"#,
        )
        .unwrap();
        let reversed: Value = serde_json::from_str(
            r#"{"properties": {"f": {"format": "email", "enum": ["a", "b"], "pattern": "^a"}}}"#,
        )
        .unwrap();
        assert_eq!(
            field_descriptors(&forward)[0].constraints_text(),
            field_descriptors(&reversed)[0].constraints_text()
        );
    }

    #[test]
    fn enum_values_comma_joined_in_brackets() {
        let definition = json!({
            "properties": {"status": {"type": "string", "enum": ["pending", "shipped", 3]}}
        });
        let fields = field_descriptors(&definition);
        assert_eq!(
            fields[0].constraints_text(),
            "enum: [pending, shipped, 3]"
        );
    }

    #[test]
    fn missing_type_defaults_to_na() {
        let definition = json!({"properties": {"blob": {}}});
        let fields = field_descriptors(&definition);
        assert_eq!(fields[0].type_name, "N/A");
        assert_eq!(fields[0].constraints_text(), "");
    }

    #[test]
    fn required_membership_is_per_field() {
        let definition = json!({
            "properties": {"a": {"type": "string"}, "b": {"type": "number"}},
            "required": ["a"]
        });
        let fields = field_descriptors(&definition);
        assert!(fields[0].required);
        assert!(!fields[1].required);
    }

    #[test]
    fn properties_keep_declared_order() {
        let definition: Value = serde_json::from_str(
            r#"{"properties": {"zeta": {}, "alpha": {}, "mid": {}}}"#,
        )
        .unwrap();
        let fields = field_descriptors(&definition);
        let names: Vec<&str> = fields.iter().map(|field| field.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn fragment_without_properties_yields_nothing() {
        assert!(field_descriptors(&json!({"type": "object"})).is_empty());
    }

    #[test]
    fn numeric_bounds_keep_float_precision() {
        let definition = json!({
            "properties": {"score": {"minimum": 0.5, "maximum": 99}}
        });
        let fields = field_descriptors(&definition);
        assert_eq!(fields[0].constraints_text(), "min: 0.5\nmax: 99");
    }
}
