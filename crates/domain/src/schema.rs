//! Structural schema descriptions for wire payloads
//!
//! Each entity declares its shape as a [`Schema`]: a flat list of [`Field`]s,
//! each carrying a [`FieldKind`] and an optionality flag. The declarations are
//! plain `const` data so the constraints can be inspected and tested without
//! going through serde at all.
//!
//! [`decode`] runs the structural check first and only then hands the value to
//! serde, so application code sees either a typed entity or a
//! [`SchemaViolations`] report listing every mismatch with its JSON path.
//!
//! Unknown fields are ignored, matching serde's default behavior.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Shape of a single field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Whole number (floats are rejected)
    Integer,
    /// Whole number in `0..=u32::MAX`
    Unsigned,
    String,
    Boolean,
    /// String restricted to a closed set of literals
    Literal(&'static [&'static str]),
    /// RFC 3339 timestamp carried as a string
    DateFromString,
    ArrayOf(&'static FieldKind),
    Object(&'static Schema),
    /// Union of object schemas discriminated by a literal tag field
    Tagged {
        tag: &'static str,
        variants: &'static [(&'static str, &'static Schema)],
    },
}

/// A named field inside an object schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Optional fields may be absent or `null`
    pub optional: bool,
}

impl Field {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            optional: false,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            optional: true,
        }
    }
}

/// Declarative description of an object payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl Schema {
    /// Check `value` against this schema, collecting every violation.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaViolations> {
        let mut violations = Vec::new();
        check_object(self, value, "$", &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaViolations {
                schema: self.name,
                violations,
            })
        }
    }
}

/// One mismatch between a payload and its schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON path, e.g. `$.questions[1].choices`
    pub path: String,
    pub expected: String,
    pub found: String,
}

/// Structured report of a rejected payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("payload does not match the {schema} schema: {}", summarize(.violations))]
pub struct SchemaViolations {
    pub schema: &'static str,
    pub violations: Vec<Violation>,
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{} expected {}, found {}", v.path, v.expected, v.found))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Entities that can be decoded from an untrusted JSON payload.
pub trait SchemaDecode: DeserializeOwned {
    const SCHEMA: &'static Schema;
}

/// Validate `value` against `T`'s schema, then deserialize it.
pub fn decode<T: SchemaDecode>(value: Value) -> Result<T, SchemaViolations> {
    T::SCHEMA.validate(&value)?;
    serde_json::from_value(value).map_err(|e| SchemaViolations {
        schema: T::SCHEMA.name,
        violations: vec![Violation {
            path: "$".to_string(),
            expected: T::SCHEMA.name.to_string(),
            found: e.to_string(),
        }],
    })
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}

fn expected(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Integer => "integer".to_string(),
        FieldKind::Unsigned => "non-negative integer".to_string(),
        FieldKind::String => "string".to_string(),
        FieldKind::Boolean => "boolean".to_string(),
        FieldKind::Literal(options) => format!("one of {options:?}"),
        FieldKind::DateFromString => "RFC 3339 date string".to_string(),
        FieldKind::ArrayOf(inner) => format!("array of {}", expected(inner)),
        FieldKind::Object(schema) => format!("{} object", schema.name),
        FieldKind::Tagged { tag, variants } => {
            let tags: Vec<&str> = variants.iter().map(|(name, _)| *name).collect();
            format!("object tagged by `{tag}` as one of {tags:?}")
        }
    }
}

fn check_object(schema: &Schema, value: &Value, path: &str, out: &mut Vec<Violation>) {
    let Some(map) = value.as_object() else {
        out.push(Violation {
            path: path.to_string(),
            expected: format!("{} object", schema.name),
            found: describe(value),
        });
        return;
    };

    for field in schema.fields {
        let field_path = format!("{path}.{}", field.name);
        match map.get(field.name) {
            None | Some(Value::Null) if field.optional => {}
            None => out.push(Violation {
                path: field_path,
                expected: expected(&field.kind),
                found: "missing".to_string(),
            }),
            Some(inner) => check_value(&field.kind, inner, &field_path, out),
        }
    }
}

fn check_value(kind: &FieldKind, value: &Value, path: &str, out: &mut Vec<Violation>) {
    let matches = match kind {
        FieldKind::Integer => value.is_i64() || value.is_u64(),
        FieldKind::Unsigned => value
            .as_u64()
            .is_some_and(|n| n <= u64::from(u32::MAX)),
        FieldKind::String => value.is_string(),
        FieldKind::Boolean => value.is_boolean(),
        FieldKind::Literal(options) => value
            .as_str()
            .map(|s| options.iter().any(|option| *option == s))
            .unwrap_or(false),
        FieldKind::DateFromString => value
            .as_str()
            .map(|s| chrono::DateTime::parse_from_rfc3339(s).is_ok())
            .unwrap_or(false),
        FieldKind::ArrayOf(inner) => {
            if let Some(items) = value.as_array() {
                for (index, item) in items.iter().enumerate() {
                    check_value(inner, item, &format!("{path}[{index}]"), out);
                }
                true
            } else {
                false
            }
        }
        FieldKind::Object(schema) => {
            check_object(schema, value, path, out);
            return;
        }
        FieldKind::Tagged { tag, variants } => {
            let selected = value
                .get(*tag)
                .and_then(Value::as_str)
                .and_then(|t| variants.iter().find(|(name, _)| *name == t));
            if let Some((_, schema)) = selected {
                check_object(schema, value, path, out);
                return;
            }
            false
        }
    };

    if !matches {
        out.push(Violation {
            path: path.to_string(),
            expected: expected(kind),
            found: describe(value),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const POINT: Schema = Schema {
        name: "Point",
        fields: &[
            Field::required("x", FieldKind::Integer),
            Field::required("y", FieldKind::Integer),
            Field::optional("label", FieldKind::String),
        ],
    };

    const SHAPE: Schema = Schema {
        name: "Shape",
        fields: &[
            Field::required("kind", FieldKind::Literal(&["line", "polygon"])),
            Field::required("points", FieldKind::ArrayOf(&FieldKind::Object(&POINT))),
            Field::required("drawnAt", FieldKind::DateFromString),
        ],
    };

    #[test]
    fn accepts_matching_payload() {
        let value = json!({
            "kind": "line",
            "points": [{"x": 1, "y": 2}, {"x": 3, "y": 4, "label": null}],
            "drawnAt": "2024-05-01T10:00:00Z"
        });
        assert!(SHAPE.validate(&value).is_ok());
    }

    #[test]
    fn reports_every_violation_with_its_path() {
        let value = json!({
            "kind": "circle",
            "points": [{"x": 1.5, "y": 2}, {"x": 3}],
            "drawnAt": "yesterday"
        });
        let err = SHAPE.validate(&value).expect_err("should be rejected");
        let paths: Vec<&str> = err.violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["$.kind", "$.points[0].x", "$.points[1].y", "$.drawnAt"]
        );
        assert_eq!(err.violations[2].found, "missing");
        assert_eq!(err.schema, "Shape");
    }

    #[test]
    fn optional_fields_reject_wrong_types() {
        let value = json!({"x": 1, "y": 2, "label": 7});
        let err = POINT.validate(&value).expect_err("label must be a string");
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].expected, "string");
    }

    #[test]
    fn tagged_union_dispatches_on_tag() {
        const ANY: FieldKind = FieldKind::Tagged {
            tag: "_tag",
            variants: &[("Point", &POINT)],
        };
        let mut out = Vec::new();
        check_value(&ANY, &json!({"_tag": "Point", "x": 1, "y": 1}), "$", &mut out);
        assert!(out.is_empty());

        check_value(&ANY, &json!({"_tag": "Circle"}), "$", &mut out);
        assert_eq!(out.len(), 1);
        assert!(out[0].expected.contains("Point"));
    }

    #[test]
    fn unsigned_rejects_negative_and_oversized_numbers() {
        const COUNTER: Schema = Schema {
            name: "Counter",
            fields: &[Field::required("count", FieldKind::Unsigned)],
        };
        assert!(COUNTER.validate(&json!({"count": 0})).is_ok());
        assert!(COUNTER.validate(&json!({"count": 4_294_967_295u64})).is_ok());

        for bad in [json!(-1), json!(4_294_967_296u64), json!(2.0)] {
            let err = COUNTER
                .validate(&json!({"count": bad}))
                .expect_err("out of range");
            assert_eq!(err.violations[0].path, "$.count");
            assert_eq!(err.violations[0].expected, "non-negative integer");
        }
    }

    #[test]
    fn non_object_root_is_a_single_violation() {
        let err = POINT.validate(&json!([1, 2])).expect_err("array is not an object");
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].found, "array");
        assert!(err.to_string().contains("Point"));
    }
}
