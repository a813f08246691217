use serde_json::{Map, Value};

/// Declared type of one output field.
#[derive(Debug)]
pub enum FieldKind {
    /// Permissive stringification: absent/null becomes `""`, everything
    /// else is rendered as a string.
    Str,
    /// Numeric passthrough: non-numeric stored values become `null`.
    /// No string-to-number coercion is attempted.
    Num,
    /// Optional sub-object projected through its own whitelist. An absent
    /// parent yields a sub-object with every field defaulted.
    Nested(&'static [Field]),
    /// List of sub-objects, each projected through the element whitelist.
    /// A missing or non-array source yields an empty list.
    List(&'static [Field]),
}

/// One entry of an output-shape whitelist.
#[derive(Debug)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

pub const fn str_field(name: &'static str) -> Field {
    Field {
        name,
        kind: FieldKind::Str,
    }
}

pub const fn num_field(name: &'static str) -> Field {
    Field {
        name,
        kind: FieldKind::Num,
    }
}

/// Projects a raw record into the fixed output shape.
///
/// This is a strict allow-list: every declared field is present in the
/// output, in declaration order, regardless of which source fields exist;
/// undeclared source fields are dropped. Never fails — malformed input is
/// absorbed by per-field defaulting.
pub fn project(record: &Value, fields: &[Field]) -> Value {
    let mut out = Map::with_capacity(fields.len());
    for field in fields {
        let source = record.get(field.name);
        let value = match &field.kind {
            FieldKind::Str => coerce_string(source),
            FieldKind::Num => coerce_number(source),
            FieldKind::Nested(sub) => project(source.unwrap_or(&Value::Null), sub),
            FieldKind::List(sub) => match source {
                Some(Value::Array(elems)) => {
                    Value::Array(elems.iter().map(|elem| project(elem, sub)).collect())
                }
                _ => Value::Array(Vec::new()),
            },
        };
        out.insert(field.name.to_string(), value);
    }
    Value::Object(out)
}

fn coerce_string(source: Option<&Value>) -> Value {
    let text = match source {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        // Containers are not expected in string positions; render as JSON
        // text rather than erroring.
        Some(other) => other.to_string(),
    };
    Value::String(text)
}

fn coerce_number(source: Option<&Value>) -> Value {
    match source {
        Some(Value::Number(n)) => Value::Number(n.clone()),
        _ => Value::Null,
    }
}
