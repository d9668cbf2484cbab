use crate::ast;

/// A runtime GraphQL value: a coerced argument, a bound variable or a piece
/// of fetched object data.
pub type Value = serde_json::Value;

/// An insertion-ordered name -> [`Value`] map.
pub type ValueMap = serde_json::Map<String, Value>;

pub(crate) fn number_to_value(number: &ast::Number) -> Value {
    match number.as_i64() {
        Some(int) => Value::from(int),
        None => Value::Null,
    }
}

/// Converts a literal that is known not to contain variable references (for
/// example a schema-declared default value) into a runtime [`Value`].
///
/// Enum literals become strings. A stray variable reference becomes `null`.
pub fn const_literal_to_value(literal: &ast::Value) -> Value {
    match literal {
        ast::Value::Variable(_) | ast::Value::Null => Value::Null,
        ast::Value::Int(number) => number_to_value(number),
        ast::Value::Float(float) => serde_json::Number::from_f64(*float)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ast::Value::String(string) => Value::String(string.clone()),
        ast::Value::Boolean(bool) => Value::Bool(*bool),
        ast::Value::Enum(name) => Value::String(name.clone()),
        ast::Value::List(items) => Value::Array(
            items.iter().map(const_literal_to_value).collect(),
        ),
        ast::Value::Object(entries) => Value::Object(
            entries.iter()
                .map(|(key, val)| (key.clone(), const_literal_to_value(val)))
                .collect(),
        ),
    }
}
