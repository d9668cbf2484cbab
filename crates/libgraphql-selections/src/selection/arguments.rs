use crate::ast;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::value::const_literal_to_value;
use crate::value::Value;
use crate::value::ValueMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, ArgumentCoercionError>;

/// Coerce the arguments a selection passed to `field` into runtime values.
///
/// Declared arguments are visited in definition order. An omitted argument
/// takes its declared default (if any) and an argument bound to an unbound
/// variable counts as omitted. An explicit `null` stays in the map as a
/// present-but-null value.
pub(crate) fn coerce_arguments(
    schema: &Schema,
    field: &Field,
    arguments: &[(String, ast::Value)],
    variables: &ValueMap,
) -> Result<ValueMap> {
    let coercer = Coercer { schema, variables };
    let mut coerced = ValueMap::new();
    for (name, param) in field.parameters() {
        let provided =
            arguments.iter()
                .find(|(arg_name, _)| arg_name == name)
                .map(|(_, value)| value);
        let value = coercer.coerce_slot(
            name,
            param.type_annotation(),
            provided,
            param.default_value(),
        )?;
        if let Some(value) = value {
            coerced.insert(name.clone(), value);
        }
    }
    Ok(coerced)
}

struct Coercer<'a> {
    schema: &'a Schema,
    variables: &'a ValueMap,
}
impl Coercer<'_> {
    /// Coerce the value of a named argument or input field. `Ok(None)` means
    /// the slot is absent from the result.
    fn coerce_slot(
        &self,
        name: &str,
        type_annotation: &TypeAnnotation,
        provided: Option<&ast::Value>,
        default_value: Option<&ast::Value>,
    ) -> Result<Option<Value>> {
        let provided = match provided {
            Some(ast::Value::Variable(var_name)) => match self.variables.get(var_name) {
                Some(value) => return self.coerce_runtime(name, type_annotation, value).map(Some),
                None => None,
            },
            provided => provided,
        };

        match provided.or(default_value) {
            Some(literal) => self.coerce_literal(name, type_annotation, literal).map(Some),
            None if !type_annotation.nullable() => Err(ArgumentCoercionError::MissingValue {
                name: name.to_string(),
                type_annotation: type_annotation.to_string(),
            }),
            None => Ok(None),
        }
    }

    fn coerce_literal(
        &self,
        name: &str,
        type_annotation: &TypeAnnotation,
        literal: &ast::Value,
    ) -> Result<Value> {
        match literal {
            // An unbound variable inside a list is a null item.
            ast::Value::Variable(var_name) => {
                let value = self.variables.get(var_name).unwrap_or(&Value::Null);
                self.coerce_runtime(name, type_annotation, value)
            },

            ast::Value::Null if type_annotation.nullable() => Ok(Value::Null),
            ast::Value::Null => Err(ArgumentCoercionError::NullForNonNullType {
                name: name.to_string(),
                type_annotation: type_annotation.to_string(),
            }),

            _ => match type_annotation {
                TypeAnnotation::List(list_annot) => {
                    let inner = list_annot.inner_type();
                    match literal {
                        ast::Value::List(items) => items.iter()
                            .map(|item| self.coerce_literal(name, inner, item))
                            .collect::<Result<Vec<_>>>()
                            .map(Value::Array),

                        // A lone value for a list type is a list of one.
                        _ => Ok(Value::Array(vec![
                            self.coerce_literal(name, inner, literal)?,
                        ])),
                    }
                },

                TypeAnnotation::Named(named_annot) =>
                    self.coerce_named(name, named_annot.type_name(), literal),
            },
        }
    }

    fn coerce_named(
        &self,
        name: &str,
        type_name: &str,
        literal: &ast::Value,
    ) -> Result<Value> {
        let type_ = self.schema.get_type(type_name).ok_or_else(|| {
            ArgumentCoercionError::UnknownInputType {
                name: name.to_string(),
                type_name: type_name.to_string(),
            }
        })?;

        match (type_, literal) {
            (GraphQLType::InputObject(input_type), ast::Value::Object(entries)) => {
                if let Some(unknown) = entries.keys().find(|key| !input_type.fields().contains_key(*key)) {
                    return Err(ArgumentCoercionError::UnknownInputField {
                        field_name: unknown.clone(),
                        input_type: type_name.to_string(),
                    });
                }

                let mut coerced = ValueMap::new();
                for (field_name, input_field) in input_type.fields() {
                    let value = self.coerce_slot(
                        field_name,
                        input_field.type_annotation(),
                        entries.get(field_name),
                        input_field.default_value(),
                    )?;
                    if let Some(value) = value {
                        coerced.insert(field_name.clone(), value);
                    }
                }
                Ok(Value::Object(coerced))
            },

            (GraphQLType::Enum(enum_type), ast::Value::Enum(value_name))
            | (GraphQLType::Enum(enum_type), ast::Value::String(value_name))
                if enum_type.values().contains_key(value_name) =>
                    Ok(Value::String(value_name.clone())),

            (GraphQLType::Float, ast::Value::Int(number)) =>
                Ok(Value::from(number.as_i64().unwrap_or_default() as f64)),

            (GraphQLType::ID, ast::Value::Int(number)) =>
                Ok(Value::String(number.as_i64().unwrap_or_default().to_string())),

            (GraphQLType::Bool, ast::Value::Boolean(_))
            | (GraphQLType::Float, ast::Value::Float(_))
            | (GraphQLType::ID, ast::Value::String(_))
            | (GraphQLType::Int, ast::Value::Int(_))
            | (GraphQLType::String, ast::Value::String(_)) =>
                Ok(const_literal_to_value(literal)),

            (GraphQLType::Scalar(_), _) => Ok(self.substitute_variables(literal)),

            _ => Err(ArgumentCoercionError::InvalidValue {
                name: name.to_string(),
                type_name: type_name.to_string(),
                value: crate::selection::printer::print_compact_value(literal),
            }),
        }
    }

    /// Variables arrive already in runtime form; only null checks and list
    /// wrapping apply to them.
    fn coerce_runtime(
        &self,
        name: &str,
        type_annotation: &TypeAnnotation,
        value: &Value,
    ) -> Result<Value> {
        if value.is_null() {
            return if type_annotation.nullable() {
                Ok(Value::Null)
            } else {
                Err(ArgumentCoercionError::NullForNonNullType {
                    name: name.to_string(),
                    type_annotation: type_annotation.to_string(),
                })
            };
        }

        match (type_annotation, value) {
            (TypeAnnotation::List(list_annot), Value::Array(items)) => items.iter()
                .map(|item| self.coerce_runtime(name, list_annot.inner_type(), item))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),

            (TypeAnnotation::List(list_annot), _) => Ok(Value::Array(vec![
                self.coerce_runtime(name, list_annot.inner_type(), value)?,
            ])),

            (TypeAnnotation::Named(_), _) => Ok(value.clone()),
        }
    }

    fn substitute_variables(&self, literal: &ast::Value) -> Value {
        match literal {
            ast::Value::Variable(var_name) =>
                self.variables.get(var_name).cloned().unwrap_or(Value::Null),
            ast::Value::List(items) => Value::Array(
                items.iter().map(|item| self.substitute_variables(item)).collect(),
            ),
            ast::Value::Object(entries) => Value::Object(
                entries.iter()
                    .map(|(key, entry)| (key.clone(), self.substitute_variables(entry)))
                    .collect(),
            ),
            _ => const_literal_to_value(literal),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ArgumentCoercionError {
    #[error("`{value}` is not a valid `{type_name}` value for `{name}`")]
    InvalidValue {
        name: String,
        type_name: String,
        value: String,
    },

    #[error("No value was provided for `{name}` of non-null type `{type_annotation}`")]
    MissingValue {
        name: String,
        type_annotation: String,
    },

    #[error("`{name}` has non-null type `{type_annotation}` but was given null")]
    NullForNonNullType {
        name: String,
        type_annotation: String,
    },

    #[error("Input type `{input_type}` has no field named `{field_name}`")]
    UnknownInputField {
        field_name: String,
        input_type: String,
    },

    #[error("`{name}` refers to an undefined input type `{type_name}`")]
    UnknownInputType {
        name: String,
        type_name: String,
    },
}
