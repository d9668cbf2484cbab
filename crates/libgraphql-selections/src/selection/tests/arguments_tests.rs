use super::test_helpers::mk_with;
use super::test_helpers::vars;
use crate::selection::ArgumentCoercionError;
use crate::selection::SelectionViewError;
use crate::value::ValueMap;
use serde_json::json;

const SDL: &str = r#"
    enum Color { RED GREEN }

    input Point {
      x: Int!
      y: Int = 0
    }

    type Query {
      x(arg: Int, other: String): Int
      y(arg: [Int]): Int
      ids(arg: [ID!]): Int
      q: Query
      d(arg: Int = 5): Int
      req(arg: Int!): Int
      f(arg: Float): Int
      id(arg: ID): Int
      color(arg: Color): Int
      point(arg: Point): Int
      json(arg: JSON): Int
    }

    scalar JSON
"#;

fn args_of(selections: &str, selection_name: &str, variables: serde_json::Value) -> Option<ValueMap> {
    mk_with("Query", selections, SDL, vars(variables))
        .arguments_of_selection("Query", selection_name)
        .unwrap()
}

fn coercion_error(selections: &str, selection_name: &str, variables: serde_json::Value) -> ArgumentCoercionError {
    let err = mk_with("Query", selections, SDL, vars(variables))
        .arguments_of_selection("Query", selection_name)
        .unwrap_err();
    match err {
        SelectionViewError::ArgumentCoercion { source, .. } => source,
        err => panic!("Expected an argument coercion error, got {err:?}"),
    }
}

#[test]
fn missing_selection() {
    assert_eq!(args_of("x", "y", json!({})), None);
}

#[test]
fn selection_without_arguments() {
    assert_eq!(args_of("x", "x", json!({})), Some(ValueMap::new()));
}

#[test]
fn constant_arguments() {
    assert_eq!(args_of("x(arg:1)", "x", json!({})), Some(vars(json!({"arg": 1}))));
    assert_eq!(
        args_of(r#"x(arg:1, other:"two")"#, "x", json!({})),
        Some(vars(json!({"arg": 1, "other": "two"}))),
    );
}

#[test]
fn aliased_selections() {
    assert_eq!(args_of("a:x(arg:1)", "a", json!({})), Some(vars(json!({"arg": 1}))));
    assert_eq!(args_of("a:x(arg:1)", "x", json!({})), None);
}

#[test]
fn bound_variable_arguments() {
    assert_eq!(
        args_of("x(arg:$var)", "x", json!({"var": 1})),
        Some(vars(json!({"arg": 1}))),
    );
}

#[test]
fn unbound_variables_are_omitted() {
    assert_eq!(args_of("x(arg:$var)", "x", json!({})), Some(ValueMap::new()));
}

#[test]
fn unbound_variables_fall_back_to_defaults() {
    assert_eq!(args_of("d(arg:$var)", "d", json!({})), Some(vars(json!({"arg": 5}))));
    assert_eq!(args_of("d", "d", json!({})), Some(vars(json!({"arg": 5}))));
    assert_eq!(args_of("d(arg:7)", "d", json!({})), Some(vars(json!({"arg": 7}))));
}

#[test]
fn explicit_nulls_are_kept() {
    assert_eq!(args_of("x(arg:null)", "x", json!({})), Some(vars(json!({"arg": null}))));
    assert_eq!(
        args_of("x(arg:$var)", "x", json!({"var": null})),
        Some(vars(json!({"arg": null}))),
    );
}

#[test]
fn list_arguments() {
    assert_eq!(args_of("y(arg:[1,2])", "y", json!({})), Some(vars(json!({"arg": [1, 2]}))));
    assert_eq!(
        args_of("y(arg:$var)", "y", json!({"var": [1, 2]})),
        Some(vars(json!({"arg": [1, 2]}))),
    );
}

#[test]
fn single_values_are_wrapped_into_lists() {
    assert_eq!(args_of("y(arg:1)", "y", json!({})), Some(vars(json!({"arg": [1]}))));
    assert_eq!(args_of("y(arg:$var)", "y", json!({"var": 1})), Some(vars(json!({"arg": [1]}))));
}

#[test]
fn variables_nested_in_lists() {
    assert_eq!(
        args_of("y(arg:[1,$var])", "y", json!({"var": 2})),
        Some(vars(json!({"arg": [1, 2]}))),
    );
}

#[test]
fn unbound_variables_in_lists_are_null_items() {
    assert_eq!(
        args_of("y(arg:[1,$var])", "y", json!({})),
        Some(vars(json!({"arg": [1, null]}))),
    );
    assert_eq!(
        coercion_error("ids(arg:[1,$var])", "ids", json!({})),
        ArgumentCoercionError::NullForNonNullType {
            name: "arg".to_string(),
            type_annotation: "ID!".to_string(),
        },
    );
    assert_eq!(
        args_of("ids(arg:[1,$var])", "ids", json!({"var": "2"})),
        Some(vars(json!({"arg": ["1", "2"]}))),
    );
}

#[test]
fn type_conditions_are_respected() {
    assert_eq!(
        args_of("... on Query { x(arg:1) }", "x", json!({})),
        Some(vars(json!({"arg": 1}))),
    );
}

#[test]
fn first_matching_selection_wins() {
    assert_eq!(
        args_of("x(arg:1) ... on Query { x(arg:1) }", "x", json!({})),
        Some(vars(json!({"arg": 1}))),
    );
}

#[test]
fn skipped_selections_have_no_arguments() {
    assert_eq!(args_of("x(arg:1) @skip(if:true)", "x", json!({})), None);
}

#[test]
fn nested_selections_are_out_of_reach() {
    let view = mk_with("Query", "q { x(arg:1) }", SDL, ValueMap::new());
    assert_eq!(view.arguments_of_selection("Query", "x").unwrap(), None);

    let q = view.selection_set_for_field("Query", "q").unwrap();
    assert_eq!(
        q.arguments_of_selection("Query", "x").unwrap(),
        Some(vars(json!({"arg": 1}))),
    );
}

#[test]
fn int_coerces_to_float() {
    assert_eq!(args_of("f(arg:1)", "f", json!({})), Some(vars(json!({"arg": 1.0}))));
    assert_eq!(args_of("f(arg:1.5)", "f", json!({})), Some(vars(json!({"arg": 1.5}))));
}

#[test]
fn int_coerces_to_id() {
    assert_eq!(args_of("id(arg:42)", "id", json!({})), Some(vars(json!({"arg": "42"}))));
    assert_eq!(args_of(r#"id(arg:"abc")"#, "id", json!({})), Some(vars(json!({"arg": "abc"}))));
}

#[test]
fn enum_values() {
    assert_eq!(args_of("color(arg:RED)", "color", json!({})), Some(vars(json!({"arg": "RED"}))));
    assert_eq!(
        coercion_error("color(arg:BLUE)", "color", json!({})),
        ArgumentCoercionError::InvalidValue {
            name: "arg".to_string(),
            type_name: "Color".to_string(),
            value: "BLUE".to_string(),
        },
    );
}

#[test]
fn input_objects_apply_field_defaults() {
    assert_eq!(
        args_of("point(arg:{x:1})", "point", json!({})),
        Some(vars(json!({"arg": {"x": 1, "y": 0}}))),
    );
    assert_eq!(
        args_of("point(arg:{x:$px, y:2})", "point", json!({"px": 3})),
        Some(vars(json!({"arg": {"x": 3, "y": 2}}))),
    );
}

#[test]
fn input_objects_reject_unknown_fields() {
    assert_eq!(
        coercion_error("point(arg:{x:1, z:2})", "point", json!({})),
        ArgumentCoercionError::UnknownInputField {
            field_name: "z".to_string(),
            input_type: "Point".to_string(),
        },
    );
}

#[test]
fn input_objects_require_non_null_fields() {
    assert_eq!(
        coercion_error("point(arg:{y:1})", "point", json!({})),
        ArgumentCoercionError::MissingValue {
            name: "x".to_string(),
            type_annotation: "Int!".to_string(),
        },
    );
}

#[test]
fn missing_non_null_arguments() {
    assert_eq!(
        coercion_error("req", "req", json!({})),
        ArgumentCoercionError::MissingValue {
            name: "arg".to_string(),
            type_annotation: "Int!".to_string(),
        },
    );
    assert_eq!(
        coercion_error("req(arg:$var)", "req", json!({"var": null})),
        ArgumentCoercionError::NullForNonNullType {
            name: "arg".to_string(),
            type_annotation: "Int!".to_string(),
        },
    );
}

#[test]
fn mismatched_literals() {
    assert!(matches!(
        coercion_error(r#"x(arg:"one")"#, "x", json!({})),
        ArgumentCoercionError::InvalidValue { .. },
    ));
}

#[test]
fn custom_scalars_accept_any_literal() {
    assert_eq!(
        args_of(r#"json(arg:{a:[1, "b", $v]})"#, "json", json!({"v": true})),
        Some(vars(json!({"arg": {"a": [1, "b", true]}}))),
    );
}
