use crate::ast;
use crate::types::TypeAnnotation;

fn parse_type(type_str: &str) -> ast::query::Type {
    let doc = ast::query::parse(
        format!("query($v: {type_str}) {{ x }}").as_str(),
    ).unwrap();
    match doc.definitions.into_iter().next() {
        Some(ast::query::Definition::Operation(
            graphql_parser::query::OperationDefinition::Query(query),
        )) => query.variable_definitions[0].var_type.clone(),
        other => panic!("unexpected definition: {other:#?}"),
    }
}

#[test]
fn unwraps_nested_wrappers_to_innermost_name() {
    let annot = TypeAnnotation::from_ast_type(&parse_type("[[Foo!]]!"));

    assert!(!annot.nullable());
    assert_eq!(annot.innermost_type_name(), "Foo");
    assert!(!annot.innermost_named_type_annotation().nullable());

    let inner = annot.as_list_annotation().unwrap().inner_type();
    assert!(inner.nullable());
    assert!(inner.as_list_annotation().is_some());
}

#[test]
fn display_matches_sdl_syntax() {
    for type_str in ["Foo", "Foo!", "[Foo]", "[Foo!]!", "[[Int]!]"] {
        let annot = TypeAnnotation::from_ast_type(&parse_type(type_str));
        assert_eq!(annot.to_string(), type_str);
    }
}

#[test]
fn ast_conversion_preserves_wrappers() {
    let ast_type = parse_type("[ID!]!");
    let annot = TypeAnnotation::from_ast_type(&ast_type);
    assert_eq!(annot.to_ast_type(), ast_type);
}

#[test]
fn to_nullable_only_strips_outermost_non_null() {
    let annot = TypeAnnotation::from_ast_type(&parse_type("[Foo!]!"));
    let nullable = annot.to_nullable();

    assert!(nullable.nullable());
    assert_eq!(nullable.to_string(), "[Foo!]");
}
