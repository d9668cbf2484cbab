use crate::test_utils::default_schema;
use crate::types::GraphQLTypeKind;

#[test]
fn kinds_follow_the_schema_definitions() {
    let schema = default_schema();
    let kind_of = |name: &str| schema.get_type(name).unwrap().kind();

    assert_eq!(kind_of("Foo"), GraphQLTypeKind::Object);
    assert_eq!(kind_of("Node"), GraphQLTypeKind::Interface);
    assert_eq!(kind_of("FooOrStruct"), GraphQLTypeKind::Union);
    assert_eq!(kind_of("Bar"), GraphQLTypeKind::Enum);
    assert_eq!(kind_of("Boolean"), GraphQLTypeKind::Bool);
}

#[test]
fn only_object_like_kinds_take_selections() {
    for kind in [GraphQLTypeKind::Object, GraphQLTypeKind::Interface, GraphQLTypeKind::Union] {
        assert!(kind.is_composite(), "{kind:?}");
        assert!(!kind.is_leaf(), "{kind:?}");
    }
    for kind in [GraphQLTypeKind::Enum, GraphQLTypeKind::Int, GraphQLTypeKind::Scalar] {
        assert!(!kind.is_composite(), "{kind:?}");
        assert!(kind.is_leaf(), "{kind:?}");
    }

    let input = GraphQLTypeKind::InputObject;
    assert!(!input.is_composite());
    assert!(!input.is_leaf());
}

#[test]
fn abstract_kinds() {
    assert!(GraphQLTypeKind::Interface.is_abstract());
    assert!(GraphQLTypeKind::Union.is_abstract());
    assert!(!GraphQLTypeKind::Object.is_abstract());
}

#[test]
fn displays_the_introspection_kind() {
    assert_eq!(GraphQLTypeKind::ID.to_string(), "SCALAR");
    assert_eq!(GraphQLTypeKind::InputObject.to_string(), "INPUT_OBJECT");
    assert_eq!(GraphQLTypeKind::Object.to_string(), "OBJECT");
}
