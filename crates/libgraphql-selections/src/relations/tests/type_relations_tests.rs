use crate::loc;
use crate::relations::IGNORED_TYPE_NAME;
use crate::relations::TypeRelation;
use crate::relations::TypeRelations;
use crate::relations::TypeRelationsBuildError;
use crate::relations::TypeRelationsError;
use crate::test_utils::mk_schema;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use indexmap::IndexSet;
use proptest::prelude::*;

const SDL: &str = r#"
    type Query { x: Int }

    interface Node { id: ID! }
    interface HasBar { bar: Int }
    interface Entity implements Node { id: ID! }

    type Foo implements Node & HasBar { id: ID!, bar: Int }
    type Baz implements Node { id: ID! }
    type Qux implements Entity & Node { id: ID! }
    type Lonely { x: Int }

    union FooOrBaz = Foo | Baz
    union FooOnly = Foo
    union BazOnly = Baz

    enum E { A }
"#;

fn relations() -> TypeRelations {
    mk_schema(SDL).type_relations().clone()
}

mod construction {
    use super::*;

    #[test]
    fn every_composite_type_is_self_spreadable() {
        let relations = relations();
        for type_name in ["Query", "Node", "HasBar", "Foo", "Baz", "FooOrBaz", "Lonely"] {
            assert!(relations.is_spreadable(type_name, type_name).unwrap());
            assert!(relations.possible_types(type_name).unwrap().contains(type_name));
        }
    }

    #[test]
    fn possible_types_include_transitive_implementors() {
        let relations = relations();
        let node_possible = relations.possible_types("Node").unwrap();
        for type_name in ["Node", "Foo", "Baz", "Qux", "Entity"] {
            assert!(node_possible.contains(type_name), "missing {type_name}");
        }

        let node_objects = relations.possible_object_types("Node").unwrap();
        assert_eq!(
            node_objects.iter().map(String::as_str).collect::<IndexSet<_>>(),
            IndexSet::from(["Foo", "Baz", "Qux"]),
        );
    }

    #[test]
    fn possible_object_types_is_interned() {
        let relations = relations();
        let first = relations.possible_object_types("FooOrBaz").unwrap();
        let second = relations.possible_object_types("FooOrBaz").unwrap();
        assert!(std::sync::Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn leaf_types_are_not_in_the_tables() {
        let relations = relations();
        assert!(!relations.contains_type("E"));
        assert!(!relations.contains_type("Int"));
        assert_eq!(
            relations.possible_types("E"),
            Err(TypeRelationsError::UnknownCompositeType {
                type_name: "E".to_string(),
            }),
        );
    }

    #[test]
    fn ignored_type_is_excluded() {
        let data = ObjectOrInterfaceTypeData {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            description: None,
            fields: IndexMap::new(),
            interfaces: vec![],
            name: IGNORED_TYPE_NAME.to_string(),
        };
        let types = IndexMap::from([(
            IGNORED_TYPE_NAME.to_string(),
            GraphQLType::Object(Box::new(ObjectType(data))),
        )]);

        let relations = TypeRelations::new(&types).unwrap();
        assert!(!relations.contains_type(IGNORED_TYPE_NAME));
    }

    #[test]
    fn ignored_union_members_are_excluded() {
        let schema = mk_schema(&format!(r#"
            type Query {{ x: Int }}
            type Foo {{ x: Int }}
            type {IGNORED_TYPE_NAME} {{ x: Int }}
            union U = {IGNORED_TYPE_NAME} | Foo
        "#));
        let relations = schema.type_relations();

        assert_eq!(
            relations.possible_types("U").unwrap(),
            &IndexSet::from(["U".to_string(), "Foo".to_string()]),
        );
        assert_eq!(
            *relations.possible_object_types("U").unwrap(),
            IndexSet::from(["Foo".to_string()]),
        );
        assert!(relations.is_spreadable("U", IGNORED_TYPE_NAME).is_err());
    }

    #[test]
    fn ignored_interfaces_are_excluded() {
        let schema = mk_schema(&format!(r#"
            type Query {{ x: Int }}
            interface {IGNORED_TYPE_NAME} {{ x: Int }}
            type Foo implements {IGNORED_TYPE_NAME} {{ x: Int }}
        "#));
        let relations = schema.type_relations();

        assert!(!relations.contains_type(IGNORED_TYPE_NAME));
        assert_eq!(
            relations.possible_types("Foo").unwrap(),
            &IndexSet::from(["Foo".to_string()]),
        );
        assert_eq!(
            relations.spreadable_types("Foo").unwrap(),
            &IndexSet::from(["Foo".to_string()]),
        );
    }

    #[test]
    fn undefined_union_member_is_a_construction_error() {
        let types = IndexMap::from([(
            "U".to_string(),
            GraphQLType::Union(Box::new(UnionType {
                def_location: loc::SourceLocation::GraphQLBuiltIn,
                description: None,
                members: IndexSet::from(["Missing".to_string()]),
                name: "U".to_string(),
            })),
        )]);

        assert_eq!(
            TypeRelations::new(&types),
            Err(TypeRelationsBuildError::UndefinedUnionMember {
                member_name: "Missing".to_string(),
                union_name: "U".to_string(),
            }),
        );
    }
}

mod relation {
    use super::*;

    #[test]
    fn direct_relations() {
        let relations = relations();
        let rel = |a, b| relations.relation_unwrapped(a, b).unwrap();

        assert_eq!(rel("Foo", "Foo"), TypeRelation::Same);
        assert_eq!(rel("Node", "Foo"), TypeRelation::WiderThan);
        assert_eq!(rel("Foo", "Node"), TypeRelation::NarrowerThan);
        assert_eq!(rel("FooOrBaz", "Baz"), TypeRelation::WiderThan);
        assert_eq!(rel("Baz", "FooOrBaz"), TypeRelation::NarrowerThan);
        assert_eq!(rel("Node", "Qux"), TypeRelation::WiderThan);
        assert_eq!(rel("Entity", "Node"), TypeRelation::NarrowerThan);
        assert_eq!(rel("Foo", "Baz"), TypeRelation::None);
        assert_eq!(rel("Lonely", "Node"), TypeRelation::None);
    }

    #[test]
    fn abstract_types_sharing_an_object_are_coparents() {
        let relations = relations();
        let rel = |a, b| relations.relation_unwrapped(a, b).unwrap();

        assert_eq!(rel("Node", "HasBar"), TypeRelation::Coparent);
        assert_eq!(rel("HasBar", "Node"), TypeRelation::Coparent);
        assert_eq!(rel("FooOrBaz", "FooOnly"), TypeRelation::Coparent);
        assert_eq!(rel("FooOnly", "HasBar"), TypeRelation::Coparent);
        assert_eq!(rel("FooOnly", "BazOnly"), TypeRelation::None);
    }

    #[test]
    fn wrappers_are_stripped() {
        let relations = relations();
        let list_of_foo = TypeAnnotation::list(TypeAnnotation::named("Foo", false), false);
        let node = TypeAnnotation::named("Node", true);

        assert_eq!(relations.relation(&node, &list_of_foo), TypeRelation::WiderThan);
        assert_eq!(relations.relation(&list_of_foo, &node), TypeRelation::NarrowerThan);
        assert_eq!(
            relations.relation(&list_of_foo, &TypeAnnotation::named("Foo", true)),
            TypeRelation::Same,
        );
    }

    #[test]
    fn non_composite_sides_are_unrelated() {
        let relations = relations();
        assert_eq!(
            relations.relation(
                &TypeAnnotation::named("Int", true),
                &TypeAnnotation::named("Node", true),
            ),
            TypeRelation::None,
        );
        assert_eq!(
            relations.relation(
                &TypeAnnotation::named("Int", true),
                &TypeAnnotation::named("Int", false),
            ),
            TypeRelation::Same,
        );
    }

    #[test]
    fn unknown_types_fail_loudly() {
        let relations = relations();
        assert!(relations.relation_unwrapped("Foo", "Nope").is_err());
        assert!(relations.is_spreadable("Nope", "Foo").is_err());
        assert!(relations.is_spreadable("Foo", "Nope").is_err());
    }
}

mod spreadability {
    use super::*;

    #[test]
    fn abstract_spreads_in_abstract_scope() {
        let relations = relations();
        assert!(relations.is_spreadable("Node", "HasBar").unwrap());
        assert!(relations.is_spreadable("FooOrBaz", "HasBar").unwrap());
        assert!(!relations.is_spreadable("FooOnly", "BazOnly").unwrap());
        assert!(!relations.is_spreadable("Lonely", "Node").unwrap());
    }

    #[test]
    fn objects_are_only_spreadable_with_their_abstract_types() {
        let relations = relations();
        assert!(relations.is_spreadable("Foo", "Node").unwrap());
        assert!(relations.is_spreadable("Foo", "FooOrBaz").unwrap());
        assert!(relations.is_spreadable("Qux", "Entity").unwrap());
        assert!(!relations.is_spreadable("Foo", "Baz").unwrap());
        assert!(!relations.is_spreadable("Foo", "BazOnly").unwrap());
    }

    const COMPOSITES: [&str; 11] = [
        "Query", "Node", "HasBar", "Entity", "Foo", "Baz", "Qux", "Lonely",
        "FooOrBaz", "FooOnly", "BazOnly",
    ];

    proptest! {
        #[test]
        fn spreadability_is_symmetric(a in 0..COMPOSITES.len(), b in 0..COMPOSITES.len()) {
            let relations = relations();
            let (a, b) = (COMPOSITES[a], COMPOSITES[b]);
            prop_assert_eq!(
                relations.is_spreadable(a, b).unwrap(),
                relations.is_spreadable(b, a).unwrap(),
            );
        }

        #[test]
        fn wider_and_narrower_are_antisymmetric(a in 0..COMPOSITES.len(), b in 0..COMPOSITES.len()) {
            let relations = relations();
            let (a, b) = (COMPOSITES[a], COMPOSITES[b]);
            let forward = relations.relation_unwrapped(a, b).unwrap();
            let backward = relations.relation_unwrapped(b, a).unwrap();
            prop_assert_eq!(forward.inverse(), backward);
            prop_assert_eq!(forward == TypeRelation::Same, a == b);
        }
    }
}
