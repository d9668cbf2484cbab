use crate::selection::SelectionTree;
use crate::test_utils::mk_schema;
use crate::value::Value;
use crate::value::ValueMap;
use crate::variables::build_variables_resolvers;
use crate::variables::ExecutionAttribution;
use crate::variables::FieldSource;
use crate::variables::RequiredSelectionSetError;
use crate::variables::ResolveContext;
use crate::variables::VariableDeclaration;
use crate::variables::VariablesResolver;
use crate::variables::VariablesResolverBuilder;
use serde_json::json;
use std::sync::Arc;

const SDL: &str = r#"
    type Query {
      x(a: Int): Int
      y(a: Int): Obj
      objs: [Obj]
    }

    type Obj {
      z: Int
      inner: Obj
    }
"#;

fn tree(selections: &str) -> SelectionTree {
    SelectionTree::parse(&mk_schema(SDL), "Query", selections).unwrap()
}

fn vars(value: Value) -> ValueMap {
    value.as_object().cloned().unwrap_or_default()
}

fn build_object(
    selections: &str,
    declarations: &[VariableDeclaration],
) -> Result<Vec<Arc<dyn VariablesResolver>>, RequiredSelectionSetError> {
    build_variables_resolvers(Some(&tree(selections)), None, declarations, None)
}

mod construction {
    use super::*;

    #[test]
    fn duplicate_declarations() {
        let declarations = [
            VariableDeclaration::from_argument("a", "a"),
            VariableDeclaration::from_object_field("a", "x"),
        ];
        let err = VariablesResolverBuilder::new(&declarations).err().unwrap();
        assert_eq!(err, RequiredSelectionSetError::DuplicateDeclaration {
            variable_name: "a".to_string(),
        });
    }

    #[test]
    fn empty_paths() {
        for declaration in [
            VariableDeclaration::from_argument("a", ""),
            VariableDeclaration::from_object_field("a", "  "),
        ] {
            let err = build_object("x", &[declaration]).err().unwrap();
            assert_eq!(err, RequiredSelectionSetError::EmptyPath {
                variable_name: "a".to_string(),
            });
        }
    }

    #[test]
    fn missing_object_selections() {
        let err = build_variables_resolvers(
            None,
            None,
            &[VariableDeclaration::from_object_field("a", "x")],
            None,
        ).err().unwrap();
        assert_eq!(err, RequiredSelectionSetError::MissingObjectSelections {
            path: "x".to_string(),
            variable_name: "a".to_string(),
        });
    }

    #[test]
    fn missing_query_selections() {
        let err = build_object("x", &[VariableDeclaration::from_query_field("a", "x")])
            .err()
            .unwrap();
        assert_eq!(err, RequiredSelectionSetError::MissingQuerySelections {
            path: "x".to_string(),
            variable_name: "a".to_string(),
        });
    }

    #[test]
    fn paths_must_match_selections() {
        let err = build_object("x", &[VariableDeclaration::from_object_field("a", "y.z")])
            .err()
            .unwrap();
        assert!(
            matches!(
                &err,
                RequiredSelectionSetError::NoSelectionsForPath { path, .. } if path == "y.z",
            ),
            "{err:?}",
        );
    }

    #[test]
    fn undeclared_nested_variables() {
        let err = build_object(
            "y(a: $b) { z }",
            &[VariableDeclaration::from_object_field("a", "y.z")],
        ).err().unwrap();
        assert_eq!(err, RequiredSelectionSetError::UnknownVariable {
            variable_name: "b".to_string(),
        });
    }

    #[test]
    fn argument_resolvers_need_no_selections() {
        let resolvers = build_variables_resolvers(
            None,
            None,
            &[VariableDeclaration::from_argument("a", "input.a")],
            None,
        ).unwrap();
        assert_eq!(resolvers.len(), 1);
        assert!(resolvers[0].required_selection_set().is_none());
    }
}

mod cycles {
    use super::*;

    #[test]
    fn variable_read_from_a_field_that_takes_it() {
        let err = build_object(
            "x(a: $a)",
            &[VariableDeclaration::from_object_field("a", "x")],
        ).err().unwrap();

        assert!(
            matches!(
                &err,
                RequiredSelectionSetError::VariableCycle { variable_name, .. } if variable_name == "a",
            ),
            "{err:?}",
        );
        assert!(
            err.to_string().starts_with("Detected cycle for variable `a` in selection set:\n"),
            "{err}",
        );
    }

    #[test]
    fn indirect_cycle() {
        let err = build_object(
            "x(a: $b) y(a: $a) { z }",
            &[
                VariableDeclaration::from_object_field("a", "x"),
                VariableDeclaration::from_object_field("b", "y.z"),
            ],
        ).err().unwrap();

        assert!(
            matches!(
                &err,
                RequiredSelectionSetError::VariableCycle { variable_name, .. } if variable_name == "a",
            ),
            "{err:?}",
        );
    }

    #[test]
    fn shared_dependencies_are_not_cycles() {
        let resolvers = build_object(
            "x(a: $c) y(a: $c) { z }",
            &[
                VariableDeclaration::from_argument("c", "c"),
                VariableDeclaration::from_object_field("a", "x"),
                VariableDeclaration::from_object_field("b", "y.z"),
            ],
        ).unwrap();
        assert_eq!(resolvers.len(), 3);
    }
}

mod memoization {
    use super::*;

    #[test]
    fn nested_resolvers_are_shared_by_name() {
        let resolvers = build_object(
            "x(a: $c) y(a: $c) { z }",
            &[
                VariableDeclaration::from_argument("c", "c"),
                VariableDeclaration::from_object_field("a", "x"),
                VariableDeclaration::from_object_field("b", "y.z"),
            ],
        ).unwrap();

        let c = &resolvers[0];
        for from_field in &resolvers[1..] {
            let required = from_field.required_selection_set().unwrap();
            assert_eq!(required.resolvers().len(), 1);
            assert!(Arc::ptr_eq(&required.resolvers()[0], c));
        }
    }

    #[test]
    fn nested_resolvers_built_first_are_reused_at_the_top_level() {
        // `a` pulls `c` in before `c`'s own declaration is visited.
        let resolvers = build_object(
            "x(a: $c)",
            &[
                VariableDeclaration::from_object_field("a", "x"),
                VariableDeclaration::from_argument("c", "c"),
            ],
        ).unwrap();

        assert_eq!(resolvers.len(), 2);
        let a_required = resolvers[1].required_selection_set().unwrap();
        assert!(Arc::ptr_eq(&a_required.resolvers()[0], &resolvers[0]));
    }
}

mod from_field {
    use super::*;

    #[tokio::test]
    async fn reads_nested_object_data() {
        let resolvers = build_object(
            "y { inner { z } }",
            &[VariableDeclaration::from_object_field("v", "y.inner.z")],
        ).unwrap();

        let required = resolvers[0].required_selection_set().unwrap();
        assert_eq!(
            crate::selection::printer::print_compact_selection_set(required.selections().selections()),
            "{y{inner{z}}}",
        );

        let object_data = vars(json!({"y": {"inner": {"z": 7}}}));
        let ctx = ResolveContext::new(ValueMap::new()).with_object_data(Arc::new(object_data));
        assert_eq!(resolvers[0].resolve(&ctx).await.unwrap(), vars(json!({"v": 7})));
    }

    #[tokio::test]
    async fn lists_are_read_element_wise() {
        let resolvers = build_object(
            "objs { z }",
            &[VariableDeclaration::from_object_field("v", "objs.z")],
        ).unwrap();

        let object_data = vars(json!({"objs": [{"z": 1}, {"z": null}, null, {"z": 3}]}));
        let ctx = ResolveContext::new(ValueMap::new()).with_object_data(Arc::new(object_data));
        assert_eq!(
            resolvers[0].resolve(&ctx).await.unwrap(),
            vars(json!({"v": [1, null, null, 3]})),
        );
    }

    #[tokio::test]
    async fn query_fields_read_query_data() {
        let query_tree = tree("y { z }");
        let resolvers = build_variables_resolvers(
            None,
            Some(&query_tree),
            &[VariableDeclaration::from_query_field("v", "y.z")],
            None,
        ).unwrap();

        let from_field = resolvers[0].required_selection_set().unwrap();
        assert!(from_field.resolvers().is_empty());

        let ctx =
            ResolveContext::new(ValueMap::new())
                .with_object_data(Arc::new(vars(json!({"y": {"z": "object"}}))))
                .with_query_data(Arc::new(vars(json!({"y": {"z": "query"}}))));
        assert_eq!(resolvers[0].resolve(&ctx).await.unwrap(), vars(json!({"v": "query"})));
    }

    #[tokio::test]
    async fn scalars_cannot_be_traversed() {
        let resolvers = build_object(
            "y { z }",
            &[VariableDeclaration::from_object_field("v", "y.z")],
        ).unwrap();
        let ctx =
            ResolveContext::new(ValueMap::new())
                .with_object_data(Arc::new(vars(json!({"y": 5}))));
        assert!(resolvers[0].resolve(&ctx).await.is_err());
    }

    #[test]
    fn attribution_is_chained_into_nested_selection_sets() {
        let selections = tree("x(a: $c)");
        let declarations = [
            VariableDeclaration::from_argument("c", "c"),
            VariableDeclaration::from_object_field("a", "x"),
        ];
        let attribution = ExecutionAttribution::from_resolver("Query.field");
        let resolvers =
            VariablesResolverBuilder::new(&declarations).unwrap()
                .with_object_selections(&selections)
                .with_attribution(Some(&attribution))
                .build()
                .unwrap();

        let nested = resolvers[1].required_selection_set().unwrap();
        assert_eq!(
            nested.attribution().map(ExecutionAttribution::to_tag_string).as_deref(),
            Some("variables-resolver:resolver:Query.field"),
        );
    }

    #[test]
    fn source_is_recorded() {
        // Only checks construction; resolution is covered above.
        let selections = tree("y { z }");
        let resolver = crate::variables::FromFieldVariablesResolver::new(
            "v",
            vec!["y".to_string(), "z".to_string()],
            FieldSource::Query,
            crate::variables::RequiredSelectionSet::new(selections, vec![], false, None).unwrap(),
        );
        assert_eq!(resolver.source(), FieldSource::Query);
        assert_eq!(resolver.path(), ["y", "z"]);
    }
}
