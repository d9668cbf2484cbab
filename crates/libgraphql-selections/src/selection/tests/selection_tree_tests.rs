use crate::selection::printer;
use crate::selection::SelectionTree;
use crate::selection::SelectionTreeError;
use crate::test_utils::default_schema;

fn parse(type_name: &str, text: &str) -> Result<SelectionTree, SelectionTreeError> {
    SelectionTree::parse(&default_schema(), type_name, text)
}

fn compact(tree: &SelectionTree) -> String {
    printer::print_compact_selection_set(tree.selections())
}

mod parse {
    use super::*;

    #[test]
    fn bare_field_set() {
        let tree = parse("Foo", "id foo { int }").unwrap();
        assert_eq!(tree.type_name(), "Foo");
        assert_eq!(compact(&tree), "{id foo{int}}");
        assert!(tree.fragments().is_empty());
    }

    #[test]
    fn field_set_starting_with_a_fragment_prefixed_name() {
        // `fragments` is a field name, not the `fragment` keyword.
        let schema = crate::test_utils::mk_schema("type Query { fragments: Int }");
        let tree = SelectionTree::parse(&schema, "Query", "fragments").unwrap();
        assert_eq!(compact(&tree), "{fragments}");
    }

    #[test]
    fn sole_fragment_is_the_entry() {
        let tree = parse("Foo", "fragment Anything on Foo { id }").unwrap();
        assert_eq!(compact(&tree), "{id}");
    }

    #[test]
    fn main_fragment_is_the_entry() {
        let tree = parse(
            "Foo",
            r#"
                fragment Other on Foo { int }
                fragment Main on Foo { id ...Other }
            "#,
        ).unwrap();
        assert_eq!(compact(&tree), "{id ...Other}");
        assert_eq!(tree.fragments().keys().collect::<Vec<_>>(), vec!["Other"]);
    }

    #[test]
    fn unreachable_fragments_are_dropped() {
        let tree = parse(
            "Foo",
            r#"
                fragment Used on Foo { int }
                fragment Unused on Foo { bar }
                fragment Main on Foo { ...Used }
            "#,
        ).unwrap();
        assert_eq!(tree.fragments().keys().collect::<Vec<_>>(), vec!["Used"]);
    }

    #[test]
    fn fragments_are_kept_in_first_spread_order() {
        let tree = parse(
            "Foo",
            r#"
                fragment C on Foo { int }
                fragment B on Foo { ...C }
                fragment A on Foo { id }
                fragment Main on Foo { ...A ...B }
            "#,
        ).unwrap();
        assert_eq!(tree.fragments().keys().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    }

    #[test]
    fn empty_text() {
        assert_eq!(parse("Foo", "  \n ").unwrap_err(), SelectionTreeError::EmptySelections {
            type_name: "Foo".to_string(),
        });
    }

    #[test]
    fn syntax_error() {
        let err = parse("Foo", "id(").unwrap_err();
        assert!(matches!(
            err,
            SelectionTreeError::ParseError { selections, .. } if selections == "id(",
        ));
    }

    #[test]
    fn non_composite_root_type() {
        assert!(matches!(
            parse("Int", "id").unwrap_err(),
            SelectionTreeError::UnknownType { .. },
        ));
        assert!(matches!(
            parse("Nope", "id").unwrap_err(),
            SelectionTreeError::UnknownType { .. },
        ));
    }

    #[test]
    fn operation_definitions_are_rejected() {
        let err = parse("Query", "fragment Main on Query { node(id: 1) { id } }\nquery Q { __typename }")
            .unwrap_err();
        assert_eq!(err, SelectionTreeError::NonFragmentDefinition {
            definition: "query Q{__typename}".to_string(),
        });
    }

    #[test]
    fn duplicate_fragments_are_rejected() {
        let err = parse(
            "Foo",
            r#"
                fragment A on Foo { id }
                fragment A on Foo { int }
                fragment Main on Foo { ...A }
            "#,
        ).unwrap_err();
        assert_eq!(err, SelectionTreeError::DuplicateFragmentDefinition {
            fragment_names: vec!["A".to_string()],
        });
    }

    #[test]
    fn missing_entry_fragment() {
        let err = parse(
            "Foo",
            r#"
                fragment A on Foo { id }
                fragment B on Foo { int }
            "#,
        ).unwrap_err();
        assert_eq!(err, SelectionTreeError::MissingEntryFragment);
    }

    #[test]
    fn entry_type_condition_mismatch() {
        let err = parse("Foo", "fragment Main on Node { id }").unwrap_err();
        assert_eq!(err, SelectionTreeError::EntryTypeConditionMismatch {
            fragment_name: "Main".to_string(),
            type_condition: "Node".to_string(),
            type_name: "Foo".to_string(),
        });
    }

    #[test]
    fn self_spreading_fragment() {
        let err = parse(
            "Foo",
            r#"
                fragment A on Foo { foo { ...A } }
                fragment Main on Foo { ...A }
            "#,
        ).unwrap_err();
        assert_eq!(err, SelectionTreeError::FragmentCycleDetected {
            cycle_path: vec!["A".to_string(), "A".to_string()],
        });
    }

    #[test]
    fn cycle_error_message_shows_the_path() {
        let err = parse(
            "Foo",
            r#"
                fragment A on Foo { ...B }
                fragment B on Foo { ...A }
                fragment Main on Foo { ...A }
            "#,
        ).unwrap_err();
        assert!(err.to_string().contains("A → B → A"), "{err}");
    }

    #[test]
    fn diamond_spreads_are_not_cycles() {
        let tree = parse(
            "Foo",
            r#"
                fragment Leaf on Foo { id }
                fragment L on Foo { ...Leaf }
                fragment R on Foo { ...Leaf }
                fragment Main on Foo { ...L ...R }
            "#,
        ).unwrap();
        assert_eq!(tree.fragments().len(), 3);
    }

    #[test]
    fn undefined_fragment_in_a_fragment() {
        let err = parse(
            "Foo",
            r#"
                fragment A on Foo { ...Nope }
                fragment Main on Foo { ...A }
            "#,
        ).unwrap_err();
        assert_eq!(err, SelectionTreeError::UndefinedFragmentReference {
            fragment_name: "Nope".to_string(),
            referencing_fragment: Some("A".to_string()),
        });
    }

    #[test]
    fn undefined_fragment_at_the_root() {
        let err = parse("Foo", "...Nope").unwrap_err();
        assert_eq!(err, SelectionTreeError::UndefinedFragmentReference {
            fragment_name: "Nope".to_string(),
            referencing_fragment: None,
        });
    }
}

mod filter_to_path {
    use super::*;

    fn filtered(tree: &SelectionTree, path: &[&str]) -> Option<String> {
        tree.filter_to_path(path).map(|tree| compact(&tree))
    }

    #[test]
    fn empty_path_is_identity() {
        let tree = parse("Foo", "id foo { int }").unwrap();
        assert_eq!(tree.filter_to_path(&[]), Some(tree));
    }

    #[test]
    fn keeps_only_the_matching_branch() {
        let tree = parse("Foo", "id foo { int bar } struct { int }").unwrap();
        assert_eq!(filtered(&tree, &["foo"]).as_deref(), Some("{foo{int bar}}"));
        assert_eq!(filtered(&tree, &["foo", "bar"]).as_deref(), Some("{foo{bar}}"));
        assert_eq!(filtered(&tree, &["id"]).as_deref(), Some("{id}"));
    }

    #[test]
    fn paths_match_result_keys() {
        let tree = parse("Foo", "a:foo { int } b:foo { id }").unwrap();
        assert_eq!(filtered(&tree, &["b"]).as_deref(), Some("{b:foo{id}}"));
        assert_eq!(filtered(&tree, &["foo"]), None);
    }

    #[test]
    fn leaves_cannot_extend_a_path() {
        let tree = parse("Foo", "id foo { int }").unwrap();
        assert_eq!(filtered(&tree, &["id", "more"]), None);
        assert_eq!(filtered(&tree, &["missing"]), None);
    }

    #[test]
    fn inline_fragments_are_traversed() {
        let tree = parse("Node", "id ... on Foo { foo { int } bar }").unwrap();
        assert_eq!(filtered(&tree, &["foo"]).as_deref(), Some("{...on Foo{foo{int}}}"));
    }

    #[test]
    fn spreads_are_inlined_with_their_directives() {
        let tree = parse(
            "Node",
            r#"
                fragment F on Foo { foo { int } bar }
                fragment Main on Node { id ...F @include(if: $withFoo) }
            "#,
        ).unwrap();
        let filtered_tree = tree.filter_to_path(&["foo"]).unwrap();
        assert!(filtered_tree.fragments().is_empty());
        assert_eq!(compact(&filtered_tree), "{...on Foo @include(if:$withFoo){foo{int}}}");
    }
}

mod rendering {
    use super::*;

    #[test]
    fn to_document_leads_with_the_entry_fragment() {
        let tree = parse(
            "Foo",
            r#"
                fragment Other on Foo { int }
                fragment Main on Foo { id ...Other }
            "#,
        ).unwrap();
        assert_eq!(tree.to_string(), concat!(
            "fragment Main on Foo {\n",
            "  id\n",
            "  ...Other\n",
            "}\n",
            "\n",
            "fragment Other on Foo {\n",
            "  int\n",
            "}",
        ));
    }

    #[test]
    fn to_document_round_trips() {
        let schema = default_schema();
        let tree = parse(
            "Foo",
            r#"
                fragment A on Foo { int ...B }
                fragment B on Foo { bar }
                fragment Main on Foo { id ...A }
            "#,
        ).unwrap();
        let reparsed = SelectionTree::from_document(&schema, "Foo", tree.to_document()).unwrap();
        assert_eq!(reparsed, tree);
    }

    #[test]
    fn sole_fragment_entry_is_renamed_main() {
        let tree = parse("Foo", "fragment Anything on Foo { id }").unwrap();
        assert_eq!(tree.to_string(), "fragment Main on Foo {\n  id\n}");
    }

    #[test]
    fn equality_ignores_whitespace_and_positions() {
        let a = parse("Foo", "id foo { int }").unwrap();
        let b = parse("Foo", "id\n\n  foo {\n    int\n  }").unwrap();
        let c = parse("Foo", "id foo { bar }").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, SelectionTree::empty("Foo"));
    }

    #[test]
    fn empty_tree() {
        let tree = SelectionTree::empty("Foo");
        assert!(tree.is_empty());
        assert!(tree.fragments().is_empty());
        assert!(tree.variable_references().is_empty());
    }
}

#[test]
fn variable_references_cover_arguments_directives_and_fragments() {
    let tree = parse(
        "Query",
        r#"
            fragment N on Node @include(if: $fragmentIf) { id @skip(if: $skipId) }
            fragment Main on Query {
              node(id: $id) { ...N }
              other: node(id: [{ nested: $nested }, $id]) { id }
            }
        "#,
    ).unwrap();

    let names: Vec<_> = tree.variable_references().into_iter().collect();
    assert_eq!(names, vec!["id", "nested", "fragmentIf", "skipId"]);
}
