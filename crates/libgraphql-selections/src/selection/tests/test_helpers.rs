use crate::selection::SelectionTree;
use crate::selection::SelectionView;
use crate::test_utils::mk_schema;
use crate::test_utils::DEFAULT_SDL;
use crate::value::ValueMap;
use std::collections::BTreeSet;

/// Bind `selections` on `type_name` against the default test schema.
pub(super) fn mk(type_name: &str, selections: &str) -> SelectionView {
    mk_with(type_name, selections, DEFAULT_SDL, ValueMap::new())
}

pub(super) fn mk_sdl(type_name: &str, selections: &str, sdl: &str) -> SelectionView {
    mk_with(type_name, selections, sdl, ValueMap::new())
}

pub(super) fn mk_vars(
    type_name: &str,
    selections: &str,
    variables: serde_json::Value,
) -> SelectionView {
    mk_with(type_name, selections, DEFAULT_SDL, vars(variables))
}

pub(super) fn mk_with(
    type_name: &str,
    selections: &str,
    sdl: &str,
    variables: ValueMap,
) -> SelectionView {
    let schema = mk_schema(sdl);
    let tree = SelectionTree::parse(&schema, type_name, selections).unwrap();
    SelectionView::bind(schema, &tree, variables).unwrap()
}

pub(super) fn vars(value: serde_json::Value) -> ValueMap {
    value.as_object().cloned().unwrap_or_default()
}

/// The field names of `view.type_fields()`, as a sorted set.
pub(super) fn type_field_names(view: &SelectionView) -> BTreeSet<String> {
    view.type_fields().keys().cloned().collect()
}

pub(super) fn names(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}
