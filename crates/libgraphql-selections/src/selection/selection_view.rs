use crate::ast;
use crate::relations::TypeRelation;
use crate::schema::Schema;
use crate::selection::arguments;
use crate::selection::arguments::ArgumentCoercionError;
use crate::selection::directives;
use crate::selection::field_selection::result_key;
use crate::selection::printer;
use crate::selection::selection_tree::format_cycle_path;
use crate::selection::selection_tree::ENTRY_FRAGMENT_NAME;
use crate::selection::FieldContext;
use crate::selection::FieldSelection;
use crate::selection::Fragment;
use crate::selection::SelectedField;
use crate::selection::SelectionTree;
use crate::selection::SelectionTreeError;
use crate::types::GraphQLType;
use crate::value::ValueMap;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, SelectionViewError>;

const NODE_INTERFACE_NAME: &str = "Node";

/// An immutable, queryable projection of a [`SelectionTree`] bound to a
/// type, a variable map and a [`Schema`].
///
/// Binding inlines fragment spreads and evaluates `@skip`/`@include`,
/// leaving a flat, ordered list of [`FieldSelection`]s (the "active"
/// selections). Every projection or traversal returns a new view; nothing
/// is mutated in place, so one view may be shared freely across threads.
///
/// Type projections are always computed from the selections the view was
/// originally bound with, so narrowing and re-widening never accumulates
/// state from intermediate visits.
#[derive(Clone, Debug)]
pub struct SelectionView {
    ctx: Arc<SelectionContext>,
    projected: Arc<ActiveSelections>,
    root: Arc<ActiveSelections>,
}
impl SelectionView {
    /// Bind `tree` to `variables`, producing a view on the tree's root type.
    pub fn bind(
        schema: Arc<Schema>,
        tree: &SelectionTree,
        variables: ValueMap,
    ) -> Result<Self> {
        let ctx = Arc::new(SelectionContext {
            fragments: Arc::new(tree.fragments().clone()),
            schema,
            variables,
        });
        ctx.composite_type(tree.type_name())?;

        let mut collector = SelectionCollector::new(&ctx, tree.type_name());
        collector.collect(tree.type_name(), tree.selections())?;
        let root = collector.finish();
        Ok(Self::from_root(ctx, root))
    }

    /// A view on `type_name` that selects nothing.
    pub fn empty(schema: Arc<Schema>, type_name: &str) -> Result<Self> {
        let ctx = Arc::new(SelectionContext {
            fragments: Arc::new(IndexMap::new()),
            schema,
            variables: ValueMap::new(),
        });
        ctx.composite_type(type_name)?;
        Ok(Self::from_root(ctx, ActiveSelections::new(type_name)))
    }

    /// Derive a view from the context of an executing field. Returns
    /// `Ok(None)` when the field's return type is not composite.
    pub fn from_field_context(
        schema: Arc<Schema>,
        field_context: &FieldContext,
    ) -> Result<Option<Self>> {
        let type_name = field_context.return_type().innermost_type_name();
        let type_ = schema.get_type(type_name).ok_or_else(|| {
            SelectionViewError::UnknownType {
                type_name: type_name.to_string(),
            }
        })?;
        if !type_.is_composite() {
            return Ok(None);
        }

        let items =
            field_context.fields().iter()
                .flat_map(|field| field.selection_set.items.iter().cloned())
                .collect();
        let selections = ast::query::SelectionSet {
            span: (ast::Pos::default(), ast::Pos::default()),
            items,
        };
        let tree = SelectionTree::from_parts(
            type_name,
            selections,
            field_context.fragments().clone(),
        )?;

        Self::bind(schema, &tree, field_context.variables().clone()).map(Some)
    }

    fn from_root(ctx: Arc<SelectionContext>, root: ActiveSelections) -> Self {
        let root = Arc::new(root);
        Self {
            ctx,
            projected: root.clone(),
            root,
        }
    }

    /// Return a new view with `variables` bound in addition to the ones
    /// already bound. Rebinding an already-bound name is an error.
    pub fn add_variables(&self, variables: ValueMap) -> Result<Self> {
        if let Some(name) = variables.keys().find(|name| self.ctx.variables.contains_key(*name)) {
            return Err(SelectionViewError::VariableCollision {
                variable_name: name.clone(),
            });
        }

        let mut merged = self.ctx.variables.clone();
        merged.extend(variables);
        Ok(Self {
            ctx: Arc::new(SelectionContext {
                fragments: self.ctx.fragments.clone(),
                schema: self.ctx.schema.clone(),
                variables: merged,
            }),
            projected: self.projected.clone(),
            root: self.root.clone(),
        })
    }

    /// The coerced arguments of the selection named `selection_name` as seen
    /// from `type_name`. `Ok(None)` when no such selection is active.
    pub fn arguments_of_selection(
        &self,
        type_name: &str,
        selection_name: &str,
    ) -> Result<Option<ValueMap>> {
        let Some(selection) = self.find_selection(type_name, |field| {
            result_key(field) == selection_name
        })? else {
            return Ok(None);
        };

        let field_def =
            self.ctx.schema.field_definition(
                selection.type_condition(),
                selection.field_name(),
            ).ok_or_else(|| SelectionViewError::UndefinedField {
                field_name: selection.field_name().to_string(),
                type_name: selection.type_condition().to_string(),
            })?;

        arguments::coerce_arguments(
            &self.ctx.schema,
            field_def,
            &selection.field.arguments,
            &self.ctx.variables,
        ).map(Some).map_err(|source| SelectionViewError::ArgumentCoercion {
            field_name: selection.field_name().to_string(),
            source,
            type_name: selection.type_condition().to_string(),
        })
    }

    /// Whether a field named `field_name` is selected when the value has type
    /// `type_name`.
    pub fn contains_field(&self, type_name: &str, field_name: &str) -> Result<bool> {
        self.find_selection(type_name, |field| field.name == field_name)
            .map(|found| found.is_some())
    }

    /// Whether a selection whose result key is `selection_name` is selected
    /// when the value has type `type_name`.
    pub fn contains_selection(
        &self,
        type_name: &str,
        selection_name: &str,
    ) -> Result<bool> {
        self.find_selection(type_name, |field| result_key(field) == selection_name)
            .map(|found| found.is_some())
    }

    /// The active [`FieldSelection`]s of this view, in selection order.
    pub fn field_selections(&self) -> &[FieldSelection] {
        self.projected.selections.as_slice()
    }

    /// `true` iff no field is selected under any type condition.
    ///
    /// A `false` answer does not mean that any data will be produced: the
    /// selected fields may themselves have empty sub-selections. See
    /// [`Self::is_transitively_empty`].
    pub fn is_empty(&self) -> bool {
        self.projected.selections.is_empty()
    }

    /// `true` iff the view selects no reachable leaf data: it is empty, or
    /// every composite field it selects has a transitively empty
    /// sub-selection.
    ///
    /// Selections under type conditions that can never apply to this view's
    /// type are ignored.
    pub fn is_transitively_empty(&self) -> bool {
        let mut visited = HashSet::new();
        self.projected.selections.iter()
            .filter(|sel| self.ctx.spreadable(self.type_name(), sel.type_condition()))
            .filter(|sel| visited.insert((sel.type_condition(), sel.field_name())))
            .all(|sel| {
                let is_composite =
                    self.ctx.field_type(sel.type_condition(), sel.field_name())
                        .is_some_and(|type_| type_.is_composite());
                is_composite
                    && self.selection_set_for_field(sel.type_condition(), sel.field_name())
                        .map(|sub_view| sub_view.is_transitively_empty())
                        .unwrap_or(false)
            })
    }

    /// Render the active selections as `fragment Main on <type> { ... }`
    /// along with the bound variables.
    pub fn to_fragment(&self) -> Fragment {
        let fragment = ast::query::FragmentDefinition {
            position: ast::Pos::default(),
            name: ENTRY_FRAGMENT_NAME.to_string(),
            type_condition: ast::query::TypeCondition::On(self.type_name().to_string()),
            directives: vec![],
            selection_set: self.to_selection_set(),
        };

        Fragment {
            document: ast::query::Document {
                definitions: vec![ast::query::Definition::Fragment(fragment)],
            },
            variables: self.ctx.variables.clone(),
        }
    }

    /// Re-root the active selections under `<node_field_name>(<arguments>)`
    /// on the schema's query type, so that a `Node` can be refetched by id.
    pub fn to_nodelike_selection_set(
        &self,
        node_field_name: &str,
        arguments: Vec<(String, ast::Value)>,
    ) -> Result<Self> {
        let implements_node = match self.ctx.composite_type(self.type_name())? {
            GraphQLType::Interface(iface) =>
                iface.interface_names().contains(&NODE_INTERFACE_NAME),
            GraphQLType::Object(obj) =>
                obj.interface_names().contains(&NODE_INTERFACE_NAME),
            _ => false,
        };
        if self.type_name() != NODE_INTERFACE_NAME && !implements_node {
            return Err(SelectionViewError::NotNodeType {
                type_name: self.type_name().to_string(),
            });
        }

        let query_type = self.ctx.schema.query_type_name();
        let selection_set = self.to_selection_set();
        let mut root = ActiveSelections::new(query_type);
        root.requested_types.insert(query_type.to_string());
        if !selection_set.items.is_empty() {
            let node_field = ast::query::Field {
                position: ast::Pos::default(),
                alias: None,
                name: node_field_name.to_string(),
                arguments,
                directives: vec![],
                selection_set,
            };
            root.selections.push(FieldSelection::new(node_field, query_type));
        }

        Ok(Self::from_root(self.ctx.clone(), root))
    }

    /// The compact, re-parseable rendering of [`Self::to_selection_set`]:
    /// one `...on T{...}` group per line.
    pub fn print_as_field_set(&self) -> String {
        self.to_selection_set().items.iter()
            .map(printer::print_compact_selection)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether this view "requests" `type_name`: some selection (possibly
    /// an empty one) was made under a type condition that is the same as or
    /// narrower than `type_name`.
    pub fn requests_type(&self, type_name: &str) -> Result<bool> {
        self.ctx.composite_type(type_name)?;
        Ok(self.projected.requested_types.iter().any(|requested| {
            self.ctx.relation(requested, type_name).is_same_or_narrower()
        }))
    }

    /// Resolve the selection whose result key is `selection_name` when the
    /// value has type `type_name`.
    pub fn resolve_selection(
        &self,
        type_name: &str,
        selection_name: &str,
    ) -> Result<SelectedField> {
        self.find_selection(type_name, |field| result_key(field) == selection_name)?
            .map(FieldSelection::to_selected_field)
            .ok_or_else(|| SelectionViewError::SelectionNotFound {
                selection_name: selection_name.to_string(),
                type_name: type_name.to_string(),
            })
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.ctx.schema
    }

    /// The sub-selections of `type_name.field_name`, merged across every
    /// selection of that field whose type condition is the same as or wider
    /// than `type_name`.
    ///
    /// Fails with [`SelectionViewError::SelectionNotFound`] if the field is
    /// composite but no active selection reads it on `type_name`.
    pub fn selection_set_for_field(
        &self,
        type_name: &str,
        field_name: &str,
    ) -> Result<Self> {
        self.ctx.composite_type(type_name)?;
        let sub_type = self.ctx.composite_field_type(type_name, field_name)?;
        if self.find_selection(type_name, |field| field.name == field_name)?.is_none() {
            return Err(SelectionViewError::SelectionNotFound {
                selection_name: field_name.to_string(),
                type_name: type_name.to_string(),
            });
        }
        self.build_subselections(type_name, sub_type, |field| field.name == field_name)
    }

    /// Like [`Self::selection_set_for_field`] but addressed by result key.
    /// Fails if no such selection is active.
    pub fn selection_set_for_selection(
        &self,
        type_name: &str,
        selection_name: &str,
    ) -> Result<Self> {
        self.ctx.composite_type(type_name)?;
        let selected = self.resolve_selection(type_name, selection_name)?;
        let sub_type = self.ctx.composite_field_type(type_name, selected.field_name())?;
        self.build_subselections(type_name, sub_type, |field| {
            result_key(field) == selection_name
        })
    }

    /// Project this view onto `type_name`, which must be spreadable within
    /// the current type.
    ///
    /// Narrowing keeps the parent selections plus everything under a type
    /// condition that may apply to `type_name`. Siblings behind unrelated
    /// type conditions are dropped.
    pub fn selection_set_for_type(&self, type_name: &str) -> Result<Self> {
        self.ctx.composite_type(type_name)?;
        if type_name == self.type_name() {
            return Ok(self.clone());
        }
        self.require_spreadable(type_name)?;

        if type_name == self.root.type_name {
            return Ok(Self {
                ctx: self.ctx.clone(),
                projected: self.root.clone(),
                root: self.root.clone(),
            });
        }

        log::trace!("projecting `{}` selections onto `{type_name}`", self.type_name());
        let projected = ActiveSelections {
            requested_types:
                self.root.requested_types.iter()
                    .filter(|requested| self.ctx.spreadable(requested, type_name))
                    .cloned()
                    .collect(),
            selections:
                self.root.selections.iter()
                    .filter(|sel| self.ctx.spreadable(sel.type_condition(), type_name))
                    .cloned()
                    .collect(),
            type_name: type_name.to_string(),
        };

        Ok(Self {
            ctx: self.ctx.clone(),
            projected: Arc::new(projected),
            root: self.root.clone(),
        })
    }

    /// The coordinates of every active selection, in selection order.
    pub fn selections(&self) -> Vec<SelectedField> {
        self.projected.selections.iter()
            .map(FieldSelection::to_selected_field)
            .collect()
    }

    /// The active selections rendered back into a selection set: one
    /// `... on T { ... }` inline fragment per type condition (in first-seen
    /// order), with nested spreads inlined and empty sub-selections culled.
    /// Variable references are kept verbatim.
    pub fn to_selection_set(&self) -> ast::query::SelectionSet {
        let mut groups: IndexMap<&str, Vec<ast::query::Selection>> = IndexMap::new();
        for sel in &self.projected.selections {
            groups.entry(sel.type_condition())
                .or_default()
                .push(ast::query::Selection::Field(sel.field().clone()));
        }

        let items =
            groups.into_iter()
                .filter_map(|(type_condition, fields)| {
                    let group = ast::query::InlineFragment {
                        position: ast::Pos::default(),
                        type_condition: Some(ast::query::TypeCondition::On(
                            type_condition.to_string(),
                        )),
                        directives: vec![],
                        selection_set: ast::query::SelectionSet {
                            span: (ast::Pos::default(), ast::Pos::default()),
                            items: fields,
                        },
                    };
                    self.inline_selection(&ast::query::Selection::InlineFragment(group))
                })
                .collect();

        ast::query::SelectionSet {
            span: (ast::Pos::default(), ast::Pos::default()),
            items,
        }
    }

    /// Active traversable selections: those whose type condition may apply
    /// to this view's type and whose field has a composite type (possibly
    /// behind list/non-null wrappers).
    pub fn traversable_selections(&self) -> Vec<SelectedField> {
        self.projected.selections.iter()
            .filter(|sel| self.ctx.spreadable(sel.type_condition(), self.type_name()))
            .filter(|sel| {
                self.ctx.field_type(sel.type_condition(), sel.field_name())
                    .is_some_and(|type_| type_.is_composite())
            })
            .map(FieldSelection::to_selected_field)
            .collect()
    }

    /// The selections that apply to every value of this view's type (those
    /// under a same-or-wider type condition), grouped by field name.
    pub fn type_fields(&self) -> IndexMap<String, Vec<SelectedField>> {
        let mut type_fields: IndexMap<String, Vec<SelectedField>> = IndexMap::new();
        for sel in &self.projected.selections {
            if self.ctx.relation(sel.type_condition(), self.type_name()).is_same_or_wider() {
                type_fields.entry(sel.field_name().to_string())
                    .or_default()
                    .push(sel.to_selected_field());
            }
        }
        type_fields
    }

    pub fn type_name(&self) -> &str {
        self.projected.type_name.as_str()
    }

    pub fn variables(&self) -> &ValueMap {
        &self.ctx.variables
    }

    fn build_subselections(
        &self,
        selection_type: &str,
        sub_type: &str,
        matches: impl Fn(&ast::query::Field) -> bool,
    ) -> Result<Self> {
        self.require_spreadable(selection_type)?;

        let mut collector = SelectionCollector::new(&self.ctx, sub_type);
        for sel in &self.projected.selections {
            let applies =
                matches(sel.field())
                    && self.ctx.relation(sel.type_condition(), selection_type).is_same_or_wider();
            if applies && !sel.field.selection_set.items.is_empty() {
                collector.collect(sub_type, &sel.field.selection_set)?;
            }
        }
        let root = collector.finish();

        Ok(Self::from_root(self.ctx.clone(), root))
    }

    fn find_selection(
        &self,
        type_name: &str,
        matches: impl Fn(&ast::query::Field) -> bool,
    ) -> Result<Option<&FieldSelection>> {
        self.ctx.composite_type(type_name)?;
        self.require_spreadable(type_name)?;
        Ok(self.projected.selections.iter().find(|sel| {
            matches(sel.field())
                && self.ctx.relation(sel.type_condition(), type_name).is_same_or_wider()
        }))
    }

    fn inline_selection(
        &self,
        selection: &ast::query::Selection,
    ) -> Option<ast::query::Selection> {
        match selection {
            ast::query::Selection::Field(field) if field.selection_set.items.is_empty() =>
                Some(selection.clone()),

            ast::query::Selection::Field(field) => {
                let selection_set = self.inline_selection_set(&field.selection_set)?;
                Some(ast::query::Selection::Field(ast::query::Field {
                    position: field.position,
                    alias: field.alias.clone(),
                    name: field.name.clone(),
                    arguments: field.arguments.clone(),
                    directives: field.directives.clone(),
                    selection_set,
                }))
            },

            ast::query::Selection::InlineFragment(inline) => {
                let selection_set = self.inline_selection_set(&inline.selection_set)?;
                Some(ast::query::Selection::InlineFragment(ast::query::InlineFragment {
                    position: inline.position,
                    type_condition: inline.type_condition.clone(),
                    directives: inline.directives.clone(),
                    selection_set,
                }))
            },

            ast::query::Selection::FragmentSpread(spread) => {
                let fragment = self.ctx.fragments.get(&spread.fragment_name)?;
                let selection_set = self.inline_selection_set(&fragment.selection_set)?;
                Some(ast::query::Selection::InlineFragment(ast::query::InlineFragment {
                    position: spread.position,
                    type_condition: Some(fragment.type_condition.clone()),
                    directives: spread.directives.clone(),
                    selection_set,
                }))
            },
        }
    }

    fn inline_selection_set(
        &self,
        selection_set: &ast::query::SelectionSet,
    ) -> Option<ast::query::SelectionSet> {
        let items: Vec<_> =
            selection_set.items.iter()
                .filter(|sel| directives::is_included(selection_directives(sel), &self.ctx.variables))
                .filter_map(|sel| self.inline_selection(sel))
                .collect();
        if items.is_empty() {
            return None;
        }
        Some(ast::query::SelectionSet {
            span: selection_set.span,
            items,
        })
    }

    fn require_spreadable(&self, type_name: &str) -> Result<()> {
        if self.ctx.spreadable(self.type_name(), type_name) {
            Ok(())
        } else {
            Err(SelectionViewError::UnrelatedType {
                type_name: type_name.to_string(),
                view_type: self.type_name().to_string(),
            })
        }
    }
}
impl PartialEq for SelectionView {
    fn eq(&self, other: &Self) -> bool {
        let same_schema =
            Arc::ptr_eq(&self.ctx.schema, &other.ctx.schema)
                || self.ctx.schema == other.ctx.schema;
        same_schema
            && self.projected.type_name == other.projected.type_name
            && self.projected.selections == other.projected.selections
            && self.projected.requested_types == other.projected.requested_types
            && self.ctx.variables == other.ctx.variables
    }
}
impl std::fmt::Display for SelectionView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&printer::print_pretty_selection_set(&self.to_selection_set()))
    }
}

/// State shared by a view and every view derived from it.
#[derive(Debug)]
struct SelectionContext {
    fragments: Arc<IndexMap<String, ast::query::FragmentDefinition>>,
    schema: Arc<Schema>,
    variables: ValueMap,
}
impl SelectionContext {
    fn composite_field_type(&self, type_name: &str, field_name: &str) -> Result<&str> {
        let field_def = self.schema.field_definition(type_name, field_name).ok_or_else(|| {
            SelectionViewError::UndefinedField {
                field_name: field_name.to_string(),
                type_name: type_name.to_string(),
            }
        })?;

        let field_type_name = field_def.type_annotation().innermost_type_name();
        let is_composite =
            self.schema.get_type(field_type_name)
                .is_some_and(|type_| type_.is_composite());
        if !is_composite {
            return Err(SelectionViewError::NotCompositeField {
                field_name: field_name.to_string(),
                type_name: type_name.to_string(),
            });
        }
        Ok(field_type_name)
    }

    fn composite_type(&self, type_name: &str) -> Result<&GraphQLType> {
        let type_ = self.schema.get_type(type_name).ok_or_else(|| {
            SelectionViewError::UnknownType {
                type_name: type_name.to_string(),
            }
        })?;
        if !type_.is_composite() {
            return Err(SelectionViewError::NotCompositeType {
                type_name: type_name.to_string(),
            });
        }
        Ok(type_)
    }

    /// The innermost type of `type_name.field_name`, if both are defined.
    fn field_type(&self, type_name: &str, field_name: &str) -> Option<&GraphQLType> {
        let field_def = self.schema.field_definition(type_name, field_name)?;
        self.schema.get_type(field_def.type_annotation().innermost_type_name())
    }

    fn relation(&self, a: &str, b: &str) -> TypeRelation {
        self.schema.type_relations()
            .relation_unwrapped(a, b)
            .unwrap_or(TypeRelation::None)
    }

    /// Only called with type names that were validated as composite, which
    /// the relation tables always know.
    fn spreadable(&self, parent_type: &str, fragment_type: &str) -> bool {
        self.schema.type_relations()
            .is_spreadable(parent_type, fragment_type)
            .unwrap_or(false)
    }
}

#[derive(Debug)]
struct ActiveSelections {
    requested_types: IndexSet<String>,
    selections: Vec<FieldSelection>,
    type_name: String,
}
impl ActiveSelections {
    fn new(type_name: &str) -> Self {
        Self {
            requested_types: IndexSet::new(),
            selections: vec![],
            type_name: type_name.to_string(),
        }
    }
}

/// Flattens a selection set into [`FieldSelection`]s: spreads are inlined
/// and conditional directives are applied as selections are visited.
struct SelectionCollector<'a> {
    active: ActiveSelections,
    ctx: &'a SelectionContext,
    spread_path: Vec<String>,
}
impl<'a> SelectionCollector<'a> {
    fn new(ctx: &'a SelectionContext, type_name: &str) -> Self {
        Self {
            active: ActiveSelections::new(type_name),
            ctx,
            spread_path: vec![],
        }
    }

    fn collect(
        &mut self,
        type_name: &str,
        selection_set: &ast::query::SelectionSet,
    ) -> Result<()> {
        let ctx = self.ctx;
        for selection in &selection_set.items {
            if !directives::is_included(selection_directives(selection), &ctx.variables) {
                continue;
            }

            match selection {
                ast::query::Selection::Field(field) => {
                    if ctx.schema.field_definition(type_name, &field.name).is_none() {
                        return Err(SelectionViewError::UndefinedField {
                            field_name: field.name.clone(),
                            type_name: type_name.to_string(),
                        });
                    }
                    self.active.selections.push(
                        FieldSelection::new(field.clone(), type_name),
                    );
                },

                ast::query::Selection::InlineFragment(inline) => {
                    let fragment_type = match &inline.type_condition {
                        Some(ast::query::TypeCondition::On(type_condition)) => {
                            ctx.composite_type(type_condition)?;
                            type_condition.as_str()
                        },
                        None => type_name,
                    };
                    self.collect(fragment_type, &inline.selection_set)?;
                },

                ast::query::Selection::FragmentSpread(spread) => {
                    let fragment_name = &spread.fragment_name;
                    if self.spread_path.contains(fragment_name) {
                        let mut cycle_path = self.spread_path.clone();
                        cycle_path.push(fragment_name.clone());
                        return Err(SelectionViewError::FragmentCycle { cycle_path });
                    }

                    let fragment = ctx.fragments.get(fragment_name).ok_or_else(|| {
                        SelectionViewError::UndefinedFragment {
                            fragment_name: fragment_name.clone(),
                        }
                    })?;
                    let ast::query::TypeCondition::On(fragment_type) = &fragment.type_condition;
                    ctx.composite_type(fragment_type)?;

                    self.spread_path.push(fragment_name.clone());
                    self.collect(fragment_type, &fragment.selection_set)?;
                    self.spread_path.pop();
                },
            }
        }

        self.active.requested_types.insert(type_name.to_string());
        Ok(())
    }

    fn finish(self) -> ActiveSelections {
        self.active
    }
}

fn selection_directives(selection: &ast::query::Selection) -> &[ast::query::Directive] {
    match selection {
        ast::query::Selection::Field(field) => &field.directives,
        ast::query::Selection::FragmentSpread(spread) => &spread.directives,
        ast::query::Selection::InlineFragment(inline) => &inline.directives,
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SelectionViewError {
    #[error("Could not coerce the arguments of `{type_name}.{field_name}`: {source}")]
    ArgumentCoercion {
        field_name: String,
        source: ArgumentCoercionError,
        type_name: String,
    },

    #[error("Cyclic fragment spreads detected: {}", format_cycle_path(.cycle_path))]
    FragmentCycle {
        cycle_path: Vec<String>,
    },

    #[error("Field `{type_name}.{field_name}` does not support subselections")]
    NotCompositeField {
        field_name: String,
        type_name: String,
    },

    #[error("Expected `{type_name}` to be a composite type")]
    NotCompositeType {
        type_name: String,
    },

    #[error("`{type_name}` neither is nor implements `Node`")]
    NotNodeType {
        type_name: String,
    },

    #[error("No selection named `{selection_name}` was found on `{type_name}`")]
    SelectionNotFound {
        selection_name: String,
        type_name: String,
    },

    #[error(transparent)]
    SelectionTree(#[from] SelectionTreeError),

    #[error("Field `{type_name}.{field_name}` is not defined")]
    UndefinedField {
        field_name: String,
        type_name: String,
    },

    #[error("Reference to undefined fragment `{fragment_name}`")]
    UndefinedFragment {
        fragment_name: String,
    },

    #[error("`{type_name}` is not a type known to the schema")]
    UnknownType {
        type_name: String,
    },

    #[error("Selections of type `{type_name}` are not spreadable in type `{view_type}`")]
    UnrelatedType {
        type_name: String,
        view_type: String,
    },

    #[error("Cannot rebind variable `{variable_name}`")]
    VariableCollision {
        variable_name: String,
    },
}
