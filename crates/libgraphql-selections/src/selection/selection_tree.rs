use crate::ast;
use crate::schema::Schema;
use crate::selection::printer;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::collections::HashSet;
use thiserror::Error;

type Result<T> = std::result::Result<T, SelectionTreeError>;

/// Name of the fragment that holds the root selections of a tree.
pub const ENTRY_FRAGMENT_NAME: &str = "Main";

/// An immutable, fragment-aware parse of a selection string for some root
/// type.
///
/// `selections` are the root selections (the body of the entry fragment) and
/// `fragments` holds every fragment definition transitively reachable from
/// them. Construction guarantees every spread refers to a known fragment and
/// that the spread graph is acyclic.
#[derive(Clone, Debug)]
pub struct SelectionTree {
    fragments: IndexMap<String, ast::query::FragmentDefinition>,
    selections: ast::query::SelectionSet,
    type_name: String,
}
impl SelectionTree {
    /// A tree with no selections at all.
    pub fn empty(type_name: impl Into<String>) -> Self {
        Self {
            fragments: IndexMap::new(),
            selections: ast::query::empty_selection_set(),
            type_name: type_name.into(),
        }
    }

    /// Parse `text` into a [`SelectionTree`] rooted at `type_name`.
    ///
    /// `text` is either a bare field set (`id foo { bar }`), which becomes
    /// the body of an implicit `fragment Main on <type_name>`, or a document
    /// made only of fragment definitions. In the latter case the entry
    /// fragment is the sole definition or the one named `Main`.
    pub fn parse(schema: &Schema, type_name: &str, text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(SelectionTreeError::EmptySelections {
                type_name: type_name.to_string(),
            });
        }

        let document = if is_field_set(text) {
            ast::query::parse(&format!(
                "fragment {ENTRY_FRAGMENT_NAME} on {type_name} {{\n{text}\n}}",
            ))
        } else {
            ast::query::parse(text)
        }.map_err(|err| SelectionTreeError::ParseError {
            message: err.to_string(),
            selections: text.to_string(),
        })?;

        Self::from_document(schema, type_name, document)
    }

    /// Build a [`SelectionTree`] from an already-parsed document of fragment
    /// definitions.
    pub fn from_document(
        schema: &Schema,
        type_name: &str,
        document: ast::query::Document,
    ) -> Result<Self> {
        let root_is_composite = schema.get_type(type_name)
            .is_some_and(|type_| type_.is_composite());
        if !root_is_composite {
            return Err(SelectionTreeError::UnknownType {
                type_name: type_name.to_string(),
            });
        }

        let mut fragments = IndexMap::new();
        let mut duplicated_names = IndexSet::new();
        for def in document.definitions {
            let fragment = match def {
                ast::query::Definition::Fragment(fragment) => fragment,
                ast::query::Definition::Operation(op) => return Err(
                    SelectionTreeError::NonFragmentDefinition {
                        definition: printer::print_compact_operation(&op),
                    }
                ),
            };
            let name = fragment.name.clone();
            if fragments.insert(name.clone(), fragment).is_some() {
                duplicated_names.insert(name);
            }
        }
        if !duplicated_names.is_empty() {
            return Err(SelectionTreeError::DuplicateFragmentDefinition {
                fragment_names: duplicated_names.into_iter().collect(),
            });
        }

        let entry = if fragments.len() == 1 {
            fragments.first().map(|(_, fragment)| fragment)
        } else {
            fragments.get(ENTRY_FRAGMENT_NAME)
        }.ok_or(SelectionTreeError::MissingEntryFragment)?;

        let ast::query::TypeCondition::On(entry_type) = &entry.type_condition;
        if entry_type != type_name {
            return Err(SelectionTreeError::EntryTypeConditionMismatch {
                fragment_name: entry.name.clone(),
                type_condition: entry_type.clone(),
                type_name: type_name.to_string(),
            });
        }

        let selections = entry.selection_set.clone();
        Self::from_parts(type_name, selections, fragments)
    }

    /// Assemble a tree from root selections and a pool of fragment
    /// definitions. Only fragments reachable from `selections` are kept.
    pub fn from_parts(
        type_name: impl Into<String>,
        selections: ast::query::SelectionSet,
        mut fragments: IndexMap<String, ast::query::FragmentDefinition>,
    ) -> Result<Self> {
        let mut validator = SpreadValidator {
            fragments: &fragments,
            reachable: IndexSet::new(),
            visiting: HashSet::new(),
        };
        validator.check_selection_set(&selections, &mut vec![])?;
        let reachable = validator.reachable;

        let fragments = reachable.into_iter()
            .filter_map(|name| {
                let fragment = fragments.swap_remove(&name)?;
                Some((name, fragment))
            })
            .collect();

        Ok(Self {
            fragments,
            selections,
            type_name: type_name.into(),
        })
    }

    /// Restrict the tree to the selections that lie along `path`, a sequence
    /// of result keys (aliases or field names).
    ///
    /// Fields past the end of the path keep their whole sub-selection.
    /// Fragment spreads along the way are inlined. Returns `None` when
    /// nothing survives the filter.
    pub fn filter_to_path(&self, path: &[&str]) -> Option<SelectionTree> {
        if path.is_empty() {
            return Some(self.clone());
        }

        let selections = self.filter_selection_set(&self.selections, path)?;
        Some(Self {
            fragments: IndexMap::new(),
            selections,
            type_name: self.type_name.clone(),
        })
    }

    fn filter_selection_set(
        &self,
        selection_set: &ast::query::SelectionSet,
        path: &[&str],
    ) -> Option<ast::query::SelectionSet> {
        let items: Vec<_> = selection_set.items.iter()
            .filter_map(|selection| self.filter_selection(selection, path))
            .collect();
        if items.is_empty() {
            return None;
        }
        Some(ast::query::SelectionSet {
            span: selection_set.span,
            items,
        })
    }

    fn filter_selection(
        &self,
        selection: &ast::query::Selection,
        path: &[&str],
    ) -> Option<ast::query::Selection> {
        match selection {
            ast::query::Selection::Field(field) => {
                let result_key = field.alias.as_deref().unwrap_or(&field.name);
                if path.first().is_some_and(|segment| *segment != result_key) {
                    return None;
                }

                if field.selection_set.items.is_empty() {
                    // A leaf cannot satisfy any remaining segments.
                    return (path.len() <= 1).then(|| selection.clone());
                }

                let rest = path.get(1..).unwrap_or_default();
                let selection_set =
                    self.filter_selection_set(&field.selection_set, rest)?;
                Some(ast::query::Selection::Field(ast::query::Field {
                    selection_set,
                    ..field.clone()
                }))
            },

            ast::query::Selection::InlineFragment(inline) => {
                let selection_set =
                    self.filter_selection_set(&inline.selection_set, path)?;
                Some(ast::query::Selection::InlineFragment(ast::query::InlineFragment {
                    selection_set,
                    ..inline.clone()
                }))
            },

            ast::query::Selection::FragmentSpread(spread) => {
                let fragment = self.fragments.get(&spread.fragment_name)?;
                let selection_set =
                    self.filter_selection_set(&fragment.selection_set, path)?;
                Some(ast::query::Selection::InlineFragment(ast::query::InlineFragment {
                    position: spread.position,
                    type_condition: Some(fragment.type_condition.clone()),
                    directives: spread.directives.clone(),
                    selection_set,
                }))
            },
        }
    }

    /// The fragment definitions reachable from the root selections, in the
    /// order they are first spread.
    pub fn fragments(&self) -> &IndexMap<String, ast::query::FragmentDefinition> {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.selections.items.is_empty()
    }

    /// The root selections of this tree.
    pub fn selections(&self) -> &ast::query::SelectionSet {
        &self.selections
    }

    /// Render this tree as an executable document: the `Main` entry fragment
    /// followed by every reachable fragment.
    pub fn to_document(&self) -> ast::query::Document {
        let entry = ast::query::FragmentDefinition {
            position: ast::Pos::default(),
            name: ENTRY_FRAGMENT_NAME.to_string(),
            type_condition: ast::query::TypeCondition::On(self.type_name.clone()),
            directives: vec![],
            selection_set: self.selections.clone(),
        };

        let definitions =
            std::iter::once(entry)
                .chain(
                    self.fragments.values()
                        .filter(|fragment| fragment.name != ENTRY_FRAGMENT_NAME)
                        .cloned()
                )
                .map(ast::query::Definition::Fragment)
                .collect();

        ast::query::Document { definitions }
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    /// Every variable referenced anywhere in this tree (field arguments,
    /// directive arguments and nested literals), in order of first
    /// appearance.
    pub fn variable_references(&self) -> IndexSet<String> {
        let mut names = IndexSet::new();
        collect_selection_set_variables(&self.selections, &mut names);
        for fragment in self.fragments.values() {
            collect_directive_variables(&fragment.directives, &mut names);
            collect_selection_set_variables(&fragment.selection_set, &mut names);
        }
        names
    }
}
impl PartialEq for SelectionTree {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
            && self.fragments.len() == other.fragments.len()
            && self.fragments.keys().all(|name| other.fragments.contains_key(name))
            && printer::print_compact_selection_set(&self.selections)
                == printer::print_compact_selection_set(&other.selections)
            && self.fragments.iter().all(|(name, fragment)| {
                other.fragments.get(name).is_some_and(|other_fragment| {
                    printer::print_compact_fragment(fragment)
                        == printer::print_compact_fragment(other_fragment)
                })
            })
    }
}
impl std::fmt::Display for SelectionTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&printer::print_pretty_document(&self.to_document()))
    }
}

/// A selection string is a bare field set unless it opens with a `fragment`
/// keyword.
fn is_field_set(text: &str) -> bool {
    let starts_with_fragment =
        text.trim_start()
            .strip_prefix("fragment")
            .is_some_and(|rest| rest.starts_with(char::is_whitespace));
    !starts_with_fragment
}

struct SpreadValidator<'a> {
    fragments: &'a IndexMap<String, ast::query::FragmentDefinition>,
    reachable: IndexSet<String>,
    visiting: HashSet<String>,
}
impl SpreadValidator<'_> {
    fn check_fragment(
        &mut self,
        fragment_name: &str,
        path: &mut Vec<String>,
    ) -> Result<()> {
        if self.visiting.contains(fragment_name) {
            path.push(fragment_name.to_string());
            return Err(SelectionTreeError::FragmentCycleDetected {
                cycle_path: path.clone(),
            });
        }

        let Some(fragment) = self.fragments.get(fragment_name) else {
            return Err(SelectionTreeError::UndefinedFragmentReference {
                fragment_name: fragment_name.to_string(),
                referencing_fragment: path.last().cloned(),
            });
        };

        // Already validated through another spread path.
        if !self.reachable.insert(fragment_name.to_string()) {
            return Ok(());
        }

        path.push(fragment_name.to_string());
        self.visiting.insert(fragment_name.to_string());
        self.check_selection_set(&fragment.selection_set, path)?;
        self.visiting.remove(fragment_name);
        path.pop();
        Ok(())
    }

    fn check_selection_set(
        &mut self,
        selection_set: &ast::query::SelectionSet,
        path: &mut Vec<String>,
    ) -> Result<()> {
        for selection in &selection_set.items {
            match selection {
                ast::query::Selection::Field(field) =>
                    self.check_selection_set(&field.selection_set, path)?,
                ast::query::Selection::InlineFragment(inline) =>
                    self.check_selection_set(&inline.selection_set, path)?,
                ast::query::Selection::FragmentSpread(spread) =>
                    self.check_fragment(&spread.fragment_name, path)?,
            }
        }
        Ok(())
    }
}

fn collect_selection_set_variables(
    selection_set: &ast::query::SelectionSet,
    names: &mut IndexSet<String>,
) {
    for selection in &selection_set.items {
        match selection {
            ast::query::Selection::Field(field) => {
                for (_, value) in &field.arguments {
                    collect_value_variables(value, names);
                }
                collect_directive_variables(&field.directives, names);
                collect_selection_set_variables(&field.selection_set, names);
            },
            ast::query::Selection::InlineFragment(inline) => {
                collect_directive_variables(&inline.directives, names);
                collect_selection_set_variables(&inline.selection_set, names);
            },
            ast::query::Selection::FragmentSpread(spread) =>
                collect_directive_variables(&spread.directives, names),
        }
    }
}

fn collect_directive_variables(
    directives: &[ast::query::Directive],
    names: &mut IndexSet<String>,
) {
    for directive in directives {
        for (_, value) in &directive.arguments {
            collect_value_variables(value, names);
        }
    }
}

fn collect_value_variables(value: &ast::Value, names: &mut IndexSet<String>) {
    match value {
        ast::Value::Variable(name) => {
            names.insert(name.clone());
        },
        ast::Value::List(items) =>
            items.iter().for_each(|item| collect_value_variables(item, names)),
        ast::Value::Object(entries) =>
            entries.values().for_each(|entry| collect_value_variables(entry, names)),
        _ => (),
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SelectionTreeError {
    #[error("Selections for `{type_name}` must not be empty")]
    EmptySelections {
        type_name: String,
    },

    #[error(
        "Selections may only contain fragment definitions. Found: {definition}"
    )]
    NonFragmentDefinition {
        definition: String,
    },

    #[error(
        "Selections contain repeated definitions for fragments named: {}",
        fragment_names.join(", "),
    )]
    DuplicateFragmentDefinition {
        fragment_names: Vec<String>,
    },

    #[error(
        "Selections must contain exactly 1 fragment or have 1 fragment \
        definition named `{ENTRY_FRAGMENT_NAME}`"
    )]
    MissingEntryFragment,

    #[error(
        "Fragment `{fragment_name}` is on type `{type_condition}` but must be \
        on type `{type_name}`"
    )]
    EntryTypeConditionMismatch {
        fragment_name: String,
        type_condition: String,
        type_name: String,
    },

    #[error("Fragment cycle detected: {}", format_cycle_path(.cycle_path))]
    FragmentCycleDetected {
        cycle_path: Vec<String>,
    },

    #[error("Could not parse selections `{selections}`: {message}")]
    ParseError {
        message: String,
        selections: String,
    },

    #[error("Reference to undefined fragment `{fragment_name}`")]
    UndefinedFragmentReference {
        fragment_name: String,
        referencing_fragment: Option<String>,
    },

    #[error("`{type_name}` is not a composite type known to the schema")]
    UnknownType {
        type_name: String,
    },
}

pub(crate) fn format_cycle_path(cycle: &[String]) -> String {
    cycle.join(" → ")
}
