use crate::ast;
use crate::types::TypeAnnotation;
use crate::value::ValueMap;
use indexmap::IndexMap;

/// What an executing field knows about its own selections: its static return
/// type, the (possibly merged) field ASTs that selected it, the fragment
/// definitions of the enclosing document and the operation's variables.
///
/// See [`SelectionView::from_field_context`](crate::selection::SelectionView::from_field_context).
#[derive(Clone, Debug)]
pub struct FieldContext {
    fields: Vec<ast::query::Field>,
    fragments: IndexMap<String, ast::query::FragmentDefinition>,
    return_type: TypeAnnotation,
    variables: ValueMap,
}
impl FieldContext {
    pub fn new(return_type: TypeAnnotation, fields: Vec<ast::query::Field>) -> Self {
        Self {
            fields,
            fragments: IndexMap::new(),
            return_type,
            variables: ValueMap::new(),
        }
    }

    pub fn fields(&self) -> &[ast::query::Field] {
        self.fields.as_slice()
    }

    pub fn fragments(&self) -> &IndexMap<String, ast::query::FragmentDefinition> {
        &self.fragments
    }

    pub fn return_type(&self) -> &TypeAnnotation {
        &self.return_type
    }

    pub fn variables(&self) -> &ValueMap {
        &self.variables
    }

    /// Add every fragment definition found in `document`.
    pub fn with_document_fragments(mut self, document: &ast::query::Document) -> Self {
        for def in &document.definitions {
            if let ast::query::Definition::Fragment(fragment) = def {
                self.fragments.insert(fragment.name.clone(), fragment.clone());
            }
        }
        self
    }

    pub fn with_fragments(
        mut self,
        fragments: IndexMap<String, ast::query::FragmentDefinition>,
    ) -> Self {
        self.fragments = fragments;
        self
    }

    pub fn with_variables(mut self, variables: ValueMap) -> Self {
        self.variables = variables;
        self
    }
}
