use crate::ast;
use crate::schema::Schema;
use crate::selection::printer;
use crate::selection::SelectionTree;
use crate::selection::SelectionTreeError;
use crate::value::ValueMap;

/// A self-contained fragment document together with the variables it was
/// bound with. Produced by
/// [`SelectionView::to_fragment`](crate::selection::SelectionView::to_fragment).
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub(crate) document: ast::query::Document,
    pub(crate) variables: ValueMap,
}
impl Fragment {
    pub fn document(&self) -> &ast::query::Document {
        &self.document
    }

    /// Re-read this fragment as a [`SelectionTree`] rooted at `type_name`.
    pub fn to_selection_tree(
        &self,
        schema: &Schema,
        type_name: &str,
    ) -> Result<SelectionTree, SelectionTreeError> {
        SelectionTree::from_document(schema, type_name, self.document.clone())
    }

    pub fn variables(&self) -> &ValueMap {
        &self.variables
    }
}
impl std::fmt::Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&printer::print_pretty_document(&self.document))
    }
}
