mod arguments;
mod directives;
mod field_context;
mod field_selection;
mod fragment;
pub mod printer;
mod selection_tree;
mod selection_view;

pub use arguments::ArgumentCoercionError;
pub use field_context::FieldContext;
pub use field_selection::FieldSelection;
pub use field_selection::SelectedField;
pub use fragment::Fragment;
pub use selection_tree::ENTRY_FRAGMENT_NAME;
pub use selection_tree::SelectionTree;
pub use selection_tree::SelectionTreeError;
pub use selection_view::SelectionView;
pub use selection_view::SelectionViewError;

#[cfg(test)]
mod tests;
