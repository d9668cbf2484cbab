mod arguments_tests;
mod selection_tree_tests;
mod test_helpers;
