mod graphql_type_kind_tests;
mod type_annotation_tests;
