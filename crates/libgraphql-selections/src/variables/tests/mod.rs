mod variables_resolver_builder_tests;
