mod type_relations_tests;
