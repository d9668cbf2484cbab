use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use std::sync::Arc;

pub(crate) const DEFAULT_SDL: &str = r#"
    schema { query: Query }

    type Query {
      node(id: ID!): Node
    }

    interface Node { id: ID! }

    type Struct { int: Int }

    enum Bar { A }

    type Foo implements Node {
      id: ID!
      int: Int
      foo: Foo
      bar: Bar
      struct: Struct
    }

    union FooOrStruct = Foo | Struct
    union FooUnion = Foo

    type Baz implements Node { id: ID! }
"#;

pub(crate) fn mk_schema(sdl: &str) -> Arc<Schema> {
    Arc::new(
        SchemaBuilder::new()
            .load_str(None, sdl)
            .unwrap()
            .build()
            .unwrap(),
    )
}

pub(crate) fn default_schema() -> Arc<Schema> {
    mk_schema(DEFAULT_SDL)
}
