use crate::schema::Schema;
use crate::types::GraphQLType;

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeAnnotation {
    pub(super) nullable: bool,
    pub(super) type_name: String,
}
impl NamedTypeAnnotation {
    /// Look up the [`GraphQLType`] this annotation names. Returns `None` if
    /// the schema has no such type.
    pub fn graphql_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        schema.get_type(self.type_name.as_str())
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
