use crate::relations::TypeRelations;
use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::Field;
use crate::types::GraphQLType;
use indexmap::IndexMap;

/// Represents a fully built and immutable GraphQL schema together with the
/// [`TypeRelations`] computed for it.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, Directive>,
    pub(crate) meta_fields: IndexMap<String, Field>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: String,
    pub(crate) subscription_type: Option<String>,
    pub(crate) type_relations: TypeRelations,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Returns all directives defined within this [`Schema`], including the
    /// implicitly-defined built-ins like `@skip`.
    pub fn all_directives(&self) -> &IndexMap<String, Directive> {
        &self.directive_defs
    }

    /// Returns all types defined within this [`Schema`].
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in types like
    /// [`GraphQLType::Bool`] and the introspection types (`__Type`, ...).
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directive_defs.get(name)
    }

    /// Look up the definition of `field_name` on the composite type
    /// `type_name`.
    ///
    /// Meta-fields are resolved too: `__typename` exists on every composite
    /// type (unions included) and `__schema`/`__type` exist on the query type.
    pub fn field_definition(
        &self,
        type_name: &str,
        field_name: &str,
    ) -> Option<&Field> {
        let type_ = self.types.get(type_name)?;
        if !type_.is_composite() {
            return None;
        }

        match field_name {
            "__typename" => self.meta_fields.get(field_name),
            "__schema" | "__type" if type_name == self.query_type =>
                self.meta_fields.get(field_name),
            _ => type_.fields()?.get(field_name),
        }
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// The name of this [`Schema`]'s Mutation root operation type (if one
    /// was defined).
    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    /// The name of this [`Schema`]'s Query root operation type.
    ///
    /// [^note] GraphQL defines an object type named "Query" as the _default_
    /// Query type, but a `schema { query: ... }` block may override it. Prefer
    /// this over assuming the name is `"Query"`.
    pub fn query_type_name(&self) -> &str {
        self.query_type.as_str()
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type.as_deref()
    }

    /// The relation tables computed for this schema's composite types.
    pub fn type_relations(&self) -> &TypeRelations {
        &self.type_relations
    }
}
