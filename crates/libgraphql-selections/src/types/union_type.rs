use crate::loc;
use indexmap::IndexSet;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) members: IndexSet<String>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// An ordered list of the names of each type defined as a member of this
    /// union.
    ///
    /// Members added from type extensions appear after the members of the
    /// original definition, in the order they were specified.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.iter().map(String::as_str).collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
