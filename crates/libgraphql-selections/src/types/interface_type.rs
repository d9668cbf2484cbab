use crate::loc;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`InterfaceType`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.0.def_location()
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`InterfaceType`] in the schema, in definition order. Fields added by
    /// type extensions follow the fields of the original definition.
    ///
    /// Implicit meta-fields like `__typename` are not listed here; see
    /// [`Schema::field_definition()`](crate::schema::Schema::field_definition).
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    /// The names of all interfaces this type declares that it implements.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}
