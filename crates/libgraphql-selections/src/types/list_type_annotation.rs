use crate::types::TypeAnnotation;

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListTypeAnnotation {
    pub(super) inner_type: Box<TypeAnnotation>,
    pub(super) nullable: bool,
}
impl ListTypeAnnotation {
    /// The [`TypeAnnotation`] of each element in this list.
    pub fn inner_type(&self) -> &TypeAnnotation {
        &self.inner_type
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
