/// How one composite type relates to another.
///
/// Relations are read left-to-right: `WiderThan` means the left type
/// subsumes the right one (an interface relative to one of its implementors,
/// or a union relative to one of its members).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeRelation {
    Same,
    WiderThan,
    NarrowerThan,
    /// Neither type subsumes the other, but both are wider than some common
    /// object type (e.g. two interfaces implemented by one object, or two
    /// unions that share a member).
    Coparent,
    None,
}
impl TypeRelation {
    /// The relation seen from the other side.
    pub fn inverse(&self) -> Self {
        match self {
            Self::WiderThan => Self::NarrowerThan,
            Self::NarrowerThan => Self::WiderThan,
            other => *other,
        }
    }

    pub fn is_same_or_wider(&self) -> bool {
        matches!(self, Self::Same | Self::WiderThan)
    }

    pub fn is_same_or_narrower(&self) -> bool {
        matches!(self, Self::Same | Self::NarrowerThan)
    }
}
