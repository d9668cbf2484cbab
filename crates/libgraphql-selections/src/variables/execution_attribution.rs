use serde::Deserialize;
use serde::Serialize;

/// What kind of host code a [`RequiredSelectionSet`](crate::variables::RequiredSelectionSet)
/// is loaded on behalf of.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum AttributionKind {
    Checker,
    Resolver,
    VariablesResolver,
}
impl AttributionKind {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Checker => "checker",
            Self::Resolver => "resolver",
            Self::VariablesResolver => "variables-resolver",
        }
    }
}

/// Names the host code that caused some selections to be loaded. Carried
/// through nested required selection sets so the full chain can be
/// reported.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ExecutionAttribution {
    kind: AttributionKind,
    name: String,
}
impl ExecutionAttribution {
    pub fn new(kind: AttributionKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn from_checker(name: impl Into<String>) -> Self {
        Self::new(AttributionKind::Checker, name)
    }

    pub fn from_resolver(name: impl Into<String>) -> Self {
        Self::new(AttributionKind::Resolver, name)
    }

    pub fn from_variables_resolver(name: impl Into<String>) -> Self {
        Self::new(AttributionKind::VariablesResolver, name)
    }

    pub fn kind(&self) -> AttributionKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// `<kind>:<name>`, e.g. `resolver:Query.user`.
    pub fn to_tag_string(&self) -> String {
        format!("{}:{}", self.kind.tag(), self.name)
    }
}
impl std::fmt::Display for ExecutionAttribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_tag_string())
    }
}
