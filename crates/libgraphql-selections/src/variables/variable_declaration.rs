use serde::Deserialize;
use serde::Serialize;

/// Declares where the value of a variable used by a required selection set
/// comes from. `path` is a dotted sequence of keys (`input.user.id`).
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum VariableDeclaration {
    /// Read from the arguments of the field being resolved.
    FromArgument {
        name: String,
        path: String,
    },

    /// Read from the selections loaded on the parent object.
    FromObjectField {
        name: String,
        path: String,
    },

    /// Read from the selections loaded on the root query object.
    FromQueryField {
        name: String,
        path: String,
    },
}
impl VariableDeclaration {
    pub fn from_argument(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::FromArgument {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn from_object_field(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::FromObjectField {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn from_query_field(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::FromQueryField {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::FromArgument { name, .. }
            | Self::FromObjectField { name, .. }
            | Self::FromQueryField { name, .. } => name.as_str(),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::FromArgument { path, .. }
            | Self::FromObjectField { path, .. }
            | Self::FromQueryField { path, .. } => path.as_str(),
        }
    }

    /// The non-empty segments of [`Self::path`]. Empty when the path is
    /// blank.
    pub fn path_segments(&self) -> Vec<String> {
        let path = self.path().trim();
        if path.is_empty() {
            return vec![];
        }
        path.split('.').map(str::to_string).collect()
    }
}
