use crate::value::Value;
use crate::value::ValueMap;
use crate::variables::ResolveContext;
use crate::variables::VariablesResolver;
use crate::variables::VariablesResolverError;
use crate::variables::variables_resolver::Result;
use async_trait::async_trait;
use indexmap::IndexSet;

/// Reads one variable out of the arguments of the field being resolved.
///
/// Every intermediate step of the path must be an input object (or `null`,
/// which short-circuits to `null`). A missing key reads as `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct FromArgumentVariablesResolver {
    name: String,
    path: Vec<String>,
}
impl FromArgumentVariablesResolver {
    /// `path` must be non-empty.
    pub(crate) fn new(name: impl Into<String>, path: Vec<String>) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn path(&self) -> &[String] {
        self.path.as_slice()
    }

    fn read(&self, arguments: &ValueMap) -> Result<Value> {
        let Some((first, rest)) = self.path.split_first() else {
            return Ok(Value::Null);
        };

        let mut current = arguments.get(first).unwrap_or(&Value::Null);
        let mut segment = first;
        for next in rest {
            current = match current {
                Value::Null => return Ok(Value::Null),
                Value::Object(entries) => entries.get(next).unwrap_or(&Value::Null),
                _ => return Err(VariablesResolverError::ArgumentPathNotAnObject {
                    path: self.path.join("."),
                    segment: segment.clone(),
                    variable_name: self.name.clone(),
                }),
            };
            segment = next;
        }
        Ok(current.clone())
    }
}

#[async_trait]
impl VariablesResolver for FromArgumentVariablesResolver {
    fn variable_names(&self) -> IndexSet<String> {
        IndexSet::from([self.name.clone()])
    }

    async fn resolve(&self, ctx: &ResolveContext) -> Result<ValueMap> {
        let value = self.read(ctx.arguments())?;
        Ok(ValueMap::from_iter([(self.name.clone(), value)]))
    }
}
