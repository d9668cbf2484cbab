use crate::value::Value;
use crate::value::ValueMap;
use crate::variables::RequiredSelectionSet;
use crate::variables::ResolveContext;
use crate::variables::VariablesResolver;
use crate::variables::VariablesResolverError;
use crate::variables::variables_resolver::Result;
use async_trait::async_trait;
use indexmap::IndexSet;

/// Which loaded object a [`FromFieldVariablesResolver`] reads from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldSource {
    Object,
    Query,
}

/// Reads one variable out of data loaded for a required selection set.
///
/// The first path segment is fetched from the host; the remaining segments
/// are read from the fetched value. Lists are read element-wise, so a path
/// through a list field yields a list.
#[derive(Debug)]
pub struct FromFieldVariablesResolver {
    name: String,
    path: Vec<String>,
    required_selection_set: RequiredSelectionSet,
    source: FieldSource,
}
impl FromFieldVariablesResolver {
    /// `path` must be non-empty.
    pub(crate) fn new(
        name: impl Into<String>,
        path: Vec<String>,
        source: FieldSource,
        required_selection_set: RequiredSelectionSet,
    ) -> Self {
        Self {
            name: name.into(),
            path,
            required_selection_set,
            source,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn path(&self) -> &[String] {
        self.path.as_slice()
    }

    pub fn source(&self) -> FieldSource {
        self.source
    }

    fn read_nested(&self, value: &Value, rest: &[String], segment: &str) -> Result<Value> {
        let Some((next, tail)) = rest.split_first() else {
            return Ok(value.clone());
        };

        match value {
            Value::Null => Ok(Value::Null),
            Value::Array(items) => items.iter()
                .map(|item| self.read_nested(item, rest, segment))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
            Value::Object(entries) => {
                let entry = entries.get(next).unwrap_or(&Value::Null);
                self.read_nested(entry, tail, next)
            },
            _ => Err(VariablesResolverError::FieldPathNotAnObject {
                path: self.path.join("."),
                segment: segment.to_string(),
                variable_name: self.name.clone(),
            }),
        }
    }
}

#[async_trait]
impl VariablesResolver for FromFieldVariablesResolver {
    fn variable_names(&self) -> IndexSet<String> {
        IndexSet::from([self.name.clone()])
    }

    fn required_selection_set(&self) -> Option<&RequiredSelectionSet> {
        Some(&self.required_selection_set)
    }

    async fn resolve(&self, ctx: &ResolveContext) -> Result<ValueMap> {
        let Some((first, rest)) = self.path.split_first() else {
            return Ok(ValueMap::from_iter([(self.name.clone(), Value::Null)]));
        };

        let data = match self.source {
            FieldSource::Object => ctx.object_data(),
            FieldSource::Query => ctx.query_data(),
        };
        let fetched = data.fetch(first).await?;
        let value = self.read_nested(&fetched, rest, first)?;
        Ok(ValueMap::from_iter([(self.name.clone(), value)]))
    }
}
