use crate::value::ValueMap;
use crate::variables::ResolveContext;
use crate::variables::VariablesResolver;
use crate::variables::variables_resolver::Result;
use async_trait::async_trait;
use indexmap::IndexSet;

/// Resolves no variables.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EmptyVariablesResolver;

#[async_trait]
impl VariablesResolver for EmptyVariablesResolver {
    fn variable_names(&self) -> IndexSet<String> {
        IndexSet::new()
    }

    fn is_empty(&self) -> bool {
        true
    }

    async fn resolve(&self, _ctx: &ResolveContext) -> Result<ValueMap> {
        Ok(ValueMap::new())
    }
}
