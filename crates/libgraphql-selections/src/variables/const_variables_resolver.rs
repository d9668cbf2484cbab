use crate::value::ValueMap;
use crate::variables::EmptyVariablesResolver;
use crate::variables::ResolveContext;
use crate::variables::VariablesResolver;
use crate::variables::variables_resolver::Result;
use async_trait::async_trait;
use indexmap::IndexSet;
use std::sync::Arc;

/// Resolves a fixed map of pre-computed values.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstVariablesResolver {
    values: ValueMap,
}
impl ConstVariablesResolver {
    pub fn new(values: ValueMap) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &ValueMap {
        &self.values
    }
}

#[async_trait]
impl VariablesResolver for ConstVariablesResolver {
    fn variable_names(&self) -> IndexSet<String> {
        self.values.keys().cloned().collect()
    }

    async fn resolve(&self, _ctx: &ResolveContext) -> Result<ValueMap> {
        Ok(self.values.clone())
    }
}

/// A resolver for `values`, or the empty resolver when there are none.
pub fn const_resolver(values: ValueMap) -> Arc<dyn VariablesResolver> {
    if values.is_empty() {
        Arc::new(EmptyVariablesResolver)
    } else {
        Arc::new(ConstVariablesResolver::new(values))
    }
}
