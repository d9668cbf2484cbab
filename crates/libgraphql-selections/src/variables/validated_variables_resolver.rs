use crate::value::ValueMap;
use crate::variables::RequiredSelectionSet;
use crate::variables::ResolveContext;
use crate::variables::VariablesResolver;
use crate::variables::VariablesResolverError;
use crate::variables::variables_resolver::Result;
use async_trait::async_trait;
use indexmap::IndexSet;
use std::sync::Arc;

/// Checks that the wrapped resolver produces exactly the variables it
/// declares.
#[derive(Clone, Debug)]
pub struct ValidatedVariablesResolver {
    delegate: Arc<dyn VariablesResolver>,
}
impl ValidatedVariablesResolver {
    pub fn new(delegate: Arc<dyn VariablesResolver>) -> Self {
        Self { delegate }
    }
}

#[async_trait]
impl VariablesResolver for ValidatedVariablesResolver {
    fn variable_names(&self) -> IndexSet<String> {
        self.delegate.variable_names()
    }

    fn required_selection_set(&self) -> Option<&RequiredSelectionSet> {
        self.delegate.required_selection_set()
    }

    fn is_empty(&self) -> bool {
        self.delegate.is_empty()
    }

    async fn resolve(&self, ctx: &ResolveContext) -> Result<ValueMap> {
        let values = self.delegate.resolve(ctx).await?;
        let declared = self.delegate.variable_names();

        let extra: Vec<_> =
            values.keys()
                .filter(|name| !declared.contains(*name))
                .cloned()
                .collect();
        let missing: Vec<_> =
            declared.iter()
                .filter(|name| !values.contains_key(*name))
                .cloned()
                .collect();
        if !extra.is_empty() || !missing.is_empty() {
            return Err(VariablesResolverError::InvalidVariables { extra, missing });
        }
        Ok(values)
    }
}
