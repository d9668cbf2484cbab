use crate::selection::SelectionViewError;
use crate::value::ValueMap;
use crate::variables::FetchError;
use crate::variables::RequiredSelectionSet;
use crate::variables::RequiredSelectionSetError;
use crate::variables::ResolveContext;
use crate::variables::ValidatedVariablesResolver;
use async_trait::async_trait;
use indexmap::IndexSet;
use std::sync::Arc;
use thiserror::Error;

pub(super) type Result<T> = std::result::Result<T, VariablesResolverError>;

/// Produces the values of a fixed set of variables.
#[async_trait]
pub trait VariablesResolver: std::fmt::Debug + Send + Sync {
    /// The names of the variables this resolver produces.
    fn variable_names(&self) -> IndexSet<String>;

    /// Selections the host must load before [`Self::resolve`] runs. Their
    /// data is made available through the [`ResolveContext`].
    fn required_selection_set(&self) -> Option<&RequiredSelectionSet> {
        None
    }

    /// `true` only for resolvers that can never produce a value.
    fn is_empty(&self) -> bool {
        false
    }

    /// Resolve values for exactly [`Self::variable_names`].
    async fn resolve(&self, ctx: &ResolveContext) -> Result<ValueMap>;
}

/// Wrap `resolver` so that every resolution is checked against the names
/// it declares. Empty resolvers are returned as they are.
pub fn validated(resolver: Arc<dyn VariablesResolver>) -> Arc<dyn VariablesResolver> {
    if resolver.is_empty() {
        resolver
    } else {
        Arc::new(ValidatedVariablesResolver::new(resolver))
    }
}

/// Every variable name produced by any of `resolvers`.
pub fn variable_names(resolvers: &[Arc<dyn VariablesResolver>]) -> IndexSet<String> {
    resolvers.iter()
        .flat_map(|resolver| resolver.variable_names())
        .collect()
}

/// Check that no variable is produced by more than one of `resolvers`.
pub fn check_disjoint(
    resolvers: &[Arc<dyn VariablesResolver>],
) -> std::result::Result<(), RequiredSelectionSetError> {
    let mut seen = IndexSet::new();
    for name in resolvers.iter().flat_map(|resolver| resolver.variable_names()) {
        if !seen.insert(name.clone()) {
            return Err(RequiredSelectionSetError::DuplicateVariableBinding {
                variable_name: name,
            });
        }
    }
    Ok(())
}

/// Run every resolver concurrently and merge their results. Nothing is
/// returned unless all of them succeed.
pub async fn resolve_all(
    resolvers: &[Arc<dyn VariablesResolver>],
    ctx: &ResolveContext,
) -> Result<ValueMap> {
    let results = futures::future::try_join_all(
        resolvers.iter().map(|resolver| resolver.resolve(ctx)),
    ).await?;

    Ok(results.into_iter().flatten().collect())
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum VariablesResolverError {
    #[error(
        "Cannot read argument path `{path}` for variable `{variable_name}`: \
        `{segment}` is not an input object"
    )]
    ArgumentPathNotAnObject {
        path: String,
        segment: String,
        variable_name: String,
    },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(
        "Cannot read field path `{path}` for variable `{variable_name}`: \
        `{segment}` is not an object"
    )]
    FieldPathNotAnObject {
        path: String,
        segment: String,
        variable_name: String,
    },

    #[error("Resolver returned invalid variables.{}{}", format_keys(" Extra keys: ", .extra), format_keys(" Missing keys: ", .missing))]
    InvalidVariables {
        extra: Vec<String>,
        missing: Vec<String>,
    },

    #[error(transparent)]
    SelectionView(#[from] SelectionViewError),
}

fn format_keys(label: &str, keys: &[String]) -> String {
    if keys.is_empty() {
        String::new()
    } else {
        format!("{label}{}", keys.join(","))
    }
}
