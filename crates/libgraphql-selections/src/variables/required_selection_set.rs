use crate::schema::Schema;
use crate::selection::SelectionTree;
use crate::selection::SelectionView;
use crate::value::ValueMap;
use crate::variables::ExecutionAttribution;
use crate::variables::ResolveContext;
use crate::variables::VariableDeclaration;
use crate::variables::VariablesResolver;
use crate::variables::VariablesResolverBuilder;
use crate::variables::VariablesResolverError;
use crate::variables::variables_resolver;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, RequiredSelectionSetError>;

/// Selections that must be loaded before some host code (a resolver, a
/// checker or another variables resolver) can run, together with the
/// resolvers that produce every variable those selections reference.
#[derive(Clone, Debug)]
pub struct RequiredSelectionSet {
    attribution: Option<ExecutionAttribution>,
    for_checker: bool,
    resolvers: Vec<Arc<dyn VariablesResolver>>,
    selections: SelectionTree,
}
impl RequiredSelectionSet {
    /// Every variable referenced in `selections` must be produced by exactly
    /// one of `resolvers`.
    pub fn new(
        selections: SelectionTree,
        resolvers: Vec<Arc<dyn VariablesResolver>>,
        for_checker: bool,
        attribution: Option<ExecutionAttribution>,
    ) -> Result<Self> {
        variables_resolver::check_disjoint(&resolvers)?;

        let provided = variables_resolver::variable_names(&resolvers);
        if let Some(unbound) = selections.variable_references()
            .into_iter()
            .find(|name| !provided.contains(name))
        {
            return Err(RequiredSelectionSetError::UnboundVariable {
                selections: selections.to_string(),
                variable_name: unbound,
            });
        }

        Ok(Self {
            attribution,
            for_checker,
            resolvers,
            selections,
        })
    }

    pub fn attribution(&self) -> Option<&ExecutionAttribution> {
        self.attribution.as_ref()
    }

    pub fn is_for_checker(&self) -> bool {
        self.for_checker
    }

    pub fn resolvers(&self) -> &[Arc<dyn VariablesResolver>] {
        self.resolvers.as_slice()
    }

    /// Resolve every variable of this set. Either all resolvers succeed or
    /// no values are returned.
    pub async fn resolve_variables(
        &self,
        ctx: &ResolveContext,
    ) -> std::result::Result<ValueMap, VariablesResolverError> {
        variables_resolver::resolve_all(&self.resolvers, ctx).await
    }

    /// Resolve the variables of this set and bind its selections with them.
    pub async fn resolve_view(
        &self,
        schema: Arc<Schema>,
        ctx: &ResolveContext,
    ) -> std::result::Result<SelectionView, VariablesResolverError> {
        let variables = self.resolve_variables(ctx).await?;
        Ok(SelectionView::bind(schema, &self.selections, variables)?)
    }

    pub fn selections(&self) -> &SelectionTree {
        &self.selections
    }
}

/// Build the resolvers for `declarations` (reading object fields out of
/// `selections`) and assemble them into a [`RequiredSelectionSet`].
pub fn build_required_selection_set(
    selections: SelectionTree,
    declarations: &[VariableDeclaration],
    for_checker: bool,
    attribution: Option<ExecutionAttribution>,
) -> Result<RequiredSelectionSet> {
    let resolvers =
        VariablesResolverBuilder::new(declarations)?
            .with_object_selections(&selections)
            .with_attribution(attribution.as_ref())
            .for_checker(for_checker)
            .build()?
            .into_iter()
            .map(variables_resolver::validated)
            .collect();

    RequiredSelectionSet::new(selections, resolvers, for_checker, attribution)
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RequiredSelectionSetError {
    #[error("Found duplicate declarations for variable `{variable_name}`")]
    DuplicateDeclaration {
        variable_name: String,
    },

    #[error("Multiple resolvers provide a value for variable `{variable_name}`")]
    DuplicateVariableBinding {
        variable_name: String,
    },

    #[error("Path for variable `{variable_name}` is empty")]
    EmptyPath {
        variable_name: String,
    },

    #[error(
        "No object selections provided, can't resolve variable \
        `{variable_name}` from object field `{path}`"
    )]
    MissingObjectSelections {
        path: String,
        variable_name: String,
    },

    #[error(
        "No query selections provided, can't resolve variable \
        `{variable_name}` from query field `{path}`"
    )]
    MissingQuerySelections {
        path: String,
        variable_name: String,
    },

    #[error("No selections found for path `{path}` in selection set:\n{selections}")]
    NoSelectionsForPath {
        path: String,
        selections: String,
    },

    #[error("Query selections must be on `{query_type}`, found `{type_name}`")]
    QuerySelectionsNotOnQueryType {
        query_type: String,
        type_name: String,
    },

    #[error(
        "Variable `{variable_name}` is not provided by any resolver but is \
        used in selection set:\n{selections}"
    )]
    UnboundVariable {
        selections: String,
        variable_name: String,
    },

    #[error("Unknown variable `{variable_name}`")]
    UnknownVariable {
        variable_name: String,
    },

    #[error(
        "Cannot build required selection sets: found declarations for unused \
        variables: {}",
        variable_names.join(", "),
    )]
    UnusedVariables {
        variable_names: Vec<String>,
    },

    #[error("Detected cycle for variable `{variable_name}` in selection set:\n{selections}")]
    VariableCycle {
        selections: String,
        variable_name: String,
    },
}
