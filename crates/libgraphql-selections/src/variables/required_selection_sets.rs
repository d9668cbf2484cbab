use crate::schema::Schema;
use crate::selection::SelectionTree;
use crate::variables::ExecutionAttribution;
use crate::variables::RequiredSelectionSet;
use crate::variables::RequiredSelectionSetError;
use crate::variables::VariableDeclaration;
use crate::variables::VariablesResolver;
use crate::variables::VariablesResolverBuilder;
use crate::variables::variables_resolver;
use indexmap::IndexSet;
use std::sync::Arc;

type Result<T> = std::result::Result<T, RequiredSelectionSetError>;

/// The selections some host code needs on its parent object and on the
/// root query object. Both sets share one pool of variables resolvers.
#[derive(Clone, Debug, Default)]
pub struct RequiredSelectionSets {
    object_selections: Option<RequiredSelectionSet>,
    query_selections: Option<RequiredSelectionSet>,
}
impl RequiredSelectionSets {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build both required selection sets from their selection trees and
    /// the variable declarations they share.
    ///
    /// Every declaration must be used by at least one of the trees, and
    /// every variable either tree references must be declared.
    pub fn build(
        schema: &Schema,
        object_selections: Option<SelectionTree>,
        query_selections: Option<SelectionTree>,
        declarations: &[VariableDeclaration],
        for_checker: bool,
        attribution: Option<ExecutionAttribution>,
    ) -> Result<Self> {
        if object_selections.is_none() && query_selections.is_none() {
            return Ok(Self::empty());
        }

        if let Some(query_selections) = &query_selections {
            if query_selections.type_name() != schema.query_type_name() {
                return Err(RequiredSelectionSetError::QuerySelectionsNotOnQueryType {
                    query_type: schema.query_type_name().to_string(),
                    type_name: query_selections.type_name().to_string(),
                });
            }
        }

        let consumed: IndexSet<String> =
            object_selections.iter()
                .chain(query_selections.iter())
                .flat_map(SelectionTree::variable_references)
                .collect();
        let unused: Vec<String> =
            declarations.iter()
                .map(|declaration| declaration.name())
                .filter(|name| !consumed.contains(*name))
                .map(str::to_string)
                .collect();
        if !unused.is_empty() {
            return Err(RequiredSelectionSetError::UnusedVariables {
                variable_names: unused,
            });
        }

        let mut builder =
            VariablesResolverBuilder::new(declarations)?
                .with_attribution(attribution.as_ref())
                .for_checker(for_checker);
        if let Some(selections) = &object_selections {
            builder = builder.with_object_selections(selections);
        }
        if let Some(selections) = &query_selections {
            builder = builder.with_query_selections(selections);
        }
        let resolvers = builder.build()?;
        variables_resolver::check_disjoint(&resolvers)?;
        let resolvers: Vec<Arc<dyn VariablesResolver>> =
            resolvers.into_iter()
                .map(variables_resolver::validated)
                .collect();

        let mk_set = |selections: SelectionTree| {
            RequiredSelectionSet::new(
                selections,
                resolvers.clone(),
                for_checker,
                attribution.clone(),
            )
        };
        Ok(Self {
            object_selections: object_selections.map(mk_set).transpose()?,
            query_selections: query_selections.map(mk_set).transpose()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.object_selections.is_none() && self.query_selections.is_none()
    }

    pub fn object_selections(&self) -> Option<&RequiredSelectionSet> {
        self.object_selections.as_ref()
    }

    pub fn query_selections(&self) -> Option<&RequiredSelectionSet> {
        self.query_selections.as_ref()
    }
}
