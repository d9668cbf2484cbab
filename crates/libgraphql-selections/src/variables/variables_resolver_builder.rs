use crate::selection::SelectionTree;
use crate::variables::ExecutionAttribution;
use crate::variables::FieldSource;
use crate::variables::FromArgumentVariablesResolver;
use crate::variables::FromFieldVariablesResolver;
use crate::variables::RequiredSelectionSet;
use crate::variables::RequiredSelectionSetError;
use crate::variables::VariableDeclaration;
use crate::variables::VariablesResolver;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::sync::Arc;

type Result<T> = std::result::Result<T, RequiredSelectionSetError>;

/// Builds the [`VariablesResolver`]s for a list of [`VariableDeclaration`]s.
///
/// A from-field variable needs the sub-selection at its path loaded first,
/// and that sub-selection may itself reference other variables. Those are
/// built recursively while tracking the names currently being built, so a
/// variable whose value depends on itself is reported instead of recursing
/// forever. Built resolvers are memoized by name.
pub struct VariablesResolverBuilder<'a> {
    attribution: Option<&'a ExecutionAttribution>,
    bindings: IndexMap<String, Arc<dyn VariablesResolver>>,
    declarations: IndexMap<&'a str, &'a VariableDeclaration>,
    for_checker: bool,
    object_selections: Option<&'a SelectionTree>,
    query_selections: Option<&'a SelectionTree>,
}
impl<'a> VariablesResolverBuilder<'a> {
    pub fn new(declarations: &'a [VariableDeclaration]) -> Result<Self> {
        let mut by_name = IndexMap::new();
        for declaration in declarations {
            if by_name.insert(declaration.name(), declaration).is_some() {
                return Err(RequiredSelectionSetError::DuplicateDeclaration {
                    variable_name: declaration.name().to_string(),
                });
            }
        }

        Ok(Self {
            attribution: None,
            bindings: IndexMap::new(),
            declarations: by_name,
            for_checker: false,
            object_selections: None,
            query_selections: None,
        })
    }

    /// Build a resolver for every declaration. Resolvers reached through more
    /// than one declaration are returned once.
    pub fn build(mut self) -> Result<Vec<Arc<dyn VariablesResolver>>> {
        let declarations: Vec<_> = self.declarations.values().copied().collect();
        for declaration in declarations {
            self.build_one(&IndexSet::new(), declaration)?;
        }

        let mut resolvers: Vec<Arc<dyn VariablesResolver>> = vec![];
        for resolver in self.bindings.into_values() {
            if !resolvers.iter().any(|seen| Arc::ptr_eq(seen, &resolver)) {
                resolvers.push(resolver);
            }
        }
        log::debug!(
            "built {} variables resolver(s) for {} declaration(s)",
            resolvers.len(),
            self.declarations.len(),
        );
        Ok(resolvers)
    }

    pub fn for_checker(mut self, for_checker: bool) -> Self {
        self.for_checker = for_checker;
        self
    }

    pub fn with_attribution(mut self, attribution: Option<&'a ExecutionAttribution>) -> Self {
        self.attribution = attribution;
        self
    }

    pub fn with_object_selections(mut self, selections: &'a SelectionTree) -> Self {
        self.object_selections = Some(selections);
        self
    }

    pub fn with_query_selections(mut self, selections: &'a SelectionTree) -> Self {
        self.query_selections = Some(selections);
        self
    }

    fn build_one(
        &mut self,
        building: &IndexSet<String>,
        declaration: &'a VariableDeclaration,
    ) -> Result<Arc<dyn VariablesResolver>> {
        if let Some(extant) = self.bindings.get(declaration.name()) {
            return Ok(extant.clone());
        }

        let resolver: Arc<dyn VariablesResolver> = match declaration {
            VariableDeclaration::FromArgument { name, .. } => {
                let path = non_empty_path(declaration)?;
                Arc::new(FromArgumentVariablesResolver::new(name.as_str(), path))
            },

            VariableDeclaration::FromObjectField { name, path } => {
                let selections = self.object_selections.ok_or_else(|| {
                    RequiredSelectionSetError::MissingObjectSelections {
                        path: path.clone(),
                        variable_name: name.clone(),
                    }
                })?;
                self.build_from_field(building, declaration, selections, FieldSource::Object)?
            },

            VariableDeclaration::FromQueryField { name, path } => {
                let selections = self.query_selections.ok_or_else(|| {
                    RequiredSelectionSetError::MissingQuerySelections {
                        path: path.clone(),
                        variable_name: name.clone(),
                    }
                })?;
                self.build_from_field(building, declaration, selections, FieldSource::Query)?
            },
        };

        self.bindings.insert(declaration.name().to_string(), resolver.clone());
        Ok(resolver)
    }

    fn build_from_field(
        &mut self,
        building: &IndexSet<String>,
        declaration: &'a VariableDeclaration,
        selections: &'a SelectionTree,
        source: FieldSource,
    ) -> Result<Arc<dyn VariablesResolver>> {
        let name = declaration.name();
        let path = non_empty_path(declaration)?;
        let path_refs: Vec<&str> = path.iter().map(String::as_str).collect();
        let sub_selections = selections.filter_to_path(&path_refs).ok_or_else(|| {
            RequiredSelectionSetError::NoSelectionsForPath {
                path: declaration.path().to_string(),
                selections: selections.to_string(),
            }
        })?;

        // The sub-selection includes the variable's own source field, so it
        // must not (even transitively) depend on the variable itself.
        if building.contains(name) {
            return Err(RequiredSelectionSetError::VariableCycle {
                selections: selections.to_string(),
                variable_name: name.to_string(),
            });
        }

        let mut nested_building = building.clone();
        nested_building.insert(name.to_string());
        let mut nested_resolvers = vec![];
        for nested_name in sub_selections.variable_references() {
            let nested = self.declarations.get(nested_name.as_str()).copied().ok_or_else(|| {
                RequiredSelectionSetError::UnknownVariable {
                    variable_name: nested_name.clone(),
                }
            })?;
            let resolver = self.build_one(&nested_building, nested)?;
            if !nested_resolvers.iter().any(|seen| Arc::ptr_eq(seen, &resolver)) {
                nested_resolvers.push(resolver);
            }
        }

        let attribution =
            self.attribution.map(|attribution| {
                ExecutionAttribution::from_variables_resolver(attribution.to_tag_string())
            });
        let required_selection_set = RequiredSelectionSet::new(
            sub_selections,
            nested_resolvers,
            self.for_checker,
            attribution,
        )?;

        Ok(Arc::new(FromFieldVariablesResolver::new(
            name,
            path,
            source,
            required_selection_set,
        )))
    }
}

/// Build the resolvers for `declarations`. From-field declarations read their
/// sub-selections out of `object_selections` or `query_selections`.
pub fn build_variables_resolvers(
    object_selections: Option<&SelectionTree>,
    query_selections: Option<&SelectionTree>,
    declarations: &[VariableDeclaration],
    attribution: Option<&ExecutionAttribution>,
) -> Result<Vec<Arc<dyn VariablesResolver>>> {
    let mut builder = VariablesResolverBuilder::new(declarations)?.with_attribution(attribution);
    if let Some(selections) = object_selections {
        builder = builder.with_object_selections(selections);
    }
    if let Some(selections) = query_selections {
        builder = builder.with_query_selections(selections);
    }
    builder.build()
}

fn non_empty_path(declaration: &VariableDeclaration) -> Result<Vec<String>> {
    let path = declaration.path_segments();
    if path.is_empty() {
        return Err(RequiredSelectionSetError::EmptyPath {
            variable_name: declaration.name().to_string(),
        });
    }
    Ok(path)
}
