//! Variable binders: the resolvers that compute the variables referenced by
//! a required selection set from field arguments and previously-loaded
//! data.

mod const_variables_resolver;
mod empty_variables_resolver;
mod execution_attribution;
mod from_argument_variables_resolver;
mod from_field_variables_resolver;
mod object_data;
mod required_selection_set;
mod required_selection_sets;
mod resolve_context;
mod validated_variables_resolver;
mod variable_declaration;
mod variables_resolver;
mod variables_resolver_builder;

pub use const_variables_resolver::const_resolver;
pub use const_variables_resolver::ConstVariablesResolver;
pub use empty_variables_resolver::EmptyVariablesResolver;
pub use execution_attribution::AttributionKind;
pub use execution_attribution::ExecutionAttribution;
pub use from_argument_variables_resolver::FromArgumentVariablesResolver;
pub use from_field_variables_resolver::FieldSource;
pub use from_field_variables_resolver::FromFieldVariablesResolver;
pub use object_data::FetchError;
pub use object_data::ObjectData;
pub use required_selection_set::build_required_selection_set;
pub use required_selection_set::RequiredSelectionSet;
pub use required_selection_set::RequiredSelectionSetError;
pub use required_selection_sets::RequiredSelectionSets;
pub use resolve_context::ResolveContext;
pub use validated_variables_resolver::ValidatedVariablesResolver;
pub use variable_declaration::VariableDeclaration;
pub use variables_resolver::check_disjoint;
pub use variables_resolver::resolve_all;
pub use variables_resolver::validated;
pub use variables_resolver::variable_names;
pub use variables_resolver::VariablesResolver;
pub use variables_resolver::VariablesResolverError;
pub use variables_resolver_builder::build_variables_resolvers;
pub use variables_resolver_builder::VariablesResolverBuilder;

#[cfg(test)]
mod tests;
