mod type_relation;
mod type_relations;

pub use type_relation::TypeRelation;
pub use type_relations::IGNORED_TYPE_NAME;
pub use type_relations::TypeRelations;
pub use type_relations::TypeRelationsBuildError;
pub use type_relations::TypeRelationsError;

#[cfg(test)]
mod tests;
