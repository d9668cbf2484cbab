use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::relations::TypeRelation;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, TypeRelationsError>;

/// A reserved type name that stands for "no type". Composite types with this
/// name are never entered into the relation tables.
pub const IGNORED_TYPE_NAME: &str = "LIBGRAPHQL_IGNORE";

/// Precomputed relationships between every pair of composite types in a
/// schema.
///
/// Built once per [`Schema`](crate::schema::Schema) and never mutated after
/// construction, so a single instance can be shared by any number of
/// concurrent readers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeRelations {
    object_types: HashSet<String>,
    possible_object_types: HashMap<String, Arc<IndexSet<String>>>,
    possible_types: HashMap<String, IndexSet<String>>,
    spreadable_types: HashMap<String, IndexSet<String>>,
}
impl TypeRelations {
    /// Build the relation tables for every composite type in `types`.
    ///
    /// Fails if an interface or union refers to a type that is missing or is
    /// of the wrong kind.
    pub fn new(
        types: &IndexMap<String, GraphQLType>,
    ) -> std::result::Result<Self, TypeRelationsBuildError> {
        let mut object_types = HashSet::new();
        let mut direct_subtypes: HashMap<String, IndexSet<String>> = HashMap::new();
        let mut spreadable_types: HashMap<String, IndexSet<String>> = HashMap::new();

        let composite_types = types.values().filter(|type_| {
            type_.is_composite() && type_.name() != IGNORED_TYPE_NAME
        });
        for type_ in composite_types {
            let type_name = type_.name().to_string();
            spreadable_types.insert(
                type_name.clone(),
                IndexSet::from([type_name.clone()]),
            );
            direct_subtypes.entry(type_name.clone()).or_default();

            let interface_names = match type_ {
                GraphQLType::Object(obj_type) => {
                    object_types.insert(type_name.clone());
                    obj_type.interface_names()
                },
                GraphQLType::Interface(iface_type) =>
                    iface_type.interface_names(),
                GraphQLType::Union(union_type) => {
                    let member_names =
                        union_type.member_type_names()
                            .into_iter()
                            .filter(|name| *name != IGNORED_TYPE_NAME);
                    for member_name in member_names {
                        match types.get(member_name) {
                            Some(GraphQLType::Object(_)) => (),
                            Some(other) => return Err(
                                TypeRelationsBuildError::NonObjectUnionMember {
                                    member_name: member_name.to_string(),
                                    union_name: type_name,
                                    member_kind: other.kind().to_string(),
                                },
                            ),
                            None => return Err(
                                TypeRelationsBuildError::UndefinedUnionMember {
                                    member_name: member_name.to_string(),
                                    union_name: type_name,
                                },
                            ),
                        }
                        direct_subtypes.entry(type_name.clone())
                            .or_default()
                            .insert(member_name.to_string());
                    }
                    vec![]
                },
                _ => vec![],
            };

            let interface_names =
                interface_names.into_iter()
                    .filter(|name| *name != IGNORED_TYPE_NAME);
            for iface_name in interface_names {
                match types.get(iface_name) {
                    Some(GraphQLType::Interface(_)) => (),
                    Some(other) => return Err(
                        TypeRelationsBuildError::NonInterfaceImplemented {
                            interface_name: iface_name.to_string(),
                            interface_kind: other.kind().to_string(),
                            type_name,
                        },
                    ),
                    None => return Err(
                        TypeRelationsBuildError::UndefinedInterface {
                            interface_name: iface_name.to_string(),
                            type_name,
                        },
                    ),
                }
                direct_subtypes.entry(iface_name.to_string())
                    .or_default()
                    .insert(type_name.clone());
            }
        }

        // Transitive closure of the direct subtype edges. Every composite type
        // is one of its own possible types.
        let mut possible_types = HashMap::new();
        for type_name in direct_subtypes.keys() {
            let mut closure = IndexSet::new();
            let mut stack = vec![type_name.as_str()];
            while let Some(next) = stack.pop() {
                if !closure.insert(next.to_string()) {
                    continue;
                }
                if let Some(subtypes) = direct_subtypes.get(next) {
                    stack.extend(subtypes.iter().rev().map(String::as_str));
                }
            }
            possible_types.insert(type_name.to_owned(), closure);
        }

        let mut possible_object_types = HashMap::new();
        let mut object_to_abstract_types: HashMap<&str, IndexSet<&str>> = HashMap::new();
        for (type_name, possible) in &possible_types {
            let is_abstract = !object_types.contains(type_name);
            let mut objects = IndexSet::new();
            for obj_name in possible.iter().filter(|name| object_types.contains(*name)) {
                objects.insert(obj_name.to_owned());
                if is_abstract {
                    object_to_abstract_types.entry(obj_name.as_str())
                        .or_default()
                        .insert(type_name.as_str());
                }
            }
            possible_object_types.insert(type_name.to_owned(), Arc::new(objects));
        }

        // Objects and each abstract type they participate in are mutually
        // spreadable, and so is every pair of abstract types that share an
        // object ("Abstract Spreads in Abstract Scope").
        for (obj_name, abstract_names) in &object_to_abstract_types {
            for abstract_name in abstract_names {
                add_mutually_spreadable(&mut spreadable_types, obj_name, abstract_name);
            }
            for abstract1 in abstract_names {
                for abstract2 in abstract_names {
                    add_mutually_spreadable(&mut spreadable_types, abstract1, abstract2);
                }
            }
        }

        log::debug!(
            "Built type relations for {} composite types ({} objects).",
            possible_types.len(),
            object_types.len(),
        );

        Ok(Self {
            object_types,
            possible_object_types,
            possible_types,
            spreadable_types,
        })
    }

    /// Whether `type_name` names a composite type known to these tables.
    pub fn contains_type(&self, type_name: &str) -> bool {
        self.possible_types.contains_key(type_name)
    }

    /// Returns `true` if a fragment whose type condition is `fragment_type`
    /// may be spread inside a selection on `parent_type`.
    ///
    /// Fails if either type is not a known composite type: that indicates a
    /// mismatch between the schema and the selections being analyzed.
    pub fn is_spreadable(
        &self,
        parent_type: &str,
        fragment_type: &str,
    ) -> Result<bool> {
        self.require_known(fragment_type)?;
        Ok(self.spreadable_types(parent_type)?.contains(fragment_type))
    }

    /// The concrete object types that a value of `type_name` may have at
    /// runtime.
    pub fn possible_object_types(
        &self,
        type_name: &str,
    ) -> Result<Arc<IndexSet<String>>> {
        self.possible_object_types.get(type_name)
            .cloned()
            .ok_or_else(|| unknown_type(type_name))
    }

    /// All types (abstract and concrete) narrower than or the same as
    /// `type_name`.
    pub fn possible_types(&self, type_name: &str) -> Result<&IndexSet<String>> {
        self.possible_types.get(type_name)
            .ok_or_else(|| unknown_type(type_name))
    }

    /// The relation between two annotated types after stripping any list and
    /// non-null wrappers from both.
    ///
    /// Identical innermost types are always [`TypeRelation::Same`]. Otherwise
    /// any pair that is not made of two composite types is
    /// [`TypeRelation::None`].
    pub fn relation(&self, a: &TypeAnnotation, b: &TypeAnnotation) -> TypeRelation {
        let a = a.innermost_type_name();
        let b = b.innermost_type_name();
        if a == b {
            return TypeRelation::Same;
        }
        self.relation_unwrapped(a, b).unwrap_or(TypeRelation::None)
    }

    /// The relation between two composite types. Fails if either type is
    /// unknown.
    pub fn relation_unwrapped(&self, a: &str, b: &str) -> Result<TypeRelation> {
        let a_possible = self.possible_types(a)?;
        let b_possible = self.possible_types(b)?;

        Ok(if a == b {
            TypeRelation::Same
        } else if a_possible.contains(b) {
            TypeRelation::WiderThan
        } else if b_possible.contains(a) {
            TypeRelation::NarrowerThan
        } else if self.spreadable_types(a)?.contains(b) {
            TypeRelation::Coparent
        } else {
            TypeRelation::None
        })
    }

    /// Every type that may be used as a type condition within a selection on
    /// `type_name`. Always includes `type_name` itself.
    pub fn spreadable_types(&self, type_name: &str) -> Result<&IndexSet<String>> {
        self.spreadable_types.get(type_name)
            .ok_or_else(|| unknown_type(type_name))
    }

    pub fn is_object_type(&self, type_name: &str) -> bool {
        self.object_types.contains(type_name)
    }

    fn require_known(&self, type_name: &str) -> Result<()> {
        if self.contains_type(type_name) {
            Ok(())
        } else {
            Err(unknown_type(type_name))
        }
    }
}

fn add_mutually_spreadable(
    spreadable_types: &mut HashMap<String, IndexSet<String>>,
    a: &str,
    b: &str,
) {
    spreadable_types.entry(a.to_string()).or_default().insert(b.to_string());
    spreadable_types.entry(b.to_string()).or_default().insert(a.to_string());
}

fn unknown_type(type_name: &str) -> TypeRelationsError {
    TypeRelationsError::UnknownCompositeType {
        type_name: type_name.to_string(),
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeRelationsBuildError {
    #[error(
        "The `{type_name}` type implements `{interface_name}`, which is a \
        {interface_kind} type rather than an interface"
    )]
    NonInterfaceImplemented {
        interface_kind: String,
        interface_name: String,
        type_name: String,
    },

    #[error(
        "The `{union_name}` union lists `{member_name}` as a member, but \
        `{member_name}` is a {member_kind} type rather than an object type"
    )]
    NonObjectUnionMember {
        member_kind: String,
        member_name: String,
        union_name: String,
    },

    #[error("The `{type_name}` type implements an undefined interface: `{interface_name}`")]
    UndefinedInterface {
        interface_name: String,
        type_name: String,
    },

    #[error("The `{union_name}` union lists an undefined member type: `{member_name}`")]
    UndefinedUnionMember {
        member_name: String,
        union_name: String,
    },
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeRelationsError {
    #[error("`{type_name}` is not a composite type known to this schema")]
    UnknownCompositeType {
        type_name: String,
    },
}
