use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::relations::TypeRelations;
use crate::relations::TypeRelationsBuildError;
use crate::schema::introspection;
use crate::schema::Schema;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_DIRECTIVE_NAMES: [&str; 4] = [
    "skip",
    "include",
    "deprecated",
    "specifiedBy",
];

#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLOperationType {
    Query,
    Mutation,
    Subscription,
}

/// Utility for building a [Schema].
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, Directive>,
    loading_builtins: bool,
    mutation_type: Option<NamedTypeDefLocation>,
    pending_extensions: Vec<(PathBuf, ast::schema::TypeExtension)>,
    query_type: Option<NamedTypeDefLocation>,
    str_load_counter: u16,
    subscription_type: Option<NamedTypeDefLocation>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        self.inject_missing_builtin_directives();
        self.loading_builtins = true;
        let mut this = self.load_str(
            Some(PathBuf::from("builtin://introspection.graphql")),
            introspection::INTROSPECTION_SDL,
        )?;
        this.loading_builtins = false;
        this.build_impl()
    }

    fn build_impl(mut self) -> Result<Schema> {

        for (file_path, ext) in std::mem::take(&mut self.pending_extensions) {
            self.apply_type_extension(file_path.as_path(), ext)?;
        }

        for type_ in self.types.values() {
            if let GraphQLType::Enum(enum_type) = type_
                && enum_type.values.is_empty() {
                return Err(SchemaBuildError::EnumWithNoVariants {
                    type_name: enum_type.name.to_owned(),
                    location: enum_type.def_location.to_owned(),
                });
            }
        }
        self.check_type_references()?;

        let query_type = self.query_type.take();
        let query_type = self.root_operation_type(query_type, "Query")?
            .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type = self.mutation_type.take();
        let mutation_type = self.root_operation_type(mutation_type, "Mutation")?;
        let subscription_type = self.subscription_type.take();
        let subscription_type =
            self.root_operation_type(subscription_type, "Subscription")?;

        let type_relations = TypeRelations::new(&self.types)?;

        Ok(Schema {
            directive_defs: self.directive_defs,
            meta_fields: meta_fields()?,
            mutation_type,
            query_type,
            subscription_type,
            type_relations,
            types: self.types,
        })
    }

    pub fn new() -> Self {
        Self {
            directive_defs: IndexMap::new(),
            loading_builtins: false,
            mutation_type: None,
            pending_extensions: vec![],
            query_type: None,
            str_load_counter: 0,
            subscription_type: None,
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    fn add_new_type(
        &mut self,
        file_path: &Path,
        position: ast::Pos,
        type_: GraphQLType,
    ) -> Result<()> {
        let type_name = type_.name().to_string();
        let def_location = loc::SourceLocation::from_schema_pos(file_path, position);
        self.check_dunder_name(&type_name, || {
            SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: def_location.clone(),
                type_name: type_name.clone(),
            }
        })?;

        if let Some(conflicting_type) = self.types.get(type_name.as_str()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name,
                def1: conflicting_type.def_location().to_owned(),
                def2: def_location,
            });
        }

        self.types.insert(type_name, type_);
        Ok(())
    }

    fn apply_type_extension(
        &mut self,
        file_path: &Path,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;

        let (type_name, position) = match &ext {
            TypeExtension::Enum(ext) => (ext.name.to_owned(), ext.position),
            TypeExtension::InputObject(ext) => (ext.name.to_owned(), ext.position),
            TypeExtension::Interface(ext) => (ext.name.to_owned(), ext.position),
            TypeExtension::Object(ext) => (ext.name.to_owned(), ext.position),
            TypeExtension::Scalar(ext) => (ext.name.to_owned(), ext.position),
            TypeExtension::Union(ext) => (ext.name.to_owned(), ext.position),
        };
        let extension_loc = loc::SourceLocation::from_schema_pos(file_path, position);
        let loading_builtins = self.loading_builtins;

        let Some(schema_type) = self.types.get_mut(type_name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
                extension_type_loc: extension_loc,
            });
        };

        match (ext, schema_type) {
            (TypeExtension::Enum(ext), GraphQLType::Enum(enum_type)) =>
                add_enum_values(file_path, enum_type, &ext.values),

            (TypeExtension::InputObject(ext), GraphQLType::InputObject(inputobj_type)) =>
                add_input_fields(file_path, inputobj_type, &ext.fields),

            (TypeExtension::Interface(ext), GraphQLType::Interface(iface_type)) => {
                add_fields(file_path, &mut iface_type.0, &ext.fields, loading_builtins)?;
                add_interfaces(&mut iface_type.0, ext.implements_interfaces, &extension_loc)
            },

            (TypeExtension::Object(ext), GraphQLType::Object(obj_type)) => {
                add_fields(file_path, &mut obj_type.0, &ext.fields, loading_builtins)?;
                add_interfaces(&mut obj_type.0, ext.implements_interfaces, &extension_loc)
            },

            (TypeExtension::Scalar(_), GraphQLType::Scalar(_)) => Ok(()),

            (TypeExtension::Union(ext), GraphQLType::Union(union_type)) =>
                add_union_members(union_type, ext.types, &extension_loc),

            (_, schema_type) => Err(SchemaBuildError::InvalidExtensionType {
                type_name,
                schema_type_kind: schema_type.kind().to_string(),
                extension_loc,
            }),
        }
    }

    /// Every named type referenced by a field, parameter or input field must
    /// exist.
    fn check_type_references(&self) -> Result<()> {
        let check = |owner: String, annot: &TypeAnnotation, def_location: &loc::SourceLocation| {
            let referenced = annot.innermost_type_name();
            if self.types.contains_key(referenced) {
                Ok(())
            } else {
                Err(SchemaBuildError::UndefinedTypeReference {
                    referenced_type_name: referenced.to_string(),
                    referencing_def: owner,
                    location: def_location.to_owned(),
                })
            }
        };

        for type_ in self.types.values() {
            if let Some(fields) = type_.fields() {
                for field in fields.values() {
                    let owner = format!("{}.{}", type_.name(), field.name());
                    check(owner.clone(), field.type_annotation(), field.def_location())?;
                    for param in field.parameters().values() {
                        check(
                            format!("{owner}({}:)", param.name()),
                            param.type_annotation(),
                            param.def_location(),
                        )?;
                    }
                }
            }

            if let Some(inputobj_type) = type_.as_input_object() {
                for field in inputobj_type.fields().values() {
                    check(
                        format!("{}.{}", type_.name(), field.name()),
                        field.type_annotation(),
                        field.def_location(),
                    )?;
                }
            }
        }

        for directive in self.directive_defs.values() {
            if let Directive::Custom { name, params, .. } = directive {
                for param in params.values() {
                    check(
                        format!("@{name}({}:)", param.name()),
                        param.type_annotation(),
                        param.def_location(),
                    )?;
                }
            }
        }

        Ok(())
    }

    fn check_dunder_name(
        &self,
        name: &str,
        mk_err: impl FnOnce() -> SchemaBuildError,
    ) -> Result<()> {
        if !self.loading_builtins && name.starts_with("__") {
            Err(mk_err())
        } else {
            Ok(())
        }
    }

    fn inject_missing_builtin_directives(&mut self) {
        for (name, directive) in [
            ("skip", Directive::Skip),
            ("include", Directive::Include),
            ("deprecated", Directive::Deprecated),
            ("specifiedBy", Directive::SpecifiedBy),
        ] {
            self.directive_defs.entry(name.to_string()).or_insert(directive);
        }
    }

    /// Resolve a root operation type from an explicit `schema { ... }` entry,
    /// falling back to an object type with the conventional default name.
    fn root_operation_type(
        &self,
        explicit: Option<NamedTypeDefLocation>,
        default_name: &str,
    ) -> Result<Option<String>> {
        match explicit {
            Some(typedef_loc) => match self.types.get(typedef_loc.type_name.as_str()) {
                Some(GraphQLType::Object(_)) => Ok(Some(typedef_loc.type_name)),
                _ => Err(SchemaBuildError::InvalidRootOperationType {
                    type_name: typedef_loc.type_name,
                    location: typedef_loc.def_location,
                }),
            },
            None => match self.types.get(default_name) {
                Some(GraphQLType::Object(_)) => Ok(Some(default_name.to_string())),
                _ => Ok(None),
            },
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.pending_extensions.push((file_path.to_path_buf(), type_ext));
                Ok(())
            },
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(file_path, directive_def),
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let def_location = loc::SourceLocation::from_schema_pos(file_path, def.position);

        if BUILTIN_DIRECTIVE_NAMES.contains(&def.name.as_str()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name: def.name,
                location: def_location,
            });
        }

        self.check_dunder_name(&def.name, || {
            SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                def_location: def_location.clone(),
                directive_name: def.name.to_string(),
            }
        })?;

        if let Some(Directive::Custom {
            def_location: existing_location,
            ..
        }) = self.directive_defs.get(def.name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name.clone(),
                location1: existing_location.clone(),
                location2: def_location,
            });
        }

        self.directive_defs.insert(def.name.to_string(), Directive::Custom {
            def_location,
            name: def.name.to_string(),
            params: def.arguments.iter().map(|input_val| (
                input_val.name.to_string(),
                Parameter::from_ast(file_path, input_val),
            )).collect(),
        });

        Ok(())
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let root_types = [
            (GraphQLOperationType::Query, schema_def.query),
            (GraphQLOperationType::Mutation, schema_def.mutation),
            (GraphQLOperationType::Subscription, schema_def.subscription),
        ];

        for (operation, type_name) in root_types {
            let Some(type_name) = type_name else {
                continue;
            };
            let typedef_loc = NamedTypeDefLocation::from_pos(
                type_name,
                file_path,
                schema_def.position,
            );
            let slot = match operation {
                GraphQLOperationType::Query => &mut self.query_type,
                GraphQLOperationType::Mutation => &mut self.mutation_type,
                GraphQLOperationType::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_typedef_loc) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing_typedef_loc.clone(),
                    location2: typedef_loc,
                });
            }
            *slot = Some(typedef_loc);
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;

        let loading_builtins = self.loading_builtins;
        let position = match &type_def {
            TypeDefinition::Enum(def) => def.position,
            TypeDefinition::InputObject(def) => def.position,
            TypeDefinition::Interface(def) => def.position,
            TypeDefinition::Object(def) => def.position,
            TypeDefinition::Scalar(def) => def.position,
            TypeDefinition::Union(def) => def.position,
        };
        let def_location = loc::SourceLocation::from_schema_pos(file_path, position);

        let type_ = match type_def {
            TypeDefinition::Enum(def) => {
                let mut enum_type = EnumType {
                    def_location,
                    description: def.description,
                    name: def.name,
                    values: IndexMap::new(),
                };
                add_enum_values(file_path, &mut enum_type, &def.values)?;
                GraphQLType::Enum(Box::new(enum_type))
            },

            TypeDefinition::InputObject(def) => {
                let mut inputobj_type = InputObjectType {
                    def_location,
                    description: def.description,
                    fields: IndexMap::new(),
                    name: def.name,
                };
                add_input_fields(file_path, &mut inputobj_type, &def.fields)?;
                GraphQLType::InputObject(Box::new(inputobj_type))
            },

            TypeDefinition::Interface(def) => {
                let mut data = ObjectOrInterfaceTypeData {
                    def_location: def_location.clone(),
                    description: def.description,
                    fields: IndexMap::new(),
                    interfaces: vec![],
                    name: def.name,
                };
                if def.implements_interfaces.contains(&data.name) {
                    return Err(SchemaBuildError::InvalidSelfImplementingInterface {
                        def_location,
                        interface_name: data.name,
                    });
                }
                add_fields(file_path, &mut data, &def.fields, loading_builtins)?;
                add_interfaces(&mut data, def.implements_interfaces, &def_location)?;
                GraphQLType::Interface(Box::new(InterfaceType(data)))
            },

            TypeDefinition::Object(def) => {
                let mut data = ObjectOrInterfaceTypeData {
                    def_location: def_location.clone(),
                    description: def.description,
                    fields: IndexMap::new(),
                    interfaces: vec![],
                    name: def.name,
                };
                add_fields(file_path, &mut data, &def.fields, loading_builtins)?;
                add_interfaces(&mut data, def.implements_interfaces, &def_location)?;
                GraphQLType::Object(Box::new(ObjectType(data)))
            },

            TypeDefinition::Scalar(def) =>
                GraphQLType::Scalar(Box::new(ScalarType {
                    def_location,
                    description: def.description,
                    name: def.name,
                })),

            TypeDefinition::Union(def) => {
                let mut union_type = UnionType {
                    def_location: def_location.clone(),
                    description: def.description,
                    members: IndexSet::new(),
                    name: def.name,
                };
                add_union_members(&mut union_type, def.types, &def_location)?;
                GraphQLType::Union(Box::new(union_type))
            },
        };

        self.add_new_type(file_path, position, type_)
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn add_enum_values(
    file_path: &Path,
    enum_type: &mut EnumType,
    values: &[ast::schema::EnumValue],
) -> Result<()> {
    for value in values {
        let def_location = loc::SourceLocation::from_schema_pos(file_path, value.position);
        if let Some(existing) = enum_type.values.get(value.name.as_str()) {
            return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                enum_name: enum_type.name.to_owned(),
                enum_def_location: enum_type.def_location.to_owned(),
                value_def1: existing.def_location.to_owned(),
                value_def2: def_location,
            });
        }
        enum_type.values.insert(value.name.to_owned(), EnumValue {
            def_location,
            name: value.name.to_owned(),
        });
    }
    Ok(())
}

fn add_fields(
    file_path: &Path,
    type_data: &mut ObjectOrInterfaceTypeData,
    fields: &[ast::schema::Field],
    loading_builtins: bool,
) -> Result<()> {
    for ast_field in fields {
        let field = Field::from_ast(file_path, ast_field);
        if !loading_builtins {
            if field.name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                    def_location: field.def_location,
                    field_name: field.name,
                    type_name: type_data.name.to_owned(),
                });
            }
            if let Some(param) = field.parameters.values().find(|p| p.name.starts_with("__")) {
                return Err(SchemaBuildError::InvalidDunderPrefixedParamName {
                    def_location: param.def_location.to_owned(),
                    field_name: field.name.to_owned(),
                    param_name: param.name.to_owned(),
                    type_name: type_data.name.to_owned(),
                });
            }
        }

        if let Some(existing) = type_data.fields.get(field.name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: type_data.name.to_owned(),
                field_name: field.name.to_owned(),
                field_def1: existing.def_location.to_owned(),
                field_def2: field.def_location,
            });
        }
        type_data.fields.insert(field.name.to_owned(), field);
    }
    Ok(())
}

fn add_input_fields(
    file_path: &Path,
    inputobj_type: &mut InputObjectType,
    fields: &[ast::schema::InputValue],
) -> Result<()> {
    for input_val in fields {
        let field = InputField::from_ast(file_path, input_val);
        if let Some(existing) = inputobj_type.fields.get(field.name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: inputobj_type.name.to_owned(),
                field_name: field.name.to_owned(),
                field_def1: existing.def_location.to_owned(),
                field_def2: field.def_location,
            });
        }
        inputobj_type.fields.insert(field.name.to_owned(), field);
    }
    Ok(())
}

fn add_interfaces(
    type_data: &mut ObjectOrInterfaceTypeData,
    interface_names: Vec<String>,
    def_location: &loc::SourceLocation,
) -> Result<()> {
    for iface_name in interface_names {
        if type_data.interfaces.contains(&iface_name) {
            return Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                def_location: def_location.to_owned(),
                duplicated_interface_name: iface_name,
                type_name: type_data.name.to_owned(),
            });
        }
        type_data.interfaces.push(iface_name);
    }
    Ok(())
}

fn add_union_members(
    union_type: &mut UnionType,
    member_names: Vec<String>,
    def_location: &loc::SourceLocation,
) -> Result<()> {
    for member_name in member_names {
        if union_type.members.contains(&member_name) {
            return Err(SchemaBuildError::DuplicatedUnionMember {
                type_name: union_type.name.to_owned(),
                member_name,
                location: def_location.to_owned(),
            });
        }
        union_type.members.insert(member_name);
    }
    Ok(())
}

fn meta_fields() -> Result<IndexMap<String, Field>> {
    let ast_doc = ast::schema::parse(introspection::META_FIELDS_SDL)
        .map_err(|err| SchemaBuildError::ParseError {
            file: PathBuf::from("builtin://meta-fields.graphql"),
            err: err.to_string(),
        })?;

    let mut fields = IndexMap::new();
    for def in ast_doc.definitions {
        if let ast::schema::Definition::TypeDefinition(
            ast::schema::TypeDefinition::Object(obj_def),
        ) = def {
            for ast_field in &obj_def.fields {
                let mut field = Field::from_ast(Path::new("builtin://"), ast_field);
                field.def_location = loc::SourceLocation::GraphQLBuiltIn;
                for param in field.parameters.values_mut() {
                    param.def_location = loc::SourceLocation::GraphQLBuiltIn;
                }
                fields.insert(field.name.to_owned(), field);
            }
        }
    }
    Ok(fields)
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the same name: `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("Multiple values with the same name were defined on the `{enum_name}` enum")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        enum_def_location: loc::SourceLocation,
        value_def1: loc::SourceLocation,
        value_def2: loc::SourceLocation,
    },

    #[error("The `{field_name}` field was defined more than once on the `{type_name}` type")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SourceLocation,
        field_def2: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        def_location: loc::SourceLocation,
        duplicated_interface_name: String,
        type_name: String,
    },

    #[error("Multiple definitions of the {operation:?} root operation type were defined")]
    DuplicateOperationDefinition {
        operation: GraphQLOperationType,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("The `{type_name}` union lists `{member_name}` as a member more than once")]
    DuplicatedUnionMember {
        type_name: String,
        member_name: String,
        location: loc::SourceLocation,
    },

    #[error("Enum types must define one or more unique variants")]
    EnumWithNoVariants {
        type_name: String,
        location: loc::SourceLocation,
    },

    #[error("Attempted to extend `{type_name}`, which is not defined")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_type_loc: loc::SourceLocation,
    },

    #[error(
        "Attempted to extend `{type_name}` using an extension of a different \
        kind than its {schema_type_kind} definition"
    )]
    InvalidExtensionType {
        type_name: String,
        schema_type_kind: String,
        extension_loc: loc::SourceLocation,
    },

    #[error("Custom directive names must not start with `__`")]
    InvalidDunderPrefixedDirectiveName {
        def_location: loc::SourceLocation,
        directive_name: String,
    },

    #[error("Field names must not start with `__`")]
    InvalidDunderPrefixedFieldName {
        def_location: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Parameter names must not start with `__`")]
    InvalidDunderPrefixedParamName {
        def_location: loc::SourceLocation,
        field_name: String,
        param_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error("Root operation type `{type_name}` is not a defined object type")]
    InvalidRootOperationType {
        type_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "Interface types may not declare that they implement themselves: The \
        `{interface_name}` interface does just that"
    )]
    InvalidSelfImplementingInterface {
        def_location: loc::SourceLocation,
        interface_name: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema string from {file:?}: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Attempted to redefine a builtin directive: `@{directive_name}`")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error("Invalid relationship between composite types: {0}")]
    TypeRelationsError(#[from] TypeRelationsBuildError),

    #[error("`{referencing_def}` refers to an undefined type: `{referenced_type_name}`")]
    UndefinedTypeReference {
        referenced_type_name: String,
        referencing_def: String,
        location: loc::SourceLocation,
    },
}

/// Represents the file location of a given type's definition in the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SourceLocation,
    pub type_name: String,
}
impl NamedTypeDefLocation {
    pub(crate) fn from_pos(
        type_name: String,
        file: &Path,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::from_schema_pos(file, pos),
            type_name,
        }
    }
}
