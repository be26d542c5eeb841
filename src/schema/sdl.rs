//! # SDL Parser Adapter
//!
//! Grammar-level handling of SDL text is delegated to the external `graphql_parser` crate;
//! this module only converts its AST into the arena-backed [Schema] model. The adapter is
//! deliberately permissive: anything the external parser accepts is converted without further
//! validation, since the schema here is viewed, never executed.

use self::private::SdlBuilder;
use super::context::SchemaContext;
use super::schema::Schema;
use crate::error::{Error, ErrorType, Result};

/// Parses SDL text into a [Schema] snapshot allocated in the given context.
///
/// Absent input, empty input, and input the external parser rejects all come out as `None`.
/// Distinguishing "nothing fetched yet" from "fetched but unparsable" is the caller's
/// concern, tracked by its own fetch status; this function doesn't know or care which case
/// it's handed.
pub fn parse_sdl<'a>(ctx: &'a SchemaContext, source: Option<&str>) -> Option<&'a Schema<'a>> {
    source.and_then(|source| try_parse_sdl(ctx, source).ok())
}

/// Parses SDL text into a [Schema] snapshot, surfacing the failure cause.
///
/// This is the fallible counterpart of [parse_sdl] for callers that want to log or display
/// why a document was rejected. Grammar failures carry the external parser's diagnostic as
/// error context.
pub fn try_parse_sdl<'a>(ctx: &'a SchemaContext, source: &str) -> Result<&'a Schema<'a>> {
    let document = graphql_parser::parse_schema::<String>(source).map_err(|error| {
        Error::new_with_context(
            "Schema document failed to parse.".to_string(),
            error.to_string(),
            Some(ErrorType::Syntax),
        )
    })?;

    let schema = SdlBuilder::new(ctx).build_schema(&document);
    if schema.is_empty() {
        return Err(Error::new(
            "Schema document contains no type definitions.",
            Some(ErrorType::Schema),
        ));
    }

    Ok(ctx.alloc(schema))
}

pub(crate) mod private {
    use graphql_parser::query::Value;
    use graphql_parser::schema::{
        Definition, Directive, Document, EnumType, Field as SdlField, InputObjectType,
        InputValue, InterfaceType, ObjectType, ScalarType, SchemaDefinition,
        Type as SdlType, TypeDefinition, UnionType,
    };

    use super::super::context::{DefaultIn, SchemaContext};
    use super::super::schema::*;

    /// Private builder that converts the external parser's AST into the arena-backed model.
    pub(crate) struct SdlBuilder<'arena> {
        pub(crate) ctx: &'arena SchemaContext,
    }

    impl<'arena> SdlBuilder<'arena> {
        pub(crate) fn new(ctx: &'arena SchemaContext) -> Self {
            SdlBuilder { ctx }
        }

        pub(crate) fn build_schema(&self, document: &Document<'_, String>) -> Schema<'arena> {
            let mut schema = Schema::default_in(&self.ctx.arena);
            let mut schema_def: Option<&SchemaDefinition<'_, String>> = None;

            for definition in &document.definitions {
                match definition {
                    Definition::SchemaDefinition(def) => {
                        // First definition wins; repeated definitions are a validation
                        // concern the external parser doesn't enforce.
                        schema_def = schema_def.or(Some(def));
                    }
                    Definition::TypeDefinition(type_def) => {
                        let schema_type: SchemaType<'arena> = type_def.on_create(self);
                        let name = schema_type.name();
                        if !schema.types.contains_key(name) {
                            schema.types.insert(name, self.ctx.alloc(schema_type));
                            schema.type_names.push(name);
                        }
                    }
                    // Extensions and directive definitions carry nothing the viewer shows.
                    Definition::TypeExtension(_) | Definition::DirectiveDefinition(_) => {}
                }
            }

            // Root operation type names default to Query/Mutation/Subscription when no
            // schema definition names them, and are only retained when the named type is
            // actually declared.
            let query_name = schema_def.map_or(Some("Query"), |def| def.query.as_deref());
            let mutation_name = schema_def.map_or(Some("Mutation"), |def| def.mutation.as_deref());
            let subscription_name =
                schema_def.map_or(Some("Subscription"), |def| def.subscription.as_deref());

            schema.query_root = query_name.and_then(|name| self.declared_name(&schema, name));
            schema.mutation_root = mutation_name.and_then(|name| self.declared_name(&schema, name));
            schema.subscription_root =
                subscription_name.and_then(|name| self.declared_name(&schema, name));

            schema
        }

        fn declared_name(&self, schema: &Schema<'arena>, name: &str) -> Option<&'arena str> {
            schema.types.get_key_value(name).map(|(key, _)| *key)
        }

        fn description(&self, description: &Option<String>) -> Option<&'arena str> {
            description.as_deref().map(|text| self.ctx.alloc_str(text))
        }

        /// Extracts the `@deprecated` directive's reason. A directive without a reason still
        /// marks the element as deprecated, which the empty reason preserves.
        fn deprecation(&self, directives: &[Directive<'_, String>]) -> Option<&'arena str> {
            directives
                .iter()
                .find(|directive| directive.name == "deprecated")
                .map(|directive| {
                    directive
                        .arguments
                        .iter()
                        .find(|(name, _)| name.as_str() == "reason")
                        .and_then(|(_, value)| match value {
                            Value::String(reason) => Some(self.ctx.alloc_str(reason)),
                            _ => None,
                        })
                        .unwrap_or("")
                })
        }

        fn build_type_ref(&self, sdl_type: &SdlType<'_, String>) -> &'arena TypeRef<'arena> {
            let type_ref = match sdl_type {
                SdlType::NamedType(name) => TypeRef::Named(self.ctx.alloc_str(name)),
                SdlType::ListType(of_type) => TypeRef::List(self.build_type_ref(of_type)),
                SdlType::NonNullType(of_type) => TypeRef::NonNull(self.build_type_ref(of_type)),
            };

            self.ctx.alloc(type_ref)
        }

        fn build_field(&self, field: &SdlField<'_, String>) -> SchemaField<'arena> {
            let output_type = self.build_type_ref(&field.field_type);
            let mut schema_field = SchemaField::new(
                self.ctx,
                self.ctx.alloc_str(&field.name),
                output_type,
                self.ctx.alloc_string(output_type.to_string()),
            );
            schema_field.description = self.description(&field.description);
            schema_field.deprecated = self.deprecation(&field.directives);
            for argument in &field.arguments {
                schema_field.add_argument(self.build_input_field(argument));
            }

            schema_field
        }

        fn build_input_field(&self, value: &InputValue<'_, String>) -> SchemaInputField<'arena> {
            let input_type = self.build_type_ref(&value.value_type);
            SchemaInputField {
                name: self.ctx.alloc_str(&value.name),
                description: self.description(&value.description),
                input_type,
                type_text: self.ctx.alloc_string(input_type.to_string()),
                deprecated: self.deprecation(&value.directives),
            }
        }
    }

    /// (Private) Trait for converting one external AST definition into its model counterpart.
    pub(crate) trait BuildSchemaType<'arena, T>: Sized {
        fn on_create(&self, builder: &SdlBuilder<'arena>) -> T;
    }

    impl<'arena, 'd> BuildSchemaType<'arena, SchemaType<'arena>> for TypeDefinition<'d, String> {
        #[inline]
        fn on_create(&self, builder: &SdlBuilder<'arena>) -> SchemaType<'arena> {
            match self {
                TypeDefinition::Object(object) => {
                    SchemaType::Object(builder.ctx.alloc(object.on_create(builder)))
                }
                TypeDefinition::Interface(interface) => {
                    SchemaType::Interface(builder.ctx.alloc(interface.on_create(builder)))
                }
                TypeDefinition::Union(union_type) => {
                    SchemaType::Union(builder.ctx.alloc(union_type.on_create(builder)))
                }
                TypeDefinition::Enum(enum_type) => {
                    SchemaType::Enum(builder.ctx.alloc(enum_type.on_create(builder)))
                }
                TypeDefinition::Scalar(scalar) => {
                    SchemaType::Scalar(builder.ctx.alloc(scalar.on_create(builder)))
                }
                TypeDefinition::InputObject(input_object) => {
                    SchemaType::InputObject(builder.ctx.alloc(input_object.on_create(builder)))
                }
            }
        }
    }

    impl<'arena, 'd> BuildSchemaType<'arena, SchemaObject<'arena>> for ObjectType<'d, String> {
        #[inline]
        fn on_create(&self, builder: &SdlBuilder<'arena>) -> SchemaObject<'arena> {
            let name = builder.ctx.alloc_str(&self.name);
            let mut object = SchemaObject::new(builder.ctx, name, builder.description(&self.description));
            for interface in &self.implements_interfaces {
                object.add_interface(builder.ctx.alloc_str(interface));
            }
            for field in &self.fields {
                object.add_field(builder.build_field(field));
            }
            object
        }
    }

    impl<'arena, 'd> BuildSchemaType<'arena, SchemaInterface<'arena>> for InterfaceType<'d, String> {
        #[inline]
        fn on_create(&self, builder: &SdlBuilder<'arena>) -> SchemaInterface<'arena> {
            let name = builder.ctx.alloc_str(&self.name);
            let mut interface =
                SchemaInterface::new(builder.ctx, name, builder.description(&self.description));
            for implemented in &self.implements_interfaces {
                interface.add_interface(builder.ctx.alloc_str(implemented));
            }
            for field in &self.fields {
                interface.add_field(builder.build_field(field));
            }
            interface
        }
    }

    impl<'arena, 'd> BuildSchemaType<'arena, SchemaUnion<'arena>> for UnionType<'d, String> {
        #[inline]
        fn on_create(&self, builder: &SdlBuilder<'arena>) -> SchemaUnion<'arena> {
            let name = builder.ctx.alloc_str(&self.name);
            let mut schema_union =
                SchemaUnion::new(builder.ctx, name, builder.description(&self.description));
            for member in &self.types {
                schema_union.add_member(builder.ctx.alloc_str(member));
            }
            schema_union
        }
    }

    impl<'arena, 'd> BuildSchemaType<'arena, SchemaEnum<'arena>> for EnumType<'d, String> {
        #[inline]
        fn on_create(&self, builder: &SdlBuilder<'arena>) -> SchemaEnum<'arena> {
            let name = builder.ctx.alloc_str(&self.name);
            let mut enum_type =
                SchemaEnum::new(builder.ctx, name, builder.description(&self.description));
            for value in &self.values {
                enum_type.add_value(SchemaEnumValue {
                    name: builder.ctx.alloc_str(&value.name),
                    description: builder.description(&value.description),
                    deprecated: builder.deprecation(&value.directives),
                });
            }
            enum_type
        }
    }

    impl<'arena, 'd> BuildSchemaType<'arena, SchemaScalar<'arena>> for ScalarType<'d, String> {
        #[inline]
        fn on_create(&self, builder: &SdlBuilder<'arena>) -> SchemaScalar<'arena> {
            SchemaScalar::new(
                builder.ctx.alloc_str(&self.name),
                builder.description(&self.description),
            )
        }
    }

    impl<'arena, 'd> BuildSchemaType<'arena, SchemaInputObject<'arena>> for InputObjectType<'d, String> {
        #[inline]
        fn on_create(&self, builder: &SdlBuilder<'arena>) -> SchemaInputObject<'arena> {
            let name = builder.ctx.alloc_str(&self.name);
            let mut input_object =
                SchemaInputObject::new(builder.ctx, name, builder.description(&self.description));
            for field in &self.fields {
                input_object.add_field(builder.build_input_field(field));
            }
            input_object
        }
    }
}
