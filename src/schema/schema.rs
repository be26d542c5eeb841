use super::context::{DefaultIn, SchemaContext};
use bumpalo::collections::Vec;
use bumpalo::Bump;
use hashbrown::hash_map::DefaultHashBuilder;
use hashbrown::HashMap;

/// Schema Definition
///
/// A schema is created from the named type definitions of an SDL document together with the
/// schema's configured root operation type names. In this library the schema is never
/// executable and serves only for metadata and type information, which a viewer reads to
/// group, count, and cross-link types.
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
///
/// The schema is immutable once built. Declaration order of types is retained separately from
/// the lookup table so that enumeration stays deterministic for a given input.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema<'a> {
    pub(crate) query_root: Option<&'a str>,
    pub(crate) mutation_root: Option<&'a str>,
    pub(crate) subscription_root: Option<&'a str>,
    pub(crate) type_names: Vec<'a, &'a str>,
    pub(crate) types:
        hashbrown::HashMap<&'a str, &'a SchemaType<'a>, DefaultHashBuilder, &'a bumpalo::Bump>,
}

impl<'a> DefaultIn<'a> for Schema<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Schema {
            query_root: None,
            mutation_root: None,
            subscription_root: None,
            type_names: Vec::new_in(arena),
            types: HashMap::new_in(arena),
        }
    }
}

impl<'a> Schema<'a> {
    /// Returns whether the schema is a default, empty schema
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
            && self.query_root.is_none()
            && self.mutation_root.is_none()
            && self.subscription_root.is_none()
    }

    /// Returns the name of the root type for query operations, if one is declared
    #[inline]
    pub fn query_root(&self) -> Option<&'a str> {
        self.query_root
    }

    /// Returns the name of the root type for mutation operations, if one is declared
    #[inline]
    pub fn mutation_root(&self) -> Option<&'a str> {
        self.mutation_root
    }

    /// Returns the name of the root type for subscription operations, if one is declared
    #[inline]
    pub fn subscription_root(&self) -> Option<&'a str> {
        self.subscription_root
    }

    /// Retrieves a type definition by name from known schema types.
    #[inline]
    pub fn get_type(&self, name: &str) -> Option<&'a SchemaType<'a>> {
        self.types.get(name).copied()
    }

    /// Checks whether a type of the given name is declared by the schema.
    ///
    /// Built-in scalars are not declarations and aren't contained here; the reference
    /// resolver accounts for them separately.
    #[inline]
    pub fn is_declared(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// All declared type names, in declaration order.
    #[inline]
    pub fn type_names(&self) -> &[&'a str] {
        &self.type_names
    }
}

/// Generic trait for any schema type that carries fields
pub trait SchemaFields<'a>: Sized {
    /// Add a new [SchemaField] to the list of fields
    fn add_field(&mut self, field: SchemaField<'a>);

    /// Get the list of all fields, in declaration order
    fn fields(&self) -> &[SchemaField<'a>];

    /// Get a known field by name
    fn field(&self, name: &str) -> Option<&SchemaField<'a>> {
        self.fields().iter().find(|field| field.name == name)
    }
}

/// Generic trait for any schema type that implements interfaces
pub trait SchemaInterfaces<'a>: Sized {
    /// Add a new interface name to the list of implemented interfaces
    fn add_interface(&mut self, interface: &'a str);

    /// Get the list of implemented interface names, in declaration order
    fn interfaces(&self) -> &[&'a str];

    /// Checks whether the interface of the given name is implemented
    #[inline]
    fn implements_interface(&self, name: &str) -> bool {
        self.interfaces().iter().any(|interface| *interface == name)
    }
}

/// An Object type definition.
///
/// Most types in GraphQL are objects and define a set of fields and the interfaces they
/// implement.
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaObject<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub(crate) fields: Vec<'a, SchemaField<'a>>,
    pub(crate) interfaces: Vec<'a, &'a str>,
}

impl<'a> SchemaObject<'a> {
    #[inline]
    pub fn new(ctx: &'a SchemaContext, name: &'a str, description: Option<&'a str>) -> Self {
        SchemaObject {
            name,
            description,
            fields: Vec::new_in(&ctx.arena),
            interfaces: Vec::new_in(&ctx.arena),
        }
    }
}

impl<'a> SchemaFields<'a> for SchemaObject<'a> {
    fn add_field(&mut self, field: SchemaField<'a>) {
        self.fields.push(field);
    }

    #[inline]
    fn fields(&self) -> &[SchemaField<'a>] {
        &self.fields
    }
}

impl<'a> SchemaInterfaces<'a> for SchemaObject<'a> {
    fn add_interface(&mut self, interface: &'a str) {
        self.interfaces.push(interface);
    }

    #[inline]
    fn interfaces(&self) -> &[&'a str] {
        &self.interfaces
    }
}

/// An Interface type definition.
///
/// Any object or other interfaces may implement one or more interfaces and must then adhere
/// to the definition of this interface.
/// [Reference](https://spec.graphql.org/October2021/#sec-Interfaces)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaInterface<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub(crate) fields: Vec<'a, SchemaField<'a>>,
    pub(crate) interfaces: Vec<'a, &'a str>,
}

impl<'a> SchemaInterface<'a> {
    #[inline]
    pub fn new(ctx: &'a SchemaContext, name: &'a str, description: Option<&'a str>) -> Self {
        SchemaInterface {
            name,
            description,
            fields: Vec::new_in(&ctx.arena),
            interfaces: Vec::new_in(&ctx.arena),
        }
    }
}

impl<'a> SchemaFields<'a> for SchemaInterface<'a> {
    fn add_field(&mut self, field: SchemaField<'a>) {
        self.fields.push(field);
    }

    #[inline]
    fn fields(&self) -> &[SchemaField<'a>] {
        &self.fields
    }
}

impl<'a> SchemaInterfaces<'a> for SchemaInterface<'a> {
    fn add_interface(&mut self, interface: &'a str) {
        self.interfaces.push(interface);
    }

    #[inline]
    fn interfaces(&self) -> &[&'a str] {
        &self.interfaces
    }
}

/// An object Field type definition.
///
/// A field is like a function that given its arguments as input values produces an output
/// value. The output type is retained both structurally, as a [TypeRef], and as the literal
/// wrapped source text (`[Post!]!`) that a viewer displays verbatim.
/// [Reference](https://spec.graphql.org/October2021/#FieldsDefinition)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub output_type: &'a TypeRef<'a>,
    pub type_text: &'a str,
    /// `Some("")` for a bare `@deprecated` directive; the empty reason still marks the field
    /// as deprecated.
    pub deprecated: Option<&'a str>,
    pub(crate) arguments: Vec<'a, SchemaInputField<'a>>,
}

impl<'a> SchemaField<'a> {
    #[inline]
    pub fn new(
        ctx: &'a SchemaContext,
        name: &'a str,
        output_type: &'a TypeRef<'a>,
        type_text: &'a str,
    ) -> Self {
        SchemaField {
            name,
            description: None,
            output_type,
            type_text,
            deprecated: None,
            arguments: Vec::new_in(&ctx.arena),
        }
    }

    pub fn add_argument(&mut self, argument: SchemaInputField<'a>) {
        self.arguments.push(argument);
    }

    /// The field's arguments, in declaration order
    #[inline]
    pub fn arguments(&self) -> &[SchemaInputField<'a>] {
        &self.arguments
    }

    #[inline]
    pub fn argument(&self, name: &str) -> Option<&SchemaInputField<'a>> {
        self.arguments.iter().find(|argument| argument.name == name)
    }
}

/// An input field definition, used both for field arguments and input object fields.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SchemaInputField<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub input_type: &'a TypeRef<'a>,
    pub type_text: &'a str,
    pub deprecated: Option<&'a str>,
}

/// A Union type definition.
///
/// A union contains a list of possible member types that can be returned in its stead when
/// it's defined as an output type. Members are retained by name only; a viewer discovers them
/// through the category listing rather than through the union's own record.
/// [Reference](https://spec.graphql.org/October2021/#sec-Unions)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaUnion<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub(crate) members: Vec<'a, &'a str>,
}

impl<'a> SchemaUnion<'a> {
    #[inline]
    pub fn new(ctx: &'a SchemaContext, name: &'a str, description: Option<&'a str>) -> Self {
        SchemaUnion {
            name,
            description,
            members: Vec::new_in(&ctx.arena),
        }
    }

    pub fn add_member(&mut self, member: &'a str) {
        self.members.push(member);
    }

    /// The union's member type names, in declaration order
    #[inline]
    pub fn members(&self) -> &[&'a str] {
        &self.members
    }
}

/// A Scalar type definition.
///
/// Scalars represent primitive leaf values in GraphQL.
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaScalar<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
}

impl<'a> SchemaScalar<'a> {
    #[inline]
    pub fn new(name: &'a str, description: Option<&'a str>) -> Self {
        SchemaScalar { name, description }
    }
}

/// An Enum type definition with its values in declaration order.
#[derive(Debug, PartialEq, Clone)]
pub struct SchemaEnum<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub(crate) values: Vec<'a, SchemaEnumValue<'a>>,
}

impl<'a> SchemaEnum<'a> {
    #[inline]
    pub fn new(ctx: &'a SchemaContext, name: &'a str, description: Option<&'a str>) -> Self {
        SchemaEnum {
            name,
            description,
            values: Vec::new_in(&ctx.arena),
        }
    }

    pub fn add_value(&mut self, value: SchemaEnumValue<'a>) {
        self.values.push(value);
    }

    /// The enum's values, in declaration order
    #[inline]
    pub fn values(&self) -> &[SchemaEnumValue<'a>] {
        &self.values
    }
}

/// A single enum value with its deprecation metadata.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SchemaEnumValue<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub deprecated: Option<&'a str>,
}

/// An Input Object type definition.
///
/// Inputs, such as arguments, may sometimes be nested and accept objects that must adhere to
/// the shape of an Input Object definition.
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Objects)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaInputObject<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub(crate) fields: Vec<'a, SchemaInputField<'a>>,
}

impl<'a> SchemaInputObject<'a> {
    #[inline]
    pub fn new(ctx: &'a SchemaContext, name: &'a str, description: Option<&'a str>) -> Self {
        SchemaInputObject {
            name,
            description,
            fields: Vec::new_in(&ctx.arena),
        }
    }

    pub fn add_field(&mut self, field: SchemaInputField<'a>) {
        self.fields.push(field);
    }

    /// The input object's fields, in declaration order
    #[inline]
    pub fn fields(&self) -> &[SchemaInputField<'a>] {
        &self.fields
    }
}

/// A named type enum that represents all possible GraphQL definition types.
///
/// The enum is closed over the six structural kinds, so every consumer that matches on it is
/// forced to handle each kind.
/// [Reference](https://spec.graphql.org/October2021/#sec-Types)
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SchemaType<'a> {
    Object(&'a SchemaObject<'a>),
    Interface(&'a SchemaInterface<'a>),
    Union(&'a SchemaUnion<'a>),
    Enum(&'a SchemaEnum<'a>),
    Scalar(&'a SchemaScalar<'a>),
    InputObject(&'a SchemaInputObject<'a>),
}

impl<'a> SchemaType<'a> {
    #[inline]
    pub fn name(&self) -> &'a str {
        match self {
            SchemaType::Object(x) => x.name,
            SchemaType::Interface(x) => x.name,
            SchemaType::Union(x) => x.name,
            SchemaType::Enum(x) => x.name,
            SchemaType::Scalar(x) => x.name,
            SchemaType::InputObject(x) => x.name,
        }
    }

    #[inline]
    pub fn description(&self) -> Option<&'a str> {
        match self {
            SchemaType::Object(x) => x.description,
            SchemaType::Interface(x) => x.description,
            SchemaType::Union(x) => x.description,
            SchemaType::Enum(x) => x.description,
            SchemaType::Scalar(x) => x.description,
            SchemaType::InputObject(x) => x.description,
        }
    }

    pub fn object(&self) -> Option<&'a SchemaObject<'a>> {
        match self {
            SchemaType::Object(x) => Some(x),
            _ => None,
        }
    }

    pub fn interface(&self) -> Option<&'a SchemaInterface<'a>> {
        match self {
            SchemaType::Interface(x) => Some(x),
            _ => None,
        }
    }

    pub fn union_type(&self) -> Option<&'a SchemaUnion<'a>> {
        match self {
            SchemaType::Union(x) => Some(x),
            _ => None,
        }
    }
}

/// A structural type reference as written on a field or argument.
///
/// List and non-null wrappers are retained so that consumers interested in more than the bare
/// name (nullability badges, list depth) don't need to re-derive them from the rendered
/// string.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TypeRef<'a> {
    Named(&'a str),
    List(&'a TypeRef<'a>),
    NonNull(&'a TypeRef<'a>),
}

impl<'a> TypeRef<'a> {
    /// The innermost bare type name, with all wrappers stripped.
    #[inline]
    pub fn name(&self) -> &'a str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(of_type) => of_type.name(),
            TypeRef::NonNull(of_type) => of_type.name(),
        }
    }
}

impl<'a> std::fmt::Display for TypeRef<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeRef::Named(name) => write!(f, "{}", name),
            TypeRef::List(of_type) => write!(f, "[{}]", of_type),
            TypeRef::NonNull(of_type) => write!(f, "{}!", of_type),
        }
    }
}
