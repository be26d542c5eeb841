use super::category::Category;
use super::classify::classify;
use super::schema::{
    Schema, SchemaFields, SchemaInputField, SchemaInterfaces, SchemaType,
};

#[cfg(feature = "json")]
use serde::Serialize;

/// A denormalized, display-ready view of one named type.
///
/// Everything a viewer renders for a type lives here as plain data: the category badge, the
/// implements-list for composite types, and a flat field table. Enum values are presented
/// through the same field shape so all categories share one table layout.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct MaterializedType<'a> {
    pub name: &'a str,
    pub category: Category,
    /// Empty when the type carries no description.
    pub description: &'a str,
    pub interfaces: Vec<&'a str>,
    pub fields: Vec<Field<'a>>,
}

/// One row of a materialized type's field table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct Field<'a> {
    pub name: &'a str,
    /// The literal wrapped type reference (`[Post!]!`), or empty for synthetic enum-value
    /// rows. Unwrapping is deferred to the reference resolver until a cross-link is needed.
    #[cfg_attr(feature = "json", serde(rename = "type"))]
    pub type_text: &'a str,
    pub args: Vec<Argument<'a>>,
    pub description: &'a str,
    /// `Some("")` when the field is deprecated without a reason; `None` when it isn't
    /// deprecated at all.
    #[cfg_attr(feature = "json", serde(rename = "deprecationReason"))]
    pub deprecation_reason: Option<&'a str>,
}

/// One argument of a field row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct Argument<'a> {
    pub name: &'a str,
    #[cfg_attr(feature = "json", serde(rename = "type"))]
    pub type_text: &'a str,
    pub description: &'a str,
    #[cfg_attr(feature = "json", serde(rename = "deprecationReason"))]
    pub deprecation_reason: Option<&'a str>,
}

/// Converts one declared type into its display record.
///
/// Returns `None` when no type of the given name is declared. That's not an error: a viewer
/// navigating to a stale or mistyped selection renders its "no data" state from this.
pub fn materialize<'a>(schema: &Schema<'a>, name: &str) -> Option<MaterializedType<'a>> {
    let schema_type = schema.get_type(name)?;
    let category = classify(schema, name)?;

    let (interfaces, fields) = match schema_type {
        SchemaType::Object(object) => composite_rows(*object),
        SchemaType::Interface(interface) => composite_rows(*interface),
        SchemaType::Enum(enum_type) => {
            let fields = enum_type
                .values()
                .iter()
                .map(|value| Field {
                    name: value.name,
                    type_text: "",
                    args: Vec::new(),
                    description: value.description.unwrap_or(""),
                    deprecation_reason: value.deprecated,
                })
                .collect();
            (Vec::new(), fields)
        }
        SchemaType::InputObject(input_object) => {
            let fields = input_object.fields().iter().map(input_field_row).collect();
            (Vec::new(), fields)
        }
        // Union members are discovered through the category listing instead.
        SchemaType::Union(_) | SchemaType::Scalar(_) => (Vec::new(), Vec::new()),
    };

    Some(MaterializedType {
        name: schema_type.name(),
        category,
        description: schema_type.description().unwrap_or(""),
        interfaces,
        fields,
    })
}

fn composite_rows<'a, T>(composite: &T) -> (Vec<&'a str>, Vec<Field<'a>>)
where
    T: SchemaFields<'a> + SchemaInterfaces<'a>,
{
    let interfaces = composite.interfaces().to_vec();
    let fields = composite
        .fields()
        .iter()
        .map(|field| Field {
            name: field.name,
            type_text: field.type_text,
            args: field.arguments().iter().map(argument_row).collect(),
            description: field.description.unwrap_or(""),
            deprecation_reason: field.deprecated,
        })
        .collect();
    (interfaces, fields)
}

fn input_field_row<'a>(input_field: &SchemaInputField<'a>) -> Field<'a> {
    Field {
        name: input_field.name,
        type_text: input_field.type_text,
        args: Vec::new(),
        description: input_field.description.unwrap_or(""),
        deprecation_reason: input_field.deprecated,
    }
}

fn argument_row<'a>(argument: &SchemaInputField<'a>) -> Argument<'a> {
    Argument {
        name: argument.name,
        type_text: argument.type_text,
        description: argument.description.unwrap_or(""),
        deprecation_reason: argument.deprecated,
    }
}
