use super::category::Category;
use super::schema::{Schema, SchemaType};

/// Determines the category of a declared type.
///
/// Root-name comparison is an explicit, ordered rule that runs before the structural kind is
/// inspected: a type that is structurally an object but is also the schema's configured query
/// root is classified as [Category::Query], not [Category::Object]. Returns `None` only for
/// names the schema doesn't declare, which callers are expected to guard against (see
/// [super::reference::resolve_reference]).
pub fn classify(schema: &Schema<'_>, name: &str) -> Option<Category> {
    if schema.query_root() == Some(name) {
        return Some(Category::Query);
    }
    if schema.mutation_root() == Some(name) {
        return Some(Category::Mutation);
    }
    if schema.subscription_root() == Some(name) {
        return Some(Category::Subscription);
    }

    match schema.get_type(name)? {
        SchemaType::Object(_) => Some(Category::Object),
        SchemaType::Interface(_) => Some(Category::Interface),
        SchemaType::Union(_) => Some(Category::Union),
        SchemaType::Enum(_) => Some(Category::Enum),
        SchemaType::Scalar(_) => Some(Category::Scalar),
        SchemaType::InputObject(_) => Some(Category::InputObject),
    }
}
