use super::category::{Category, TypeCounts};
use super::classify::classify;
use super::schema::Schema;

#[cfg(feature = "json")]
use serde::Serialize;

/// A single row of a per-category type listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct TypeListing<'a> {
    pub name: &'a str,
    /// Empty when the type carries no description; the viewer decides its own placeholder.
    pub description: &'a str,
}

/// Lists the names and descriptions of all types belonging to the given category, in
/// declaration order.
pub fn types_by_category<'a>(schema: &Schema<'a>, category: Category) -> Vec<TypeListing<'a>> {
    schema
        .type_names()
        .iter()
        .copied()
        .filter(|name| classify(schema, name) == Some(category))
        .filter_map(|name| schema.get_type(name))
        .map(|schema_type| TypeListing {
            name: schema_type.name(),
            description: schema_type.description().unwrap_or(""),
        })
        .collect()
}

/// Counts the types belonging to each category in a single pass over all declared names.
///
/// A type whose name matches a configured root operation type is counted under the root
/// category only, so the nine counts sum to the number of declared types.
pub fn type_counts(schema: &Schema<'_>) -> TypeCounts {
    let mut counts = TypeCounts::default();
    for name in schema.type_names() {
        if let Some(category) = classify(schema, name) {
            counts.record(category);
        }
    }
    counts
}
