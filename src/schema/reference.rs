use super::category::Category;
use super::classify::classify;
use super::schema::Schema;

/// The scalars every GraphQL schema provides without declaring them.
pub const BUILTIN_SCALARS: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

/// A type reference with its wrapper decoration stripped off.
///
/// The wrapper shape is retained beside the bare name so that consumers interested in it
/// (nullability badges, list depth) don't need to re-derive it from the raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrippedRef<'a> {
    /// The bare type name with all decoration removed.
    pub name: &'a str,
    /// How many list wrappers surrounded the name.
    pub list_depth: usize,
    /// Whether the outermost reference was non-null.
    pub non_null: bool,
}

#[inline]
fn is_decoration(c: char) -> bool {
    matches!(c, '[' | ']' | '!' | ':' | ' ')
}

/// Strips GraphQL wrapper syntax from a raw type reference.
///
/// The raw reference may be a pure type reference (`[String!]!`) or a label fragment taken
/// straight from rendered output (`: [String!]!`); both strip to the same bare name. Malformed
/// input degrades to an empty name rather than failing.
pub fn strip_type_ref(raw: &str) -> StrippedRef<'_> {
    let list_depth = raw.matches('[').count();
    let non_null = raw.trim_end().ends_with('!');

    let start = raw.find(|c| !is_decoration(c)).unwrap_or(raw.len());
    let end = raw[start..]
        .find(is_decoration)
        .map_or(raw.len(), |offset| start + offset);

    StrippedRef {
        name: &raw[start..end],
        list_depth,
        non_null,
    }
}

/// Resolves a raw, possibly wrapped type reference to the category of the type it names.
///
/// Declared types take precedence and are classified as usual; otherwise a bare name matching
/// one of the [BUILTIN_SCALARS] resolves to [Category::Scalar] without a schema lookup. Any
/// other name returns `None`, which only happens for references that didn't originate from
/// the schema the caller passed in.
pub fn resolve_reference(schema: &Schema<'_>, raw: &str) -> Option<Category> {
    let stripped = strip_type_ref(raw);
    if schema.is_declared(stripped.name) {
        classify(schema, stripped.name)
    } else if BUILTIN_SCALARS.contains(&stripped.name) {
        Some(Category::Scalar)
    } else {
        None
    }
}
