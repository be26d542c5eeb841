use crate::error::Error;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "json")]
use serde::Serialize;

/// The classification bucket of a named type, used for grouping and navigation.
///
/// Exactly one category applies to any named type. The three root categories take precedence
/// over structural kind: a type whose name is configured as a root operation type is
/// classified under its operation, not under `object`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "json", derive(Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "kebab-case"))]
pub enum Category {
    Query,
    Mutation,
    Subscription,
    Object,
    Interface,
    Enum,
    Scalar,
    Union,
    InputObject,
}

impl Category {
    /// All categories in canonical order, root categories first.
    pub const ALL: [Category; 9] = [
        Category::Query,
        Category::Mutation,
        Category::Subscription,
        Category::Object,
        Category::Interface,
        Category::Enum,
        Category::Scalar,
        Category::Union,
        Category::InputObject,
    ];

    /// The categories of the three root operation types.
    pub const ROOT_CATEGORIES: [Category; 3] =
        [Category::Query, Category::Mutation, Category::Subscription];

    /// The categories of the six named type kinds.
    pub const TYPE_CATEGORIES: [Category; 6] = [
        Category::Object,
        Category::Interface,
        Category::Enum,
        Category::Scalar,
        Category::Union,
        Category::InputObject,
    ];

    /// The category's stable token, as used in viewer URLs and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Query => "query",
            Category::Mutation => "mutation",
            Category::Subscription => "subscription",
            Category::Object => "object",
            Category::Interface => "interface",
            Category::Enum => "enum",
            Category::Scalar => "scalar",
            Category::Union => "union",
            Category::InputObject => "input-object",
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        matches!(
            self,
            Category::Query | Category::Mutation | Category::Subscription
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Categories round-trip through their tokens since viewers carry the current selection in
/// URL state.
impl FromStr for Category {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|category| category.as_str() == input)
            .copied()
            .ok_or_else(|| Error::new(format!("Unknown category `{}`.", input), None))
    }
}

/// The per-category population of a schema.
///
/// Recomputed as a whole on every schema rebuild, never updated incrementally. The counts over
/// all nine categories sum to the number of declared named types: a type whose name matches a
/// configured root operation type is counted once, under its root category.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TypeCounts([usize; Category::ALL.len()]);

impl TypeCounts {
    pub(crate) fn record(&mut self, category: Category) {
        self.0[category as usize] += 1;
    }

    /// The number of types classified under the given category.
    #[inline]
    pub fn get(&self, category: Category) -> usize {
        self.0[category as usize]
    }

    /// The total number of classified types across all categories.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Iterate all categories and their counts in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.iter().map(move |category| (*category, self.get(*category)))
    }
}

#[cfg(feature = "json")]
impl Serialize for TypeCounts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for (category, count) in self.iter() {
            map.serialize_entry(category.as_str(), &count)?;
        }
        map.end()
    }
}
