/// A context for a schema snapshot which holds an arena allocator.
///
/// For the duration of parsing, indexing, and materializing a schema it's performant and
/// convenient to allocate memory in one chunk for the schema's lifetime. This context
/// represents the lifetime of a schema snapshot and everything derived from it.
///
/// A Schema Context in other words represents the memory one parsed SDL document and the
/// views you derive from it take up. This is efficient since once the source text changes
/// this entire allocated memory can be dropped all at once. Hence however, it's inadvisable
/// to reuse the Schema Context across multiple fetched SDL documents.
pub struct SchemaContext {
    /// An arena allocator that holds the memory allocated for the Schema Context's lifetime
    pub arena: bumpalo::Bump,
}

impl SchemaContext {
    /// Create a new schema context with a preallocated arena.
    pub fn new() -> Self {
        let arena = bumpalo::Bump::new();
        SchemaContext { arena }
    }

    /// Put the value of `item` onto the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, item: T) -> &T {
        self.arena.alloc(item)
    }

    /// Allocate an `&str` slice onto the arena and return a reference to it.
    ///
    /// This is useful when the original slice has an undefined lifetime.
    /// This is typically unnecessary for static slices (`&'static str`) whose lifetimes are as
    /// long as the running program and don't need to be allocated dynamically.
    #[inline]
    pub fn alloc_str(&self, str: &str) -> &str {
        self.arena.alloc_str(str)
    }

    /// Puts a `String` onto the arena and returns a reference to it to tie the `String`'s
    /// lifetime to this schema context without reallocating or copying it.
    #[inline]
    pub fn alloc_string(&self, str: String) -> &str {
        self.arena.alloc(str)
    }
}

impl Default for SchemaContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for creating an empty default of a structure inside a given arena.
pub trait DefaultIn<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self;
}

impl<'a, T> DefaultIn<'a> for T
where
    T: Default,
{
    fn default_in(_arena: &'a bumpalo::Bump) -> Self {
        Self::default()
    }
}
