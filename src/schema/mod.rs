//! # Exploring Schema Definitions
//!
//! The `graphql_explorer::schema` module contains utilities to parse a GraphQL schema from SDL
//! text and to explore it by category. The parsed schema is an immutable, arena-backed snapshot
//! that all other operations read from: classification of named types into the nine viewer
//! categories, per-category counts and listings, flat display records for any one type, and
//! resolution of wrapped type references back to their category for cross-linking.
//!
//! The [`parse_sdl`] function is the entry point. It wraps the external SDL parser and reports
//! absent or unparsable input as `None` rather than an error, so a caller can treat "nothing to
//! show" uniformly:
//!
//! ```
//! use graphql_explorer::schema::*;
//!
//! let ctx = SchemaContext::new();
//! let schema = parse_sdl(&ctx, Some("type Query { hello: String }")).unwrap();
//!
//! let counts = type_counts(schema);
//! assert_eq!(counts.get(Category::Query), 1);
//!
//! let materialized = materialize(schema, "Query").unwrap();
//! assert_eq!(materialized.fields[0].type_text, "String");
//! ```
//!
//! [More information on the Schema struct.](Schema)

pub mod category;
pub mod classify;
pub mod context;
pub mod index;
pub mod materialize;
pub mod reference;
#[allow(clippy::module_inception)]
pub mod schema;
pub mod sdl;

#[cfg(test)]
mod tests;

pub use category::*;
pub use classify::*;
pub use context::*;
pub use index::*;
pub use materialize::*;
pub use reference::*;
pub use schema::*;
pub use sdl::{parse_sdl, try_parse_sdl};
