//! `graphql_explorer`
//! =========
//!
//! _Categorized, navigable views over GraphQL Schema Definition Language documents._
//!
//! The **`graphql_explorer`** library follows two goals:
//!
//! - To support a pleasant-to-use API for exploring GraphQL schemas by category
//! - To stay a pure, allocation-friendly transformation from SDL text to display data
//!
//! In short, _surprise!_ The `graphql_explorer` crate while handling a part of GraphQL does
//! not aim to parse, validate, or execute the GraphQL Query Language. Grammar-level handling
//! of SDL documents is a one-off operation that's delegated to an external parser, and
//! executing operations against a schema is a server concern this crate never touches.
//!
//! Instead, the focus is everything a schema viewer needs between raw SDL text and the
//! screen: an indexed model of every named type, a split into semantically meaningful
//! categories (the three root operation types and the six named type kinds), per-category
//! counts and listings, flat display records for any one type, and resolution of wrapped
//! type references (`[Post!]!`) back to the category of the type they name, so a viewer can
//! jump from a field's type annotation to that type's definition. Every operation is a pure,
//! synchronous function over an immutable schema snapshot.
//!
//! [A good place to start learning more about this crate is the `schema` module...](schema)

pub mod error;
pub mod schema;

pub use bumpalo;
