use super::*;
use crate::error::ErrorType;
use indoc::indoc;
use std::str::FromStr;

const KITCHEN_SINK: &str = indoc! {r#"
    schema {
        query: RootQuery
        mutation: RootMutation
    }

    "The entry point."
    type RootQuery {
        node(id: ID!): Node
        posts: [Post!]!
    }

    type RootMutation {
        publish(input: PublishInput!): Post
    }

    "A globally identifiable object."
    interface Node {
        id: ID!
    }

    type Post implements Node {
        id: ID!
        title: String!
        status: Status
        author: Author
    }

    type Author implements Node {
        id: ID!
        name: String
    }

    union SearchResult = Post | Author

    enum Status {
        "Visible to everyone."
        PUBLISHED
        DRAFT @deprecated(reason: "Use UNLISTED instead.")
        UNLISTED
    }

    scalar DateTime

    input PublishInput {
        title: String!
        at: DateTime @deprecated
    }
"#};

fn parse<'a>(ctx: &'a SchemaContext, source: &str) -> &'a Schema<'a> {
    try_parse_sdl(ctx, source).unwrap()
}

#[test]
fn parse_reports_absent_or_invalid_input_as_none() {
    let ctx = SchemaContext::new();
    assert!(parse_sdl(&ctx, None).is_none());
    assert!(parse_sdl(&ctx, Some("")).is_none());
    assert!(parse_sdl(&ctx, Some("   \n  ")).is_none());
    assert!(parse_sdl(&ctx, Some("type {")).is_none());
    assert!(parse_sdl(&ctx, Some("query { hello }")).is_none());
}

#[test]
fn try_parse_surfaces_the_failure_cause() {
    let ctx = SchemaContext::new();

    let error = try_parse_sdl(&ctx, "type {").unwrap_err();
    assert_eq!(error.error_type(), &ErrorType::Syntax);
    assert!(error.print(false).starts_with("Syntax Error:"));

    // Grammatically fine, but nothing to explore.
    let error = try_parse_sdl(&ctx, "directive @cached on FIELD").unwrap_err();
    assert_eq!(error.error_type(), &ErrorType::Schema);
}

#[test]
fn root_types_are_detected_by_default_names() {
    let ctx = SchemaContext::new();
    let schema = parse(
        &ctx,
        indoc! {"
            type Query { hello: String }
            type Mutation { noop: Boolean }
            type Subscription { ticks: Int }
        "},
    );

    assert_eq!(schema.query_root(), Some("Query"));
    assert_eq!(schema.mutation_root(), Some("Mutation"));
    assert_eq!(schema.subscription_root(), Some("Subscription"));

    assert_eq!(classify(schema, "Query"), Some(Category::Query));
    assert_eq!(classify(schema, "Mutation"), Some(Category::Mutation));
    assert_eq!(classify(schema, "Subscription"), Some(Category::Subscription));
}

#[test]
fn configured_root_names_take_precedence_over_structural_kind() {
    let ctx = SchemaContext::new();
    let schema = parse(
        &ctx,
        indoc! {"
            schema { query: Root }
            type Root { ok: Boolean }
            type Query { x: Int }
        "},
    );

    // `Root` is structurally an object, but the configured root name wins.
    assert_eq!(classify(schema, "Root"), Some(Category::Query));
    // A type that merely happens to be called `Query` stays an object.
    assert_eq!(classify(schema, "Query"), Some(Category::Object));
    // Classification is a pure function of the schema snapshot.
    assert_eq!(classify(schema, "Root"), classify(schema, "Root"));
}

#[test]
fn undeclared_root_names_are_ignored() {
    let ctx = SchemaContext::new();
    let schema = parse(&ctx, "schema { query: Missing }\ntype Post { id: ID }");

    assert_eq!(schema.query_root(), None);
    assert_eq!(classify(schema, "Post"), Some(Category::Object));
    assert_eq!(classify(schema, "Missing"), None);
}

#[test]
fn type_counts_cover_every_declaration_once() {
    let ctx = SchemaContext::new();
    let schema = parse(&ctx, KITCHEN_SINK);
    let counts = type_counts(schema);

    assert_eq!(counts.get(Category::Query), 1);
    assert_eq!(counts.get(Category::Mutation), 1);
    assert_eq!(counts.get(Category::Subscription), 0);
    assert_eq!(counts.get(Category::Object), 2);
    assert_eq!(counts.get(Category::Interface), 1);
    assert_eq!(counts.get(Category::Enum), 1);
    assert_eq!(counts.get(Category::Scalar), 1);
    assert_eq!(counts.get(Category::Union), 1);
    assert_eq!(counts.get(Category::InputObject), 1);

    // Root-named types are counted under their root category only, so the nine
    // counts sum to the number of declarations.
    assert_eq!(counts.total(), schema.type_names().len());
}

#[test]
fn builtin_scalars_are_not_counted_as_declarations() {
    let ctx = SchemaContext::new();
    let schema = parse(&ctx, "type Query { hello: String }");
    let counts = type_counts(schema);

    assert_eq!(counts.get(Category::Query), 1);
    assert_eq!(counts.get(Category::Object), 0);
    assert_eq!(counts.get(Category::Scalar), 0);
    assert_eq!(counts.total(), 1);
    assert!(!schema.is_declared("String"));
}

#[test]
fn types_by_category_lists_only_and_all_members_in_order() {
    let ctx = SchemaContext::new();
    let schema = parse(&ctx, KITCHEN_SINK);

    let objects = types_by_category(schema, Category::Object);
    let names: Vec<&str> = objects.iter().map(|listing| listing.name).collect();
    assert_eq!(names, vec!["Post", "Author"]);

    let interfaces = types_by_category(schema, Category::Interface);
    assert_eq!(
        interfaces,
        vec![TypeListing {
            name: "Node",
            description: "A globally identifiable object.",
        }]
    );

    // Descriptions default to the empty string.
    assert_eq!(objects[0].description, "");

    // Every declared name shows up in exactly one category listing.
    let mut seen: Vec<&str> = Vec::new();
    for category in Category::ALL {
        for listing in types_by_category(schema, category) {
            assert_eq!(classify(schema, listing.name), Some(category));
            assert!(!seen.contains(&listing.name));
            seen.push(listing.name);
        }
    }
    assert_eq!(seen.len(), schema.type_names().len());
}

#[test]
fn materialize_is_absent_only_for_undeclared_names() {
    let ctx = SchemaContext::new();
    let schema = parse(&ctx, KITCHEN_SINK);

    assert!(materialize(schema, "Nope").is_none());
    for name in schema.type_names() {
        assert!(materialize(schema, name).is_some());
    }
}

#[test]
fn materialize_renders_a_root_object() {
    let ctx = SchemaContext::new();
    let schema = parse(&ctx, "type Query { hello: String }");
    let materialized = materialize(schema, "Query").unwrap();

    assert_eq!(materialized.name, "Query");
    assert_eq!(materialized.category, Category::Query);
    assert_eq!(materialized.description, "");
    assert!(materialized.interfaces.is_empty());
    assert_eq!(
        materialized.fields,
        vec![Field {
            name: "hello",
            type_text: "String",
            args: vec![],
            description: "",
            deprecation_reason: None,
        }]
    );
}

#[test]
fn materialize_keeps_interfaces_fields_and_args_in_declaration_order() {
    let ctx = SchemaContext::new();
    let schema = parse(&ctx, KITCHEN_SINK);

    let post = materialize(schema, "Post").unwrap();
    assert_eq!(post.category, Category::Object);
    assert_eq!(post.interfaces, vec!["Node"]);
    let field_names: Vec<&str> = post.fields.iter().map(|field| field.name).collect();
    assert_eq!(field_names, vec!["id", "title", "status", "author"]);
    assert_eq!(post.fields[1].type_text, "String!");

    let root = materialize(schema, "RootQuery").unwrap();
    assert_eq!(root.description, "The entry point.");
    assert_eq!(root.fields[0].args.len(), 1);
    assert_eq!(root.fields[0].args[0].name, "id");
    assert_eq!(root.fields[0].args[0].type_text, "ID!");
    assert_eq!(root.fields[1].type_text, "[Post!]!");
}

#[test]
fn materialize_presents_enum_values_as_fields() {
    let ctx = SchemaContext::new();
    let schema = parse(&ctx, KITCHEN_SINK);
    let status = materialize(schema, "Status").unwrap();

    assert_eq!(status.category, Category::Enum);
    assert!(status.interfaces.is_empty());

    let value_names: Vec<&str> = status.fields.iter().map(|field| field.name).collect();
    assert_eq!(value_names, vec!["PUBLISHED", "DRAFT", "UNLISTED"]);
    for field in &status.fields {
        assert_eq!(field.type_text, "");
        assert!(field.args.is_empty());
    }
    assert_eq!(status.fields[0].description, "Visible to everyone.");
    assert_eq!(status.fields[0].deprecation_reason, None);
    assert_eq!(
        status.fields[1].deprecation_reason,
        Some("Use UNLISTED instead.")
    );
}

#[test]
fn materialize_leaves_union_and_scalar_fields_empty() {
    let ctx = SchemaContext::new();
    let schema = parse(&ctx, KITCHEN_SINK);

    let union_type = materialize(schema, "SearchResult").unwrap();
    assert_eq!(union_type.category, Category::Union);
    assert!(union_type.fields.is_empty());
    assert!(union_type.interfaces.is_empty());

    let scalar = materialize(schema, "DateTime").unwrap();
    assert_eq!(scalar.category, Category::Scalar);
    assert!(scalar.fields.is_empty());

    // Members stay on the model for callers that want them; the display record
    // defers discovery to the category listing.
    let members = schema
        .get_type("SearchResult")
        .and_then(|schema_type| schema_type.union_type())
        .map(|union_type| union_type.members().to_vec());
    assert_eq!(members, Some(vec!["Post", "Author"]));
}

#[test]
fn materialize_renders_input_object_fields_without_args() {
    let ctx = SchemaContext::new();
    let schema = parse(&ctx, KITCHEN_SINK);
    let input = materialize(schema, "PublishInput").unwrap();

    assert_eq!(input.category, Category::InputObject);
    let field_names: Vec<&str> = input.fields.iter().map(|field| field.name).collect();
    assert_eq!(field_names, vec!["title", "at"]);
    assert!(input.fields.iter().all(|field| field.args.is_empty()));
    assert_eq!(input.fields[0].deprecation_reason, None);
    // A bare `@deprecated` still reads as deprecated, with an empty reason.
    assert_eq!(input.fields[1].deprecation_reason, Some(""));
}

#[test]
fn deprecation_without_reason_is_distinguishable_from_none() {
    let ctx = SchemaContext::new();
    let schema = parse(
        &ctx,
        indoc! {r#"
            type Query {
                old: String @deprecated
                replaced: String @deprecated(reason: "Use current.")
                current: String
                things(first: Int @deprecated(reason: "Use limit.")): String
            }
        "#},
    );
    let query = materialize(schema, "Query").unwrap();

    assert_eq!(query.fields[0].deprecation_reason, Some(""));
    assert_eq!(query.fields[1].deprecation_reason, Some("Use current."));
    assert_eq!(query.fields[2].deprecation_reason, None);
    assert_eq!(
        query.fields[3].args[0].deprecation_reason,
        Some("Use limit.")
    );
}

#[test]
fn interfaces_implementing_interfaces_are_retained() {
    let ctx = SchemaContext::new();
    let schema = parse(
        &ctx,
        indoc! {"
            interface Node { id: ID! }
            interface Resource implements Node { id: ID! url: String }
            type User implements Node { id: ID! name: String }
        "},
    );

    assert_eq!(materialize(schema, "User").unwrap().interfaces, vec!["Node"]);
    let resource = materialize(schema, "Resource").unwrap();
    assert_eq!(resource.category, Category::Interface);
    assert_eq!(resource.interfaces, vec!["Node"]);
    assert_eq!(resolve_reference(schema, "Node"), Some(Category::Interface));
}

#[test]
fn resolve_reference_is_invariant_under_wrapper_decoration() {
    let ctx = SchemaContext::new();
    let schema = parse(&ctx, KITCHEN_SINK);

    for raw in ["Post", "[Post]", "Post!", ": [Post!]!"] {
        assert_eq!(resolve_reference(schema, raw), Some(Category::Object));
    }
    for raw in ["String", "[String!]!", ": ID!"] {
        assert_eq!(resolve_reference(schema, raw), Some(Category::Scalar));
    }

    assert_eq!(resolve_reference(schema, "RootQuery"), Some(Category::Query));
    assert_eq!(resolve_reference(schema, "DateTime"), Some(Category::Scalar));
    assert_eq!(resolve_reference(schema, "Status!"), Some(Category::Enum));
    assert_eq!(resolve_reference(schema, "Nope"), None);
}

#[test]
fn strip_type_ref_retains_the_wrapper_shape() {
    assert_eq!(
        strip_type_ref("[String!]!"),
        StrippedRef {
            name: "String",
            list_depth: 1,
            non_null: true,
        }
    );
    assert_eq!(
        strip_type_ref(": [[Post]]"),
        StrippedRef {
            name: "Post",
            list_depth: 2,
            non_null: false,
        }
    );
    assert_eq!(
        strip_type_ref("ID"),
        StrippedRef {
            name: "ID",
            list_depth: 0,
            non_null: false,
        }
    );
    assert_eq!(strip_type_ref("").name, "");
}

#[test]
fn category_tokens_round_trip() {
    for category in Category::ALL {
        assert_eq!(Category::from_str(category.as_str()), Ok(category));
    }
    assert_eq!(Category::from_str("input-object"), Ok(Category::InputObject));
    assert!(Category::from_str("bogus").is_err());

    assert_eq!(Category::ROOT_CATEGORIES.len(), 3);
    assert_eq!(Category::TYPE_CATEGORIES.len(), 6);
    assert!(Category::Query.is_root());
    assert!(!Category::InputObject.is_root());
}

#[test]
fn duplicate_type_declarations_keep_the_first() {
    let ctx = SchemaContext::new();
    let schema = parse(&ctx, "type Thing { a: String }\ntype Thing { b: String }");

    assert_eq!(schema.type_names().len(), 1);
    let thing = materialize(schema, "Thing").unwrap();
    assert_eq!(thing.fields.len(), 1);
    assert_eq!(thing.fields[0].name, "a");
}

#[cfg(feature = "json")]
mod json {
    use super::*;
    use serde_json::json;

    #[test]
    fn materialized_fields_serialize_with_viewer_spellings() {
        let ctx = SchemaContext::new();
        let schema = parse(&ctx, "type Query { hello: String }");
        let materialized = materialize(schema, "Query").unwrap();

        assert_eq!(
            serde_json::to_value(&materialized.fields[0]).unwrap(),
            json!({
                "name": "hello",
                "type": "String",
                "args": [],
                "description": "",
                "deprecationReason": null,
            })
        );
        assert_eq!(
            serde_json::to_value(materialized.category).unwrap(),
            json!("query")
        );
    }

    #[test]
    fn type_counts_serialize_as_a_category_map() {
        let ctx = SchemaContext::new();
        let schema = parse(&ctx, KITCHEN_SINK);
        let value = serde_json::to_value(type_counts(schema)).unwrap();

        assert_eq!(value["query"], json!(1));
        assert_eq!(value["object"], json!(2));
        assert_eq!(value["input-object"], json!(1));
        assert_eq!(value["subscription"], json!(0));
    }

    #[test]
    fn category_serializes_to_its_token() {
        assert_eq!(
            serde_json::to_value(Category::InputObject).unwrap(),
            json!("input-object")
        );
    }
}
