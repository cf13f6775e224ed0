//! Integration tests for query encoding.
//!
//! These tests decode encoded query strings back into a tree and check it
//! against the filters that produced them, along with the populate and
//! pagination rules.

use serde_json::{json, Map, Value};
use storefront_content::query::{
    encode_query, query_pairs, FetchRequest, FilterNode, Filters, InvalidFetchRequestError,
};
use storefront_content::{FilterOperator, Pagination};

/// Splits `filters[a][b][$eq]` into `["filters", "a", "b", "$eq"]`.
fn split_key(key: &str) -> Vec<String> {
    let (head, rest) = key.split_once('[').unwrap_or((key, ""));
    let mut segments = vec![head.to_string()];
    segments.extend(
        rest.trim_end_matches(']')
            .split("][")
            .filter(|segment| !segment.is_empty())
            .map(str::to_string),
    );
    segments
}

/// Rebuilds the filter tree from an encoded query string.
///
/// Leaf values stay strings; repeated `[]` keys become arrays.
fn decode_filters(query: &str) -> Value {
    let mut root = Map::new();

    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap();
        let value = urlencoding::decode(value).unwrap().into_owned();
        let is_list = key.ends_with("[]");
        let segments = split_key(key.trim_end_matches("[]"));
        if segments[0] != "filters" {
            continue;
        }

        let mut node = &mut root;
        let (leaf, parents) = segments[1..].split_last().unwrap();
        for segment in parents {
            node = node
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Map::new()))
                .as_object_mut()
                .unwrap();
        }

        if is_list {
            node.entry(leaf.clone())
                .or_insert_with(|| Value::Array(Vec::new()))
                .as_array_mut()
                .unwrap()
                .push(Value::String(value));
        } else {
            node.insert(leaf.clone(), Value::String(value));
        }
    }

    Value::Object(root)
}

fn request_with(filters: Filters) -> FetchRequest {
    FetchRequest::builder("albums").filters(filters).build().unwrap()
}

// ============================================================================
// Filter Round-Trip Tests
// ============================================================================

#[test]
fn test_nested_filters_decode_back_to_the_same_tree() {
    let filters = Filters::new()
        .path("store.slug", FilterNode::eq("acme"))
        .path("tracks.SEO.metaTitle", FilterNode::contains("a&b=c"))
        .field("slug", FilterNode::ne("draft/1"))
        .field("year", FilterNode::gte(2020))
        .path("store.title", FilterNode::contains("Café Records"));

    let decoded = decode_filters(&encode_query(&request_with(filters)));

    assert_eq!(
        decoded,
        json!({
            "store": {
                "slug": { "$eq": "acme" },
                "title": { "$contains": "Café Records" }
            },
            "tracks": { "SEO": { "metaTitle": { "$contains": "a&b=c" } } },
            "slug": { "$ne": "draft/1" },
            "year": { "$gte": "2020" }
        })
    );
}

#[test]
fn test_list_values_decode_to_arrays() {
    let filters = Filters::new().field("slug", FilterNode::in_set(vec!["live", "studio", "b-sides"]));

    let request = request_with(filters);
    assert_eq!(
        encode_query(&request),
        "filters[slug][$in][]=live&filters[slug][$in][]=studio&filters[slug][$in][]=b-sides"
    );
    assert_eq!(
        decode_filters(&encode_query(&request)),
        json!({ "slug": { "$in": ["live", "studio", "b-sides"] } })
    );
}

#[test]
fn test_every_operator_round_trips() {
    let mut filters = Filters::new();
    for (index, operator) in FilterOperator::ALL.iter().enumerate() {
        filters = filters.field(format!("field{index}"), FilterNode::condition(*operator, "x"));
    }

    let decoded = decode_filters(&encode_query(&request_with(filters)));

    for (index, operator) in FilterOperator::ALL.iter().enumerate() {
        assert_eq!(decoded[format!("field{index}")][operator.as_str()], json!("x"));
    }
}

#[test]
fn test_field_names_that_would_split_the_query_are_rejected() {
    for name in ["a&pagination[page]=9", "b]c", "x[y", "k=v", "frag#1", "q?", "pct%41", "a+b"] {
        let result = FetchRequest::builder("albums")
            .filters(Filters::new().field(name, FilterNode::eq("x")))
            .build();
        assert!(
            matches!(result, Err(InvalidFetchRequestError::UnsafeFieldName { .. })),
            "{name} was accepted"
        );
    }
}

#[test]
fn test_accepted_field_names_round_trip() {
    let filters = Filters::new()
        .field("Title", FilterNode::eq("x"))
        .field("meta-title_2", FilterNode::eq("y"))
        .path("store.SEO.metaTitle", FilterNode::eq("z"));

    let request = request_with(filters);
    let query = encode_query(&request);

    assert_eq!(query.split('&').count(), 3);
    assert_eq!(
        decode_filters(&query),
        json!({
            "Title": { "$eq": "x" },
            "meta-title_2": { "$eq": "y" },
            "store": { "SEO": { "metaTitle": { "$eq": "z" } } }
        })
    );
}

#[test]
fn test_reserved_characters_never_leak_into_the_query() {
    let filters = Filters::new().field("Title", FilterNode::eq("50% off & more #1 ?"));
    let query = encode_query(&request_with(filters));

    assert_eq!(query.matches('&').count(), 0);
    assert!(!query.contains('#'));
    assert!(!query.contains('?'));
    assert!(!query.contains(' '));
}

// ============================================================================
// Populate Tests
// ============================================================================

#[test]
fn test_joined_and_listed_populate_encode_identically() {
    let joined = FetchRequest::builder("albums")
        .populate("SEO.socialImage, tracks ,cover")
        .build()
        .unwrap();
    let listed = FetchRequest::builder("albums")
        .populate(vec!["SEO.socialImage", "tracks", "cover"])
        .build()
        .unwrap();

    assert_eq!(encode_query(&joined), encode_query(&listed));
    assert_eq!(
        encode_query(&listed),
        "populate[]=SEO.socialImage&populate[]=tracks&populate[]=cover"
    );
}

#[test]
fn test_deep_populate_path_is_one_parameter() {
    let request = FetchRequest::builder("albums")
        .populate("tracks.SEO.socialImage")
        .build()
        .unwrap();

    assert_eq!(
        query_pairs(&request),
        vec![("populate[]".to_string(), "tracks.SEO.socialImage".to_string())]
    );
}

#[test]
fn test_empty_populate_emits_nothing() {
    let request = FetchRequest::builder("albums")
        .populate(" , ")
        .build()
        .unwrap();

    assert_eq!(encode_query(&request), "");
}

// ============================================================================
// Pagination and Ordering Tests
// ============================================================================

#[test]
fn test_unset_pagination_fields_are_omitted() {
    let request = FetchRequest::builder("products")
        .pagination(Pagination::new().page_size(12))
        .build()
        .unwrap();

    assert_eq!(encode_query(&request), "pagination[pageSize]=12");
}

#[test]
fn test_parameter_groups_are_ordered() {
    let request = FetchRequest::builder("products")
        .sort("createdAt:desc")
        .pagination(Pagination::new().limit(5).page(1))
        .populate("stores")
        .filters(Filters::new().field("slug", "shirt"))
        .build()
        .unwrap();

    assert_eq!(
        encode_query(&request),
        "filters[slug][$eq]=shirt&populate[]=stores&pagination[limit]=5&pagination[page]=1&sort=createdAt%3Adesc"
    );
}

#[test]
fn test_blank_sort_set_directly_is_not_sent() {
    let mut request = FetchRequest::builder("products")
        .pagination(Pagination::new().page(1))
        .build()
        .unwrap();
    request.sort = Some(" ".to_string());

    assert_eq!(encode_query(&request), "pagination[page]=1");
}

#[test]
fn test_encoding_is_deterministic() {
    let build = || {
        FetchRequest::builder("pages")
            .filters(
                Filters::new()
                    .path("store.slug", "acme")
                    .field("slug", "home"),
            )
            .populate("SEO.socialImage,store")
            .build()
            .unwrap()
    };

    assert_eq!(encode_query(&build()), encode_query(&build()));
}
