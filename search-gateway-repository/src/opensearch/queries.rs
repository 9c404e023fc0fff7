//! Search engine query builders.

use serde_json::{json, Value};

/// Build a query-string search body.
///
/// The query text is evaluated by the engine's own query parser; the gateway
/// imposes no query DSL of its own.
pub(crate) fn build_query_string_query(query_text: &str) -> Value {
    json!({
        "query": {
            "query_string": {
                "query": query_text
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_string_query() {
        let query = build_query_string_query("title:hello");

        assert_eq!(query["query"]["query_string"]["query"], "title:hello");
    }

    #[test]
    fn test_query_text_is_not_rewritten() {
        // Raw engine syntax passes through untouched
        let text = "name:foo AND (description:bar OR description:baz~2)";
        let query = build_query_string_query(text);

        assert_eq!(query["query"]["query_string"]["query"], text);
    }
}
