//! Response map built from `@apiErr` and `@apiResp` directives.

use crate::annotation::AnnotationBlock;
use crate::swagger::Response;
use indexmap::IndexMap;

/// Groups `@apiErr` / `@apiResp` payloads by status code.
///
/// Each payload reads `<code> | <description>`. The code is not validated; any text
/// before the first `|` is used as the key. Descriptions sharing a code accumulate in
/// declaration order, and codes keep the order in which they first appear.
pub fn build_responses(block: &AnnotationBlock) -> IndexMap<String, Response> {
    let mut responses: IndexMap<String, Response> = IndexMap::new();

    for declaration in &block.responses {
        let (code, description) = match declaration.split_once('|') {
            Some((code, description)) => (code.trim(), description.trim()),
            None => (declaration.trim(), ""),
        };

        responses
            .entry(code.to_string())
            .or_insert_with(|| Response {
                description: Vec::new(),
            })
            .description
            .push(description.to_string());
    }

    responses
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(responses: &[&str]) -> AnnotationBlock {
        AnnotationBlock {
            desc: None,
            params: vec![],
            responses: responses.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_same_code_accumulates() {
        let responses = build_responses(&block(&[
            "422 | Validation errors",
            "422 | Unauthorized access",
        ]));

        assert_eq!(responses.len(), 1);
        assert_eq!(
            responses["422"].description,
            vec!["Validation errors", "Unauthorized access"]
        );
    }

    #[test]
    fn test_codes_keep_first_seen_order() {
        let responses = build_responses(&block(&["500 | Boom", "200 | Ok", "500 | Again"]));
        let codes: Vec<&str> = responses.keys().map(String::as_str).collect();
        assert_eq!(codes, vec!["500", "200"]);
        assert_eq!(responses["500"].description.len(), 2);
    }

    #[test]
    fn test_code_is_not_validated() {
        let responses = build_responses(&block(&["default | Anything else", "teapot"]));
        assert_eq!(responses["default"].description, vec!["Anything else"]);
        assert_eq!(responses["teapot"].description, vec![""]);
    }

    #[test]
    fn test_description_keeps_later_pipes() {
        let responses = build_responses(&block(&["200 | a | b"]));
        assert_eq!(responses["200"].description, vec!["a | b"]);
    }

    #[test]
    fn test_serialized_shape() {
        let responses = build_responses(&block(&["422 | Validation errors"]));
        let json = serde_json::to_string(&responses).unwrap();
        assert_eq!(json, r#"{"422":{"description":["Validation errors"]}}"#);
    }
}
