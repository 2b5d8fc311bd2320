//! Assembly of one Swagger operation from a route and its parsed annotations.
//!
//! Also holds the key normalization shared with the builder: the lowercased verb key,
//! the path key with the configured prefix removed, and the per-route tag.

use crate::adapter::RouteDescriptor;
use crate::annotation::AnnotationBlock;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::params::build_params;
use crate::responses::build_responses;
use crate::swagger::{Operation, Tag};

/// One operation together with the keys it is stored under.
#[derive(Debug, Clone, PartialEq)]
pub struct PathEntry {
    /// Normalized path key, e.g. `/users/{id}`
    pub path: String,
    /// Lowercased HTTP verb key, e.g. `get`
    pub verb: String,
    pub operation: Operation,
}

/// Builds the operation for `route`, or `None` when its doc comment carries no
/// directives.
///
/// # Arguments
///
/// * `route` - The route being documented
/// * `block` - Directives parsed from the route action's doc comment
/// * `config` - Supplies the path prefix and the internal controller namespace
///
/// # Returns
///
/// Returns the operation together with its normalized path and verb keys.
///
/// # Errors
///
/// Returns [`crate::error::Error::MissingType`] or [`crate::error::Error::MissingName`]
/// when an `@apiParam` declaration cannot be resolved.
pub fn assemble(
    route: &RouteDescriptor,
    block: &AnnotationBlock,
    config: &ApiConfig,
) -> Result<Option<PathEntry>> {
    if block.is_empty() {
        return Ok(None);
    }

    let parameters = build_params(block, route)?;
    let responses = build_responses(block);
    let (consumes, produces) = Operation::default_media_types();

    let operation = Operation {
        tags: vec![operation_tag(&route.controller_namespace, &config.controller_namespace)],
        summary: block.desc.clone(),
        description: route.controller_class.clone(),
        operation_id: String::new(),
        consumes,
        produces,
        parameters,
        responses,
    };

    Ok(Some(PathEntry {
        path: path_key(&route.uri, &config.path_prefix),
        verb: verb_key(&route.methods),
        operation,
    }))
}

/// Tag recorded for every visited route, whether or not it yields an operation.
pub fn route_tag(route: &RouteDescriptor, config: &ApiConfig) -> Tag {
    let base_path = config.base_path.trim_matches('/');
    let name = if base_path.is_empty() {
        route.uri.clone()
    } else {
        route.uri.replace(base_path, "")
    };

    Tag {
        name,
        description: route.controller_class.clone(),
    }
}

/// Joins the method set, drops the implicit `HEAD` alternative and lowercases the rest.
///
/// `["GET", "HEAD"]` becomes `get`; `["PUT", "PATCH"]` becomes `put|patch`.
pub fn verb_key(methods: &[String]) -> String {
    methods.join("|").replace("|HEAD", "").to_lowercase()
}

/// Removes every occurrence of `prefix` from `uri` and anchors the result at `/`.
pub fn path_key(uri: &str, prefix: &str) -> String {
    let stripped = if prefix.is_empty() {
        uri.to_string()
    } else {
        uri.replace(prefix, "")
    };
    format!("/{}", stripped.trim_start_matches('/'))
}

fn operation_tag(namespace: &str, internal_prefix: &str) -> String {
    let prefix = internal_prefix.trim_end_matches('\\');
    if prefix.is_empty() {
        return namespace.to_string();
    }
    if namespace == prefix {
        return String::new();
    }
    namespace
        .strip_prefix(&format!("{}\\", prefix))
        .unwrap_or(namespace)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swagger::{ParameterLocation, ParameterType};

    fn user_route() -> RouteDescriptor {
        RouteDescriptor::new(
            &["GET", "HEAD"],
            "api/v1/users/{id}",
            "App\\Http\\Controllers\\Api\\UserController",
            "show",
        )
    }

    #[test]
    fn test_get_user_operation() {
        let block = AnnotationBlock {
            desc: Some("Get user".to_string()),
            ..Default::default()
        };

        let entry = assemble(&user_route(), &block, &ApiConfig::default())
            .unwrap()
            .unwrap();

        assert_eq!(entry.path, "/users/{id}");
        assert_eq!(entry.verb, "get");

        let op = &entry.operation;
        assert_eq!(op.tags, vec!["Api"]);
        assert_eq!(op.summary.as_deref(), Some("Get user"));
        assert_eq!(op.description, "UserController");
        assert_eq!(op.operation_id, "");
        assert_eq!(op.consumes, vec!["application/json", "application/xml"]);
        assert_eq!(op.produces, vec!["application/xml", "application/json"]);

        assert_eq!(op.parameters.len(), 1);
        let id = &op.parameters[0];
        assert_eq!(id.name, "id");
        assert_eq!(id.param_type, ParameterType::Integer);
        assert_eq!(id.location, ParameterLocation::Path);
        assert!(id.required);
        assert_eq!(id.description, "Param in path");
        assert!(op.responses.is_empty());
    }

    #[test]
    fn test_empty_block_yields_nothing() {
        let entry = assemble(&user_route(), &AnnotationBlock::default(), &ApiConfig::default())
            .unwrap();
        assert!(entry.is_none());
    }

    #[test]
    fn test_block_without_desc_has_null_summary() {
        let block = AnnotationBlock {
            responses: vec!["204 | Deleted".to_string()],
            ..Default::default()
        };

        let entry = assemble(&user_route(), &block, &ApiConfig::default())
            .unwrap()
            .unwrap();
        assert!(entry.operation.summary.is_none());

        let value = serde_json::to_value(&entry.operation).unwrap();
        assert_eq!(value["summary"], serde_json::Value::Null);
        assert!(value.as_object().unwrap().contains_key("summary"));
    }

    #[test]
    fn test_verb_key() {
        fn methods(m: &[&str]) -> Vec<String> {
            m.iter().map(|s| s.to_string()).collect()
        }
        assert_eq!(verb_key(&methods(&["GET", "HEAD"])), "get");
        assert_eq!(verb_key(&methods(&["POST"])), "post");
        assert_eq!(verb_key(&methods(&["PUT", "PATCH"])), "put|patch");
    }

    #[test]
    fn test_path_key() {
        assert_eq!(path_key("api/v1/users/{id}", "api/v1"), "/users/{id}");
        assert_eq!(path_key("/api/v1/users", "api/v1"), "/users");
        assert_eq!(path_key("health", "api/v1"), "/health");
        assert_eq!(path_key("admin/api/v1/stats", "api/v1"), "/admin//stats");
        assert_eq!(path_key("api/v1/users", ""), "/api/v1/users");
    }

    #[test]
    fn test_route_tag_strips_base_path() {
        let mut config = ApiConfig::default();
        config.base_path = "/api/v1/".to_string();

        let tag = route_tag(&user_route(), &config);
        assert_eq!(tag.name, "/users/{id}");
        assert_eq!(tag.description, "UserController");

        config.base_path = "/".to_string();
        assert_eq!(route_tag(&user_route(), &config).name, "api/v1/users/{id}");
    }

    #[test]
    fn test_operation_tag() {
        let prefix = "App\\Http\\Controllers\\";
        assert_eq!(operation_tag("App\\Http\\Controllers\\Api\\V1", prefix), "Api\\V1");
        assert_eq!(operation_tag("App\\Http\\Controllers", prefix), "");
        assert_eq!(operation_tag("Modules\\Billing", prefix), "Modules\\Billing");
        assert_eq!(operation_tag("Modules\\Billing", ""), "Modules\\Billing");
    }
}
