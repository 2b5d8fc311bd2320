//! Parameter descriptors for one operation.
//!
//! Parameters come from two places: `{name}` placeholders in the route URI, and
//! explicit `@apiParam` declarations of the form
//!
//! ```text
//! <type> [required] [in_path|in_query] $<name> | <description>
//! ```
//!
//! The directive part (before the first `|`) is split into whitespace-separated tokens
//! and keywords only ever match whole tokens.

use crate::adapter::RouteDescriptor;
use crate::annotation::AnnotationBlock;
use crate::error::{Error, Result};
use crate::swagger::{Parameter, ParameterLocation, ParameterType};
use indexmap::IndexMap;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

static RE_PATH_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").unwrap());

const PATH_PARAM_DESCRIPTION: &str = "Param in path";
const BOOLEAN_SUFFIX: &str = " | Boolean";
const DEFAULT_FILE_NAME: &str = "file";

/// Type keywords in match priority order.
const TYPE_KEYWORDS: [&str; 8] = [
    "string", "integer", "bool", "boolean", "password", "double", "array", "file",
];

/// What a type keyword contributes to the descriptor.
struct TypeSpec {
    param_type: ParameterType,
    format: Option<&'static str>,
    boolean: bool,
}

fn type_spec(keyword: &str) -> Option<TypeSpec> {
    let (param_type, format, boolean) = match keyword {
        "string" => (ParameterType::String, None, false),
        "integer" => (ParameterType::Integer, None, false),
        "bool" | "boolean" => (ParameterType::Integer, None, true),
        "password" => (ParameterType::String, Some("password"), false),
        "double" => (ParameterType::Number, Some("double"), false),
        "array" => (ParameterType::Array, None, false),
        "file" => (ParameterType::File, None, false),
        _ => return None,
    };
    Some(TypeSpec {
        param_type,
        format,
        boolean,
    })
}

/// Builds the parameter list of a route's operation.
///
/// Path placeholders come first, in URI order. Each explicit declaration is then
/// appended; a declaration whose name matches an earlier entry removes that entry, so
/// the replacement takes the later position.
///
/// # Errors
///
/// - [`Error::MissingType`] when a declaration has no type keyword
/// - [`Error::MissingName`] when a non-file declaration has no `$name`
pub fn build_params(block: &AnnotationBlock, route: &RouteDescriptor) -> Result<Vec<Parameter>> {
    let mut working: IndexMap<String, Parameter> = path_params(&route.uri)
        .into_iter()
        .map(|p| (p.name.clone(), p))
        .collect();

    for declaration in &block.params {
        let param = parse_declaration(declaration, route)?;
        debug!(
            "{}@{}: param `{}` {:?} in {:?}",
            route.controller_class, route.action, param.name, param.param_type, param.location
        );
        working.shift_remove(&param.name);
        working.insert(param.name.clone(), param);
    }

    Ok(working.into_values().collect())
}

/// Infers a required integer path parameter for every `{name}` placeholder.
/// A `{name?}` placeholder is optional.
pub fn path_params(uri: &str) -> Vec<Parameter> {
    let mut params: Vec<Parameter> = Vec::new();

    for caps in RE_PATH_PLACEHOLDER.captures_iter(uri) {
        let token = &caps[1];
        let optional = token.contains('?');
        let name = token.trim_end_matches('?').trim().to_string();
        if params.iter().any(|p| p.name == name) {
            continue;
        }
        params.push(Parameter {
            name,
            param_type: ParameterType::Integer,
            location: ParameterLocation::Path,
            required: !optional,
            description: PATH_PARAM_DESCRIPTION.to_string(),
            format: None,
        });
    }

    params
}

/// Parses one `@apiParam` payload.
pub fn parse_declaration(declaration: &str, route: &RouteDescriptor) -> Result<Parameter> {
    let (directive, description) = match declaration.split_once('|') {
        Some((directive, description)) => (directive.trim(), description.trim()),
        None => (declaration.trim(), ""),
    };
    let mut tokens: Vec<&str> = directive.split_whitespace().collect();
    let mut description = description.to_string();

    let spec = TYPE_KEYWORDS
        .iter()
        .find_map(|keyword| take_token(&mut tokens, keyword).then(|| type_spec(keyword)))
        .flatten();

    let required = take_token(&mut tokens, "required");

    // in_path is checked first and wins when both appear
    let location = if take_token(&mut tokens, "in_path") {
        ParameterLocation::Path
    } else if take_token(&mut tokens, "in_query") {
        ParameterLocation::Query
    } else {
        ParameterLocation::FormData
    };

    let name = tokens
        .iter()
        .find_map(|t| t.strip_prefix('$'))
        .map(|n| n.trim().to_string())
        .unwrap_or_default();

    let Some(spec) = spec else {
        return Err(Error::MissingType {
            controller: route.controller_id(),
            action: route.action.clone(),
            param: name,
        });
    };

    let name = if name.is_empty() && spec.param_type == ParameterType::File {
        DEFAULT_FILE_NAME.to_string()
    } else {
        name
    };
    if name.is_empty() {
        return Err(Error::MissingName {
            controller: route.controller_id(),
            action: route.action.clone(),
        });
    }

    if spec.boolean {
        description.push_str(BOOLEAN_SUFFIX);
    }

    Ok(Parameter {
        name,
        param_type: spec.param_type,
        location,
        required,
        description,
        format: spec.format.map(str::to_string),
    })
}

/// Removes the first token equal to `word`, reporting whether one was found.
fn take_token(tokens: &mut Vec<&str>, word: &str) -> bool {
    match tokens.iter().position(|t| *t == word) {
        Some(idx) => {
            tokens.remove(idx);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(uri: &str) -> RouteDescriptor {
        RouteDescriptor::new(
            &["POST"],
            uri,
            "App\\Http\\Controllers\\Api\\UserController",
            "update",
        )
    }

    fn block(params: &[&str]) -> AnnotationBlock {
        AnnotationBlock {
            desc: None,
            params: params.iter().map(|p| p.to_string()).collect(),
            responses: vec![],
        }
    }

    #[test]
    fn test_path_params_required_and_optional() {
        let params = path_params("api/v1/users/{id}/posts/{slug?}");
        assert_eq!(params.len(), 2);

        assert_eq!(params[0].name, "id");
        assert!(params[0].required);
        assert_eq!(params[0].param_type, ParameterType::Integer);
        assert_eq!(params[0].location, ParameterLocation::Path);
        assert_eq!(params[0].description, "Param in path");

        assert_eq!(params[1].name, "slug");
        assert!(!params[1].required);
    }

    #[test]
    fn test_string_required_form_param() {
        let param =
            parse_declaration("string $email required | Email for reset", &route("reset")).unwrap();
        assert_eq!(param.name, "email");
        assert_eq!(param.param_type, ParameterType::String);
        assert_eq!(param.location, ParameterLocation::FormData);
        assert!(param.required);
        assert_eq!(param.description, "Email for reset");
        assert_eq!(param.format, None);
    }

    #[test]
    fn test_bool_maps_to_integer_with_suffix() {
        let param = parse_declaration("bool in_query $active | Only active", &route("u")).unwrap();
        assert_eq!(param.param_type, ParameterType::Integer);
        assert_eq!(param.location, ParameterLocation::Query);
        assert_eq!(param.description, "Only active | Boolean");

        let param = parse_declaration("boolean $flag", &route("u")).unwrap();
        assert_eq!(param.param_type, ParameterType::Integer);
        assert_eq!(param.description, " | Boolean");
    }

    #[test]
    fn test_password_and_double_formats() {
        let param = parse_declaration("password $secret | Secret", &route("u")).unwrap();
        assert_eq!(param.param_type, ParameterType::String);
        assert_eq!(param.format.as_deref(), Some("password"));

        let param = parse_declaration("double $price | Price", &route("u")).unwrap();
        assert_eq!(param.param_type, ParameterType::Number);
        assert_eq!(param.format.as_deref(), Some("double"));
    }

    #[test]
    fn test_type_priority_order() {
        // `string` is tested before `array`, so it wins regardless of token order
        let param = parse_declaration("array string $tags", &route("u")).unwrap();
        assert_eq!(param.param_type, ParameterType::String);
    }

    #[test]
    fn test_in_path_wins_over_in_query() {
        let param = parse_declaration("integer in_query in_path $id", &route("u")).unwrap();
        assert_eq!(param.location, ParameterLocation::Path);
    }

    #[test]
    fn test_keywords_match_whole_tokens_only() {
        let param = parse_declaration("integer $string_required | x", &route("u")).unwrap();
        assert_eq!(param.param_type, ParameterType::Integer);
        assert_eq!(param.name, "string_required");
        assert!(!param.required);
    }

    #[test]
    fn test_description_is_not_scanned_for_keywords() {
        let param =
            parse_declaration("string $note | not required in_path", &route("u")).unwrap();
        assert!(!param.required);
        assert_eq!(param.location, ParameterLocation::FormData);
    }

    #[test]
    fn test_file_param_named_and_default_name() {
        let param = parse_declaration("file $avatar | Upload avatar", &route("u")).unwrap();
        assert_eq!(param.name, "avatar");
        assert_eq!(param.param_type, ParameterType::File);

        let param = parse_declaration("file required | Upload", &route("u")).unwrap();
        assert_eq!(param.name, "file");
        assert!(param.required);
    }

    #[test]
    fn test_missing_type_error() {
        let err = parse_declaration("$email required | Email", &route("u")).unwrap_err();
        match err {
            Error::MissingType {
                controller,
                action,
                param,
            } => {
                assert_eq!(controller, "App\\Http\\Controllers\\Api\\UserController");
                assert_eq!(action, "update");
                assert_eq!(param, "email");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_missing_name_error() {
        let err = parse_declaration("string required | Email", &route("u")).unwrap_err();
        assert!(matches!(err, Error::MissingName { .. }));
    }

    #[test]
    fn test_explicit_param_replaces_path_param() {
        let params = build_params(
            &block(&["string in_path $id | User uuid"]),
            &route("api/v1/users/{id}"),
        )
        .unwrap();

        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "id");
        assert_eq!(params[0].param_type, ParameterType::String);
        assert!(!params[0].required);
        assert_eq!(params[0].description, "User uuid");
    }

    #[test]
    fn test_replacement_takes_later_position() {
        let params = build_params(
            &block(&["string $name | Name", "integer required in_path $id | Id"]),
            &route("api/v1/users/{id}/{section}"),
        )
        .unwrap();

        let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["section", "name", "id"]);
    }

    #[test]
    fn test_build_params_propagates_missing_type() {
        let result = build_params(&block(&["string $ok", "$broken"]), &route("u"));
        assert!(matches!(result, Err(Error::MissingType { .. })));
    }
}
