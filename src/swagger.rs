//! Swagger 2.0 document model.
//!
//! These types mirror the JSON shape written to `resource.json`. Every map is an
//! [`IndexMap`] so that paths, verbs and response codes serialize in the order they
//! were first inserted, which keeps repeated runs byte-identical.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Media types every operation accepts.
pub const CONSUMES: [&str; 2] = ["application/json", "application/xml"];

/// Media types every operation may return.
pub const PRODUCES: [&str; 2] = ["application/xml", "application/json"];

/// Complete Swagger document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwaggerDocument {
    /// Always `"2.0"`
    pub swagger: String,
    pub info: Info,
    /// Application host without scheme
    pub host: String,
    #[serde(rename = "basePath")]
    pub base_path: String,
    /// One entry per processed route, duplicates included
    pub tags: Vec<Tag>,
    /// Path key -> HTTP verb -> operation
    pub paths: IndexMap<String, IndexMap<String, Operation>>,
}

/// Swagger Info object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub description: String,
    pub version: String,
    pub title: String,
}

/// Swagger Tag object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub description: String,
}

/// Swagger Operation object - one HTTP verb of one path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub tags: Vec<String>,
    /// `null` when the doc comment has no `@apiDesc`
    pub summary: Option<String>,
    pub description: String,
    /// Reserved, always empty
    #[serde(rename = "operationId")]
    pub operation_id: String,
    pub consumes: Vec<String>,
    pub produces: Vec<String>,
    pub parameters: Vec<Parameter>,
    pub responses: IndexMap<String, Response>,
}

/// Where a parameter is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Path,
    Query,
    FormData,
}

/// Swagger primitive parameter types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
    Integer,
    Number,
    Array,
    File,
}

/// Swagger Parameter object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParameterType,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    pub required: bool,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Swagger Response object. Every line declared for a status code is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub description: Vec<String>,
}

impl Operation {
    /// Media type lists shared by every generated operation
    pub fn default_media_types() -> (Vec<String>, Vec<String>) {
        (
            CONSUMES.iter().map(|s| s.to_string()).collect(),
            PRODUCES.iter().map(|s| s.to_string()).collect(),
        )
    }
}
