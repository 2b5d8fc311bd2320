//! Swagger generator - Swagger 2.0 documentation from a web application's routes.
//!
//! This library turns a route table plus the doc comments of the controller actions
//! behind each route into a Swagger 2.0 document. Actions are documented with
//! directive lines:
//!
//! ```text
//! @apiDesc Get user
//! @apiParam string required in_query $email | Email for reset
//! @apiErr 422 | Validation errors
//! @apiResp 200 | User record
//! ```
//!
//! # Architecture
//!
//! 1. [`adapter`] - Route table and doc comment lookup over the documented application
//! 2. [`scanner`] - Recursively finds controller source files
//! 3. [`annotation`] - Extracts directive lines from one doc comment
//! 4. [`params`] - Builds parameter descriptors from URI placeholders and `@apiParam`
//! 5. [`responses`] - Groups `@apiErr` / `@apiResp` lines by status code
//! 6. [`assembler`] - Combines a route and its directives into one operation
//! 7. [`openapi_builder`] - Drives the run and owns the document
//! 8. [`serializer`] - Writes the document as JSON
//!
//! # Example Usage
//!
//! ```no_run
//! use swagger_from_routes::{
//!     adapter::{manifest::RouteManifest, php::DocIndex},
//!     config::ApiConfig,
//!     openapi_builder::DocumentBuilder,
//!     serializer::{serialize_json, write_document},
//! };
//! use std::path::Path;
//!
//! let docs = DocIndex::from_directory(Path::new("./my-app/app")).unwrap();
//! let routes = RouteManifest::new(Path::new("./my-app/routes.json"));
//!
//! let mut builder =
//!     DocumentBuilder::initialize(ApiConfig::default(), Some("https://api.example.com")).unwrap();
//! builder.run(&routes, &docs).unwrap();
//! let document = builder.build();
//!
//! let json = serialize_json(&document).unwrap();
//! write_document(&json, Path::new("./my-app/storage")).unwrap();
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module.

pub mod cli;
pub mod config;
pub mod scanner;
pub mod adapter;
pub mod annotation;
pub mod params;
pub mod responses;
pub mod assembler;
pub mod swagger;
pub mod openapi_builder;
pub mod serializer;
pub mod error;
