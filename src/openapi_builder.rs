//! Swagger document construction.
//!
//! [`DocumentBuilder`] seeds the document header from configuration, then walks a
//! [`RouteSource`] and resolves each route's doc comment through a [`DocLookup`].

use crate::adapter::{DocLookup, RouteDescriptor, RouteSource};
use crate::annotation;
use crate::assembler::{assemble, route_tag};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::swagger::{Info, SwaggerDocument};
use indexmap::IndexMap;
use log::{debug, info};

const SWAGGER_VERSION: &str = "2.0";

/// Swagger document builder.
///
/// Owns the document under construction for the duration of one run. Routes are
/// added one at a time; every route contributes a tag, and routes whose doc comment
/// carries directives also contribute an operation.
pub struct DocumentBuilder {
    config: ApiConfig,
    document: SwaggerDocument,
}

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Routes visited
    pub routes: usize,
    /// Operations written into `paths` (later duplicates included)
    pub operations: usize,
    /// Routes without a resolvable or annotated doc comment
    pub skipped: usize,
}

impl DocumentBuilder {
    /// Creates an empty document from the API metadata and the application base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationMissing`] when `app_url` is absent or blank.
    pub fn initialize(config: ApiConfig, app_url: Option<&str>) -> Result<Self> {
        let app_url = app_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| Error::ConfigurationMissing(crate::config::APP_URL_VAR.to_string()))?;

        debug!("Initializing DocumentBuilder for {}", app_url);
        let document = SwaggerDocument {
            swagger: SWAGGER_VERSION.to_string(),
            info: Info {
                description: config.description.clone(),
                version: config.version.clone(),
                title: config.title.clone(),
            },
            host: host_from_url(app_url),
            base_path: format!("/{}", config.base_path.trim_matches('/')),
            tags: Vec::new(),
            paths: IndexMap::new(),
        };

        Ok(Self { config, document })
    }

    /// Adds one route. Returns whether an operation was written.
    ///
    /// A route whose controller or action has no doc comment is not an error: it still
    /// gets its tag but no operation.
    pub fn add_route(&mut self, route: &RouteDescriptor, docs: &dyn DocLookup) -> Result<bool> {
        let raw_doc = docs.doc_comment(&route.controller_id(), &route.action);
        if raw_doc.is_none() {
            debug!(
                "No doc comment for {}@{}",
                route.controller_id(),
                route.action
            );
        }
        let block = annotation::parse_optional(raw_doc.as_deref());

        self.document.tags.push(route_tag(route, &self.config));

        let Some(entry) = assemble(route, &block, &self.config)? else {
            return Ok(false);
        };

        debug!("Adding operation: {} {}", entry.verb, entry.path);
        self.document
            .paths
            .entry(entry.path)
            .or_default()
            .insert(entry.verb, entry.operation);
        Ok(true)
    }

    /// Processes every route of `source` in enumeration order.
    ///
    /// # Arguments
    ///
    /// * `source` - Route table to enumerate
    /// * `docs` - Doc comment lookup for controller actions
    ///
    /// # Returns
    ///
    /// Returns a `RunSummary` with the number of routes visited, operations written and
    /// routes skipped for lack of annotations.
    ///
    /// # Errors
    ///
    /// Fails when the route table cannot be read. Also stops at the first
    /// [`Error::MissingType`] or [`Error::MissingName`]; the caller must then discard the
    /// builder without writing anything.
    pub fn run(
        &mut self,
        source: &dyn RouteSource,
        docs: &dyn DocLookup,
    ) -> anyhow::Result<RunSummary> {
        let routes = source.routes()?;

        let mut per_controller: IndexMap<String, usize> = IndexMap::new();
        for route in &routes {
            *per_controller.entry(route.controller_id()).or_default() += 1;
        }
        for (controller, count) in &per_controller {
            debug!("Controller {}: {} route(s)", controller, count);
        }

        let mut summary = RunSummary::default();
        for route in &routes {
            info!("{}@{}", route.controller_class, route.action);
            summary.routes += 1;
            if self.add_route(route, docs)? {
                summary.operations += 1;
            } else {
                summary.skipped += 1;
            }
        }

        Ok(summary)
    }

    pub fn document(&self) -> &SwaggerDocument {
        &self.document
    }

    /// Consumes the builder and returns the finished document
    pub fn build(self) -> SwaggerDocument {
        debug!("Building final Swagger document");
        self.document
    }
}

/// Strips an `http://` or `https://` scheme and any trailing slash.
fn host_from_url(url: &str) -> String {
    let host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    host.trim_end_matches('/').to_string()
}
