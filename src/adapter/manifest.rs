//! Route table adapter for Laravel's `route:list --json` output.
//!
//! Closure routes and entries without a controller action are dropped.

use crate::adapter::{split_controller, RouteDescriptor, RouteSource};
use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Action name used for single-action (invokable) controllers.
const INVOKE_ACTION: &str = "__invoke";

/// Route table read from a JSON manifest.
///
/// The manifest is the array printed by `php artisan route:list --json`:
///
/// ```json
/// [{"domain": null, "method": "GET|HEAD", "uri": "api/v1/users/{id}",
///   "name": "users.show", "action": "App\\Http\\Controllers\\UserController@show"}]
/// ```
pub struct RouteManifest {
    path: PathBuf,
}

/// One raw entry of the manifest. Extra keys such as `middleware` are ignored.
#[derive(Debug, Deserialize)]
struct ManifestEntry {
    #[serde(default)]
    domain: Option<String>,
    method: String,
    uri: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    action: Option<String>,
}

impl RouteManifest {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Parses manifest JSON text into controller-backed routes.
    ///
    /// # Arguments
    ///
    /// * `content` - The manifest text, a JSON array of route objects
    ///
    /// # Returns
    ///
    /// Returns one `RouteDescriptor` per controller route, in manifest order.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON array of route objects.
    ///
    /// # Example
    ///
    /// ```
    /// use swagger_from_routes::adapter::manifest::RouteManifest;
    ///
    /// let routes = RouteManifest::parse_str(
    ///     r#"[{"method": "GET|HEAD", "uri": "api/v1/users", "action": "App\\Http\\Controllers\\UserController@index"},
    ///         {"method": "GET|HEAD", "uri": "up", "action": "Closure"}]"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(routes.len(), 1);
    /// assert_eq!(routes[0].controller_class, "UserController");
    /// assert_eq!(routes[0].methods, vec!["GET", "HEAD"]);
    /// ```
    pub fn parse_str(content: &str) -> Result<Vec<RouteDescriptor>> {
        let entries: Vec<ManifestEntry> =
            serde_json::from_str(content).context("Route manifest is not a JSON array of routes")?;

        let total = entries.len();
        let routes: Vec<RouteDescriptor> = entries.into_iter().filter_map(to_descriptor).collect();

        debug!(
            "Route manifest: {} entries, {} controller routes",
            total,
            routes.len()
        );
        Ok(routes)
    }
}

impl RouteSource for RouteManifest {
    fn routes(&self) -> Result<Vec<RouteDescriptor>> {
        debug!("Reading route manifest: {}", self.path.display());
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read route manifest: {}", self.path.display()))?;
        Self::parse_str(&content)
    }
}

fn to_descriptor(entry: ManifestEntry) -> Option<RouteDescriptor> {
    let action = entry.action.as_deref().map(str::trim).unwrap_or_default();
    if action.is_empty() || action == "Closure" {
        debug!("Skipping closure route: {}", entry.uri);
        return None;
    }

    let (controller, method) = match action.split_once('@') {
        Some((controller, method)) => (controller, method),
        None => (action, INVOKE_ACTION),
    };
    let (controller_namespace, controller_class) = split_controller(controller);

    Some(RouteDescriptor {
        host: entry.domain.filter(|d| !d.is_empty()),
        methods: entry
            .method
            .split('|')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect(),
        uri: entry.uri,
        name: entry.name,
        controller_namespace,
        controller_class,
        action: method.to_string(),
    })
}
