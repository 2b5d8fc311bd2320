//! Adapters to the application being documented.
//!
//! The generator never talks to a web framework directly. It consumes two capabilities:
//!
//! - a [`RouteSource`], which lists every route bound to a controller action
//! - a [`DocLookup`], which returns the raw doc comment attached to a controller method
//!
//! # Implementations
//!
//! - **Route manifest**: See [`manifest::RouteManifest`]
//! - **PHP controller sources**: See [`php::DocIndex`]
//!
//! # Example
//!
//! ```no_run
//! use swagger_from_routes::adapter::{DocLookup, RouteSource};
//! use swagger_from_routes::adapter::{manifest::RouteManifest, php::DocIndex};
//! use std::path::Path;
//!
//! let routes = RouteManifest::new(Path::new("routes.json")).routes().unwrap();
//! let docs = DocIndex::from_directory(Path::new("app")).unwrap();
//! for route in &routes {
//!     let doc = docs.doc_comment(&route.controller_id(), &route.action);
//!     println!("{} -> {}", route.uri, doc.is_some());
//! }
//! ```

pub mod manifest;
pub mod php;

use anyhow::Result;

/// Supplies the route table of the documented application.
pub trait RouteSource {
    /// Returns every controller-backed route, in registration order.
    ///
    /// Routes handled by inline closures must not be returned.
    fn routes(&self) -> Result<Vec<RouteDescriptor>>;
}

/// Retrieves documentation comments for controller actions.
pub trait DocLookup {
    /// Returns the raw doc comment of `action` on the fully-qualified `controller`,
    /// or `None` when the class, the method or the comment cannot be found.
    fn doc_comment(&self, controller: &str, action: &str) -> Option<String>;
}

/// One registered route bound to a controller action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Domain the route is restricted to, if any
    pub host: Option<String>,
    /// Accepted HTTP methods, in declaration order (e.g. `["GET", "HEAD"]`)
    pub methods: Vec<String>,
    /// URI template, may contain `{param}` and `{param?}` segments
    pub uri: String,
    /// Route name, if any
    pub name: Option<String>,
    /// Namespace of the controller class (e.g. `App\Http\Controllers\Api`)
    pub controller_namespace: String,
    /// Simple class name of the controller (e.g. `UserController`)
    pub controller_class: String,
    /// Name of the action method
    pub action: String,
}

impl RouteDescriptor {
    /// Create a route from a fully-qualified controller identifier
    pub fn new(methods: &[&str], uri: &str, controller: &str, action: &str) -> Self {
        let (controller_namespace, controller_class) = split_controller(controller);
        Self {
            host: None,
            methods: methods.iter().map(|m| m.to_string()).collect(),
            uri: uri.to_string(),
            name: None,
            controller_namespace,
            controller_class,
            action: action.to_string(),
        }
    }

    /// Fully-qualified controller identifier (`Namespace\Class`)
    pub fn controller_id(&self) -> String {
        if self.controller_namespace.is_empty() {
            self.controller_class.clone()
        } else {
            format!("{}\\{}", self.controller_namespace, self.controller_class)
        }
    }
}

/// Splits `A\B\Class` into (`A\B`, `Class`).
pub fn split_controller(controller: &str) -> (String, String) {
    let controller = controller.trim_start_matches('\\');
    match controller.rsplit_once('\\') {
        Some((namespace, class)) => (namespace.to_string(), class.to_string()),
        None => (String::new(), controller.to_string()),
    }
}

impl RouteSource for Vec<RouteDescriptor> {
    fn routes(&self) -> Result<Vec<RouteDescriptor>> {
        Ok(self.clone())
    }
}
