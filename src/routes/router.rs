// Start of file: /src/routes/router.rs

/*
    * Router wrapper that keeps named route groups around so handlers can be
    * attached to a group after it was registered. Groups are nested under
    * their path when the final axum Router is built.
*/

use std::collections::HashMap;
use axum::{routing::MethodRouter, Router};
use tracing::debug;

pub struct GroupRouter<S = ()> {
    engine: Router<S>,
    groups: HashMap<String, Router<S>>,
}

impl<S> Default for GroupRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> GroupRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            engine: Router::new(),
            groups: HashMap::new(),
        }
    }

    /// Registers an empty group under `path`.
    /// An existing group at the same path is kept with its routes.
    pub fn add_group(&mut self, path: &str) {
        let path: String = normalize_path(path);
        debug!("Registering route group '{path}'");
        self.groups.entry(path).or_default();
    }

    /// Returns the group registered under `path`, if any.
    pub fn group(&self, path: &str) -> Option<&Router<S>> {
        self.groups.get(&normalize_path(path))
    }

    /// Replaces the group under `path` with `f(group)`, registering it first if needed.
    pub fn with_group<F>(&mut self, path: &str, f: F)
    where
        F: FnOnce(Router<S>) -> Router<S>,
    {
        let path: String = normalize_path(path);
        let group: Router<S> = self.groups.remove(&path).unwrap_or_default();
        self.groups.insert(path, f(group));
    }

    /// Adds a route to the base engine, outside of any group.
    pub fn route(&mut self, path: &str, method_router: MethodRouter<S>) {
        let engine: Router<S> = std::mem::take(&mut self.engine);
        self.engine = engine.route(path, method_router);
    }

    /// Registered group paths, sorted.
    pub fn group_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.groups.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    /// Flattens the engine and every group into one Router.
    pub fn into_router(self) -> Router<S> {
        let mut groups: Vec<(String, Router<S>)> = self.groups.into_iter().collect();
        groups.sort_by(|a, b| a.0.cmp(&b.0));

        groups.into_iter().fold(self.engine, |router, (path, group)| {
            // axum refuses to nest at the root
            if path == "/" {
                router.merge(group)
            } else {
                router.nest(&path, group)
            }
        })
    }
}

// * "api/" -> "/api", "" -> "/"
fn normalize_path(path: &str) -> String {
    let trimmed: &str = path.trim().trim_matches('/');
    format!("/{trimmed}")
}


// End of file: /src/routes/router.rs
