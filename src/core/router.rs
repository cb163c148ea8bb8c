use crate::core::reviews::ReviewClient;
use crate::utils::error::{ReviewError, Result};
use crate::views::{self, View, ViewFactory, ViewProps};
use serde::{Deserialize, Serialize};

/// What to do when navigating to the route that is already active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateNavigationPolicy {
    /// Remount: a fresh view from the factory, setup run again.
    #[default]
    Reload,
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Mounted,
    Reloaded,
    Unchanged,
}

pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub factory: ViewFactory,
}

pub static ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "home",
        factory: views::rating_view,
    },
    Route {
        path: "/reviews",
        name: "reviews",
        factory: views::review_list_view,
    },
];

#[derive(Clone, Copy)]
pub struct RouteTable {
    routes: &'static [Route],
}

impl RouteTable {
    pub fn new(routes: &'static [Route]) -> Self {
        Self { routes }
    }

    pub fn default_routes() -> Self {
        Self::new(ROUTES)
    }

    pub fn resolve(&self, path: &str) -> Option<&'static Route> {
        let routes = self.routes;
        let wanted = normalize_path(path);
        routes.iter().find(|route| route.path == wanted)
    }

    pub fn paths(&self) -> impl Iterator<Item = &'static str> {
        let routes = self.routes;
        routes.iter().map(|route| route.path)
    }
}

/// Drops query, fragment and trailing slash: `/reviews/?page=2` -> `/reviews`.
pub fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

pub struct ActiveRoute {
    pub route: &'static Route,
    pub view: Box<dyn View>,
    pub mounts: u32,
}

pub struct Router {
    table: RouteTable,
    policy: DuplicateNavigationPolicy,
    client: ReviewClient,
    current: Option<ActiveRoute>,
}

impl Router {
    pub fn new(table: RouteTable, policy: DuplicateNavigationPolicy, client: ReviewClient) -> Self {
        Self {
            table,
            policy,
            client,
            current: None,
        }
    }

    pub fn policy(&self) -> DuplicateNavigationPolicy {
        self.policy
    }

    pub fn current(&self) -> Option<&ActiveRoute> {
        self.current.as_ref()
    }

    pub async fn navigate(&mut self, path: &str, props: ViewProps) -> Result<Navigation> {
        let route = self
            .table
            .resolve(path)
            .ok_or_else(|| ReviewError::RouteNotFound {
                path: path.to_string(),
            })?;

        let previous_mounts = match &self.current {
            Some(active) if active.route.path == route.path => {
                if self.policy == DuplicateNavigationPolicy::Ignore {
                    tracing::debug!("Already on {}, ignoring navigation", route.path);
                    return Ok(Navigation::Unchanged);
                }
                Some(active.mounts)
            }
            _ => None,
        };

        tracing::debug!("Mounting route '{}' ({})", route.name, route.path);
        let mut view = (route.factory)(&props);
        view.setup(&self.client).await;

        let (navigation, mounts) = match previous_mounts {
            Some(mounts) => (Navigation::Reloaded, mounts + 1),
            None => (Navigation::Mounted, 1),
        };
        self.current = Some(ActiveRoute {
            route,
            view,
            mounts,
        });
        Ok(navigation)
    }
}
