use crate::adapters::HttpTransport;
use crate::config::ClientConfig;
use crate::core::reviews::ReviewClient;
use crate::core::router::{DuplicateNavigationPolicy, Navigation, RouteTable, Router};
use crate::utils::error::{ReviewError, Result};
use crate::utils::validation::Validate;
use crate::views::ViewProps;

/// Result of opening a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub route: &'static str,
    pub navigation: Navigation,
    pub output: String,
    pub request_failed: bool,
}

/// The mounted application: review client plus router over the default routes.
pub struct App {
    router: Router,
}

impl App {
    pub fn new(client: ReviewClient, policy: DuplicateNavigationPolicy) -> Self {
        Self {
            router: Router::new(RouteTable::default_routes(), policy, client),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::from_config(config)?;
        tracing::debug!("Using reviews API at {}", transport.base_url());
        Ok(Self::new(
            ReviewClient::with_transport(transport),
            config.duplicate_navigation,
        ))
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub async fn open(&mut self, path: &str, props: ViewProps) -> Result<Page> {
        let navigation = self.router.navigate(path, props).await?;
        let active = self
            .router
            .current()
            .ok_or_else(|| ReviewError::RouteNotFound {
                path: path.to_string(),
            })?;

        Ok(Page {
            route: active.route.name,
            navigation,
            output: active.view.render(),
            request_failed: active.view.error().is_some(),
        })
    }
}
