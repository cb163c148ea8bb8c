pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod views;

#[cfg(feature = "cli")]
pub use config::CliArgs;

pub use adapters::HttpTransport;
pub use config::ClientConfig;
pub use crate::core::{
    app::{App, Page},
    reviews::ReviewClient,
    router::{DuplicateNavigationPolicy, Navigation, RouteTable, Router},
};
pub use domain::model::{Rating, Review, ReviewSummary};
pub use utils::error::{ReviewError, Result, TransportError};
pub use views::ViewProps;
