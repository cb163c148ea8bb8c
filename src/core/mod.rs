pub mod app;
pub mod reviews;
pub mod router;

pub use crate::domain::ports::{Method, Transport};
