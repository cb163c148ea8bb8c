use crate::domain::model::{RatePayload, Rating, Review};
use crate::domain::ports::{Method, Transport};
use crate::utils::error::{ReviewError, Result};
use std::sync::Arc;

pub const REVIEWS_PATH: &str = "/reviews/";

/// Thin client over the `/reviews/` resource.
///
/// Every call is a single request. Whatever goes wrong underneath is
/// logged and reported as [`ReviewError::SubmitFailed`] or
/// [`ReviewError::FetchFailed`]; the cause is not returned.
#[derive(Clone)]
pub struct ReviewClient {
    transport: Arc<dyn Transport>,
}

impl ReviewClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn with_transport<T: Transport + 'static>(transport: T) -> Self {
        Self::new(Arc::new(transport))
    }

    /// `POST /reviews/` with `{"rating": rating}`; returns the response body as-is.
    pub async fn submit_rating(&self, rating: impl Into<Rating>) -> Result<Review> {
        let payload = RatePayload {
            rating: rating.into(),
        };
        tracing::debug!("Submitting rating {}", payload.rating);

        let body = match serde_json::to_value(&payload) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Error submitting rating: {}", e);
                return Err(ReviewError::SubmitFailed);
            }
        };

        match self
            .transport
            .send(Method::Post, REVIEWS_PATH, Some(&body))
            .await
        {
            Ok(review) => Ok(review),
            Err(e) => {
                tracing::error!("Error submitting rating: {}", e);
                Err(ReviewError::SubmitFailed)
            }
        }
    }

    /// `GET /reviews/`; returns the response body as-is.
    pub async fn fetch_reviews(&self) -> Result<Review> {
        tracing::debug!("Fetching reviews");

        self.transport
            .send(Method::Get, REVIEWS_PATH, None)
            .await
            .map_err(|e| {
                tracing::error!("Error fetching reviews: {}", e);
                ReviewError::FetchFailed
            })
    }
}
