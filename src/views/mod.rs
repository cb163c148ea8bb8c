pub mod rating;
pub mod review_list;

use crate::core::reviews::ReviewClient;
use crate::domain::model::Rating;
use crate::utils::error::ReviewError;
use async_trait::async_trait;

pub use rating::RatingView;
pub use review_list::ReviewListView;

/// Inputs handed to a view when it is mounted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewProps {
    pub rating: Option<Rating>,
}

#[async_trait]
pub trait View: Send {
    fn name(&self) -> &'static str;

    /// Runs once per mount. Request failures are kept for rendering.
    async fn setup(&mut self, client: &ReviewClient);

    fn render(&self) -> String;

    fn error(&self) -> Option<&ReviewError> {
        None
    }
}

pub type ViewFactory = fn(&ViewProps) -> Box<dyn View>;

pub fn rating_view(props: &ViewProps) -> Box<dyn View> {
    Box::new(RatingView::new(props.rating.clone()))
}

pub fn review_list_view(_props: &ViewProps) -> Box<dyn View> {
    Box::new(ReviewListView::new())
}

/// `★★★☆☆` for whole ratings 1-5, the raw number otherwise.
pub(crate) fn stars(rating: &serde_json::Number) -> String {
    match rating.as_u64() {
        Some(n) if (1..=5).contains(&n) => {
            let filled = "★".repeat(n as usize);
            let empty = "☆".repeat(5 - n as usize);
            format!("{}{} ({})", filled, empty, n)
        }
        _ => rating.to_string(),
    }
}
