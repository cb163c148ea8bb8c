use super::{stars, View};
use crate::core::reviews::ReviewClient;
use crate::domain::model::{Rating, Review, ReviewSummary};
use crate::utils::error::ReviewError;
use async_trait::async_trait;

enum RatingState {
    Prompt,
    Submitted(Review),
    Failed(ReviewError),
}

/// Home page: submits the rating given in the props, or asks for one.
pub struct RatingView {
    rating: Option<Rating>,
    state: RatingState,
}

impl RatingView {
    pub fn new(rating: Option<Rating>) -> Self {
        Self {
            rating,
            state: RatingState::Prompt,
        }
    }

    pub fn submitted(&self) -> Option<&Review> {
        match &self.state {
            RatingState::Submitted(review) => Some(review),
            _ => None,
        }
    }
}

#[async_trait]
impl View for RatingView {
    fn name(&self) -> &'static str {
        "home"
    }

    async fn setup(&mut self, client: &ReviewClient) {
        let Some(rating) = self.rating.clone() else {
            self.state = RatingState::Prompt;
            return;
        };

        self.state = match client.submit_rating(rating).await {
            Ok(review) => {
                tracing::info!("✅ Rating submitted");
                RatingState::Submitted(review)
            }
            Err(e) => RatingState::Failed(e),
        };
    }

    fn render(&self) -> String {
        match &self.state {
            RatingState::Prompt => {
                "How would you rate us?\n☆☆☆☆☆  pick 1-5 and pass it with --rating <N>".to_string()
            }
            RatingState::Submitted(review) => {
                let summary = ReviewSummary::from_review(review);
                let shown = summary
                    .rating
                    .as_ref()
                    .map(stars)
                    .or_else(|| self.rating.as_ref().map(|r| stars(r.as_number())))
                    .unwrap_or_default();
                match summary.id {
                    Some(id) => format!("Thanks for your feedback! {} saved as review #{}", shown, id),
                    None => format!("Thanks for your feedback! {}", shown),
                }
            }
            RatingState::Failed(e) => format!("❌ {}", e.user_friendly_message()),
        }
    }

    fn error(&self) -> Option<&ReviewError> {
        match &self.state {
            RatingState::Failed(e) => Some(e),
            _ => None,
        }
    }
}
