use super::{stars, View};
use crate::core::reviews::ReviewClient;
use crate::domain::model::{Review, ReviewSummary};
use crate::utils::error::ReviewError;
use async_trait::async_trait;

enum ListState {
    Loading,
    Loaded(Review),
    Failed(ReviewError),
}

pub struct ReviewListView {
    state: ListState,
}

impl ReviewListView {
    pub fn new() -> Self {
        Self {
            state: ListState::Loading,
        }
    }
}

impl Default for ReviewListView {
    fn default() -> Self {
        Self::new()
    }
}

fn render_entry(review: &Review) -> String {
    let summary = ReviewSummary::from_review(review);
    let mut line = match summary.id {
        Some(id) => format!("#{:<4}", id),
        None => "#?   ".to_string(),
    };
    match &summary.rating {
        Some(rating) => line.push_str(&stars(rating)),
        None => line.push_str(&review.to_string()),
    }
    if let Some(created_at) = summary.created_at {
        line.push_str(&format!("  {}", created_at.format("%Y-%m-%d %H:%M")));
    }
    line
}

#[async_trait]
impl View for ReviewListView {
    fn name(&self) -> &'static str {
        "reviews"
    }

    async fn setup(&mut self, client: &ReviewClient) {
        self.state = match client.fetch_reviews().await {
            Ok(reviews) => ListState::Loaded(reviews),
            Err(e) => ListState::Failed(e),
        };
    }

    fn render(&self) -> String {
        match &self.state {
            ListState::Loading => "Loading reviews...".to_string(),
            ListState::Loaded(serde_json::Value::Array(items)) if items.is_empty() => {
                "No reviews yet.".to_string()
            }
            ListState::Loaded(serde_json::Value::Array(items)) => {
                // 保持伺服器回傳的順序
                let mut lines = vec![format!("Reviews ({})", items.len())];
                lines.extend(items.iter().map(render_entry));
                lines.join("\n")
            }
            ListState::Loaded(other) => {
                serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string())
            }
            ListState::Failed(e) => format!("❌ {}", e.user_friendly_message()),
        }
    }

    fn error(&self) -> Option<&ReviewError> {
        match &self.state {
            ListState::Failed(e) => Some(e),
            _ => None,
        }
    }
}
