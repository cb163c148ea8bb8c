use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A backend review record. The client never inspects its shape.
pub type Review = serde_json::Value;

/// 使用者送出的評分，客戶端不檢查範圍
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(serde_json::Number);

impl Rating {
    /// Returns `None` for NaN and infinities, which have no JSON form.
    pub fn from_f64(value: f64) -> Option<Self> {
        serde_json::Number::from_f64(value).map(Rating)
    }

    pub fn as_number(&self) -> &serde_json::Number {
        &self.0
    }
}

macro_rules! rating_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rating {
                fn from(value: $t) -> Self {
                    Rating(serde_json::Number::from(value))
                }
            }
        )*
    };
}

rating_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(Rating::from(value));
        }
        trimmed
            .parse::<f64>()
            .ok()
            .and_then(Rating::from_f64)
            .ok_or_else(|| format!("'{}' is not a number", s))
    }
}

/// Request body for `POST /reviews/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatePayload {
    pub rating: Rating,
}

/// Best-effort typed view of a review, used only for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewSummary {
    pub id: Option<i64>,
    pub rating: Option<serde_json::Number>,
    pub created_at: Option<NaiveDateTime>,
}

impl ReviewSummary {
    pub fn from_review(review: &Review) -> Self {
        let id = review.get("id").and_then(|v| v.as_i64());
        let rating = match review.get("rating") {
            Some(serde_json::Value::Number(n)) => Some(n.clone()),
            _ => None,
        };
        let created_at = review
            .get("created_at")
            .and_then(|v| v.as_str())
            .and_then(parse_timestamp);

        Self {
            id,
            rating,
            created_at,
        }
    }
}

// 後端可能回傳不帶時區的時間
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rating_serializes_as_plain_number() {
        let payload = RatePayload {
            rating: Rating::from(5),
        };
        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"rating": 5}));

        let payload = RatePayload {
            rating: Rating::from_f64(4.5).unwrap(),
        };
        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"rating": 4.5}));
    }

    #[test]
    fn test_rating_is_not_range_checked() {
        assert_eq!(Rating::from(-3).to_string(), "-3");
        assert_eq!(Rating::from(1000u32).to_string(), "1000");
    }

    #[test]
    fn test_rating_from_str() {
        assert_eq!("4".parse::<Rating>().unwrap(), Rating::from(4));
        assert_eq!(" 3.5 ".parse::<Rating>().unwrap(), Rating::from_f64(3.5).unwrap());
        assert!("five".parse::<Rating>().is_err());
        assert!("NaN".parse::<Rating>().is_err());
        assert!(Rating::from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn test_summary_from_backend_record() {
        let review = json!({"id": 7, "rating": 4, "created_at": "2024-03-01T10:15:30.123456"});
        let summary = ReviewSummary::from_review(&review);
        assert_eq!(summary.id, Some(7));
        assert_eq!(summary.rating, Some(serde_json::Number::from(4)));
        assert_eq!(
            summary.created_at.unwrap().format("%Y-%m-%d %H:%M").to_string(),
            "2024-03-01 10:15"
        );
    }

    #[test]
    fn test_summary_is_lenient() {
        let summary = ReviewSummary::from_review(&json!({"rating": "great"}));
        assert_eq!(summary, ReviewSummary::default());

        let summary = ReviewSummary::from_review(&json!("not an object"));
        assert_eq!(summary, ReviewSummary::default());
    }
}
