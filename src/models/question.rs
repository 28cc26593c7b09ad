//! Question model and the publish-recency predicate.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A poll question with a publication date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question_text: String,
    /// Publication date. Questions with a `pub_date` in the future are not
    /// visible on the public pages until that instant passes.
    pub pub_date: DateTime<Utc>,
}

impl Question {
    /// Whether this question was published within the last day, evaluated
    /// against the supplied instant.
    ///
    /// True iff `now - 24h < pub_date <= now`. Future publication dates are
    /// never "recent".
    pub fn was_published_recently_at(&self, now: DateTime<Utc>) -> bool {
        self.pub_date > now - Duration::days(1) && self.pub_date <= now
    }
}

/// Request body for creating a new question via the admin API.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestionRequest {
    pub question_text: String,
    /// Defaults to the current instant when omitted.
    #[serde(default)]
    pub pub_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_published_at(pub_date: DateTime<Utc>) -> Question {
        Question {
            id: 1,
            question_text: "What's new?".to_string(),
            pub_date,
        }
    }

    #[test]
    fn was_published_recently_with_future_question() {
        let now = Utc::now();
        let future_question = question_published_at(now + Duration::days(30));
        assert!(!future_question.was_published_recently_at(now));
    }

    #[test]
    fn was_published_recently_with_old_question() {
        let now = Utc::now();
        let old_question = question_published_at(now - Duration::days(1) - Duration::seconds(1));
        assert!(!old_question.was_published_recently_at(now));
    }

    #[test]
    fn was_published_recently_with_recent_question() {
        let now = Utc::now();
        let recent_question = question_published_at(
            now - Duration::hours(23) - Duration::minutes(59) - Duration::seconds(59),
        );
        assert!(recent_question.was_published_recently_at(now));
    }

    #[test]
    fn was_published_recently_at_exact_boundaries() {
        let now = Utc::now();
        // Published right now counts as recent.
        assert!(question_published_at(now).was_published_recently_at(now));
        // Exactly one day ago is outside the half-open window.
        assert!(!question_published_at(now - Duration::days(1)).was_published_recently_at(now));
    }
}
