//! Choice model.

use serde::{Deserialize, Serialize};

/// A selectable answer belonging to one question, carrying a vote tally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub id: i64,
    pub question_id: i64,
    pub choice_text: String,
    /// Non-negative tally, incremented by exactly one per accepted vote.
    pub votes: i64,
}

/// Request body for adding a choice to a question via the admin API.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChoiceRequest {
    pub choice_text: String,
}
