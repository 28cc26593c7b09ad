//! Database repository for CRUD operations.
//!
//! Uses prepared statements for data integrity.

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{Choice, CreateChoiceRequest, CreateQuestionRequest, Question};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== QUESTION OPERATIONS ====================

    /// List all questions, including future-dated ones, newest first.
    pub async fn list_questions(&self) -> Result<Vec<Question>, AppError> {
        let rows = sqlx::query(
            "SELECT id, question_text, pub_date FROM questions ORDER BY pub_date DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(question_from_row).collect()
    }

    /// List questions published at or before `now`, newest first.
    pub async fn list_published_questions(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<Question>, AppError> {
        let rows = sqlx::query(
            "SELECT id, question_text, pub_date FROM questions WHERE pub_date <= ? ORDER BY pub_date DESC, id DESC",
        )
        .bind(now.to_rfc3339())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(question_from_row).collect()
    }

    /// Get a question by ID, regardless of publication date.
    pub async fn get_question(&self, id: i64) -> Result<Option<Question>, AppError> {
        let row = sqlx::query("SELECT id, question_text, pub_date FROM questions WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(question_from_row).transpose()
    }

    /// Get a question by ID if it was published at or before `now`.
    pub async fn get_published_question(
        &self,
        id: i64,
        now: DateTime<Utc>,
    ) -> Result<Option<Question>, AppError> {
        let row = sqlx::query(
            "SELECT id, question_text, pub_date FROM questions WHERE id = ? AND pub_date <= ?",
        )
        .bind(id)
        .bind(now.to_rfc3339())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(question_from_row).transpose()
    }

    /// Create a new question.
    pub async fn create_question(
        &self,
        request: &CreateQuestionRequest,
    ) -> Result<Question, AppError> {
        let pub_date = request.pub_date.unwrap_or_else(Utc::now);

        let result = sqlx::query("INSERT INTO questions (question_text, pub_date) VALUES (?, ?)")
            .bind(&request.question_text)
            .bind(pub_date.to_rfc3339())
            .execute(&self.pool)
            .await?;

        Ok(Question {
            id: result.last_insert_rowid(),
            question_text: request.question_text.clone(),
            pub_date,
        })
    }

    // ==================== CHOICE OPERATIONS ====================

    /// List the choices belonging to a question, in insertion order.
    pub async fn list_choices(&self, question_id: i64) -> Result<Vec<Choice>, AppError> {
        let rows = sqlx::query(
            "SELECT id, question_id, choice_text, votes FROM choices WHERE question_id = ? ORDER BY id",
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(choice_from_row).collect())
    }

    /// Add a choice to an existing question, with a zero vote tally.
    pub async fn create_choice(
        &self,
        question_id: i64,
        request: &CreateChoiceRequest,
    ) -> Result<Choice, AppError> {
        self.get_question(question_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question {} not found", question_id)))?;

        let result =
            sqlx::query("INSERT INTO choices (question_id, choice_text, votes) VALUES (?, ?, 0)")
                .bind(question_id)
                .bind(&request.choice_text)
                .execute(&self.pool)
                .await?;

        Ok(Choice {
            id: result.last_insert_rowid(),
            question_id,
            choice_text: request.choice_text.clone(),
            votes: 0,
        })
    }

    /// Increment the vote tally of a choice belonging to the given question.
    ///
    /// Returns false when the choice does not exist or belongs to a different
    /// question; no row is touched in that case.
    pub async fn record_vote(&self, question_id: i64, choice_id: i64) -> Result<bool, AppError> {
        let result =
            sqlx::query("UPDATE choices SET votes = votes + 1 WHERE id = ? AND question_id = ?")
                .bind(choice_id)
                .bind(question_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}

// Helper functions for row conversion

fn question_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Question, AppError> {
    let pub_date_str: String = row.get("pub_date");
    let pub_date = DateTime::parse_from_rfc3339(&pub_date_str)
        .map_err(|e| AppError::Database(format!("Invalid pub_date in row: {}", e)))?
        .with_timezone(&Utc);

    Ok(Question {
        id: row.get("id"),
        question_text: row.get("question_text"),
        pub_date,
    })
}

fn choice_from_row(row: &sqlx::sqlite::SqliteRow) -> Choice {
    Choice {
        id: row.get("id"),
        question_id: row.get("question_id"),
        choice_text: row.get("choice_text"),
        votes: row.get("votes"),
    }
}
