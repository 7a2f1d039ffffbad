use async_trait::async_trait;
use sqlx::PgPool;

use super::store::{escape_like, QuestionFilter, TriviaStore};
use crate::error::{Error, Result};
use crate::models::{Category, NewQuestion, Question};

/// Postgres foreign key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Clone)]
pub struct PgTriviaStore {
    pool: PgPool,
}

impl PgTriviaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgTriviaStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"SELECT id, type FROM categories ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>(r#"SELECT id, type FROM categories WHERE id = $1"#)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(category)
    }

    async fn list_questions(&self, filter: QuestionFilter) -> Result<Vec<Question>> {
        let questions = match filter {
            QuestionFilter::All => {
                sqlx::query_as::<_, Question>(
                    r#"
                    SELECT id, question, answer, category, difficulty
                    FROM questions
                    ORDER BY id
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
            QuestionFilter::Category(category_id) => {
                sqlx::query_as::<_, Question>(
                    r#"
                    SELECT id, question, answer, category, difficulty
                    FROM questions
                    WHERE category = $1
                    ORDER BY id
                    "#,
                )
                .bind(category_id)
                .fetch_all(&self.pool)
                .await?
            }
            QuestionFilter::Search(term) => {
                sqlx::query_as::<_, Question>(
                    r#"
                    SELECT id, question, answer, category, difficulty
                    FROM questions
                    WHERE question ILIKE '%' || $1 || '%' ESCAPE '\'
                    ORDER BY id
                    "#,
                )
                .bind(escape_like(&term))
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(questions)
    }

    async fn get_question(&self, id: i32) -> Result<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            r#"SELECT id, question, answer, category, difficulty FROM questions WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(question)
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question> {
        let inserted = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(new.question())
        .bind(new.answer())
        .bind(new.category())
        .bind(new.difficulty())
        .fetch_one(&self.pool)
        .await;

        match inserted {
            Ok(question) => Ok(question),
            Err(sqlx::Error::Database(db_err))
                if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) =>
            {
                Err(Error::Unprocessable(format!(
                    "category {} does not exist",
                    new.category()
                )))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn delete_question(&self, id: i32) -> Result<()> {
        let res = sqlx::query(r#"DELETE FROM questions WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("question {} not found", id)));
        }
        Ok(())
    }
}
