use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Category, NewQuestion, Question};

/// Which questions a listing should return. Results are always ordered by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionFilter {
    All,
    Category(i32),
    /// Case-insensitive substring of the question text.
    Search(String),
}

/// Storage seam for the handlers. Each method is a single, individually atomic operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn get_category(&self, id: i32) -> Result<Option<Category>>;

    async fn list_questions(&self, filter: QuestionFilter) -> Result<Vec<Question>>;

    async fn get_question(&self, id: i32) -> Result<Option<Question>>;

    /// Fails with `Unprocessable` when the category does not exist.
    async fn insert_question(&self, new: NewQuestion) -> Result<Question>;

    /// Fails with `NotFound` when no question has this id.
    async fn delete_question(&self, id: i32) -> Result<()>;

    async fn questions_by_category(&self, category_id: i32) -> Result<Vec<Question>> {
        self.list_questions(QuestionFilter::Category(category_id)).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        self.list_questions(QuestionFilter::Search(term.to_string()))
            .await
    }
}

/// Escapes `ILIKE` wildcards so the term only ever matches literally.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b\\c"), "a\\_b\\\\c");
        assert_eq!(escape_like("plain"), "plain");
    }
}
