use std::sync::Arc;

use crate::database::{QuestionFilter, TriviaStore};
use crate::dto::question_dto::{CreateQuestionPayload, QuestionPage};
use crate::error::{Error, Result};
use crate::models::{Category, NewQuestion, Question};
use crate::utils::pagination::{paginate, Page};

#[derive(Clone)]
pub struct QuestionService {
    store: Arc<dyn TriviaStore>,
}

impl QuestionService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.store.list_categories().await
    }

    pub async fn require_category(&self, id: i32) -> Result<Category> {
        self.store
            .get_category(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("category {} not found", id)))
    }

    pub async fn page(&self, filter: QuestionFilter, page: Page) -> Result<QuestionPage> {
        let all = self.store.list_questions(filter).await?;
        let total = all.len();
        Ok(QuestionPage {
            questions: paginate(all, page),
            total,
        })
    }

    /// Same as [`Self::page`] but an empty page is a 404.
    pub async fn non_empty_page(&self, filter: QuestionFilter, page: Page) -> Result<QuestionPage> {
        let result = self.page(filter, page).await?;
        if result.questions.is_empty() {
            return Err(Error::NotFound(format!(
                "no questions on page {}",
                page.number()
            )));
        }
        Ok(result)
    }

    pub async fn search(&self, term: &str, page: Page) -> Result<QuestionPage> {
        self.page(QuestionFilter::Search(term.to_string()), page)
            .await
    }

    pub async fn create(&self, payload: CreateQuestionPayload) -> Result<Question> {
        let missing = |field: &str| Error::Unprocessable(format!("{} is required", field));
        let new = NewQuestion::new(
            payload.question.ok_or_else(|| missing("question"))?,
            payload.answer.ok_or_else(|| missing("answer"))?,
            payload.category.ok_or_else(|| missing("category"))?,
            payload.difficulty.ok_or_else(|| missing("difficulty"))?,
        )?;

        if self.store.get_category(new.category()).await?.is_none() {
            return Err(Error::Unprocessable(format!(
                "category {} does not exist",
                new.category()
            )));
        }

        let created = self
            .store
            .insert_question(new)
            .await
            .map_err(Error::into_unprocessable)?;
        tracing::info!(question_id = created.id, category = created.category, "question created");
        Ok(created)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        self.store
            .delete_question(id)
            .await
            .map_err(Error::into_unprocessable)?;
        tracing::info!(question_id = id, "question deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::store::MockTriviaStore;

    fn payload(question: &str, answer: &str) -> CreateQuestionPayload {
        CreateQuestionPayload {
            question: Some(question.to_string()),
            answer: Some(answer.to_string()),
            category: Some(1),
            difficulty: Some(2),
        }
    }

    #[tokio::test]
    async fn insert_failure_is_unprocessable() {
        let mut store = MockTriviaStore::new();
        store
            .expect_get_category()
            .returning(|id| Ok(Some(Category::new(id, "Science"))));
        store
            .expect_insert_question()
            .times(1)
            .returning(|_| Err(Error::Database(sqlx::Error::PoolTimedOut)));

        let service = QuestionService::new(Arc::new(store));
        let err = service.create(payload("q", "a")).await.unwrap_err();
        assert!(matches!(err, Error::Unprocessable(_)));
    }

    #[tokio::test]
    async fn blank_question_never_reaches_storage() {
        let mut store = MockTriviaStore::new();
        store.expect_insert_question().never();
        store.expect_get_category().never();

        let service = QuestionService::new(Arc::new(store));
        let err = service.create(payload("  ", "a")).await.unwrap_err();
        assert!(matches!(err, Error::Unprocessable(_)));
    }

    #[tokio::test]
    async fn unknown_category_is_rejected_before_insert() {
        let mut store = MockTriviaStore::new();
        store.expect_get_category().returning(|_| Ok(None));
        store.expect_insert_question().never();

        let service = QuestionService::new(Arc::new(store));
        let err = service.create(payload("q", "a")).await.unwrap_err();
        assert!(matches!(err, Error::Unprocessable(_)));
    }

    #[tokio::test]
    async fn missing_row_on_delete_stays_not_found() {
        let mut store = MockTriviaStore::new();
        store
            .expect_delete_question()
            .returning(|id| Err(Error::NotFound(format!("question {} not found", id))));

        let service = QuestionService::new(Arc::new(store));
        assert!(matches!(service.delete(42).await, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn read_failure_stays_internal() {
        let mut store = MockTriviaStore::new();
        store
            .expect_list_questions()
            .returning(|_| Err(Error::Database(sqlx::Error::PoolClosed)));

        let service = QuestionService::new(Arc::new(store));
        let err = service
            .page(QuestionFilter::All, Page::FIRST)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Database(_)));
    }
}
