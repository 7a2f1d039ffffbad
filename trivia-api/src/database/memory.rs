use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{QuestionFilter, TriviaStore};
use crate::error::{Error, Result};
use crate::models::{Category, NewQuestion, Question};

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    last_question_id: i32,
}

/// Process-local store backed by ordered maps. Ids are never reused after a delete.
#[derive(Debug, Default)]
pub struct MemoryTriviaStore {
    tables: RwLock<Tables>,
}

impl MemoryTriviaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from fixed rows. Question ids continue after the highest seeded id.
    pub fn seeded(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let last_question_id = questions.iter().map(|q| q.id).max().unwrap_or(0).max(0);
        let tables = Tables {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            questions: questions.into_iter().map(|q| (q.id, q)).collect(),
            last_question_id,
        };
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// The categories shipped with the database migrations.
    pub fn default_categories() -> Vec<Category> {
        ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
            .into_iter()
            .zip(1..)
            .map(|(kind, id)| Category::new(id, kind))
            .collect()
    }
}

#[async_trait]
impl TriviaStore for MemoryTriviaStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.get(&id).cloned())
    }

    async fn list_questions(&self, filter: QuestionFilter) -> Result<Vec<Question>> {
        let tables = self.tables.read().await;
        let needle = match &filter {
            QuestionFilter::Search(term) => Some(term.to_lowercase()),
            _ => None,
        };

        let questions = tables
            .questions
            .values()
            .filter(|q| match &filter {
                QuestionFilter::All => true,
                QuestionFilter::Category(id) => q.category == *id,
                QuestionFilter::Search(_) => needle
                    .as_deref()
                    .is_some_and(|n| q.question.to_lowercase().contains(n)),
            })
            .cloned()
            .collect();
        Ok(questions)
    }

    async fn get_question(&self, id: i32) -> Result<Option<Question>> {
        let tables = self.tables.read().await;
        Ok(tables.questions.get(&id).cloned())
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question> {
        let mut tables = self.tables.write().await;
        if !tables.categories.contains_key(&new.category()) {
            return Err(Error::Unprocessable(format!(
                "category {} does not exist",
                new.category()
            )));
        }

        let id = tables
            .last_question_id
            .checked_add(1)
            .ok_or_else(|| Error::Unprocessable("question ids exhausted".to_string()))?;
        tables.last_question_id = id;
        let question = new.into_question(id);
        tables.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> Result<()> {
        let mut tables = self.tables.write().await;
        match tables.questions.remove(&id) {
            Some(_) => Ok(()),
            None => Err(Error::NotFound(format!("question {} not found", id))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i32, text: &str, category: i32) -> Question {
        Question {
            id,
            question: text.to_string(),
            answer: "answer".to_string(),
            category,
            difficulty: 1,
        }
    }

    fn store() -> MemoryTriviaStore {
        MemoryTriviaStore::seeded(
            MemoryTriviaStore::default_categories(),
            vec![
                question(2, "Which planet is red?", 1),
                question(1, "Who painted the Mona Lisa?", 2),
                question(5, "What is 100% of 3?", 1),
            ],
        )
    }

    #[tokio::test]
    async fn questions_come_back_in_id_order() {
        let ids: Vec<i32> = store()
            .list_questions(QuestionFilter::All)
            .await
            .unwrap()
            .into_iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 5]);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_and_literal() {
        let store = store();
        let hits = store.search_questions("MONA").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        let hits = store.search_questions("100%").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 5);

        assert!(store.search_questions("%%").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_assigns_fresh_ids_and_checks_category() {
        let store = store();
        let created = store
            .insert_question(NewQuestion::new("q", "a", 3, 2).unwrap())
            .await
            .unwrap();
        assert_eq!(created.id, 6);

        let err = store
            .insert_question(NewQuestion::new("q", "a", 99, 2).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Unprocessable(_)));
    }

    #[tokio::test]
    async fn exhausted_ids_reject_insert_without_overwriting() {
        let store = MemoryTriviaStore::seeded(
            MemoryTriviaStore::default_categories(),
            vec![question(1, "first", 1), question(i32::MAX, "last", 1)],
        );

        let err = store
            .insert_question(NewQuestion::new("q", "a", 1, 1).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Unprocessable(_)));

        let all = store.list_questions(QuestionFilter::All).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(store.get_question(1).await.unwrap().unwrap().question, "first");
    }

    #[tokio::test]
    async fn delete_reports_missing_ids() {
        let store = store();
        store.delete_question(2).await.unwrap();
        assert!(store.get_question(2).await.unwrap().is_none());
        assert!(matches!(
            store.delete_question(2).await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn category_filter_matches_exactly() {
        let hits = store().questions_by_category(1).await.unwrap();
        assert_eq!(hits.iter().map(|q| q.id).collect::<Vec<_>>(), vec![2, 5]);
    }
}
