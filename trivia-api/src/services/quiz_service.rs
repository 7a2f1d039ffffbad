use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};

use crate::database::{QuestionFilter, TriviaStore};
use crate::error::{Error, Result};
use crate::models::Question;

type SharedRng = Arc<Mutex<Box<dyn RngCore + Send>>>;

/// Picks quiz questions the player has not seen yet.
#[derive(Clone)]
pub struct QuizService {
    store: Arc<dyn TriviaStore>,
    rng: SharedRng,
}

impl QuizService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    pub fn with_rng<R>(store: Arc<dyn TriviaStore>, rng: R) -> Self
    where
        R: RngCore + Send + 'static,
    {
        Self {
            store,
            rng: Arc::new(Mutex::new(Box::new(rng))),
        }
    }

    /// `None` category means every category. Returns `Ok(None)` once the pool is exhausted.
    pub async fn next_question(
        &self,
        category: Option<i32>,
        previous: &[i32],
    ) -> Result<Option<Question>> {
        let filter = match category {
            Some(id) => {
                if self.store.get_category(id).await?.is_none() {
                    return Err(Error::NotFound(format!("category {} not found", id)));
                }
                QuestionFilter::Category(id)
            }
            None => QuestionFilter::All,
        };

        let seen: HashSet<i32> = previous.iter().copied().collect();
        let pool: Vec<Question> = self
            .store
            .list_questions(filter)
            .await?
            .into_iter()
            .filter(|q| !seen.contains(&q.id))
            .collect();

        if pool.is_empty() {
            tracing::debug!(?category, seen = seen.len(), "quiz candidate pool exhausted");
            return Ok(None);
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|_| Error::Internal("quiz rng mutex poisoned".to_string()))?;
        Ok(pool.choose(&mut **rng).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryTriviaStore;
    use crate::models::Category;
    use rand::rngs::mock::StepRng;

    fn store() -> Arc<dyn TriviaStore> {
        let questions = (1..=6)
            .map(|id| Question {
                id,
                question: format!("question {}", id),
                answer: "answer".into(),
                category: if id % 2 == 0 { 2 } else { 1 },
                difficulty: 1,
            })
            .collect();
        Arc::new(MemoryTriviaStore::seeded(
            vec![Category::new(1, "Science"), Category::new(2, "Art")],
            questions,
        ))
    }

    #[tokio::test]
    async fn never_repeats_and_ends_with_none() {
        let service = QuizService::with_rng(store(), StdRng::seed_from_u64(7));
        let mut previous = Vec::new();
        while let Some(q) = service.next_question(None, &previous).await.unwrap() {
            assert!(!previous.contains(&q.id));
            previous.push(q.id);
        }
        previous.sort_unstable();
        assert_eq!(previous, vec![1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn category_restricts_the_pool() {
        let service = QuizService::with_rng(store(), StdRng::seed_from_u64(1));
        for _ in 0..10 {
            let q = service.next_question(Some(2), &[]).await.unwrap().unwrap();
            assert_eq!(q.category, 2);
        }
        let none = service.next_question(Some(2), &[2, 4, 6]).await.unwrap();
        assert!(none.is_none());
    }

    #[tokio::test]
    async fn fixed_rng_makes_selection_deterministic() {
        let service = QuizService::with_rng(store(), StepRng::new(0, 0));
        let first = service.next_question(None, &[]).await.unwrap().unwrap();
        let second = service.next_question(None, &[]).await.unwrap().unwrap();
        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn unknown_category_is_not_found() {
        let service = QuizService::new(store());
        let err = service.next_question(Some(99), &[]).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
