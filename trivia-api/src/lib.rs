pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use rand::RngCore;

use crate::database::TriviaStore;
use crate::services::{question_service::QuestionService, quiz_service::QuizService};

/// Everything a handler needs, built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub question_service: QuestionService,
    pub quiz_service: QuizService,
}

impl AppState {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self {
            question_service: QuestionService::new(store.clone()),
            quiz_service: QuizService::new(store),
        }
    }

    /// Same as [`AppState::new`] with a caller-supplied random source for quiz selection.
    pub fn with_rng<R>(store: Arc<dyn TriviaStore>, rng: R) -> Self
    where
        R: RngCore + Send + 'static,
    {
        Self {
            question_service: QuestionService::new(store.clone()),
            quiz_service: QuizService::with_rng(store, rng),
        }
    }
}
