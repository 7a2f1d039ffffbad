use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use rand::{rngs::StdRng, SeedableRng};
use serde_json::Value as JsonValue;
use tower::ServiceExt;
use trivia_api::{
    database::MemoryTriviaStore,
    models::{Category, Question},
    routes::{router, DEFAULT_BODY_LIMIT},
    AppState,
};

pub fn question(id: i32, text: &str, category: i32) -> Question {
    Question {
        id,
        question: text.to_string(),
        answer: format!("answer {}", id),
        category,
        difficulty: (id % 5) + 1,
    }
}

/// Fifteen questions spread over the six default categories.
#[allow(dead_code)]
pub fn sample_questions() -> Vec<Question> {
    vec![
        question(1, "What is the heaviest organ in the human body?", 1),
        question(2, "Who discovered penicillin?", 1),
        question(3, "Hematology is a branch of medicine involving the study of what?", 1),
        question(4, "Which Dutch graphic artist drew impossible objects?", 2),
        question(5, "La Giaconda is better known as what?", 2),
        question(6, "What is the largest lake in Africa?", 3),
        question(7, "In which royal palace would you find the Hall of Mirrors?", 3),
        question(8, "The Taj Mahal is located in which Indian city?", 3),
        question(9, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", 4),
        question(10, "What boxer's original name is Cassius Clay?", 4),
        question(11, "Who invented Peanut Butter?", 4),
        question(12, "What movie earned Tom Hanks his third straight Oscar nomination?", 5),
        question(13, "What actor did author Anne Rice first denounce?", 5),
        question(14, "Which is the only team to play in every soccer World Cup?", 6),
        question(15, "Which country won the first ever soccer World Cup in 1930?", 6),
    ]
}

#[allow(dead_code)]
pub fn setup_app(categories: Vec<Category>, questions: Vec<Question>) -> Router {
    let store = Arc::new(MemoryTriviaStore::seeded(categories, questions));
    let state = AppState::with_rng(store, StdRng::seed_from_u64(42));
    router(state, DEFAULT_BODY_LIMIT)
}

#[allow(dead_code)]
pub fn default_app() -> Router {
    setup_app(MemoryTriviaStore::default_categories(), sample_questions())
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[allow(dead_code)]
pub fn ids(body: &JsonValue) -> Vec<i64> {
    body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

#[allow(dead_code)]
pub fn assert_error(body: &JsonValue, code: u16, message: &str) {
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], code);
    assert_eq!(body["message"], message);
}
