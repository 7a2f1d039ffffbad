use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Question;
use crate::utils::deserializers::deserialize_opt_i32_lenient;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionPayload {
    #[validate(required, length(min = 1))]
    pub question: Option<String>,
    #[validate(required, length(min = 1))]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_i32_lenient")]
    #[validate(required)]
    #[schema(value_type = i32)]
    pub category: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_opt_i32_lenient")]
    #[validate(required)]
    #[schema(value_type = i32)]
    pub difficulty: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchPayload {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Page of questions plus the size of the whole result set.
#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[schema(value_type = Object)]
    pub categories: BTreeMap<i32, String>,
    pub current_category: Option<i32>,
}

/// One page of a filtered listing: a category's questions or search hits.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionCreatedResponse {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionDeletedResponse {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

impl QuestionPageResponse {
    pub fn new(page: QuestionPage, current_category: Option<i32>) -> Self {
        Self {
            success: true,
            questions: page.questions,
            total_questions: page.total,
            current_category,
        }
    }
}
