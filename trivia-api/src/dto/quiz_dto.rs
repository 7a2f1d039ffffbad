use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Question;
use crate::utils::deserializers::deserialize_i32_lenient;

/// `id == 0` selects every category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_i32_lenient")]
    pub id: i32,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl QuizCategory {
    pub const ALL: i32 = 0;

    pub fn category_id(&self) -> Option<i32> {
        (self.id != Self::ALL).then_some(self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizPayload {
    pub previous_questions: Option<Vec<i32>>,
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}
