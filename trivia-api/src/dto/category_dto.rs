use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Category;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub categories: BTreeMap<i32, String>,
    pub total_categories: usize,
}

/// `{id: type}` keyed and ordered by id.
pub fn category_map(categories: Vec<Category>) -> BTreeMap<i32, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

impl From<Vec<Category>> for CategoryListResponse {
    fn from(categories: Vec<Category>) -> Self {
        let categories = category_map(categories);
        Self {
            success: true,
            total_categories: categories.len(),
            categories,
        }
    }
}
