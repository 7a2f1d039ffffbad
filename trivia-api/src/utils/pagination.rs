use serde::Deserialize;
use utoipa::IntoParams;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
    pub const FIRST: Page = Page(1);

    pub fn new(number: u32) -> Self {
        if number == 0 {
            Self::FIRST
        } else {
            Page(number)
        }
    }

    /// Missing, non-numeric and non-positive values all fall back to the first page.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|n| *n > 0)
            .map(|n| Page(u32::try_from(n).unwrap_or(u32::MAX)))
            .unwrap_or(Self::FIRST)
    }

    pub fn number(self) -> u32 {
        self.0
    }

    pub fn offset(self) -> usize {
        (self.0 as usize - 1).saturating_mul(QUESTIONS_PER_PAGE)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

/// `?page=N`. Kept as a raw string so bad input degrades to page 1 instead of a rejection.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> Page {
        Page::from_query(self.page.as_deref())
    }
}

/// Returns the slice of `items` that falls on `page`; empty when the page is past the end.
pub fn paginate<T>(items: Vec<T>, page: Page) -> Vec<T> {
    items
        .into_iter()
        .skip(page.offset())
        .take(QUESTIONS_PER_PAGE)
        .collect()
}
