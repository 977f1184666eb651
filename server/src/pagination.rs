//! Page-number pagination with fixed per-view page sizes.

use serde::Serialize;
use utoipa::ToSchema;

pub const DISH_PAGE_SIZE: i64 = 15;
pub const INGREDIENT_PAGE_SIZE: i64 = 15;
pub const DISH_TYPE_PAGE_SIZE: i64 = 21;
pub const COOK_PAGE_SIZE: i64 = 5;
pub const SUGGESTION_PAGE_SIZE: i64 = 9;

/// A requested page of a list view. Page numbers are 1-based; anything
/// below 1 is clamped to the first page.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub number: i64,
    pub size: i64,
}

impl Page {
    pub fn new(number: Option<i64>, size: i64) -> Self {
        Self {
            number: number.unwrap_or(1).max(1),
            size,
        }
    }

    pub fn limit(&self) -> i64 {
        self.size
    }

    pub fn offset(&self) -> i64 {
        (self.number - 1) * self.size
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PageMeta {
    /// Total number of matching rows across all pages
    pub total: i64,
    /// The page that was returned (1-based)
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

impl PageMeta {
    pub fn new(page: Page, total: i64) -> Self {
        Self {
            total,
            page: page.number,
            per_page: page.size,
            total_pages: (total + page.size - 1) / page.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_defaults_to_first() {
        let page = Page::new(None, 15);
        assert_eq!(page.number, 1);
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 15);
    }

    #[test]
    fn test_page_below_one_is_clamped() {
        assert_eq!(Page::new(Some(0), 15).number, 1);
        assert_eq!(Page::new(Some(-3), 15).number, 1);
    }

    #[test]
    fn test_offset_skips_earlier_pages() {
        assert_eq!(Page::new(Some(3), 5).offset(), 10);
        assert_eq!(Page::new(Some(2), 21).offset(), 21);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let page = Page::new(Some(1), 9);
        assert_eq!(PageMeta::new(page, 0).total_pages, 0);
        assert_eq!(PageMeta::new(page, 9).total_pages, 1);
        assert_eq!(PageMeta::new(page, 10).total_pages, 2);
    }
}
