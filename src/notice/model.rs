//! Notice domain types

use chrono::{NaiveDate, NaiveDateTime};

/// Default page number (0-based)
pub const DEFAULT_PAGE_NUMBER: usize = 0;
/// Default page size
pub const DEFAULT_PAGE_SIZE: usize = 100;
/// Smallest accepted page size
pub const MIN_PAGE_SIZE: usize = 1;
/// Largest accepted page size
pub const MAX_PAGE_SIZE: usize = 100;

/// Notice category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeCategory {
    Info,
    Important,
}

impl NoticeCategory {
    /// All categories in display order
    pub const ALL: [NoticeCategory; 2] = [NoticeCategory::Info, NoticeCategory::Important];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Info => "0",
            Self::Important => "1",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "Information",
            Self::Important => "Important",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Label for a stored code, falling back to the raw code
    pub fn label_for_code(code: &str) -> &str {
        Self::from_code(code).map(|c| c.label()).unwrap_or(code)
    }
}

/// A notice record
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Assigned by the service on create
    pub id: Option<u64>,
    pub title: String,
    pub category_code: String,
    pub post_date: NaiveDate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub content: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Notice {
    pub fn category_label(&self) -> &str {
        NoticeCategory::label_for_code(&self.category_code)
    }

    /// Whether the notice applies on the given day
    pub fn is_active_on(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }
}

/// Search filters. `None` means "do not filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeSearchCondition {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    pub category_code: Option<String>,
    pub post_date: Option<NaiveDate>,
    /// Matches notices whose start date is on or after this day
    pub effective_from: Option<NaiveDate>,
    /// Matches notices whose end date is on or before this day
    pub effective_to: Option<NaiveDate>,
}

impl NoticeSearchCondition {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category_code.is_none()
            && self.post_date.is_none()
            && self.effective_from.is_none()
            && self.effective_to.is_none()
    }

    pub fn matches(&self, notice: &Notice) -> bool {
        if let Some(ref title) = self.title {
            if !notice
                .title
                .to_lowercase()
                .contains(&title.to_lowercase())
            {
                return false;
            }
        }
        if let Some(ref code) = self.category_code {
            if &notice.category_code != code {
                return false;
            }
        }
        if self.post_date.is_some_and(|d| notice.post_date != d) {
            return false;
        }
        if self.effective_from.is_some_and(|d| notice.start_date < d) {
            return false;
        }
        if self.effective_to.is_some_and(|d| notice.end_date > d) {
            return false;
        }
        true
    }
}

/// Page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub page: usize,
    pub size: usize,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Paging {
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }.normalized()
    }

    /// Clamp the size into the accepted range
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(DEFAULT_PAGE_NUMBER),
            size: self.size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> usize {
        self.page * self.size
    }
}

/// One page of search results
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub paging: Paging,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn empty(paging: Paging) -> Self {
        Self {
            items: Vec::new(),
            paging,
            total: 0,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.paging.size.max(1))
    }

    pub fn has_next(&self) -> bool {
        self.paging.page + 1 < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.paging.page > 0
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty(Paging::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_notice() -> Notice {
        Notice {
            id: Some(1),
            title: "Office Closure".to_string(),
            category_code: "1".to_string(),
            post_date: date(2024, 3, 1),
            start_date: date(2024, 3, 10),
            end_date: date(2024, 3, 20),
            content: "Closed for renovation.".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    mod category {
        use super::*;

        #[test]
        fn test_from_code() {
            assert_eq!(NoticeCategory::from_code("0"), Some(NoticeCategory::Info));
            assert_eq!(NoticeCategory::from_code("1"), Some(NoticeCategory::Important));
            assert_eq!(NoticeCategory::from_code(""), None);
            assert_eq!(NoticeCategory::from_code("2"), None);
        }

        #[test]
        fn test_label_for_unknown_code_is_code() {
            assert_eq!(NoticeCategory::label_for_code("9"), "9");
            assert_eq!(NoticeCategory::label_for_code("0"), "Information");
        }
    }

    mod search_condition {
        use super::*;

        #[test]
        fn test_empty_matches_everything() {
            let condition = NoticeSearchCondition::default();
            assert!(condition.is_empty());
            assert!(condition.matches(&sample_notice()));
        }

        #[test]
        fn test_title_is_case_insensitive_substring() {
            let condition = NoticeSearchCondition {
                title: Some("closure".to_string()),
                ..Default::default()
            };
            assert!(condition.matches(&sample_notice()));

            let condition = NoticeSearchCondition {
                title: Some("holiday".to_string()),
                ..Default::default()
            };
            assert!(!condition.matches(&sample_notice()));
        }

        #[test]
        fn test_category_and_post_date_are_exact() {
            let notice = sample_notice();
            let hit = NoticeSearchCondition {
                category_code: Some("1".to_string()),
                post_date: Some(date(2024, 3, 1)),
                ..Default::default()
            };
            assert!(hit.matches(&notice));

            let miss = NoticeSearchCondition {
                category_code: Some("0".to_string()),
                ..Default::default()
            };
            assert!(!miss.matches(&notice));
        }

        #[test]
        fn test_effective_range_bounds_are_inclusive() {
            let notice = sample_notice();
            let condition = NoticeSearchCondition {
                effective_from: Some(date(2024, 3, 10)),
                effective_to: Some(date(2024, 3, 20)),
                ..Default::default()
            };
            assert!(condition.matches(&notice));

            let too_late = NoticeSearchCondition {
                effective_from: Some(date(2024, 3, 11)),
                ..Default::default()
            };
            assert!(!too_late.matches(&notice));

            let too_early = NoticeSearchCondition {
                effective_to: Some(date(2024, 3, 19)),
                ..Default::default()
            };
            assert!(!too_early.matches(&notice));
        }
    }

    mod paging {
        use super::*;

        #[test]
        fn test_size_is_clamped() {
            assert_eq!(Paging::new(0, 0).size, MIN_PAGE_SIZE);
            assert_eq!(Paging::new(0, 500).size, MAX_PAGE_SIZE);
            assert_eq!(Paging::new(2, 20), Paging { page: 2, size: 20 });
        }

        #[test]
        fn test_page_navigation_flags() {
            let page: Page<Notice> = Page {
                items: vec![],
                paging: Paging::new(0, 10),
                total: 25,
            };
            assert_eq!(page.total_pages(), 3);
            assert!(page.has_next());
            assert!(!page.has_previous());
        }
    }

    #[test]
    fn test_is_active_on() {
        let notice = sample_notice();
        assert!(notice.is_active_on(date(2024, 3, 15)));
        assert!(!notice.is_active_on(date(2024, 3, 21)));
    }
}
