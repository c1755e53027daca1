//! Notice service: the submission target behind the forms

use super::model::{Notice, NoticeCategory, NoticeSearchCondition, Page, Paging};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use std::cmp::Reverse;
use thiserror::Error;

/// Failures reported by the notice service
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Notice id is required")]
    MissingId,
    #[error("Notice not found: {0}")]
    NotFound(u64),
}

/// Trait for notice operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoticeServiceTrait: Send + Sync {
    /// Search notices, newest post date first
    async fn search(
        &mut self,
        condition: &NoticeSearchCondition,
        paging: Paging,
    ) -> Result<Page<Notice>>;

    /// Fetch a single notice
    async fn find_by_id(&mut self, id: u64) -> Result<Notice>;

    /// Create a notice and return it with its assigned id
    async fn create(&mut self, notice: Notice) -> Result<Notice>;

    /// Overwrite the editable fields of an existing notice
    async fn update(&mut self, notice: Notice) -> Result<Notice>;

    /// Delete a notice
    async fn delete(&mut self, id: u64) -> Result<()>;
}

/// In-memory notice store
#[derive(Debug, Default)]
pub struct InMemoryNoticeService {
    notices: Vec<Notice>,
    next_id: u64,
}

impl InMemoryNoticeService {
    pub fn new() -> Self {
        Self {
            notices: Vec::new(),
            next_id: 1,
        }
    }

    /// A store pre-filled with a few example notices
    pub fn with_demo_data() -> Self {
        let mut service = Self::new();
        let today = Local::now().date_naive();
        let demo = [
            (
                "Scheduled maintenance",
                NoticeCategory::Important,
                0,
                2,
                3,
                "The service will be unavailable from 22:00 to 23:00.",
            ),
            (
                "New reporting dashboard",
                NoticeCategory::Info,
                -7,
                -7,
                30,
                "A new dashboard is available from the reports menu.",
            ),
            (
                "Holiday support hours",
                NoticeCategory::Info,
                -30,
                -20,
                -10,
                "Support desk hours were reduced over the holidays.",
            ),
        ];

        for (title, category, post, start, end, content) in demo {
            service.insert(Notice {
                id: None,
                title: title.to_string(),
                category_code: category.code().to_string(),
                post_date: offset(today, post),
                start_date: offset(today, start),
                end_date: offset(today, end),
                content: content.to_string(),
                created_at: None,
                updated_at: None,
            });
        }
        service
    }

    fn insert(&mut self, mut notice: Notice) -> Notice {
        let now = Local::now().naive_local();
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        notice.id = Some(id);
        notice.created_at = Some(now);
        notice.updated_at = Some(now);
        self.notices.push(notice.clone());
        notice
    }

    fn position(&self, id: u64) -> Result<usize, ServiceError> {
        self.notices
            .iter()
            .position(|n| n.id == Some(id))
            .ok_or(ServiceError::NotFound(id))
    }
}

fn offset(day: NaiveDate, days: i64) -> NaiveDate {
    day.checked_add_signed(chrono::Duration::days(days))
        .unwrap_or(day)
}

#[async_trait]
impl NoticeServiceTrait for InMemoryNoticeService {
    async fn search(
        &mut self,
        condition: &NoticeSearchCondition,
        paging: Paging,
    ) -> Result<Page<Notice>> {
        let paging = paging.normalized();
        let mut hits: Vec<&Notice> = self
            .notices
            .iter()
            .filter(|n| condition.matches(n))
            .collect();
        hits.sort_by_key(|n| Reverse((n.post_date, n.id)));

        let total = hits.len();
        let items = hits
            .into_iter()
            .skip(paging.offset())
            .take(paging.size)
            .cloned()
            .collect();

        Ok(Page {
            items,
            paging,
            total,
        })
    }

    async fn find_by_id(&mut self, id: u64) -> Result<Notice> {
        let idx = self.position(id)?;
        Ok(self.notices[idx].clone())
    }

    async fn create(&mut self, notice: Notice) -> Result<Notice> {
        let created = self.insert(notice);
        tracing::info!("Created notice {:?}", created.id);
        Ok(created)
    }

    async fn update(&mut self, notice: Notice) -> Result<Notice> {
        let id = notice.id.ok_or(ServiceError::MissingId)?;
        let idx = self.position(id)?;

        let existing = &mut self.notices[idx];
        existing.title = notice.title;
        existing.category_code = notice.category_code;
        existing.post_date = notice.post_date;
        existing.start_date = notice.start_date;
        existing.end_date = notice.end_date;
        existing.content = notice.content;
        existing.updated_at = Some(Local::now().naive_local());

        tracing::info!("Updated notice {id}");
        Ok(existing.clone())
    }

    async fn delete(&mut self, id: u64) -> Result<()> {
        let idx = self.position(id)?;
        self.notices.remove(idx);
        tracing::info!("Deleted notice {id}");
        Ok(())
    }
}
