//! Notice domain model and service

mod model;
mod service;

pub use model::{
    Notice, NoticeCategory, NoticeSearchCondition, Page, Paging, DEFAULT_PAGE_SIZE,
    MAX_PAGE_SIZE, MIN_PAGE_SIZE,
};
pub use service::{InMemoryNoticeService, NoticeServiceTrait};

#[cfg(test)]
pub use service::{MockNoticeServiceTrait, ServiceError};
