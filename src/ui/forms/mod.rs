//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `notice_form`: Notice create/edit form

mod field_renderer;
mod notice_form;

pub use field_renderer::{draw_field, draw_help_text};
pub use notice_form::draw_notice_form;
