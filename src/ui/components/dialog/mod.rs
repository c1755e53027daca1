//! Dialog components for TUI

mod base;
mod confirm_dialog;
mod error_dialog;
mod success_dialog;

pub use confirm_dialog::render_confirm_dialog;
pub use error_dialog::render_error_dialog;
pub use success_dialog::render_success_dialog;
