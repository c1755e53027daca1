//! Form domain layer
//!
//! Type-safe form handling for the search form and the notice create/edit
//! form. Fields report an [`InputSignal`](crate::validation::InputSignal) so
//! validation never has to know how a value was typed.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{Form, FormMode, NoticeForm, NoticeSearchForm};
