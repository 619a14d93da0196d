pub mod cards;
pub mod contact_form;
pub mod memo;

pub use contact_form::{ContactForm, LocalAcknowledgement, SubmitEvent, ACKNOWLEDGEMENT};
pub use memo::MemoList;
