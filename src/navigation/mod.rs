pub mod router;
pub mod scroll;

pub use router::{Navigator, Route, CASE_STUDY_PATH, HOME_PATH};
pub use scroll::{scroll_to_section, DocumentHost, HeadlessDocument, ScrollBehavior, ScrollPosition};
