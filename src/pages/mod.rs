pub mod case_study;
pub mod home;
pub mod shell;
pub mod wrapper;

pub use home::HomePage;
pub use wrapper::{AppWrapper, EventOutcome, NavAction, UiEvent};
