use crate::components::{ContactForm, LocalAcknowledgement, SubmitEvent};
use crate::domain::model::{CaseStudy, FormField, SiteContent};
use crate::domain::ports::SubmissionSink;
use crate::navigation::{scroll_to_section, HeadlessDocument, Navigator, Route};
use crate::pages::case_study::{self, BACK_ACTION};
use crate::pages::home::HomePage;
use crate::utils::validation::{validate_submission, ConstraintViolation};
use crate::view::{Element, Node};

/// What activating an element asks the navigation resolver to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    ScrollTo(String),
    Navigate(String),
    Back,
}

impl NavAction {
    pub fn from_element(element: &Element) -> Option<NavAction> {
        if let Some(id) = element.get_attr("data-scroll-target") {
            return Some(NavAction::ScrollTo(id.to_string()));
        }
        if let Some(path) = element.get_attr("data-route") {
            return Some(NavAction::Navigate(path.to_string()));
        }
        if element.get_attr("data-action") == Some(BACK_ACTION) {
            return Some(NavAction::Back);
        }
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Activate(NavAction),
    FieldInput { name: String, value: String },
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Scrolled(String),
    Navigated(Route),
    FieldUpdated(FormField),
    Submitted,
    SubmissionBlocked(ConstraintViolation),
    Ignored,
}

/// 最外層：依目前路由選擇首頁或案例頁，並把 UI 事件交給對應的處理者
pub struct AppWrapper<S: SubmissionSink = LocalAcknowledgement> {
    navigator: Navigator,
    home: HomePage<S>,
    case_study: Option<CaseStudy>,
    document: HeadlessDocument,
}

impl AppWrapper<LocalAcknowledgement> {
    pub fn new(content: SiteContent, initial_path: &str) -> Self {
        Self::with_form(content, initial_path, ContactForm::new())
    }
}

impl<S: SubmissionSink> AppWrapper<S> {
    pub fn with_form(content: SiteContent, initial_path: &str, form: ContactForm<S>) -> Self {
        let case_study = content.case_study.clone();
        let mut app = Self {
            navigator: Navigator::new(initial_path),
            home: HomePage::with_form(content, form),
            case_study,
            document: HeadlessDocument::load(Node::Text(String::new())),
        };
        let root = app.render();
        app.document = HeadlessDocument::load(root);
        app
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn home(&self) -> &HomePage<S> {
        &self.home
    }

    pub fn document(&self) -> &HeadlessDocument {
        &self.document
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    /// Renders the page for the current route.
    pub fn render(&mut self) -> Node {
        match (self.navigator.current(), &self.case_study) {
            (Route::CaseStudy, Some(study)) => case_study::render(study),
            (Route::CaseStudy, None) => {
                tracing::warn!("No case study content, rendering home page instead");
                self.home.render()
            }
            (Route::Home, _) => self.home.render(),
        }
    }

    /// Finds the first element matching `predicate` in the current document and activates it.
    pub fn activate(&mut self, predicate: impl Fn(&Element) -> bool) -> EventOutcome {
        let action = self
            .document
            .root()
            .find_first(predicate)
            .and_then(NavAction::from_element);

        match action {
            Some(action) => self.dispatch(UiEvent::Activate(action)),
            None => EventOutcome::Ignored,
        }
    }

    /// 事件依到達順序處理，每個事件執行完才處理下一個
    pub fn dispatch(&mut self, event: UiEvent) -> EventOutcome {
        let outcome = match event {
            UiEvent::Activate(NavAction::ScrollTo(id)) => {
                if scroll_to_section(&mut self.document, &id) {
                    EventOutcome::Scrolled(id)
                } else {
                    EventOutcome::Ignored
                }
            }
            UiEvent::Activate(NavAction::Navigate(path)) => {
                if self.navigator.navigate(&path) {
                    self.document.reset_scroll();
                    EventOutcome::Navigated(self.navigator.current())
                } else {
                    EventOutcome::Ignored
                }
            }
            UiEvent::Activate(NavAction::Back) => {
                if self.navigator.back_home() {
                    self.document.reset_scroll();
                    EventOutcome::Navigated(self.navigator.current())
                } else {
                    EventOutcome::Ignored
                }
            }
            UiEvent::FieldInput { name, value } => self.field_input(&name, value),
            UiEvent::Submit => self.submit(),
        };

        if outcome != EventOutcome::Ignored {
            let root = self.render();
            self.document.replace_root(root);
        }
        outcome
    }

    fn field_input(&mut self, name: &str, value: String) -> EventOutcome {
        if self.navigator.current() != Route::Home {
            return EventOutcome::Ignored;
        }

        match name.parse::<FormField>() {
            Ok(field) => {
                self.home.form_mut().on_field_change(field, value);
                EventOutcome::FieldUpdated(field)
            }
            Err(e) => {
                tracing::warn!("Ignoring input event: {}", e);
                EventOutcome::Ignored
            }
        }
    }

    fn submit(&mut self) -> EventOutcome {
        if self.navigator.current() != Route::Home {
            return EventOutcome::Ignored;
        }

        // 宿主先做原生驗證，未通過時不會呼叫 on_submit
        if let Err(violation) = validate_submission(self.home.form().state()) {
            tracing::debug!(
                "Submission blocked: field '{}' failed ({:?})",
                violation.field,
                violation.kind
            );
            return EventOutcome::SubmissionBlocked(violation);
        }

        let mut event = SubmitEvent::new();
        self.home.form_mut().on_submit(&mut event);
        EventOutcome::Submitted
    }
}
