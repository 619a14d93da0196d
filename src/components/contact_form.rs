use crate::domain::model::{ContactType, FormField, FormState};
use crate::domain::ports::SubmissionSink;
use crate::view::{Element, Node};

pub const ACKNOWLEDGEMENT: &str = "Thanks for reaching out! I'll get back to you soon.";

/// 目前沒有後端：不送出任何資料，只回傳固定的感謝訊息
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAcknowledgement;

impl SubmissionSink for LocalAcknowledgement {
    fn submit(&self, _form: &FormState) -> String {
        ACKNOWLEDGEMENT.to_string()
    }
}

/// The host's submit event. Handlers cancel the default full-page submission.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

pub struct ContactForm<S: SubmissionSink = LocalAcknowledgement> {
    state: FormState,
    status: Option<String>,
    sink: S,
}

impl ContactForm<LocalAcknowledgement> {
    pub fn new() -> Self {
        Self::with_sink(LocalAcknowledgement)
    }
}

impl Default for ContactForm<LocalAcknowledgement> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SubmissionSink> ContactForm<S> {
    pub fn with_sink(sink: S) -> Self {
        Self {
            state: FormState::default(),
            status: None,
            sink,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// 只更新單一欄位，不做驗證
    pub fn on_field_change(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!("Contact form field '{}' changed ({} chars)", field, value.len());
        self.state.set(field, value);
    }

    /// 必填與格式檢查由宿主在呼叫前完成，這裡不再重複驗證
    pub fn on_submit(&mut self, event: &mut SubmitEvent) {
        event.prevent_default();
        let status = self.sink.submit(&self.state);
        tracing::info!("Contact form submitted");
        self.status = Some(status);
        self.state = FormState::default();
    }

    pub fn render(&self) -> Node {
        let mut form = Element::new("form")
            .child(labelled(
                "Name:",
                text_input("text", FormField::Name, &self.state.name).attr("autocomplete", "name"),
            ))
            .child(labelled(
                "Email:",
                text_input("email", FormField::Email, &self.state.email)
                    .attr("autocomplete", "email"),
            ))
            .child(labelled("Type:", type_select(&self.state.r#type)))
            .child(labelled(
                "Subject:",
                text_input("text", FormField::Subject, &self.state.subject),
            ))
            .child(labelled(
                "Message:",
                Element::new("textarea")
                    .attr("name", FormField::Message.name())
                    .attr("required", "")
                    .attr("rows", "4")
                    .text(self.state.message.as_str()),
            ))
            .child(
                Element::new("button")
                    .attr("type", "submit")
                    .id("submitb")
                    .text("Submit"),
            );

        if let Some(status) = &self.status {
            form = form.child(Element::new("p").class("form-status").text(status.as_str()));
        }

        form.into()
    }
}

fn labelled(label: &str, control: Element) -> Element {
    Element::new("label").text(label).child(control)
}

fn text_input(kind: &str, field: FormField, value: &str) -> Element {
    Element::new("input")
        .attr("type", kind)
        .attr("name", field.name())
        .attr("value", value)
        .attr("required", "")
}

fn type_select(current: &str) -> Element {
    let placeholder = Element::new("option")
        .attr("value", "")
        .attr_if(current.is_empty(), "selected", "")
        .text("Select...");

    let options = ContactType::ALL.into_iter().map(|kind| {
        Element::new("option")
            .attr("value", kind.as_str())
            .attr_if(current == kind.as_str(), "selected", "")
            .text(kind.label())
    });

    Element::new("select")
        .attr("name", FormField::Type.name())
        .attr("required", "")
        .child(placeholder)
        .children(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(form: &mut ContactForm) {
        form.on_field_change(FormField::Name, "Jane Doe");
        form.on_field_change(FormField::Email, "jane@example.com");
        form.on_field_change(FormField::Type, "feedback");
        form.on_field_change(FormField::Subject, "Hello");
        form.on_field_change(FormField::Message, "Great site");
    }

    #[test]
    fn test_field_change_updates_one_field() {
        let mut form = ContactForm::new();
        form.on_field_change(FormField::Name, "Jane Doe");
        form.on_field_change(FormField::Subject, "Hello");
        form.on_field_change(FormField::Name, "Jane");

        assert_eq!(form.state().name, "Jane");
        assert_eq!(form.state().subject, "Hello");
        assert_eq!(form.state().email, "");
    }

    #[test]
    fn test_same_value_twice_is_idempotent() {
        let mut form = ContactForm::new();
        form.on_field_change(FormField::Email, "jane@example.com");
        let after_first = form.state().clone();
        form.on_field_change(FormField::Email, "jane@example.com");
        assert_eq!(form.state(), &after_first);
    }

    #[test]
    fn test_submit_resets_and_acknowledges() {
        let mut form = ContactForm::new();
        assert_eq!(form.status(), None);
        fill(&mut form);

        let mut event = SubmitEvent::new();
        form.on_submit(&mut event);

        assert!(event.default_prevented());
        assert!(form.state().is_empty());
        assert_eq!(form.status(), Some(ACKNOWLEDGEMENT));
    }

    #[test]
    fn test_status_survives_later_typing() {
        let mut form = ContactForm::new();
        fill(&mut form);
        form.on_submit(&mut SubmitEvent::new());
        form.on_field_change(FormField::Name, "Someone else");
        assert_eq!(form.status(), Some(ACKNOWLEDGEMENT));
    }

    #[test]
    fn test_custom_sink_receives_current_values() {
        struct Echo;
        impl SubmissionSink for Echo {
            fn submit(&self, form: &FormState) -> String {
                format!("got {}", form.subject)
            }
        }

        let mut form = ContactForm::with_sink(Echo);
        form.on_field_change(FormField::Subject, "Hello");
        form.on_submit(&mut SubmitEvent::new());
        assert_eq!(form.status(), Some("got Hello"));
    }

    #[test]
    fn test_render_reflects_state() {
        let mut form = ContactForm::new();
        form.on_field_change(FormField::Type, "question");
        let node = form.render();

        let selected = node
            .find_first(|e| e.tag == "option" && e.get_attr("selected").is_some())
            .unwrap();
        assert_eq!(selected.get_attr("value"), Some("question"));
        assert_eq!(node.find_all(|e| e.get_attr("required").is_some()).len(), 5);
        assert!(node.find_first(|e| e.has_class("form-status")).is_none());

        form.on_submit(&mut SubmitEvent::new());
        let node = form.render();
        let status = node.find_first(|e| e.has_class("form-status")).unwrap();
        assert_eq!(status.text_content(), ACKNOWLEDGEMENT);
    }
}
