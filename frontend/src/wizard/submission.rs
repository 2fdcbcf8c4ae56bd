use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;
use web_sys::FormData;

use crate::config;
use crate::wizard::fields::FieldKind;
use crate::wizard::state::FormVariant;

#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    File(web_sys::File),
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FormsResponse {
    pub success: bool,
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not read response: {0}")]
    Decode(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureReason {
    Rejected,
    Network,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Failure(FailureReason),
}

impl SubmissionStatus {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Idle | SubmissionStatus::Pending => None,
            SubmissionStatus::Success => Some("✅ Form submitted successfully!"),
            SubmissionStatus::Failure(FailureReason::Rejected) => Some("❌ Something went wrong. Try again."),
            SubmissionStatus::Failure(FailureReason::Network) => Some("⚠️ Network error. Try again later."),
        }
    }
}

/// Ordered multipart entries: `access_key`, `role`, then every form field
/// in table order.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionPayload {
    entries: Vec<(String, FieldValue)>,
}

impl SubmissionPayload {
    pub fn entries(&self) -> &[(String, FieldValue)] {
        &self.entries
    }

    pub fn to_form_data(&self) -> Result<FormData, SubmitError> {
        let js_err = |e: wasm_bindgen::JsValue| {
            gloo_console::error!("FormData error:", e.clone());
            SubmitError::Transport(format!("{:?}", e))
        };
        let form_data = FormData::new().map_err(js_err)?;
        for (name, value) in &self.entries {
            match value {
                FieldValue::Text(text) => form_data.append_with_str(name, text).map_err(js_err)?,
                FieldValue::File(file) => form_data
                    .append_with_blob_and_filename(name, file, &file.name())
                    .map_err(js_err)?,
            }
        }
        Ok(form_data)
    }
}

/// Seam between the adapter and the network.
#[allow(async_fn_in_trait)]
pub trait FormTransport {
    async fn send(&self, payload: SubmissionPayload) -> Result<FormsResponse, SubmitError>;
}

#[derive(Clone, Copy, Debug)]
pub struct Web3FormsTransport {
    endpoint: &'static str,
}

impl Default for Web3FormsTransport {
    fn default() -> Self {
        Self {
            endpoint: config::get_forms_endpoint(),
        }
    }
}

impl FormTransport for Web3FormsTransport {
    async fn send(&self, payload: SubmissionPayload) -> Result<FormsResponse, SubmitError> {
        let form_data = payload.to_form_data()?;
        let response = Request::post(self.endpoint)
            .body(form_data)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        response
            .json::<FormsResponse>()
            .await
            .map_err(|e| SubmitError::Decode(e.to_string()))
    }
}

/// Field values and submit status of one registration form.
#[derive(Clone, Debug, PartialEq)]
pub struct FormSession {
    variant: FormVariant,
    fields: Vec<(String, FieldValue)>,
    status: SubmissionStatus,
}

impl FormSession {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            variant,
            fields: Vec::new(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(key, _)| key == name).map(|(_, value)| value)
    }

    pub fn text(&self, name: &str) -> String {
        match self.field(name) {
            Some(FieldValue::Text(text)) => text.clone(),
            _ => String::new(),
        }
    }

    pub fn set_field(&mut self, name: &str, value: FieldValue) {
        match self.fields.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    pub fn remove_field(&mut self, name: &str) {
        self.fields.retain(|(key, _)| key != name);
    }

    pub fn clear_fields(&mut self) {
        self.fields.clear();
    }

    /// Marks the session pending and builds the outbound payload.
    ///
    /// Untouched text fields go out empty. A file input with no file
    /// selected is left out.
    pub fn begin(&mut self, access_key: &str) -> SubmissionPayload {
        self.status = SubmissionStatus::Pending;
        let specs = self.variant.fields();
        let mut entries = Vec::with_capacity(specs.len() + 2);
        entries.push(("access_key".to_string(), FieldValue::Text(access_key.to_string())));
        entries.push(("role".to_string(), FieldValue::Text(self.variant.role_tag().to_string())));
        for spec in specs {
            let value = match (self.field(spec.name), spec.kind) {
                (Some(value), _) => value.clone(),
                (None, FieldKind::File { .. }) => continue,
                (None, _) => FieldValue::Text(String::new()),
            };
            entries.push((spec.name.to_string(), value));
        }
        SubmissionPayload { entries }
    }

    pub fn settle(&mut self, result: Result<FormsResponse, SubmitError>) {
        self.status = match result {
            Ok(FormsResponse { success: true }) => {
                log::info!("{} registration submitted", self.variant.role_tag());
                self.clear_fields();
                SubmissionStatus::Success
            }
            Ok(FormsResponse { success: false }) => {
                log::warn!("{} registration rejected by forms API", self.variant.role_tag());
                SubmissionStatus::Failure(FailureReason::Rejected)
            }
            Err(e) => {
                log::warn!("{} registration failed: {}", self.variant.role_tag(), e);
                SubmissionStatus::Failure(FailureReason::Network)
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    enum Reply {
        Success(bool),
        Fail,
    }

    struct MockTransport {
        reply: Reply,
        seen: RefCell<Vec<SubmissionPayload>>,
    }

    impl MockTransport {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl FormTransport for MockTransport {
        async fn send(&self, payload: SubmissionPayload) -> Result<FormsResponse, SubmitError> {
            self.seen.borrow_mut().push(payload);
            match self.reply {
                Reply::Success(success) => Ok(FormsResponse { success }),
                Reply::Fail => Err(SubmitError::Transport("connection refused".to_string())),
            }
        }
    }

    /// Same begin, send, settle sequence the registration form runs.
    fn submit(session: &mut FormSession, transport: &MockTransport, access_key: &str) {
        let payload = session.begin(access_key);
        let result = block_on(transport.send(payload));
        session.settle(result);
    }

    fn names(payload: &SubmissionPayload) -> Vec<&str> {
        payload.entries().iter().map(|(name, _)| name.as_str()).collect()
    }

    fn filled_session() -> FormSession {
        let mut session = FormSession::new(FormVariant::Employee);
        session.set_field("name", FieldValue::Text("A".to_string()));
        session.set_field("email", FieldValue::Text("a@x.com".to_string()));
        session
    }

    fn text(value: &str) -> FieldValue {
        FieldValue::Text(value.to_string())
    }

    #[test]
    fn accepted_submission_clears_fields() {
        let transport = MockTransport::new(Reply::Success(true));
        let mut session = filled_session();
        submit(&mut session, &transport, "key-123");

        assert_eq!(session.status(), SubmissionStatus::Success);
        assert!(session.fields().is_empty());
        assert!(!session.is_pending());
        assert_eq!(session.status().message(), Some("✅ Form submitted successfully!"));
    }

    #[test]
    fn rejected_submission_keeps_fields() {
        let transport = MockTransport::new(Reply::Success(false));
        let mut session = filled_session();
        submit(&mut session, &transport, "key-123");

        assert_eq!(session.status(), SubmissionStatus::Failure(FailureReason::Rejected));
        assert_eq!(session.text("name"), "A");
        assert!(!session.is_pending());
        assert_eq!(session.status().message(), Some("❌ Something went wrong. Try again."));
    }

    #[test]
    fn transport_error_reports_network_failure() {
        let transport = MockTransport::new(Reply::Fail);
        let mut session = filled_session();
        submit(&mut session, &transport, "key-123");

        assert_eq!(session.status(), SubmissionStatus::Failure(FailureReason::Network));
        assert!(!session.is_pending());
        assert_eq!(session.status().message(), Some("⚠️ Network error. Try again later."));
    }

    #[test]
    fn decode_error_is_also_a_network_failure() {
        let mut session = filled_session();
        session.begin("key");
        session.settle(Err(SubmitError::Decode("expected value at line 1".to_string())));
        assert_eq!(session.status(), SubmissionStatus::Failure(FailureReason::Network));
    }

    #[test]
    fn payload_leads_with_access_key_and_role() {
        let transport = MockTransport::new(Reply::Success(true));
        let mut session = FormSession::new(FormVariant::Company);
        session.set_field("website", text("https://company.com"));
        session.set_field("companyName", text("Company Inc."));
        submit(&mut session, &transport, "key-123");

        let seen = transport.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0].entries(),
            &[
                ("access_key".to_string(), text("key-123")),
                ("role".to_string(), text("company")),
                ("companyName".to_string(), text("Company Inc.")),
                ("description".to_string(), text("")),
                ("ownerName".to_string(), text("")),
                ("ownerEmail".to_string(), text("")),
                ("address".to_string(), text("")),
                ("socials".to_string(), text("")),
                ("website".to_string(), text("https://company.com")),
            ]
        );
    }

    #[test]
    fn untouched_fields_are_sent_empty_in_form_order() {
        for variant in [FormVariant::Employee, FormVariant::Company, FormVariant::Individual] {
            let mut session = FormSession::new(variant);
            let payload = session.begin("k");

            let mut expected = vec!["access_key", "role"];
            expected.extend(
                variant
                    .fields()
                    .iter()
                    .filter(|f| !matches!(f.kind, FieldKind::File { .. }))
                    .map(|f| f.name),
            );
            assert_eq!(names(&payload), expected, "{:?}", variant);
            assert!(payload.entries()[2..].iter().all(|(_, value)| *value == text("")));
        }
    }

    #[test]
    fn missing_resume_is_left_out() {
        let mut session = filled_session();
        let payload = session.begin("k");
        let names = names(&payload);
        assert!(!names.contains(&"resume"));
        assert_eq!(
            names,
            vec!["access_key", "role", "name", "email", "phone", "sex", "age", "education"]
        );
    }

    #[test]
    fn begin_marks_pending() {
        let mut session = filled_session();
        assert_eq!(session.status(), SubmissionStatus::Idle);
        let payload = session.begin("");
        assert!(session.is_pending());
        assert_eq!(session.status().message(), None);
        assert_eq!(payload.entries()[0], ("access_key".to_string(), text("")));
    }

    #[test]
    fn set_field_overwrites_in_place() {
        let mut session = filled_session();
        session.set_field("name", text("B"));
        session.remove_field("email");
        assert_eq!(session.fields(), &[("name".to_string(), text("B"))]);
        assert!(session.field("email").is_none());
    }

    #[test]
    fn resubmitting_after_failure_can_succeed() {
        let mut session = filled_session();
        submit(&mut session, &MockTransport::new(Reply::Fail), "key");
        submit(&mut session, &MockTransport::new(Reply::Success(true)), "key");
        assert_eq!(session.status(), SubmissionStatus::Success);
    }
}
