//! Waitlist signup: form state, the submit state machine and the Formspree call.

use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const SUBMISSION_FAILED: &str = "Form submission failed";
const TRANSPORT_FAILED: &str = "Failed to submit form";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Clinician,
    Sponsor,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Patient, Role::Clinician, Role::Sponsor];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Clinician => "clinician",
            Role::Sponsor => "sponsor",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Clinician => "Clinician",
            Role::Sponsor => "Sponsor",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.as_str() == value)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WaitlistFields {
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
}

#[cfg(test)]
impl WaitlistFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.role.is_none()
    }
}

/// JSON body Formspree receives.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WaitlistPayload {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(rename = "_subject")]
    pub subject: String,
}

impl WaitlistPayload {
    pub fn new(name: &str, email: &str, role: Role) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            role,
            subject: format!("New Waitlist Sign-up: {} - {}", role.as_str(), name),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
    Error(String),
}

impl SubmissionStatus {
    /// The submit button is disabled in these states.
    pub fn is_locked(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting | SubmissionStatus::Success)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0}")]
    Server(String),
    #[error("{0}")]
    Transport(String),
}

impl SubmitError {
    fn server(message: Option<String>) -> Self {
        SubmitError::Server(non_empty(message).unwrap_or_else(|| SUBMISSION_FAILED.to_string()))
    }

    fn transport(message: Option<String>) -> Self {
        SubmitError::Transport(non_empty(message).unwrap_or_else(|| TRANSPORT_FAILED.to_string()))
    }
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty())
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("a submission is already in flight or has succeeded")]
    Locked,
    #[error("name, email and role are all required")]
    Incomplete,
}

/// Raw reply from the form endpoint before interpretation.
#[derive(Clone, Debug, PartialEq)]
pub struct EndpointReply {
    pub status: u16,
    pub body: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl EndpointReply {
    pub fn interpret(&self) -> Result<(), SubmitError> {
        let parsed = serde_json::from_str::<serde_json::Value>(&self.body);
        if (200..300).contains(&self.status) {
            return match parsed {
                Ok(_) => Ok(()),
                Err(_) => Err(SubmitError::server(None)),
            };
        }
        let message = serde_json::from_str::<ErrorBody>(&self.body)
            .ok()
            .and_then(|body| body.error);
        Err(SubmitError::server(message))
    }
}

pub trait FormEndpoint {
    fn post(&self, payload: &WaitlistPayload) -> LocalBoxFuture<'static, Result<EndpointReply, SubmitError>>;
}

/// The hosted Formspree form.
#[derive(Clone, Debug, PartialEq)]
pub struct Formspree {
    url: String,
}

impl Formspree {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl FormEndpoint for Formspree {
    fn post(&self, payload: &WaitlistPayload) -> LocalBoxFuture<'static, Result<EndpointReply, SubmitError>> {
        let url = self.url.clone();
        let body = serde_json::to_string(payload);
        Box::pin(async move {
            let body = body.map_err(|e| SubmitError::transport(Some(e.to_string())))?;
            let response = Request::post(&url)
                .header("Content-Type", "application/json")
                .header("Accept", "application/json")
                .body(body)
                .send()
                .await
                .map_err(|e| SubmitError::transport(Some(e.to_string())))?;
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Ok(EndpointReply { status, body })
        })
    }
}

/// One POST, no retries.
pub async fn submit_waitlist<E: FormEndpoint + ?Sized>(endpoint: &E, payload: &WaitlistPayload) -> Result<(), SubmitError> {
    let reply = endpoint.post(payload).await?;
    log::debug!("Waitlist endpoint answered with status {}", reply.status);
    reply.interpret()
}

/// Identifies one submit attempt. Replies carrying an outdated ticket are
/// dropped, which is how a response arriving after the dialog closed gets
/// ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct WaitlistFlow {
    fields: WaitlistFields,
    status: SubmissionStatus,
    generation: u64,
}

impl Default for WaitlistFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl WaitlistFlow {
    pub fn new() -> Self {
        Self {
            fields: WaitlistFields::default(),
            status: SubmissionStatus::Idle,
            generation: 0,
        }
    }

    pub fn fields(&self) -> &WaitlistFields {
        &self.fields
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn set_name(&mut self, name: String) {
        self.fields.name = name;
    }

    pub fn set_email(&mut self, email: String) {
        self.fields.email = email;
    }

    pub fn set_role(&mut self, role: Option<Role>) {
        self.fields.role = role;
    }

    pub fn begin_submit(&mut self) -> Result<(Ticket, WaitlistPayload), SubmitRejected> {
        if self.status.is_locked() {
            return Err(SubmitRejected::Locked);
        }
        let role = match self.fields.role {
            Some(role) if !self.fields.name.is_empty() && !self.fields.email.is_empty() => role,
            _ => return Err(SubmitRejected::Incomplete),
        };
        self.generation += 1;
        self.status = SubmissionStatus::Submitting;
        let payload = WaitlistPayload::new(&self.fields.name, &self.fields.email, role);
        Ok((Ticket(self.generation), payload))
    }

    /// Returns whether the outcome was applied.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<(), SubmitError>) -> bool {
        if ticket.0 != self.generation || self.status != SubmissionStatus::Submitting {
            return false;
        }
        self.status = match outcome {
            Ok(()) => SubmissionStatus::Success,
            Err(e) => SubmissionStatus::Error(e.to_string()),
        };
        true
    }

    /// Called once the success message has been shown long enough.
    pub fn finish_success(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation || self.status != SubmissionStatus::Success {
            return false;
        }
        self.fields = WaitlistFields::default();
        self.status = SubmissionStatus::Idle;
        true
    }

    /// Closing during the success window still clears the submitted fields,
    /// the pending reset is dropped along with the timeout.
    pub fn close(&mut self) {
        if self.status == SubmissionStatus::Success {
            self.fields = WaitlistFields::default();
        }
        self.generation += 1;
        self.status = SubmissionStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct StubEndpoint {
        reply: Result<EndpointReply, SubmitError>,
        calls: Cell<usize>,
        last_body: RefCell<Option<serde_json::Value>>,
    }

    impl StubEndpoint {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(EndpointReply { status, body: body.to_string() }),
                calls: Cell::new(0),
                last_body: RefCell::new(None),
            }
        }

        fn failing(error: SubmitError) -> Self {
            Self {
                reply: Err(error),
                calls: Cell::new(0),
                last_body: RefCell::new(None),
            }
        }
    }

    impl FormEndpoint for StubEndpoint {
        fn post(&self, payload: &WaitlistPayload) -> LocalBoxFuture<'static, Result<EndpointReply, SubmitError>> {
            self.calls.set(self.calls.get() + 1);
            *self.last_body.borrow_mut() = serde_json::to_value(payload).ok();
            let reply = self.reply.clone();
            Box::pin(async move { reply })
        }
    }

    fn filled_flow() -> WaitlistFlow {
        let mut flow = WaitlistFlow::new();
        flow.set_name("Ada".to_string());
        flow.set_email("ada@example.com".to_string());
        flow.set_role(Some(Role::Patient));
        flow
    }

    /// Drives one attempt the way the form component does.
    fn run_attempt(flow: &mut WaitlistFlow, endpoint: &StubEndpoint) -> Option<Ticket> {
        let (ticket, payload) = flow.begin_submit().ok()?;
        let outcome = block_on(submit_waitlist(endpoint, &payload));
        flow.complete(ticket, outcome);
        Some(ticket)
    }

    #[test]
    fn successful_submission_resets_after_delay() {
        let endpoint = StubEndpoint::replying(200, "{}");
        let mut flow = filled_flow();
        assert_eq!(flow.status(), &SubmissionStatus::Idle);

        let (ticket, payload) = flow.begin_submit().unwrap();
        assert_eq!(flow.status(), &SubmissionStatus::Submitting);

        let outcome = block_on(submit_waitlist(&endpoint, &payload));
        assert!(flow.complete(ticket, outcome));
        assert_eq!(flow.status(), &SubmissionStatus::Success);
        assert_eq!(flow.fields().name, "Ada");

        // 2000 ms later the component fires this.
        assert!(flow.finish_success(ticket));
        assert_eq!(flow.status(), &SubmissionStatus::Idle);
        assert!(flow.fields().is_empty());
        assert_eq!(endpoint.calls.get(), 1);
    }

    #[test]
    fn request_body_carries_subject_line() {
        let endpoint = StubEndpoint::replying(200, "{\"ok\":true}");
        let mut flow = filled_flow();
        run_attempt(&mut flow, &endpoint);

        let body = endpoint.last_body.borrow().clone().unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "role": "patient",
                "_subject": "New Waitlist Sign-up: patient - Ada",
            })
        );
    }

    #[test]
    fn server_error_message_is_surfaced() {
        let endpoint = StubEndpoint::replying(422, "{\"error\":\"Email already registered\"}");
        let mut flow = filled_flow();
        run_attempt(&mut flow, &endpoint);
        assert_eq!(
            flow.status(),
            &SubmissionStatus::Error("Email already registered".to_string())
        );
        assert_eq!(flow.fields().email, "ada@example.com");
    }

    #[test]
    fn server_error_without_message_uses_fallback() {
        let endpoint = StubEndpoint::replying(500, "<html>oops</html>");
        let mut flow = filled_flow();
        run_attempt(&mut flow, &endpoint);
        assert_eq!(flow.status(), &SubmissionStatus::Error(SUBMISSION_FAILED.to_string()));
    }

    #[test]
    fn success_status_with_unreadable_body_is_an_error() {
        let reply = EndpointReply { status: 200, body: "not json".to_string() };
        assert_eq!(reply.interpret(), Err(SubmitError::Server(SUBMISSION_FAILED.to_string())));
    }

    #[test]
    fn transport_failure_keeps_message_or_falls_back() {
        let mut flow = filled_flow();
        let endpoint = StubEndpoint::failing(SubmitError::transport(Some("NetworkError".to_string())));
        run_attempt(&mut flow, &endpoint);
        assert_eq!(flow.status(), &SubmissionStatus::Error("NetworkError".to_string()));

        assert_eq!(
            SubmitError::transport(Some("  ".to_string())).to_string(),
            TRANSPORT_FAILED
        );
    }

    #[test]
    fn error_state_allows_retry() {
        let mut flow = filled_flow();
        run_attempt(&mut flow, &StubEndpoint::replying(422, "{\"error\":\"nope\"}"));
        assert!(matches!(flow.status(), SubmissionStatus::Error(_)));

        let endpoint = StubEndpoint::replying(200, "{}");
        assert!(run_attempt(&mut flow, &endpoint).is_some());
        assert_eq!(flow.status(), &SubmissionStatus::Success);
    }

    #[test]
    fn locked_states_issue_no_second_request() {
        let endpoint = StubEndpoint::replying(200, "{}");
        let mut flow = filled_flow();

        let (ticket, _) = flow.begin_submit().unwrap();
        assert_eq!(flow.begin_submit(), Err(SubmitRejected::Locked));
        assert_eq!(run_attempt(&mut flow, &endpoint), None);
        assert_eq!(endpoint.calls.get(), 0);

        flow.complete(ticket, Ok(()));
        assert_eq!(run_attempt(&mut flow, &endpoint), None);
        assert_eq!(endpoint.calls.get(), 0);
    }

    #[test]
    fn incomplete_fields_are_rejected() {
        let mut flow = WaitlistFlow::new();
        flow.set_name("Ada".to_string());
        flow.set_email("ada@example.com".to_string());
        assert_eq!(flow.begin_submit(), Err(SubmitRejected::Incomplete));
        assert_eq!(flow.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn late_reply_after_close_is_ignored() {
        let mut flow = filled_flow();
        let (ticket, _) = flow.begin_submit().unwrap();
        flow.close();
        assert_eq!(flow.status(), &SubmissionStatus::Idle);

        assert!(!flow.complete(ticket, Ok(())));
        assert_eq!(flow.status(), &SubmissionStatus::Idle);
        assert!(!flow.finish_success(ticket));
        assert_eq!(flow.fields().name, "Ada");
    }

    #[test]
    fn closing_during_success_window_clears_fields() {
        let endpoint = StubEndpoint::replying(200, "{}");
        let mut flow = filled_flow();
        let ticket = run_attempt(&mut flow, &endpoint).unwrap();
        assert_eq!(flow.status(), &SubmissionStatus::Success);

        flow.close();
        assert_eq!(flow.status(), &SubmissionStatus::Idle);
        assert!(flow.fields().is_empty());
        assert!(!flow.finish_success(ticket));

        // Reopening shows an empty form, so the old signup cannot be resent.
        assert_eq!(flow.begin_submit(), Err(SubmitRejected::Incomplete));
        assert_eq!(endpoint.calls.get(), 1);
    }

    #[test]
    fn role_round_trips_through_select_values() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse(""), None);
    }
}
