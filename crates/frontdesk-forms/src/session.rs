// File: src/session.rs
// Purpose: One mounted form wired to its guard, client and presenter

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::client::{SubmissionClient, SubmissionResult};
use crate::config::Config;
use crate::guard::DuplicateGuard;
use crate::prefill::{initial_values, QueryParams};
use crate::presenter::{FormView, NullPresenter, Presenter};
use crate::state::{FormError, FormState};
use crate::value::FieldValue;
use crate::{presets, storage};

pub const INVALID_FORM_MESSAGE: &str = "Please fix all errors before submitting.";
pub const DUPLICATE_MESSAGE: &str = "You have already submitted this form.";
pub const IN_PROGRESS_MESSAGE: &str = "A submission is already in progress.";

/// Validation and submission pipeline for a single form instance.
///
/// Each session exclusively owns its [`FormState`]; marker stores may be
/// shared between sessions.
pub struct FormSession {
    state: FormState,
    endpoint: String,
    client: SubmissionClient,
    guard: DuplicateGuard,
    presenter: Arc<dyn Presenter>,
    already_submitted: bool,
}

impl FormSession {
    pub fn new(
        state: FormState,
        endpoint: impl Into<String>,
        client: SubmissionClient,
        guard: DuplicateGuard,
    ) -> Self {
        Self {
            state,
            endpoint: endpoint.into(),
            client,
            guard,
            presenter: Arc::new(NullPresenter),
            already_submitted: false,
        }
    }

    /// Session for a preset form using the configured endpoint and store
    pub async fn from_config(form: &str, config: &Config) -> Result<Self> {
        let schema =
            presets::by_name(form).with_context(|| format!("Unknown form: {}", form))?;
        let endpoint = config
            .endpoints
            .for_form(form)
            .with_context(|| format!("No endpoint configured for form: {}", form))?
            .to_string();
        let store = storage::open(&config.storage).await?;
        let guard = DuplicateGuard::new(store, config.storage.key_prefix.clone());

        Ok(Self::new(
            FormState::with_system_clock(schema),
            endpoint,
            SubmissionClient::http()?,
            guard,
        ))
    }

    pub fn with_presenter(mut self, presenter: Arc<dyn Presenter>) -> Self {
        self.presenter = presenter;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Cached marker for the current guard-field value, refreshed at mount
    /// and whenever that field changes
    pub fn already_submitted(&self) -> bool {
        self.already_submitted
    }

    /// Seed the form from a query string or URL and read the marker
    pub async fn mount(&mut self, query: &str) {
        let params = QueryParams::parse(query);
        if !params.is_empty() {
            let values = initial_values(self.state.schema(), &params);
            debug!(form = %self.state.schema().name, count = values.len(), "pre-filling fields");
            self.state.prefill(values);
        }
        self.refresh_marker().await;
        self.render();
    }

    pub async fn set_field(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        self.state.set_field(name, value)?;
        if self.state.schema().guard_field.as_deref() == Some(name) {
            self.refresh_marker().await;
        }
        self.render();
        Ok(())
    }

    /// Run the full-form pass without submitting
    pub fn validate(&mut self) -> bool {
        let clean = self.state.validate_all();
        self.render();
        clean
    }

    /// Validate, check the duplicate marker, send, and record the outcome
    pub async fn submit(&mut self) -> SubmissionResult {
        if !self.state.begin_submit() {
            return SubmissionResult::Failure(IN_PROGRESS_MESSAGE.to_string());
        }
        self.render();

        let form = self.state.schema().name.clone();
        if !self.state.validate_all() {
            debug!(form = %form, errors = self.state.errors().len(), "submission blocked by validation");
            return self.finish(SubmissionResult::Failure(INVALID_FORM_MESSAGE.to_string()));
        }

        let guard_email = self.guard_email();
        if let Some(email) = &guard_email {
            if self.guard.has_submitted(email).await {
                info!(form = %form, "duplicate submission rejected");
                self.already_submitted = true;
                return self.finish(SubmissionResult::Failure(DUPLICATE_MESSAGE.to_string()));
            }
        }

        let snapshot = self.state.snapshot();
        let result = self
            .client
            .submit(&self.endpoint, self.state.schema(), &snapshot)
            .await;

        if result.is_success() {
            if let Some(email) = &guard_email {
                self.guard.mark_submitted(email).await;
                self.already_submitted = true;
            }
            if self.state.schema().reset_on_success {
                self.state.reset();
            }
        }
        self.finish(result)
    }

    fn finish(&mut self, result: SubmissionResult) -> SubmissionResult {
        self.state.end_submit(result.clone());
        self.render();
        result
    }

    fn guard_email(&self) -> Option<String> {
        let field = self.state.schema().guard_field.as_deref()?;
        let email = self.state.text(field).trim();
        (!email.is_empty()).then(|| email.to_string())
    }

    async fn refresh_marker(&mut self) {
        self.already_submitted = match self.guard_email() {
            Some(email) => self.guard.has_submitted(&email).await,
            None => false,
        };
    }

    fn render(&self) {
        self.presenter.render(&FormView::of(&self.state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{OutgoingRequest, Reply, Transport};
    use crate::clock::FixedClock;
    use crate::storage::{MarkerStore, MemoryStore};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct CountingTransport {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Transport for CountingTransport {
        async fn send(&self, _request: OutgoingRequest) -> anyhow::Result<Reply> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Reply {
                status: 200,
                body: r#"{"message":"ok"}"#.to_string(),
            })
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    #[derive(Default)]
    struct RecordingPresenter {
        views: Mutex<Vec<FormView>>,
    }

    impl Presenter for RecordingPresenter {
        fn render(&self, view: &FormView) {
            self.views.lock().unwrap().push(view.clone());
        }
    }

    fn session(store: Arc<MemoryStore>) -> (FormSession, Arc<CountingTransport>) {
        let now = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let transport = Arc::new(CountingTransport {
            calls: AtomicUsize::new(0),
        });
        let state = FormState::new(presets::appointment(), Arc::new(FixedClock(now)));
        let session = FormSession::new(
            state,
            "http://backend/appointment/create",
            SubmissionClient::new(transport.clone()),
            DuplicateGuard::new(store, "frontdesk:submitted:"),
        );
        (session, transport)
    }

    async fn fill(session: &mut FormSession) {
        session.set_field("firstName", "Jane").await.unwrap();
        session.set_field("lastName", "Doe").await.unwrap();
        session.set_field("date", "2099-01-01").await.unwrap();
        session.set_field("allocatedTime", "10:00").await.unwrap();
        session.set_field("visitorEmail", "jane@example.com").await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_network() {
        let (mut session, transport) = session(Arc::new(MemoryStore::new()));
        fill(&mut session).await;
        session.set_field("visitorEmail", "not-an-email").await.unwrap();

        let result = session.submit().await;
        assert_eq!(result, SubmissionResult::Failure(INVALID_FORM_MESSAGE.to_string()));
        assert_eq!(
            session.state().error("visitorEmail"),
            Some("Please enter a valid email address")
        );
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
        assert!(!session.state().is_submitting());
    }

    #[tokio::test]
    async fn test_marked_email_short_circuits() {
        let store = Arc::new(MemoryStore::new());
        store
            .set("frontdesk:submitted:jane@example.com", true)
            .await
            .unwrap();
        let (mut session, transport) = session(store);
        fill(&mut session).await;
        assert!(session.already_submitted());

        let result = session.submit().await;
        assert_eq!(result, SubmissionResult::Failure(DUPLICATE_MESSAGE.to_string()));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_success_marks_and_resets() {
        let store = Arc::new(MemoryStore::new());
        let (mut session, transport) = session(store.clone());
        let presenter = Arc::new(RecordingPresenter::default());
        session = session.with_presenter(presenter.clone());
        fill(&mut session).await;

        let result = session.submit().await;
        assert!(result.is_success());
        assert!(result.message().contains("Jane Doe"));
        assert!(result.message().ends_with(" ok"));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            store.get("frontdesk:submitted:jane@example.com").await.unwrap(),
            Some(true)
        );
        assert_eq!(session.state().text("firstName"), "");
        assert_eq!(session.state().result(), Some(&result));

        let views = presenter.views.lock().unwrap();
        assert!(views.iter().any(|v| v.submitting));
        assert_eq!(views.last().unwrap().result.as_ref(), Some(&result));
    }

    #[tokio::test]
    async fn test_submit_while_in_flight_is_rejected() {
        let (session, transport) = session(Arc::new(MemoryStore::new()));
        let FormSession {
            mut state,
            endpoint,
            client,
            guard,
            ..
        } = session;
        state.set_field("firstName", "Jane").unwrap();
        assert!(state.begin_submit());
        let mut session = FormSession::new(state, endpoint, client, guard);

        let result = session.submit().await;
        assert_eq!(result, SubmissionResult::Failure(IN_PROGRESS_MESSAGE.to_string()));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
        assert!(session.state().is_submitting());
        assert_eq!(session.state().result(), None);
        assert!(session.state().errors().is_empty());
    }

    #[tokio::test]
    async fn test_guard_field_change_refreshes_marker() {
        let store = Arc::new(MemoryStore::new());
        store.set("frontdesk:submitted:old@example.com", true).await.unwrap();
        let (mut session, _) = session(store);

        session.set_field("visitorEmail", "old@example.com").await.unwrap();
        assert!(session.already_submitted());
        session.set_field("visitorEmail", "new@example.com").await.unwrap();
        assert!(!session.already_submitted());
    }

    #[tokio::test]
    async fn test_mount_prefills_from_query() {
        let (mut session, _) = session(Arc::new(MemoryStore::new()));
        session
            .mount("#/appointment?firstName=Jane&time=10:00%20AM&allocatedTime=11:15:00")
            .await;
        assert_eq!(session.state().text("firstName"), "Jane");
        assert_eq!(session.state().text("allocatedTime"), "11:15");
    }
}
