// File: src/presenter.rs
// Purpose: Presentation collaborator notified of form state changes

use std::collections::BTreeMap;

use crate::client::SubmissionResult;
use crate::state::{ErrorMap, FormState};

/// What a view layer needs to draw one form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub form: String,
    /// Text values; attachments show their file name
    pub values: BTreeMap<String, String>,
    pub errors: ErrorMap,
    pub submitting: bool,
    pub result: Option<SubmissionResult>,
}

impl FormView {
    pub fn of(state: &FormState) -> Self {
        let values = state
            .snapshot()
            .iter()
            .map(|(name, value)| {
                let shown = match value.as_attachment() {
                    Some(file) => file.file_name.clone(),
                    None => value.as_text().unwrap_or_default().to_string(),
                };
                (name.clone(), shown)
            })
            .collect();

        Self {
            form: state.schema().name.clone(),
            values,
            errors: state.errors().clone(),
            submitting: state.is_submitting(),
            result: state.result().cloned(),
        }
    }
}

/// Receives a fresh view after every state change
pub trait Presenter: Send + Sync {
    fn render(&self, view: &FormView);
}

/// Presenter that draws nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render(&self, _view: &FormView) {}
}
