//! Application state and core logic

use crate::api::AdmissionApi;
use crate::state::{AdmissionForm, FieldName, SubmissionStatus, SubmitOutcome, SubmitRejected};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// What keyboard input currently applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldName),
    SubmitButton,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldName::FullName)
    }
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Field(FieldName::FullName) => Focus::Field(FieldName::FatherName),
            Focus::Field(FieldName::FatherName) => Focus::Field(FieldName::ClassGrade),
            Focus::Field(FieldName::ClassGrade) => Focus::SubmitButton,
            Focus::SubmitButton => Focus::Field(FieldName::FullName),
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Field(FieldName::FullName) => Focus::SubmitButton,
            Focus::Field(FieldName::FatherName) => Focus::Field(FieldName::FullName),
            Focus::Field(FieldName::ClassGrade) => Focus::Field(FieldName::FatherName),
            Focus::SubmitButton => Focus::Field(FieldName::ClassGrade),
        }
    }

    pub fn field(self) -> Option<FieldName> {
        match self {
            Focus::Field(name) => Some(name),
            Focus::SubmitButton => None,
        }
    }
}

/// Main application struct
pub struct App {
    /// The admission form state machine
    pub form: AdmissionForm,
    /// Backend the form submits to
    api: Arc<dyn AdmissionApi>,
    /// Base URL of the backend, for display
    pub base_url: String,
    /// Focused input
    pub focus: Focus,
    /// Validation hint shown under the submit button
    pub hint: Option<String>,
    /// Result of the start-up connection check, `None` until it ran
    pub backend_reachable: Option<bool>,
    /// Outcomes of spawned requests
    outcome_tx: UnboundedSender<SubmitOutcome>,
    outcome_rx: UnboundedReceiver<SubmitOutcome>,
    /// Set whenever the screen is out of date
    redraw: Arc<AtomicBool>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(api: Arc<dyn AdmissionApi>, base_url: String) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let redraw = Arc::new(AtomicBool::new(true));

        let mut form = AdmissionForm::new();
        let redraw_on_change = Arc::clone(&redraw);
        form.set_listener(Box::new(move |_, _| {
            redraw_on_change.store(true, Ordering::Release);
        }));

        Self {
            form,
            api,
            base_url,
            focus: Focus::default(),
            hint: None,
            backend_reachable: None,
            outcome_tx,
            outcome_rx,
            redraw,
            quit: false,
        }
    }

    /// Check once whether the backend answers
    pub async fn check_backend(&mut self) {
        let reachable = self.api.check_connection().await;
        if reachable {
            tracing::info!("Backend reachable at {}", self.base_url);
        } else {
            tracing::warn!("Backend not reachable at {}", self.base_url);
        }
        self.backend_reachable = Some(reachable);
        self.request_redraw();
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_redraw(&self) {
        self.redraw.store(true, Ordering::Release);
    }

    /// Whether the screen needs drawing; resets the flag
    pub fn take_redraw(&self) -> bool {
        self.redraw.swap(false, Ordering::AcqRel)
    }

    /// Whether the submit button accepts presses
    pub fn submit_enabled(&self) -> bool {
        self.form.can_submit()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.request_redraw();
        self.hint = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('s') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.submit()
            }
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => match self.focus {
                Focus::SubmitButton => self.submit(),
                Focus::Field(_) => self.focus = self.focus.next(),
            },
            KeyCode::Char(c) if !ctrl => {
                if let Some(name) = self.focus.field() {
                    self.form.push_char(name, c);
                }
            }
            KeyCode::Backspace => {
                if let Some(name) = self.focus.field() {
                    self.form.pop_char(name);
                }
            }
            _ => {}
        }
    }

    /// Dispatch a submit intent.
    ///
    /// The request runs on its own task; its outcome arrives through
    /// [`Self::poll_outcomes`].
    pub fn submit(&mut self) {
        match self.form.begin_submit() {
            Ok(payload) => {
                tracing::info!("Submitting admission to {}", self.base_url);
                let api = Arc::clone(&self.api);
                let tx = self.outcome_tx.clone();
                tokio::spawn(async move {
                    let outcome = api.create_admission(payload).await;
                    // A closed channel means the app already quit
                    let _ = tx.send(outcome);
                });
            }
            Err(SubmitRejected::AlreadySubmitting) => {
                tracing::debug!("Submit ignored, request already in flight");
            }
            Err(SubmitRejected::MissingField(name)) => {
                self.focus = Focus::Field(name);
                self.hint = Some(format!("Please fill out {}.", name.label()));
            }
        }
    }

    /// Apply any outcomes that arrived since the last call
    pub fn poll_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        match &outcome {
            Ok(receipt) => {
                tracing::info!(
                    record = ?receipt.data,
                    "Admission submitted: {}",
                    receipt.message.as_deref().unwrap_or("no message")
                );
                // A 2xx is a success whatever the body claims
                if receipt.success == Some(false) {
                    tracing::warn!("Backend answered 2xx but reported success: false");
                }
            }
            Err(err) => tracing::warn!("Admission submission failed: {err}"),
        }

        if self.form.finish(outcome) && *self.form.status() == SubmissionStatus::Succeeded {
            self.focus = Focus::default();
        }
    }
}
