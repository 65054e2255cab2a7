//! Contact form validation and the simulated submission flow.
//!
//! Validators are pure per-field predicates returning the error message on
//! failure. Submission never actually fails: there is no backend, so a
//! passing form goes Idle -> Submitting -> Success on tick deadlines, and
//! the success banner auto-hides after a fixed display window.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{SUBMIT_LATENCY_TICKS, SUCCESS_VISIBLE_TICKS};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

pub const NAME_ERROR: &str = "Please enter your full name (min 2 characters)";
pub const EMAIL_ERROR: &str = "Please enter a valid email address";
pub const SUBJECT_ERROR: &str = "Subject must be at least 3 characters";
pub const MESSAGE_ERROR: &str = "Message must be at least 10 characters";

/// Trimmed length >= 2.
pub fn validate_name(value: &str) -> Option<&'static str> {
    (value.trim().chars().count() < 2).then_some(NAME_ERROR)
}

/// `something@something.something`, no whitespace or extra `@`.
pub fn validate_email(value: &str) -> Option<&'static str> {
    (!EMAIL_RE.is_match(value)).then_some(EMAIL_ERROR)
}

/// Trimmed length >= 3.
pub fn validate_subject(value: &str) -> Option<&'static str> {
    (value.trim().chars().count() < 3).then_some(SUBJECT_ERROR)
}

/// Trimmed length >= 10.
pub fn validate_message(value: &str) -> Option<&'static str> {
    (value.trim().chars().count() < 10).then_some(MESSAGE_ERROR)
}

/// The four text fields, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldKind {
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Name,
        FieldKind::Email,
        FieldKind::Subject,
        FieldKind::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Name => "Name",
            FieldKind::Email => "Email",
            FieldKind::Subject => "Subject",
            FieldKind::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldKind::Name => "Your name",
            FieldKind::Email => "you@example.com",
            FieldKind::Subject => "What is this about?",
            FieldKind::Message => "Say hello...",
        }
    }

    fn index(self) -> usize {
        match self {
            FieldKind::Name => 0,
            FieldKind::Email => 1,
            FieldKind::Subject => 2,
            FieldKind::Message => 3,
        }
    }

    fn validate(self, value: &str) -> Option<&'static str> {
        match self {
            FieldKind::Name => validate_name(value),
            FieldKind::Email => validate_email(value),
            FieldKind::Subject => validate_subject(value),
            FieldKind::Message => validate_message(value),
        }
    }
}

/// One field's value plus its current inline error.
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    pub value: String,
    pub error: Option<&'static str>,
}

/// Where submission currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    /// Waiting out the simulated latency; the submit control is disabled.
    Submitting { done_tick: u64 },
    /// Success banner visible until `hide_tick`.
    Success { hide_tick: u64 },
}

/// The whole contact form.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: [FieldState; 4],
    phase: SubmitPhase,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            fields: Default::default(),
            phase: SubmitPhase::Idle,
        }
    }
}

impl FormState {
    pub fn field(&self, kind: FieldKind) -> &FieldState {
        &self.fields[kind.index()]
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmitPhase::Submitting { .. })
    }

    pub fn success_visible(&self) -> bool {
        matches!(self.phase, SubmitPhase::Success { .. })
    }

    /// Append a character. Editing clears only this field's error; it does
    /// not re-validate.
    pub fn input(&mut self, kind: FieldKind, ch: char) {
        if self.is_submitting() {
            return;
        }
        let field = &mut self.fields[kind.index()];
        field.value.push(ch);
        field.error = None;
    }

    /// Remove the last character. Counts as editing, so the error clears.
    pub fn backspace(&mut self, kind: FieldKind) {
        if self.is_submitting() {
            return;
        }
        let field = &mut self.fields[kind.index()];
        field.value.pop();
        field.error = None;
    }

    /// Leaving a field re-validates that field only.
    pub fn blur(&mut self, kind: FieldKind) {
        let field = &mut self.fields[kind.index()];
        field.error = kind.validate(&field.value);
    }

    /// Run all four validators. On any failure, every failing message is
    /// surfaced at once, values are kept, and submission aborts. On success
    /// the simulated latency starts. Returns whether submission started.
    pub fn submit(&mut self, tick: u64) -> bool {
        if self.is_submitting() {
            return false;
        }
        let mut ok = true;
        for kind in FieldKind::ALL {
            let field = &mut self.fields[kind.index()];
            field.error = kind.validate(&field.value);
            ok &= field.error.is_none();
        }
        if ok {
            self.phase = SubmitPhase::Submitting {
                done_tick: tick + SUBMIT_LATENCY_TICKS,
            };
        }
        ok
    }

    /// Drive the tick deadlines: Submitting completes into Success (fields
    /// cleared), Success auto-hides back to Idle. Returns true when the
    /// phase changed.
    pub fn advance(&mut self, tick: u64) -> bool {
        match self.phase {
            SubmitPhase::Submitting { done_tick } if tick >= done_tick => {
                for field in &mut self.fields {
                    field.value.clear();
                    field.error = None;
                }
                self.phase = SubmitPhase::Success {
                    hide_tick: tick + SUCCESS_VISIBLE_TICKS,
                };
                true
            }
            SubmitPhase::Success { hide_tick } if tick >= hide_tick => {
                self.phase = SubmitPhase::Idle;
                true
            }
            _ => false,
        }
    }
}
