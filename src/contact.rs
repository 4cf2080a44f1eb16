//! Contact form state and its submission lifecycle.
//!
//! `Idle`/`Error` accept a submission, which moves to `Submitting` until the
//! relay answers. A delivered message clears the fields and shows `Success`
//! for [`SUCCESS_DISPLAY`] before returning to `Idle`; a failure keeps the
//! fields and lands in `Error`, from which the user may retry.

use std::{future::Future, time::Duration};

use crate::relay::{transmit, ContactPayload, RelayTransport, RELAY_SUBJECT};

pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    pub fn accepts_submission(self) -> bool {
        matches!(self, Self::Idle | Self::Error)
    }

    pub fn trigger_disabled(self) -> bool {
        !self.accepts_submission()
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Send Transmission",
            Self::Submitting => "Transmitting...",
            Self::Success => "Transmission Received",
            Self::Error => "Transmission Failed - Try Again",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Idle => "is-idle",
            Self::Submitting => "is-submitting",
            Self::Success => "is-success",
            Self::Error => "is-error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactAction {
    Edit(ContactField, String),
    Begin,
    Settled { delivered: bool },
    ExpireSuccess,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: SubmitStatus,
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    pub fn can_submit(&self) -> bool {
        self.status.accepts_submission() && self.is_complete()
    }

    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            subject: RELAY_SUBJECT.to_string(),
        }
    }

    /// Applies one action. Actions that make no sense in the current status
    /// leave the form untouched.
    pub fn apply(&mut self, action: ContactAction) {
        match action {
            ContactAction::Edit(field, value) => match field {
                ContactField::Name => self.name = value,
                ContactField::Email => self.email = value,
                ContactField::Message => self.message = value,
            },
            ContactAction::Begin => {
                if self.can_submit() {
                    self.status = SubmitStatus::Submitting;
                }
            }
            ContactAction::Settled { delivered } => {
                if self.status != SubmitStatus::Submitting {
                    return;
                }
                if delivered {
                    self.name.clear();
                    self.email.clear();
                    self.message.clear();
                    self.status = SubmitStatus::Success;
                } else {
                    self.status = SubmitStatus::Error;
                }
            }
            ContactAction::ExpireSuccess => {
                if self.status == SubmitStatus::Success {
                    self.status = SubmitStatus::Idle;
                }
            }
        }
    }
}

/// Runs one submission attempt from a snapshot of the form.
///
/// Returns without touching the network when the snapshot does not accept
/// a submission. Otherwise dispatches `Begin`, sends once, dispatches the
/// outcome, and on delivery waits `delay(SUCCESS_DISPLAY)` before
/// dispatching `ExpireSuccess`.
pub async fn run_submission<T, D, F>(
    snapshot: &ContactForm,
    transport: &T,
    dispatch: impl Fn(ContactAction),
    delay: D,
) where
    T: RelayTransport,
    D: FnOnce(Duration) -> F,
    F: Future<Output = ()>,
{
    if !snapshot.can_submit() {
        return;
    }

    let payload = snapshot.payload();
    dispatch(ContactAction::Begin);

    let delivered = transmit(transport, &payload).await.is_ok();
    dispatch(ContactAction::Settled { delivered });

    if delivered {
        delay(SUCCESS_DISPLAY).await;
        dispatch(ContactAction::ExpireSuccess);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::relay::RelayError;
    use std::{
        cell::{Cell, RefCell},
        future::ready,
    };

    struct MockRelay {
        answer: Result<u16, RelayError>,
        calls: Cell<usize>,
        sent: RefCell<Vec<ContactPayload>>,
    }

    impl MockRelay {
        fn answering(answer: Result<u16, RelayError>) -> Self {
            Self {
                answer,
                calls: Cell::new(0),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl RelayTransport for MockRelay {
        async fn send(&self, payload: &ContactPayload) -> Result<u16, RelayError> {
            self.calls.set(self.calls.get() + 1);
            self.sent.borrow_mut().push(payload.clone());
            self.answer.clone()
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.apply(ContactAction::Edit(ContactField::Name, "Commander Shepard".to_string()));
        form.apply(ContactAction::Edit(ContactField::Email, "shepard@alliance.nav".to_string()));
        form.apply(ContactAction::Edit(ContactField::Message, "Transmission content".to_string()));
        form
    }

    struct Harness {
        form: RefCell<ContactForm>,
        history: RefCell<Vec<SubmitStatus>>,
        waited: Cell<Option<Duration>>,
    }

    impl Harness {
        fn new(form: ContactForm) -> Self {
            let status = form.status;
            Self {
                form: RefCell::new(form),
                history: RefCell::new(vec![status]),
                waited: Cell::new(None),
            }
        }

        async fn submit(&self, relay: &MockRelay) {
            let snapshot = self.form.borrow().clone();
            run_submission(
                &snapshot,
                relay,
                |action| {
                    let mut form = self.form.borrow_mut();
                    form.apply(action);
                    self.history.borrow_mut().push(form.status);
                },
                |duration| {
                    self.waited.set(Some(duration));
                    ready(())
                },
            )
            .await;
        }
    }

    #[tokio::test]
    async fn delivered_submission_succeeds_then_reverts_to_idle() {
        let harness = Harness::new(filled_form());
        let relay = MockRelay::answering(Ok(200));

        harness.submit(&relay).await;

        assert_eq!(
            harness.history.borrow().as_slice(),
            [
                SubmitStatus::Idle,
                SubmitStatus::Submitting,
                SubmitStatus::Success,
                SubmitStatus::Idle
            ]
        );
        assert_eq!(harness.waited.get(), Some(Duration::from_secs(5)));

        let form = harness.form.borrow();
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");
        assert_eq!(relay.calls.get(), 1);

        let sent = relay.sent.borrow();
        assert_eq!(sent[0].name, "Commander Shepard");
        assert_eq!(sent[0].subject, RELAY_SUBJECT);
    }

    #[tokio::test]
    async fn rejected_submission_keeps_fields() {
        let harness = Harness::new(filled_form());
        let relay = MockRelay::answering(Ok(422));

        harness.submit(&relay).await;

        assert_eq!(
            harness.history.borrow().as_slice(),
            [SubmitStatus::Idle, SubmitStatus::Submitting, SubmitStatus::Error]
        );
        assert_eq!(harness.waited.get(), None);

        let form = harness.form.borrow();
        assert_eq!(form.name, "Commander Shepard");
        assert_eq!(form.email, "shepard@alliance.nav");
        assert_eq!(form.message, "Transmission content");
    }

    #[tokio::test]
    async fn transport_failure_is_reported_like_a_rejection() {
        let harness = Harness::new(filled_form());
        let relay = MockRelay::answering(Err(RelayError::Transport("connection reset".to_string())));

        harness.submit(&relay).await;

        assert_eq!(harness.form.borrow().status, SubmitStatus::Error);
        assert_eq!(harness.form.borrow().name, "Commander Shepard");
    }

    #[tokio::test]
    async fn error_state_allows_a_retry() {
        let mut form = filled_form();
        form.status = SubmitStatus::Error;
        let harness = Harness::new(form);
        let relay = MockRelay::answering(Ok(201));

        harness.submit(&relay).await;

        assert_eq!(relay.calls.get(), 1);
        assert_eq!(harness.history.borrow()[1], SubmitStatus::Submitting);
        assert_eq!(harness.form.borrow().status, SubmitStatus::Idle);
    }

    #[tokio::test]
    async fn submitting_and_success_reject_another_attempt() {
        for status in [SubmitStatus::Submitting, SubmitStatus::Success] {
            let mut form = filled_form();
            form.status = status;
            let harness = Harness::new(form);
            let relay = MockRelay::answering(Ok(200));

            harness.submit(&relay).await;

            assert_eq!(relay.calls.get(), 0);
            assert_eq!(harness.history.borrow().as_slice(), [status]);
        }
    }

    #[tokio::test]
    async fn incomplete_form_never_reaches_the_relay() {
        let mut form = filled_form();
        form.apply(ContactAction::Edit(ContactField::Message, "   ".to_string()));
        let harness = Harness::new(form);
        let relay = MockRelay::answering(Ok(200));

        harness.submit(&relay).await;

        assert_eq!(relay.calls.get(), 0);
        assert_eq!(harness.form.borrow().status, SubmitStatus::Idle);
    }

    #[test]
    fn begin_is_ignored_while_in_flight() {
        let mut form = filled_form();
        form.apply(ContactAction::Begin);
        assert_eq!(form.status, SubmitStatus::Submitting);

        form.apply(ContactAction::Begin);
        assert_eq!(form.status, SubmitStatus::Submitting);
    }

    #[test]
    fn stray_outcomes_do_not_change_status() {
        let mut form = filled_form();
        form.apply(ContactAction::Settled { delivered: true });
        assert_eq!(form.status, SubmitStatus::Idle);
        assert_eq!(form.name, "Commander Shepard");

        form.apply(ContactAction::ExpireSuccess);
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn edits_during_success_are_kept() {
        let mut form = filled_form();
        form.apply(ContactAction::Begin);
        form.apply(ContactAction::Settled { delivered: true });
        form.apply(ContactAction::Edit(ContactField::Name, "Garrus".to_string()));
        form.apply(ContactAction::ExpireSuccess);

        assert_eq!(form.status, SubmitStatus::Idle);
        assert_eq!(form.field(ContactField::Name), "Garrus");
    }

    #[test]
    fn trigger_is_disabled_only_while_submitting_or_successful() {
        assert!(!SubmitStatus::Idle.trigger_disabled());
        assert!(SubmitStatus::Submitting.trigger_disabled());
        assert!(SubmitStatus::Success.trigger_disabled());
        assert!(!SubmitStatus::Error.trigger_disabled());
        assert_eq!(SubmitStatus::Error.button_label(), "Transmission Failed - Try Again");
    }
}
