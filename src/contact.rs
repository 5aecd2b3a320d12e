//! Contact form state machine.
//!
//! ```text
//! Idle --submit--> Submitting --primary ok----> Settled(Sent)   --3s--> Idle
//!                             --primary error-> Settled(Failed) --3s--> Idle
//! ```
//!
//! The auto-reply that follows a delivered message is a best-effort side task:
//! its result is logged and reported, never used for a transition.

use std::{
    fmt,
    future::Future,
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use thiserror::Error;

use crate::{
    config::RelayConfig,
    mail::{AutoReply, ContactMessage, MailRelay, RelayError, TemplateParams},
    timer::{with_timeout, Clock, TimerHandle},
};

/// How long a settled result stays on screen before the form resets.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// First required field left empty, in form order. Same rule as the
    /// browser's `required` check: any character, whitespace included, counts.
    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.get(*f).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    MissingField(Field),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Sent,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Settled(Outcome),
}

impl SubmissionPhase {
    pub fn submit_label(self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "Send Message",
            SubmissionPhase::Submitting => "Sending...",
            SubmissionPhase::Settled(Outcome::Sent) => "✓ Message Sent!",
            SubmissionPhase::Settled(Outcome::Failed) => "✗ Failed to Send",
        }
    }

    pub fn submit_class(self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "w-full py-3 rounded-md font-medium text-white bg-cyan-500 hover:bg-cyan-600 transition-colors duration-200",
            SubmissionPhase::Submitting => "w-full py-3 rounded-md font-medium text-white bg-cyan-500/60 cursor-wait",
            SubmissionPhase::Settled(Outcome::Sent) => "w-full py-3 rounded-md font-medium text-white bg-green-600 cursor-default",
            SubmissionPhase::Settled(Outcome::Failed) => "w-full py-3 rounded-md font-medium text-white bg-red-600 cursor-default",
        }
    }

    /// Status line under the form, with the tailwind text color to show it in.
    pub fn status_message(self) -> Option<(&'static str, &'static str)> {
        match self {
            SubmissionPhase::Settled(Outcome::Sent) => Some((
                "text-green-600",
                "Thanks! Your message is on its way and a confirmation is headed to your inbox.",
            )),
            SubmissionPhase::Settled(Outcome::Failed) => Some((
                "text-red-600",
                "Something went wrong sending your message. Please try again in a moment.",
            )),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub fields: ContactFields,
    pub phase: SubmissionPhase,
}

impl ContactFormState {
    /// Fields accept edits and the submit control is live only while idle.
    pub fn is_idle(&self) -> bool {
        self.phase == SubmissionPhase::Idle
    }

    pub fn settled_result_was_error(&self) -> bool {
        self.phase == SubmissionPhase::Settled(Outcome::Failed)
    }
}

/// What happened to a best-effort side task. Diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideTaskReport {
    Completed,
    Failed(String),
}

/// Await `task`, logging and reporting its failure instead of propagating it.
pub async fn best_effort<F, T, E>(name: &str, task: F) -> SideTaskReport
where
    F: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    match task.await {
        Ok(_) => {
            log::debug!("{name}: completed");
            SideTaskReport::Completed
        }
        Err(e) => {
            log::warn!("{name}: failed, ignoring: {e}");
            SideTaskReport::Failed(e.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// A cycle is already in flight or still showing its result.
    Busy,
    Rejected(ValidationError),
    Settled {
        outcome: Outcome,
        auto_reply: Option<SideTaskReport>,
    },
}

type Listener = Box<dyn Fn(&ContactFormState)>;

struct Shared<R, C: Clock> {
    state: Mutex<ContactFormState>,
    pending_reset: Mutex<Option<C::Handle>>,
    relay: R,
    clock: C,
    config: RelayConfig,
    listener: Option<Listener>,
}

pub struct ContactController<R, C: Clock> {
    shared: Arc<Shared<R, C>>,
}

impl<R, C: Clock> Clone for ContactController<R, C> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<R, C> ContactController<R, C>
where
    R: MailRelay + 'static,
    C: Clock + 'static,
{
    pub fn new(relay: R, clock: C, config: RelayConfig) -> Self {
        Self::build(relay, clock, config, None)
    }

    /// Like [`ContactController::new`], calling `listener` with a snapshot
    /// after every change.
    pub fn with_listener(
        relay: R,
        clock: C,
        config: RelayConfig,
        listener: impl Fn(&ContactFormState) + 'static,
    ) -> Self {
        Self::build(relay, clock, config, Some(Box::new(listener)))
    }

    fn build(relay: R, clock: C, config: RelayConfig, listener: Option<Listener>) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(ContactFormState::default()),
                pending_reset: Mutex::new(None),
                relay,
                clock,
                config,
                listener,
            }),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, ContactFormState> {
        self.shared
            .state
            .lock()
            .expect("should be able to lock contact form state")
    }

    fn take_pending_reset(&self) -> Option<C::Handle> {
        self.shared
            .pending_reset
            .lock()
            .expect("should be able to lock pending reset")
            .take()
    }

    pub fn snapshot(&self) -> ContactFormState {
        self.lock_state().clone()
    }

    fn notify(&self) {
        if let Some(listener) = &self.shared.listener {
            let snapshot = self.snapshot();
            listener(&snapshot);
        }
    }

    /// Edit a field. Ignored unless the form is idle.
    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        {
            let mut state = self.lock_state();
            if !state.is_idle() {
                return;
            }
            state.fields.set(field, value.into());
        }
        self.notify();
    }

    pub async fn submit(&self) -> SubmitResult {
        let fields = {
            let mut state = self.lock_state();
            if !state.is_idle() {
                log::debug!("submit ignored while {:?}", state.phase);
                return SubmitResult::Busy;
            }
            if let Some(field) = state.fields.first_missing() {
                return SubmitResult::Rejected(ValidationError::MissingField(field));
            }
            state.phase = SubmissionPhase::Submitting;
            state.fields.clone()
        };
        self.notify();

        let config = &self.shared.config;
        let message = TemplateParams::Contact(ContactMessage {
            from_name: fields.name.clone(),
            from_email: fields.email.clone(),
            subject: fields.subject.clone(),
            message: fields.message.clone(),
            to_email: config.owner_email.clone(),
        });

        let (outcome, auto_reply) = match self.send(&config.contact_template_id, &message).await {
            Ok(()) => {
                let reply = TemplateParams::AutoReply(AutoReply {
                    to_name: fields.name,
                    to_email: fields.email,
                    from_name: config.owner_name.clone(),
                    subject: config.auto_reply_subject.clone(),
                    message: fields.message,
                });
                let report =
                    best_effort("auto-reply", self.send(&config.auto_reply_template_id, &reply))
                        .await;
                (Outcome::Sent, Some(report))
            }
            Err(e) => {
                log::error!("contact message was not delivered: {e}");
                (Outcome::Failed, None)
            }
        };

        self.settle(outcome);
        SubmitResult::Settled {
            outcome,
            auto_reply,
        }
    }

    async fn send(&self, template_id: &str, params: &TemplateParams) -> Result<(), RelayError> {
        let shared = &self.shared;
        with_timeout(
            &shared.clock,
            shared.config.timeout,
            shared.relay.send(template_id, params),
        )
        .await?
    }

    fn settle(&self, outcome: Outcome) {
        self.lock_state().phase = SubmissionPhase::Settled(outcome);
        log::debug!("contact form settled: {outcome:?}");

        let weak = Arc::downgrade(&self.shared);
        let handle = self.shared.clock.schedule(
            RESET_DELAY,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    ContactController { shared }.reset();
                }
            }),
        );
        let previous = self
            .shared
            .pending_reset
            .lock()
            .expect("should be able to lock pending reset")
            .replace(handle);
        if let Some(previous) = previous {
            previous.cancel();
        }
        self.notify();
    }

    /// Clear the fields and return to idle. Only a settled form resets.
    pub fn reset(&self) {
        {
            let mut state = self.lock_state();
            if !matches!(state.phase, SubmissionPhase::Settled(_)) {
                return;
            }
            state.fields.clear();
            state.phase = SubmissionPhase::Idle;
        }
        if let Some(handle) = self.take_pending_reset() {
            handle.cancel();
        }
        self.notify();
    }

    /// Cancel a pending auto-reset. Called when the form unmounts.
    pub fn dispose(&self) {
        if let Some(handle) = self.take_pending_reset() {
            handle.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::VecDeque, rc::Rc};

    use super::*;
    use crate::timer::manual::ManualClock;

    #[derive(Debug, Clone, Copy)]
    enum Reply {
        Accept,
        Reject(u16),
        Unreachable,
        Hang,
    }

    #[derive(Clone, Default)]
    struct ScriptedRelay {
        replies: Rc<RefCell<VecDeque<Reply>>>,
        calls: Rc<RefCell<Vec<(String, TemplateParams)>>>,
    }

    impl ScriptedRelay {
        fn new(replies: &[Reply]) -> Self {
            Self {
                replies: Rc::new(RefCell::new(replies.iter().copied().collect())),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<(String, TemplateParams)> {
            self.calls.borrow().clone()
        }
    }

    impl MailRelay for ScriptedRelay {
        async fn send(&self, template_id: &str, params: &TemplateParams) -> Result<(), RelayError> {
            self.calls
                .borrow_mut()
                .push((template_id.to_string(), params.clone()));
            let reply = self.replies.borrow_mut().pop_front().unwrap_or(Reply::Accept);
            match reply {
                Reply::Accept => Ok(()),
                Reply::Reject(status) => Err(RelayError::Rejected {
                    status,
                    body: "rejected".to_string(),
                }),
                Reply::Unreachable => Err(RelayError::Network("connection reset".to_string())),
                Reply::Hang => std::future::pending().await,
            }
        }
    }

    type TestController = ContactController<ScriptedRelay, ManualClock>;

    fn setup(replies: &[Reply]) -> (TestController, ScriptedRelay, ManualClock) {
        let relay = ScriptedRelay::new(replies);
        let clock = ManualClock::new();
        let controller = ContactController::new(relay.clone(), clock.clone(), RelayConfig::default());
        (controller, relay, clock)
    }

    fn fill(controller: &TestController) {
        controller.update_field(Field::Name, "Ada Lovelace");
        controller.update_field(Field::Email, "ada@example.com");
        controller.update_field(Field::Subject, "Engines");
        controller.update_field(Field::Message, "Loved the projects section.");
    }

    fn filled_fields() -> ContactFields {
        ContactFields {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Engines".to_string(),
            message: "Loved the projects section.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_any_blank_field_blocks_submission() {
        for mask in 0..15u8 {
            let (controller, relay, _clock) = setup(&[]);
            for (i, field) in Field::ALL.into_iter().enumerate() {
                if mask & (1 << i) != 0 {
                    controller.update_field(field, "x");
                }
            }
            let res = controller.submit().await;
            assert!(
                matches!(res, SubmitResult::Rejected(ValidationError::MissingField(_))),
                "mask {mask:#06b} should be rejected, got {res:?}"
            );
            assert_eq!(controller.snapshot().phase, SubmissionPhase::Idle);
            assert!(relay.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn test_whitespace_only_field_counts_as_filled() {
        let (controller, relay, _clock) = setup(&[Reply::Accept, Reply::Accept]);
        fill(&controller);
        controller.update_field(Field::Message, " ");
        assert!(matches!(
            controller.submit().await,
            SubmitResult::Settled {
                outcome: Outcome::Sent,
                ..
            }
        ));
        assert_eq!(relay.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_cleared_field_is_missing() {
        let (controller, relay, _clock) = setup(&[]);
        fill(&controller);
        controller.update_field(Field::Subject, "");
        assert_eq!(
            controller.submit().await,
            SubmitResult::Rejected(ValidationError::MissingField(Field::Subject))
        );
        assert!(relay.calls().is_empty());
    }

    #[test]
    fn test_settled_results_render_differently() {
        let sent = SubmissionPhase::Settled(Outcome::Sent);
        let failed = SubmissionPhase::Settled(Outcome::Failed);
        assert_ne!(sent.submit_label(), failed.submit_label());
        assert_ne!(sent.submit_class(), failed.submit_class());
        assert!(failed.submit_class().contains("bg-red"));
        assert!(sent.submit_class().contains("bg-green"));

        let (sent_tone, sent_text) = sent.status_message().expect("sent shows a status");
        let (failed_tone, failed_text) = failed.status_message().expect("failure shows a status");
        assert_ne!(sent_tone, failed_tone);
        assert_ne!(sent_text, failed_text);
        assert_eq!(SubmissionPhase::Idle.status_message(), None);
        assert_eq!(SubmissionPhase::Submitting.status_message(), None);
    }

    #[tokio::test]
    async fn test_success_path_settles_then_resets() {
        let phases = Rc::new(RefCell::new(Vec::new()));
        let seen = phases.clone();
        let relay = ScriptedRelay::new(&[Reply::Accept, Reply::Accept]);
        let clock = ManualClock::new();
        let controller = ContactController::with_listener(
            relay.clone(),
            clock.clone(),
            RelayConfig::default(),
            move |s: &ContactFormState| seen.borrow_mut().push((s.phase, s.fields.name.clone())),
        );
        fill(&controller);
        phases.borrow_mut().clear();

        let res = controller.submit().await;
        assert_eq!(
            res,
            SubmitResult::Settled {
                outcome: Outcome::Sent,
                auto_reply: Some(SideTaskReport::Completed),
            }
        );
        let state = controller.snapshot();
        assert_eq!(state.phase, SubmissionPhase::Settled(Outcome::Sent));
        assert!(!state.settled_result_was_error());
        assert_eq!(state.fields, filled_fields());

        clock.advance(RESET_DELAY - Duration::from_millis(1));
        assert_eq!(controller.snapshot().fields, filled_fields());

        clock.advance(Duration::from_millis(1));
        assert_eq!(controller.snapshot(), ContactFormState::default());

        assert_eq!(
            *phases.borrow(),
            vec![
                (SubmissionPhase::Submitting, "Ada Lovelace".to_string()),
                (SubmissionPhase::Settled(Outcome::Sent), "Ada Lovelace".to_string()),
                (SubmissionPhase::Idle, String::new()),
            ]
        );
    }

    #[tokio::test]
    async fn test_success_path_sends_both_payloads() {
        let (controller, relay, _clock) = setup(&[Reply::Accept, Reply::Accept]);
        fill(&controller);
        controller.submit().await;

        let config = RelayConfig::default();
        assert_eq!(
            relay.calls(),
            vec![
                (
                    config.contact_template_id.clone(),
                    TemplateParams::Contact(ContactMessage {
                        from_name: "Ada Lovelace".to_string(),
                        from_email: "ada@example.com".to_string(),
                        subject: "Engines".to_string(),
                        message: "Loved the projects section.".to_string(),
                        to_email: config.owner_email.clone(),
                    })
                ),
                (
                    config.auto_reply_template_id.clone(),
                    TemplateParams::AutoReply(AutoReply {
                        to_name: "Ada Lovelace".to_string(),
                        to_email: "ada@example.com".to_string(),
                        from_name: config.owner_name.clone(),
                        subject: config.auto_reply_subject.clone(),
                        message: "Loved the projects section.".to_string(),
                    })
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_auto_reply_failure_still_reports_sent() {
        let (controller, relay, _clock) = setup(&[Reply::Accept, Reply::Reject(500)]);
        fill(&controller);

        let res = controller.submit().await;
        assert!(matches!(
            res,
            SubmitResult::Settled {
                outcome: Outcome::Sent,
                auto_reply: Some(SideTaskReport::Failed(_)),
            }
        ));
        assert_eq!(
            controller.snapshot().phase,
            SubmissionPhase::Settled(Outcome::Sent)
        );
        assert_eq!(relay.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_auto_reply_timeout_still_reports_sent() {
        let (controller, _relay, clock) = setup(&[Reply::Accept, Reply::Hang]);
        fill(&controller);

        let (res, ()) = tokio::join!(controller.submit(), async {
            tokio::task::yield_now().await;
            clock.advance(RelayConfig::default().timeout);
        });
        assert_eq!(
            res,
            SubmitResult::Settled {
                outcome: Outcome::Sent,
                auto_reply: Some(SideTaskReport::Failed(
                    "mail relay did not answer within 15s".to_string()
                )),
            }
        );
    }

    #[tokio::test]
    async fn test_primary_failure_settles_as_error() {
        let (controller, relay, clock) = setup(&[Reply::Unreachable]);
        fill(&controller);

        let res = controller.submit().await;
        assert_eq!(
            res,
            SubmitResult::Settled {
                outcome: Outcome::Failed,
                auto_reply: None,
            }
        );
        let state = controller.snapshot();
        assert!(state.settled_result_was_error());
        assert_eq!(state.fields, filled_fields());
        assert_eq!(relay.calls().len(), 1);

        clock.advance(RESET_DELAY);
        assert_eq!(controller.snapshot(), ContactFormState::default());
    }

    #[tokio::test]
    async fn test_rejected_status_settles_as_error() {
        let (controller, relay, _clock) = setup(&[Reply::Reject(400)]);
        fill(&controller);

        assert!(matches!(
            controller.submit().await,
            SubmitResult::Settled {
                outcome: Outcome::Failed,
                ..
            }
        ));
        assert_eq!(relay.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_primary_timeout_settles_as_error() {
        let (controller, relay, clock) = setup(&[Reply::Hang]);
        fill(&controller);

        let (res, ()) = tokio::join!(controller.submit(), async {
            tokio::task::yield_now().await;
            clock.advance(Duration::from_secs(15));
        });
        assert_eq!(
            res,
            SubmitResult::Settled {
                outcome: Outcome::Failed,
                auto_reply: None,
            }
        );
        assert_eq!(relay.calls().len(), 1);
        assert_eq!(controller.snapshot().fields, filled_fields());
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_ignored() {
        let (controller, relay, clock) = setup(&[Reply::Hang]);
        fill(&controller);

        let (first, second, ()) = tokio::join!(
            controller.submit(),
            async {
                tokio::task::yield_now().await;
                assert_eq!(controller.snapshot().phase, SubmissionPhase::Submitting);
                controller.submit().await
            },
            async {
                tokio::task::yield_now().await;
                tokio::task::yield_now().await;
                clock.advance(Duration::from_secs(15));
            }
        );
        assert_eq!(second, SubmitResult::Busy);
        assert!(matches!(first, SubmitResult::Settled { .. }));
        assert_eq!(relay.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_settled_form_ignores_submit_and_edits() {
        let (controller, relay, _clock) = setup(&[Reply::Accept, Reply::Accept]);
        fill(&controller);
        controller.submit().await;

        assert_eq!(controller.submit().await, SubmitResult::Busy);
        controller.update_field(Field::Name, "Someone Else");
        assert_eq!(controller.snapshot().fields, filled_fields());
        assert_eq!(relay.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_dispose_cancels_auto_reset() {
        let (controller, _relay, clock) = setup(&[Reply::Accept, Reply::Accept]);
        fill(&controller);
        controller.submit().await;
        assert_eq!(clock.pending_tasks(), 1);

        controller.dispose();
        assert_eq!(clock.pending_tasks(), 0);
        clock.advance(RESET_DELAY * 2);
        assert_eq!(
            controller.snapshot().phase,
            SubmissionPhase::Settled(Outcome::Sent)
        );
    }

    #[tokio::test]
    async fn test_form_is_reusable_after_reset() {
        let (controller, relay, clock) = setup(&[Reply::Unreachable, Reply::Accept, Reply::Accept]);
        fill(&controller);
        controller.submit().await;
        clock.advance(RESET_DELAY);

        fill(&controller);
        assert!(matches!(
            controller.submit().await,
            SubmitResult::Settled {
                outcome: Outcome::Sent,
                ..
            }
        ));
        assert_eq!(relay.calls().len(), 3);
    }

    #[test]
    fn test_reset_outside_settled_is_ignored() {
        let (controller, _relay, _clock) = setup(&[]);
        fill(&controller);
        controller.reset();
        assert_eq!(controller.snapshot().fields, filled_fields());
    }

    #[tokio::test]
    async fn test_best_effort_reports_without_propagating() {
        let ok = best_effort("side task", async { Ok::<_, RelayError>(()) }).await;
        assert_eq!(ok, SideTaskReport::Completed);

        let failed = best_effort("side task", async {
            Err::<(), _>(RelayError::Network("dns".to_string()))
        })
        .await;
        assert_eq!(
            failed,
            SideTaskReport::Failed("mail relay unreachable: dns".to_string())
        );
    }

    #[test]
    fn test_missing_field_message() {
        assert_eq!(
            ValidationError::MissingField(Field::Email).to_string(),
            "email is required"
        );
    }
}
