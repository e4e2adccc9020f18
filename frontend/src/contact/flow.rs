use std::cell::Cell;
use std::rc::Rc;

use log::{error, info};
use yew::functional::Reducible;

use super::intake::Intake;
use super::request::{ContactFields, ContactRequest, Field};
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Sent,
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    Edit(Field, String),
    Begin,
    Settle(Outcome),
}

/// State behind the contact form card.
///
/// `sending` is only true between `Begin` and the matching `Settle`. `sent` is
/// terminal: once a request went through, the card shows the thank-you note
/// for the rest of the session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub sending: bool,
    pub sent: bool,
}

impl ContactForm {
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Edit(field, value) => self.fields.set(field, value),
            FormAction::Begin => self.sending = true,
            FormAction::Settle(outcome) => {
                self.sending = false;
                if outcome == Outcome::Sent {
                    self.sent = true;
                    self.fields = ContactFields::default();
                }
            }
        }
    }

    /// Snapshot to send, or `None` when this state must not start a request.
    pub fn try_begin(&self) -> Option<ContactRequest> {
        if self.sending || self.sent || !self.fields.missing_required().is_empty() {
            return None;
        }
        Some(self.fields.snapshot())
    }
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

/// Allows at most one request in flight per form.
///
/// Rendered state can lag behind a fast double click, so the handler checks
/// this flag synchronously instead of relying on the disabled button.
#[derive(Clone, Default)]
pub struct SubmitGuard(Rc<Cell<bool>>);

impl SubmitGuard {
    pub fn acquire(&self) -> Option<InFlight> {
        if self.0.replace(true) {
            return None;
        }
        Some(InFlight(self.0.clone()))
    }

    pub fn is_busy(&self) -> bool {
        self.0.get()
    }
}

/// Releases its guard when dropped, whichever way the attempt ends.
pub struct InFlight(Rc<Cell<bool>>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Runs one delivery attempt and reports how it ended.
///
/// Every failure kind gets the same notice and leaves the fields alone.
/// Exactly one `Settle` is dispatched per call.
pub async fn deliver<I, D, N>(
    in_flight: InFlight,
    intake: &I,
    request: ContactRequest,
    dispatch: D,
    notify: N,
) where
    I: Intake + ?Sized,
    D: Fn(FormAction),
    N: Fn(&str),
{
    let outcome = match intake.submit(request).await {
        Ok(()) => {
            info!("Contact request delivered");
            Outcome::Sent
        }
        Err(e) => {
            error!("Contact request failed: {}", e);
            notify(config::FAILURE_NOTICE);
            Outcome::Failed
        }
    };
    drop(in_flight);
    dispatch(FormAction::Settle(outcome));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::intake::{MockIntake, SubmitError};
    use futures::executor::block_on;
    use futures::future::{self, FutureExt};
    use std::cell::RefCell;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.apply(FormAction::Edit(Field::Name, "Иван".to_string()));
        form.apply(FormAction::Edit(Field::Phone, "+79991234567".to_string()));
        form
    }

    fn intake_returning(result: Result<(), SubmitError>) -> MockIntake {
        let mut intake = MockIntake::new();
        intake
            .expect_submit()
            .times(1)
            .returning(move |_| future::ready(result.clone()).boxed_local());
        intake
    }

    /// Drives a whole submit the way the form card does and returns the
    /// final state plus every notice shown.
    fn run_submit(form: ContactForm, intake: &MockIntake) -> (ContactForm, Vec<String>) {
        let state = RefCell::new(form);
        let notices = RefCell::new(Vec::new());
        let guard = SubmitGuard::default();

        let request = state.borrow().try_begin().expect("form should be submittable");
        let in_flight = guard.acquire().expect("guard should be free");
        state.borrow_mut().apply(FormAction::Begin);
        assert!(state.borrow().sending);

        block_on(deliver(
            in_flight,
            intake,
            request,
            |action| state.borrow_mut().apply(action),
            |msg| notices.borrow_mut().push(msg.to_string()),
        ));

        assert!(!guard.is_busy());
        (state.into_inner(), notices.into_inner())
    }

    #[test]
    fn successful_submit_marks_sent_and_clears_fields() {
        let intake = intake_returning(Ok(()));
        let (form, notices) = run_submit(filled_form(), &intake);

        assert!(form.sent);
        assert!(!form.sending);
        assert!(form.fields.is_empty());
        assert!(notices.is_empty());
    }

    #[test]
    fn server_error_keeps_fields_and_notifies_once() {
        let intake = intake_returning(Err(SubmitError::Status(500)));
        let (form, notices) = run_submit(filled_form(), &intake);

        assert!(!form.sent);
        assert!(!form.sending);
        assert_eq!(form.fields.name, "Иван");
        assert_eq!(form.fields.phone, "+79991234567");
        assert_eq!(notices, vec![config::FAILURE_NOTICE.to_string()]);
    }

    #[test]
    fn network_error_looks_the_same_as_server_error() {
        let by_status = run_submit(filled_form(), &intake_returning(Err(SubmitError::Status(500))));
        let by_network = run_submit(
            filled_form(),
            &intake_returning(Err(SubmitError::Network("connection refused".to_string()))),
        );
        assert_eq!(by_status, by_network);
    }

    #[test]
    fn submitted_payload_matches_form_values() {
        let mut intake = MockIntake::new();
        intake
            .expect_submit()
            .withf(|request| {
                request.name == "Иван"
                    && request.phone == "+79991234567"
                    && request.email.is_empty()
                    && request.access_key == config::WEB3FORMS_ACCESS_KEY
            })
            .times(1)
            .returning(|_| future::ready(Ok(())).boxed_local());

        let (form, _) = run_submit(filled_form(), &intake);
        assert!(form.sent);
    }

    #[test]
    fn failed_attempt_can_be_retried() {
        let (form, _) = run_submit(filled_form(), &intake_returning(Err(SubmitError::Status(502))));
        assert!(form.try_begin().is_some());

        let (form, notices) = run_submit(form, &intake_returning(Ok(())));
        assert!(form.sent);
        assert!(notices.is_empty());
    }

    #[test]
    fn sending_flips_exactly_once_per_attempt() {
        let mut form = filled_form();
        assert!(!form.sending);
        form.apply(FormAction::Begin);
        assert!(form.sending);
        form.apply(FormAction::Settle(Outcome::Failed));
        assert!(!form.sending);
    }

    #[test]
    fn nothing_starts_without_required_fields() {
        let mut form = ContactForm::default();
        form.apply(FormAction::Edit(Field::Email, "ivan@example.com".to_string()));
        assert!(form.try_begin().is_none());

        form.apply(FormAction::Edit(Field::Name, "Иван".to_string()));
        assert!(form.try_begin().is_none());
    }

    #[test]
    fn whitespace_name_is_still_sent() {
        let mut form = filled_form();
        form.apply(FormAction::Edit(Field::Name, " ".to_string()));
        assert_eq!(form.try_begin().map(|request| request.name), Some(" ".to_string()));

        let mut intake = MockIntake::new();
        intake
            .expect_submit()
            .withf(|request| request.name == " ")
            .times(1)
            .returning(|_| future::ready(Ok(())).boxed_local());
        let (form, _) = run_submit(form, &intake);
        assert!(form.sent);
    }

    #[test]
    fn free_form_email_is_sent_unchanged() {
        let mut form = filled_form();
        form.apply(FormAction::Edit(Field::Email, "ivan".to_string()));

        let mut intake = MockIntake::new();
        intake
            .expect_submit()
            .withf(|request| request.email == "ivan")
            .times(1)
            .returning(|_| future::ready(Ok(())).boxed_local());
        let (form, _) = run_submit(form, &intake);
        assert!(form.sent);
    }

    #[test]
    fn nothing_starts_while_sending_or_after_sent() {
        let mut form = filled_form();
        form.apply(FormAction::Begin);
        assert!(form.try_begin().is_none());

        form.apply(FormAction::Settle(Outcome::Sent));
        form.apply(FormAction::Edit(Field::Name, "Иван".to_string()));
        form.apply(FormAction::Edit(Field::Phone, "+79991234567".to_string()));
        assert!(form.try_begin().is_none());
    }

    #[test]
    fn guard_rejects_second_attempt_until_first_settles() {
        let guard = SubmitGuard::default();
        let first = guard.acquire();
        assert!(first.is_some());
        assert!(guard.acquire().is_none());
        assert!(guard.clone().acquire().is_none());

        drop(first);
        assert!(!guard.is_busy());
        assert!(guard.acquire().is_some());
    }

    #[test]
    fn reducer_returns_new_state() {
        let before = Rc::new(filled_form());
        let after = before.clone().reduce(FormAction::Begin);
        assert!(!before.sending);
        assert!(after.sending);
    }
}
