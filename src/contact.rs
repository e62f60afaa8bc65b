//! Contact form model: field validation, the submission phase machine, and
//! the injectable submission gateway.
//!
//! Everything stateful about the form that is not markup lives here, so the
//! rules can be exercised without a browser and the gateway can be swapped
//! for a real endpoint without touching the component.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use serde::Serialize;

use crate::config;

/// Form fields by role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl Field {
    /// Fields a submission cannot proceed without. Phone stays optional.
    pub const REQUIRED: [Field; 4] = [Field::Name, Field::Email, Field::Service, Field::Message];
}

/// Current text of every field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl FieldValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Service => self.service = value,
            Field::Message => self.message = value,
        }
    }
}

/// Required fields whose trimmed value is empty, in declaration order.
pub fn missing_required(values: &FieldValues) -> Vec<Field> {
    Field::REQUIRED
        .iter()
        .copied()
        .filter(|field| values.get(*field).trim().is_empty())
        .collect()
}

/// Blur-time check for a single field: required and currently empty.
pub fn field_missing(values: &FieldValues, field: Field) -> bool {
    Field::REQUIRED.contains(&field) && values.get(field).trim().is_empty()
}

/// Where the submit affordance is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Pending,
    Succeeded,
}

impl SubmitPhase {
    /// The button is disabled from first dispatch until the chain resets.
    pub fn submit_disabled(self) -> bool {
        self != SubmitPhase::Idle
    }

    /// Success color override, cleared when the chain resets to idle.
    pub fn background_override(self) -> Option<&'static str> {
        (self == SubmitPhase::Succeeded).then_some("#22c55e")
    }

    /// Landing on success wipes the typed values. The later reset to idle
    /// leaves the form empty rather than restoring what was typed.
    pub fn clears_fields(self) -> bool {
        self == SubmitPhase::Succeeded
    }
}

/// Payload handed to the submission gateway.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl From<&FieldValues> for ContactSubmission {
    fn from(values: &FieldValues) -> Self {
        Self {
            name: values.name.clone(),
            email: values.email.clone(),
            phone: values.phone.clone(),
            service: values.service.clone(),
            message: values.message.clone(),
        }
    }
}

/// What a gateway resolves to. The form's state machine has no failure
/// transition; a real backend implementation would extend this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
}

pub type SubmitFuture = Pin<Box<dyn Future<Output = SubmitOutcome>>>;

/// An asynchronous submission capability. The shipped implementation is a
/// fixed-delay stand-in; swapping in a real endpoint only means providing
/// another implementor.
pub trait ContactGateway {
    fn submit(&self, submission: ContactSubmission) -> SubmitFuture;
}

/// Stand-in for the real endpoint: accepts everything after a fixed delay.
pub struct SimulatedGateway {
    delay_ms: u32,
}

impl SimulatedGateway {
    pub fn new() -> Self {
        Self { delay_ms: config::SUBMIT_SIMULATED_DELAY_MS }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactGateway for SimulatedGateway {
    fn submit(&self, _submission: ContactSubmission) -> SubmitFuture {
        let delay_ms = self.delay_ms;
        Box::pin(async move {
            TimeoutFuture::new(delay_ms).await;
            SubmitOutcome::Accepted
        })
    }
}

/// Cheaply clonable gateway handle, comparable by identity so it can sit
/// in component props.
#[derive(Clone)]
pub struct Gateway(Rc<dyn ContactGateway>);

impl Gateway {
    pub fn new(inner: Rc<dyn ContactGateway>) -> Self {
        Self(inner)
    }

    pub fn simulated() -> Self {
        Self(Rc::new(SimulatedGateway::new()))
    }

    pub fn submit(&self, submission: ContactSubmission) -> SubmitFuture {
        self.0.submit(submission)
    }
}

impl PartialEq for Gateway {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Drive one submission chain end to end: pending, gateway resolution,
/// success hold, reset. Phases are pushed through `apply` in that order.
///
/// Nothing here cancels a chain already in flight. A resubmission simply
/// starts a second chain whose phase writes interleave with the first;
/// the disabled button is the only guard against that.
pub async fn run_submission<F>(
    gateway: Gateway,
    submission: ContactSubmission,
    reset_delay_ms: u32,
    apply: F,
) where
    F: Fn(SubmitPhase),
{
    apply(SubmitPhase::Pending);
    let SubmitOutcome::Accepted = gateway.submit(submission).await;
    apply(SubmitPhase::Succeeded);
    TimeoutFuture::new(reset_delay_ms).await;
    apply(SubmitPhase::Idle);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FieldValues {
        FieldValues {
            name: "Dana Whitfield".into(),
            email: "dana@example.com".into(),
            phone: "(555) 123-4567".into(),
            service: "assessment".into(),
            message: "Load-bearing wall removal in a 1960s bungalow.".into(),
        }
    }

    #[test]
    fn a_fully_filled_form_has_nothing_missing() {
        assert!(missing_required(&filled()).is_empty());
    }

    #[test]
    fn each_empty_required_field_is_reported() {
        let mut values = filled();
        values.email.clear();
        assert_eq!(missing_required(&values), vec![Field::Email]);

        values.message.clear();
        assert_eq!(missing_required(&values), vec![Field::Email, Field::Message]);
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut values = filled();
        values.name = "   ".into();
        assert_eq!(missing_required(&values), vec![Field::Name]);
        assert!(field_missing(&values, Field::Name));
    }

    #[test]
    fn phone_is_never_required() {
        let mut values = filled();
        values.phone.clear();
        assert!(missing_required(&values).is_empty());
        assert!(!field_missing(&values, Field::Phone));
    }

    #[test]
    fn blur_flags_only_fields_that_are_required_and_empty() {
        let mut values = filled();
        values.service.clear();
        assert!(field_missing(&values, Field::Service));
        assert!(!field_missing(&values, Field::Email));
    }

    #[test]
    fn the_submit_button_is_disabled_outside_idle() {
        assert!(!SubmitPhase::Idle.submit_disabled());
        assert!(SubmitPhase::Pending.submit_disabled());
        assert!(SubmitPhase::Succeeded.submit_disabled());
    }

    #[test]
    fn the_success_color_shows_only_while_succeeded() {
        assert_eq!(SubmitPhase::Succeeded.background_override(), Some("#22c55e"));
        assert_eq!(SubmitPhase::Pending.background_override(), None);
        assert_eq!(SubmitPhase::Idle.background_override(), None);
    }

    #[test]
    fn only_success_clears_the_typed_values() {
        assert!(SubmitPhase::Succeeded.clears_fields());
        assert!(!SubmitPhase::Pending.clears_fields());
        assert!(!SubmitPhase::Idle.clears_fields());
    }

    #[test]
    fn the_submission_payload_keeps_its_field_names() {
        let payload = ContactSubmission::from(&filled());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["email"], "dana@example.com");
        assert_eq!(json["service"], "assessment");
        assert_eq!(json["phone"], "(555) 123-4567");
    }

    #[test]
    fn values_round_trip_through_the_field_accessors() {
        let mut values = FieldValues::default();
        values.set(Field::Service, "renovation".into());
        assert_eq!(values.get(Field::Service), "renovation");
        assert_eq!(values.get(Field::Name), "");
    }
}
