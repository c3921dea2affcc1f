use serde_json::Value;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::models::patient::{PatientForm, PatientRecord, ValidationError};
use crate::utils::QflowClient;

pub const REGISTERED_MESSAGE: &str = "Patient registered successfully.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success(String),
    Error(String),
}

/// The patient registration form and its submit feedback.
#[derive(Debug, Default)]
pub struct PatientRegistrationView {
    form: PatientForm,
    submitting: bool,
    status: SubmitStatus,
    gate: Option<ValidationError>,
}

impl PatientRegistrationView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: PatientForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn form(&self) -> &PatientForm {
        &self.form
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Why the last attempt was held back before reaching the backend, if it was.
    pub fn gate_error(&self) -> Option<&ValidationError> {
        self.gate.as_ref()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.form.validate().is_ok()
    }

    /// Clears the previous status and hands out the record to send, if the form allows it.
    pub fn begin_submit(&mut self) -> Option<PatientRecord> {
        if self.submitting {
            return None;
        }
        self.status = SubmitStatus::Idle;

        match self.form.validate() {
            Ok(record) => {
                self.gate = None;
                self.submitting = true;
                Some(record)
            }
            Err(err) => {
                self.gate = Some(err);
                None
            }
        }
    }

    /// The response body is not interpreted, only success or failure.
    pub fn settle(&mut self, outcome: Result<Value, ApiError>) {
        self.submitting = false;
        match outcome {
            Ok(_) => {
                info!("Patient registered");
                self.form = PatientForm::default();
                self.status = SubmitStatus::Success(REGISTERED_MESSAGE.to_string());
            }
            Err(err) => {
                warn!("Patient registration failed: {err}");
                self.status = SubmitStatus::Error(err.to_string());
            }
        }
    }

    pub async fn submit(&mut self, client: &QflowClient, path: &str) {
        let Some(record) = self.begin_submit() else {
            return;
        };
        let outcome = client.post_json(path, &record).await;
        self.settle(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn_backend;
    use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    fn filled_form() -> PatientForm {
        PatientForm {
            name: "Jane Doe".into(),
            address: "Street, City, State".into(),
            age: "41".into(),
            contact_number: "+1 555 123 4567".into(),
        }
    }

    #[test]
    fn zero_or_non_numeric_age_disables_submit() {
        for age in ["0", "abc", ""] {
            let mut view = PatientRegistrationView::with_form(PatientForm {
                age: age.into(),
                ..filled_form()
            });
            assert!(!view.can_submit(), "age {age:?}");
            assert!(view.begin_submit().is_none());
            assert!(!view.is_submitting());
            assert_eq!(view.status(), &SubmitStatus::Idle);
            assert_eq!(view.gate_error(), Some(&ValidationError::InvalidAge));
        }
    }

    #[test]
    fn gate_reports_first_failing_field() {
        let mut view = PatientRegistrationView::with_form(PatientForm {
            address: " ".into(),
            contact_number: String::new(),
            ..filled_form()
        });
        assert!(view.begin_submit().is_none());
        assert_eq!(view.gate_error(), Some(&ValidationError::MissingAddress));

        view.form.address = "Street".into();
        view.form.contact_number = "555".into();
        assert!(view.begin_submit().is_some());
        assert!(view.gate_error().is_none());
    }

    #[test]
    fn submitting_disables_submit() {
        let mut view = PatientRegistrationView::with_form(filled_form());
        assert!(view.can_submit());
        assert!(view.begin_submit().is_some());
        assert!(!view.can_submit());
        assert!(view.begin_submit().is_none());
    }

    #[tokio::test]
    async fn successful_registration_clears_the_form() {
        let received = Arc::new(Mutex::new(None));
        let sink = received.clone();
        let base = spawn_backend(Router::new().route(
            "/api/patients/register",
            post(move |Json(body): Json<Value>| {
                let sink = sink.clone();
                async move {
                    *sink.lock().unwrap() = Some(body);
                    Json(json!({ "id": 1 }))
                }
            }),
        ))
        .await;

        let mut view = PatientRegistrationView::with_form(PatientForm {
            name: " Jane Doe ".into(),
            ..filled_form()
        });
        view.submit(&QflowClient::new(&base), "/api/patients/register")
            .await;

        assert_eq!(
            received.lock().unwrap().take(),
            Some(json!({
                "name": "Jane Doe",
                "address": "Street, City, State",
                "age": 41,
                "contactNumber": "+1 555 123 4567"
            }))
        );
        assert_eq!(view.form(), &PatientForm::default());
        assert_eq!(
            view.status(),
            &SubmitStatus::Success("Patient registered successfully.".into())
        );
        assert!(!view.is_submitting());
    }

    #[tokio::test]
    async fn failed_registration_keeps_the_form() {
        let base = spawn_backend(Router::new().route(
            "/api/patients/register",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR.into_response() }),
        ))
        .await;

        let mut view = PatientRegistrationView::with_form(filled_form());
        view.submit(&QflowClient::new(&base), "/api/patients/register")
            .await;

        assert_eq!(view.form(), &filled_form());
        assert_eq!(
            view.status(),
            &SubmitStatus::Error("Request failed with status 500".into())
        );
        assert!(view.can_submit());
    }

    #[test]
    fn new_attempt_clears_previous_status() {
        let mut view = PatientRegistrationView::with_form(filled_form());
        view.begin_submit();
        view.settle(Err(ApiError::from_status(
            reqwest::StatusCode::BAD_REQUEST,
            "duplicate".into(),
        )));
        assert_eq!(view.status(), &SubmitStatus::Error("duplicate".into()));

        view.form.age = "0".into();
        assert!(view.begin_submit().is_none());
        assert_eq!(view.status(), &SubmitStatus::Idle);
    }
}
