use serde::Serialize;
use tera::{Context, Tera};

use crate::error::AppError;
use crate::models::patient::PatientForm;
use crate::services::{PatientRegistrationView, SubmitStatus};

#[derive(Serialize)]
struct PatientPage<'a> {
    form: &'a PatientForm,
    status_kind: &'static str,
    status_message: &'a str,
    gate_message: Option<String>,
    can_submit: bool,
    submitting: bool,
    endpoint: &'a str,
}

pub fn render_patient_page(
    tera: &Tera,
    view: &PatientRegistrationView,
    endpoint: &str,
) -> Result<String, AppError> {
    let (status_kind, status_message) = match view.status() {
        SubmitStatus::Idle => ("idle", ""),
        SubmitStatus::Success(message) => ("success", message.as_str()),
        SubmitStatus::Error(message) => ("error", message.as_str()),
    };

    let page = PatientPage {
        form: view.form(),
        status_kind,
        status_message,
        gate_message: view.gate_error().map(ToString::to_string),
        can_submit: view.can_submit(),
        submitting: view.is_submitting(),
        endpoint,
    };
    Ok(tera.render("patient_register.html", &Context::from_serialize(&page)?)?)
}
