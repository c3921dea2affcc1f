use std::sync::Arc;

use axum::{extract::State, response::Html, Form};

use crate::error::AppError;
use crate::models::{AppState, PatientForm};
use crate::services::PatientRegistrationView;
use crate::views::render_patient_page;

pub async fn patient_register_page(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    render(&state, &PatientRegistrationView::new())
}

pub async fn patient_register_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PatientForm>,
) -> Result<Html<String>, AppError> {
    let mut view = PatientRegistrationView::with_form(form);
    // A form that fails the gate is simply rendered again with the button disabled.
    view.submit(&state.client, &state.config.patient_register_path)
        .await;
    render(&state, &view)
}

fn render(state: &AppState, view: &PatientRegistrationView) -> Result<Html<String>, AppError> {
    render_patient_page(&state.templates, view, &state.config.patient_register_path).map(Html)
}
