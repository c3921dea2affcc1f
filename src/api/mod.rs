// src/api/mod.rs

pub mod handler;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::models::AppState;
use handler::{
    generate_token_handler, health_handler, patient_register_handler, patient_register_page,
    reset_token_handler, token_page,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(token_page))
        .route("/token", post(generate_token_handler))
        .route("/token/reset", post(reset_token_handler))
        .route(
            "/patient/register",
            get(patient_register_page).post(patient_register_handler),
        )
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
