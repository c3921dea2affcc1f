// src/models/mod.rs

pub mod api;
pub mod app;
pub mod patient;
pub mod token;

pub use api::TokenParams;
pub use app::AppState;
pub use patient::PatientForm;
