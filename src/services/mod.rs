pub mod patient_service;
pub mod token_service;

pub use patient_service::{PatientRegistrationView, SubmitStatus};
pub use token_service::TokenRequestView;
