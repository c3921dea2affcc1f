pub mod register;

pub use register::{PatientRegistrationView, SubmitStatus};
