pub mod health;
pub mod patient;
pub mod token;

pub use health::health_handler;
pub use patient::{patient_register_handler, patient_register_page};
pub use token::{generate_token_handler, reset_token_handler, token_page};
