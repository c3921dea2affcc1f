use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What the registration endpoint receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub name: String,
    pub address: String,
    pub age: u32,
    pub contact_number: String,
}

/// Raw registration form input, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientForm {
    pub name: String,
    pub address: String,
    pub age: String,
    pub contact_number: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required.")]
    MissingName,

    #[error("Address is required.")]
    MissingAddress,

    #[error("Age must be a whole number greater than zero.")]
    InvalidAge,

    #[error("Contact number is required.")]
    MissingContactNumber,
}

impl PatientForm {
    /// Checks every field and builds the trimmed record to submit.
    pub fn validate(&self) -> Result<PatientRecord, ValidationError> {
        let name = non_blank(&self.name).ok_or(ValidationError::MissingName)?;
        let address = non_blank(&self.address).ok_or(ValidationError::MissingAddress)?;
        let age = parse_age(&self.age).ok_or(ValidationError::InvalidAge)?;
        let contact_number =
            non_blank(&self.contact_number).ok_or(ValidationError::MissingContactNumber)?;

        Ok(PatientRecord {
            name,
            address,
            age,
            contact_number,
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// Accepts "42" and "42.0"; rejects zero, negatives, fractions, NaN and infinities.
fn parse_age(raw: &str) -> Option<u32> {
    let age: f64 = raw.trim().parse().ok()?;
    if !age.is_finite() || age <= 0.0 || age.fract() != 0.0 || age > f64::from(u32::MAX) {
        return None;
    }
    Some(age as u32)
}
