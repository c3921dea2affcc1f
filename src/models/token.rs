use std::fmt;

use serde_json::{Number, Value};

/// Keys probed, in this order, when the backend answers with an object.
///
/// The order is a compatibility contract with existing backends; do not reorder or extend.
pub const CANDIDATE_KEYS: [&str; 5] = ["tokenNumber", "token", "number", "id", "value"];

/// A queue ticket identifier as issued by the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Text(String),
    Number(Number),
}

impl TokenValue {
    fn from_scalar(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(TokenValue::Text(text.clone())),
            Value::Number(number) => Some(TokenValue::Number(number.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(text) => f.write_str(text),
            TokenValue::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Finds the token in whatever shape the backend returned.
///
/// A bare string or number is the token itself. An object is searched through
/// [`CANDIDATE_KEYS`] and the first string or number wins. Anything else has no token.
pub fn extract_token(data: &Value) -> Option<TokenValue> {
    match data {
        Value::String(_) | Value::Number(_) => TokenValue::from_scalar(data),
        Value::Object(record) => CANDIDATE_KEYS
            .iter()
            .filter_map(|key| record.get(*key))
            .find_map(TokenValue::from_scalar),
        _ => None,
    }
}
