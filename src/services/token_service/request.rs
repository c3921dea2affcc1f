use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::models::token::{extract_token, TokenValue};
use crate::utils::QflowClient;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Please enter your name.")]
    EmptyName,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Token generated, but response format was unexpected.")]
    UnexpectedShape,
}

#[derive(Debug, Default)]
pub enum TokenPhase {
    #[default]
    Idle,
    Loading,
    Issued(TokenValue),
    Failed(TokenError),
}

/// Body of the token-issuing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    pub user_name: String,
}

/// The "Get Your Token" page: one name field, one request at a time.
#[derive(Debug, Default)]
pub struct TokenRequestView {
    user_name: String,
    phase: TokenPhase,
}

impl TokenRequestView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_name(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            phase: TokenPhase::Idle,
        }
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn set_user_name(&mut self, user_name: impl Into<String>) {
        self.user_name = user_name.into();
    }

    pub fn phase(&self) -> &TokenPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, TokenPhase::Loading)
    }

    pub fn token(&self) -> Option<&TokenValue> {
        match &self.phase {
            TokenPhase::Issued(token) => Some(token),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&TokenError> {
        match &self.phase {
            TokenPhase::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.user_name.trim().is_empty()
    }

    /// Starts a submission and returns the payload to send.
    ///
    /// Returns `None` when nothing should be sent: either a request is already in
    /// flight, or the name is blank (the view then shows the validation error).
    pub fn begin_submit(&mut self) -> Option<TokenRequest> {
        if self.is_loading() {
            return None;
        }

        self.phase = TokenPhase::Idle;
        let user_name = self.user_name.trim();
        if user_name.is_empty() {
            self.phase = TokenPhase::Failed(TokenError::EmptyName);
            return None;
        }

        let request = TokenRequest {
            user_name: user_name.to_string(),
        };
        self.phase = TokenPhase::Loading;
        Some(request)
    }

    /// Applies the outcome of the call started by [`begin_submit`](Self::begin_submit).
    pub fn settle(&mut self, outcome: Result<Value, ApiError>) {
        self.phase = match outcome {
            Ok(response) => match extract_token(&response) {
                Some(token) => {
                    info!("Token {token} issued for {}", self.user_name.trim());
                    TokenPhase::Issued(token)
                }
                None => {
                    warn!("Token response had no recognizable token: {response}");
                    TokenPhase::Failed(TokenError::UnexpectedShape)
                }
            },
            Err(err) => {
                warn!("Token request failed: {err}");
                TokenPhase::Failed(TokenError::Api(err))
            }
        };
    }

    pub async fn submit(&mut self, client: &QflowClient, path: &str) {
        let Some(request) = self.begin_submit() else {
            return;
        };
        let outcome = client.post_json(path, &request).await;
        self.settle(outcome);
    }

    /// Back to a blank form.
    pub fn reset(&mut self) {
        self.user_name.clear();
        self.phase = TokenPhase::Idle;
    }
}
