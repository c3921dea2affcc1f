use std::sync::Arc;

use axum::{extract::State, response::Html, Form};

use crate::error::AppError;
use crate::models::{AppState, TokenParams};
use crate::services::TokenRequestView;
use crate::views::render_token_page;

pub async fn token_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let view = TokenRequestView::new();
    render(&state, &view)
}

pub async fn generate_token_handler(
    State(state): State<Arc<AppState>>,
    Form(params): Form<TokenParams>,
) -> Result<Html<String>, AppError> {
    let mut view = TokenRequestView::with_user_name(params.user_name);
    view.submit(&state.client, &state.config.tokens_path).await;
    render(&state, &view)
}

pub async fn reset_token_handler(
    State(state): State<Arc<AppState>>,
    Form(params): Form<TokenParams>,
) -> Result<Html<String>, AppError> {
    let mut view = TokenRequestView::with_user_name(params.user_name);
    view.reset();
    render(&state, &view)
}

fn render(state: &AppState, view: &TokenRequestView) -> Result<Html<String>, AppError> {
    render_token_page(&state.templates, view, &state.config.tokens_path).map(Html)
}
