use serde::Serialize;
use tera::{Context, Tera};

use crate::error::AppError;
use crate::services::TokenRequestView;

#[derive(Serialize)]
struct TokenPage<'a> {
    user_name: &'a str,
    display_name: &'a str,
    has_token: bool,
    token: String,
    error: Option<String>,
    can_submit: bool,
    loading: bool,
    endpoint: &'a str,
}

pub fn render_token_page(
    tera: &Tera,
    view: &TokenRequestView,
    endpoint: &str,
) -> Result<String, AppError> {
    let page = TokenPage {
        user_name: view.user_name(),
        display_name: view.user_name().trim(),
        has_token: view.token().is_some(),
        token: view.token().map(ToString::to_string).unwrap_or_default(),
        error: view.error().map(ToString::to_string),
        can_submit: view.can_submit(),
        loading: view.is_loading(),
        endpoint,
    };
    Ok(tera.render("token.html", &Context::from_serialize(&page)?)?)
}
