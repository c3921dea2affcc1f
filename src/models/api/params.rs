use serde::Deserialize;

/// Form body of `POST /token` and `POST /token/reset`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenParams {
    pub user_name: String,
}
