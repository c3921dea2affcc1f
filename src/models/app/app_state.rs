use tera::Tera;

use crate::config::Config;
use crate::utils::QflowClient;

pub struct AppState {
    pub client: QflowClient,
    pub config: Config,
    pub templates: Tera,
}
