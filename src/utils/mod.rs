pub mod http_client;
pub mod log_utils;
pub mod url_utils;

pub use http_client::QflowClient;
pub use log_utils::init_tracing;
pub use url_utils::resolve_url;
