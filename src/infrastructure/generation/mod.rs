//! Generation backend implementations

mod anthropic;
pub mod http_client;

pub use anthropic::AnthropicGenerator;
pub use http_client::{HttpClient, HttpClientTrait};
