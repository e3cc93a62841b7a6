//! NLU backend adapters: the HTTP client and a mock for tests.

mod http_client;
mod mock_client;

pub use http_client::HttpNluClient;
pub use mock_client::{MockError, MockNluClient};
