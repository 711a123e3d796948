pub mod api_key;
pub mod format;
pub mod request_id;

pub use api_key::ApiKey;
pub use format::{OutputFormat, SearchType};
pub use request_id::RequestId;
