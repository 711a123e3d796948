pub mod error;
pub mod models;
pub mod parser;
pub mod traits;
pub mod types;
pub mod validation;

pub use error::{
    Error, ErrorBuilder, ErrorCategory, ResponseError, Result, ACCESS_RESTRICTED_CODE,
    ACCESS_RESTRICTED_MESSAGE,
};

// Re-export commonly used models for convenience
pub use models::{
    request::{
        CreateRequest, CreateRequestBuilder, DownloadRequest, DownloadRequestBuilder, Payload,
        RecordsRequest, RecordsRequestBuilder, RequestsListRequest,
    },
    response::{
        BulkRequest, BulkWhoisRecord, ErrorMessage, ResponseCreate, ResponseRecords,
        ResponseRequests, WHOIS_RECORD_STATUS_UNKNOWN,
    },
    whois::{
        Audit, Contact, CustomFields, NameServers, RegistryData, WhoisData, WhoisRecord,
    },
};

pub use parser::parse_response;
pub use traits::{ApiRequest, ApiResponse};
pub use types::{ApiKey, OutputFormat, RequestId, SearchType};
