//! Request builders and the wire payload they produce
//!
//! Builders collect raw caller input and validate all of it in `build()`,
//! so a request value that exists is always valid. `from_params` does the
//! same for loosely-typed JSON parameter maps.

use crate::error::{ErrorBuilder, Result};
use crate::traits::ApiRequest;
use crate::types::{ApiKey, OutputFormat, RequestId, SearchType};
use crate::validation::{
    validate_domains, validate_domains_value, validate_max_records, validate_max_records_value,
    validate_output_format, validate_output_format_value, validate_request_id,
    validate_request_id_value, validate_search_type, validate_search_type_value,
    validate_start_index, validate_start_index_value,
};
use serde::Serialize;
use serde_json::{Map, Value};

pub const PATH_CREATE: &str = "/bulkWhois";
pub const PATH_DOWNLOAD: &str = "/download";
pub const PATH_REQUESTS: &str = "/getUserRequests";
pub const PATH_RECORDS: &str = "/getRecords";

/// JSON body POSTed to the API. Absent optional fields are left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub api_key: ApiKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_type: Option<SearchType>,
}

impl Payload {
    pub fn new(api_key: &ApiKey) -> Self {
        Self {
            api_key: api_key.clone(),
            output_format: None,
            domains: None,
            request_id: None,
            max_records: None,
            start_index: None,
            search_type: None,
        }
    }
}

fn params_object(params: &Value) -> Result<&Map<String, Value>> {
    params
        .as_object()
        .ok_or_else(|| ErrorBuilder::validation().invalid("Expected a mapping of parameters"))
}

// `response_format` is the legacy name of `output_format` and wins when both are given
fn output_format_param(params: &Map<String, Value>) -> Result<OutputFormat> {
    params
        .get("response_format")
        .or_else(|| params.get("output_format"))
        .map(validate_output_format_value)
        .transpose()
        .map(Option::unwrap_or_default)
}

fn output_format_arg(format: Option<String>) -> Result<OutputFormat> {
    format
        .as_deref()
        .map(validate_output_format)
        .transpose()
        .map(Option::unwrap_or_default)
}

fn required_request_id(value: Option<RequestId>) -> Result<RequestId> {
    value.ok_or_else(|| ErrorBuilder::validation().required("Request ID"))
}

/// Submit a list of domains for processing
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRequest {
    domains: Vec<String>,
    output_format: OutputFormat,
}

impl CreateRequest {
    pub fn builder() -> CreateRequestBuilder {
        CreateRequestBuilder::default()
    }

    pub fn from_params(params: &Value) -> Result<Self> {
        let params = params_object(params)?;
        let domains = params
            .get("domains")
            .map(validate_domains_value)
            .transpose()?
            .ok_or_else(|| ErrorBuilder::validation().required("Domain names"))?;

        Ok(Self {
            domains,
            output_format: output_format_param(params)?,
        })
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }
}

impl ApiRequest for CreateRequest {
    const PATH: &'static str = PATH_CREATE;

    fn payload(&self, api_key: &ApiKey) -> Payload {
        Payload {
            output_format: Some(self.output_format),
            domains: Some(self.domains.clone()),
            ..Payload::new(api_key)
        }
    }
}

#[derive(Debug, Default)]
pub struct CreateRequestBuilder {
    domains: Option<Vec<String>>,
    output_format: Option<String>,
}

impl CreateRequestBuilder {
    pub fn domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domains = Some(domains.into_iter().map(Into::into).collect());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domains.get_or_insert_with(Vec::new).push(domain.into());
        self
    }

    pub fn output_format(mut self, output_format: impl Into<String>) -> Self {
        self.output_format = Some(output_format.into());
        self
    }

    /// Legacy name for [`output_format`](Self::output_format)
    pub fn response_format(self, response_format: impl Into<String>) -> Self {
        self.output_format(response_format)
    }

    pub fn build(self) -> Result<CreateRequest> {
        let domains = match self.domains {
            Some(domains) => validate_domains(Some(domains.as_slice()))?,
            None => return Err(ErrorBuilder::validation().required("Domain names")),
        };

        Ok(CreateRequest {
            domains,
            output_format: output_format_arg(self.output_format)?,
        })
    }
}

/// Fetch one page of parsed WHOIS records of a bulk request
#[derive(Debug, Clone, PartialEq)]
pub struct RecordsRequest {
    request_id: RequestId,
    max_records: i64,
    start_index: Option<i64>,
    output_format: OutputFormat,
}

impl RecordsRequest {
    pub fn builder() -> RecordsRequestBuilder {
        RecordsRequestBuilder::default()
    }

    pub fn from_params(params: &Value) -> Result<Self> {
        let params = params_object(params)?;
        let request_id = required_request_id(
            params
                .get("request_id")
                .map(validate_request_id_value)
                .transpose()?,
        )?;
        let max_records = params
            .get("max_records")
            .map(validate_max_records_value)
            .transpose()?
            .ok_or_else(|| ErrorBuilder::validation().required("Max record number"))?;
        let start_index = params
            .get("start_index")
            .map(validate_start_index_value)
            .transpose()?;

        Ok(Self {
            request_id,
            max_records,
            start_index,
            output_format: output_format_param(params)?,
        })
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    pub fn max_records(&self) -> i64 {
        self.max_records
    }

    pub fn start_index(&self) -> Option<i64> {
        self.start_index
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    /// Request for the page following this one, given how many records it returned
    pub fn next_page(&self, returned: usize) -> Self {
        let start = self.start_index.unwrap_or(1);
        Self {
            start_index: Some(start.saturating_add(returned as i64)),
            ..self.clone()
        }
    }
}

impl ApiRequest for RecordsRequest {
    const PATH: &'static str = PATH_RECORDS;

    fn payload(&self, api_key: &ApiKey) -> Payload {
        Payload {
            output_format: Some(self.output_format),
            request_id: Some(self.request_id.clone()),
            max_records: Some(self.max_records),
            start_index: self.start_index,
            ..Payload::new(api_key)
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordsRequestBuilder {
    request_id: Option<String>,
    max_records: Option<i64>,
    start_index: Option<i64>,
    output_format: Option<String>,
}

impl RecordsRequestBuilder {
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn max_records(mut self, max_records: i64) -> Self {
        self.max_records = Some(max_records);
        self
    }

    pub fn start_index(mut self, start_index: i64) -> Self {
        self.start_index = Some(start_index);
        self
    }

    pub fn output_format(mut self, output_format: impl Into<String>) -> Self {
        self.output_format = Some(output_format.into());
        self
    }

    /// Legacy name for [`output_format`](Self::output_format)
    pub fn response_format(self, response_format: impl Into<String>) -> Self {
        self.output_format(response_format)
    }

    pub fn build(self) -> Result<RecordsRequest> {
        let request_id = required_request_id(
            self.request_id
                .as_deref()
                .map(validate_request_id)
                .transpose()?,
        )?;
        let max_records = self
            .max_records
            .map(validate_max_records)
            .transpose()?
            .ok_or_else(|| ErrorBuilder::validation().required("Max record number"))?;
        let start_index = self.start_index.map(validate_start_index).transpose()?;

        Ok(RecordsRequest {
            request_id,
            max_records,
            start_index,
            output_format: output_format_arg(self.output_format)?,
        })
    }
}

/// List the caller's bulk requests
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestsListRequest {
    output_format: OutputFormat,
}

impl RequestsListRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_params(params: &Value) -> Result<Self> {
        let params = params_object(params)?;
        Ok(Self {
            output_format: output_format_param(params)?,
        })
    }

    /// Request in an output format given as caller input
    pub fn from_format(format: &str) -> Result<Self> {
        Ok(Self {
            output_format: validate_output_format(format)?,
        })
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }
}

impl ApiRequest for RequestsListRequest {
    const PATH: &'static str = PATH_REQUESTS;

    fn payload(&self, api_key: &ApiKey) -> Payload {
        Payload {
            output_format: Some(self.output_format),
            ..Payload::new(api_key)
        }
    }
}

/// Download the CSV export of a bulk request
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadRequest {
    request_id: RequestId,
    search_type: Option<SearchType>,
}

impl DownloadRequest {
    pub fn builder() -> DownloadRequestBuilder {
        DownloadRequestBuilder::default()
    }

    pub fn from_params(params: &Value) -> Result<Self> {
        let params = params_object(params)?;
        let request_id = required_request_id(
            params
                .get("request_id")
                .map(validate_request_id_value)
                .transpose()?,
        )?;
        let search_type = params
            .get("search_type")
            .map(validate_search_type_value)
            .transpose()?;

        Ok(Self {
            request_id,
            search_type,
        })
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    pub fn search_type(&self) -> Option<SearchType> {
        self.search_type
    }
}

impl ApiRequest for DownloadRequest {
    const PATH: &'static str = PATH_DOWNLOAD;

    fn payload(&self, api_key: &ApiKey) -> Payload {
        Payload {
            request_id: Some(self.request_id.clone()),
            search_type: self.search_type,
            ..Payload::new(api_key)
        }
    }
}

#[derive(Debug, Default)]
pub struct DownloadRequestBuilder {
    request_id: Option<String>,
    search_type: Option<String>,
}

impl DownloadRequestBuilder {
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn search_type(mut self, search_type: impl Into<String>) -> Self {
        self.search_type = Some(search_type.into());
        self
    }

    pub fn build(self) -> Result<DownloadRequest> {
        let request_id = required_request_id(
            self.request_id
                .as_deref()
                .map(validate_request_id)
                .transpose()?,
        )?;
        let search_type = self
            .search_type
            .as_deref()
            .map(validate_search_type)
            .transpose()?;

        Ok(DownloadRequest {
            request_id,
            search_type,
        })
    }
}
