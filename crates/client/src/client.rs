use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::requester::ApiRequester;
use bulk_whois_core::{
    parse_response, ApiKey, ApiRequest, ApiResponse, CreateRequest, DownloadRequest,
    ErrorBuilder, OutputFormat, RecordsRequest, RequestsListRequest, ResponseCreate,
    ResponseRecords, ResponseRequests, Result,
};
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Client for the bulk WHOIS lookup API.
///
/// Every operation comes in two flavours: `*_raw` returns the response body
/// as text in the requested output format, the plain variant forces JSON and
/// parses it into a response model.
#[derive(Debug, Clone)]
pub struct Client {
    api_key: Option<ApiKey>,
    requester: ApiRequester,
}

fn parse_api_key(api_key: &str) -> Result<Option<ApiKey>> {
    if api_key.is_empty() {
        Ok(None)
    } else {
        ApiKey::new(api_key).map(Some)
    }
}

fn parse<T: ApiResponse>(body: &str) -> Result<T> {
    parse_response(body).map_err(|e| {
        debug!(root = T::ROOT_ELEMENT, error = %e, "Could not parse API response");
        e
    })
}

impl Client {
    /// Create a client for the production endpoint.
    ///
    /// An empty key is accepted here; every call then fails with
    /// [`Error::EmptyApiKey`](bulk_whois_core::Error::EmptyApiKey) until a key is set.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    pub fn with_config(api_key: &str, config: ClientConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            api_key: parse_api_key(api_key)?,
            requester: ApiRequester::new(&config)?,
        })
    }

    pub fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    pub fn set_api_key(&mut self, api_key: &str) -> Result<()> {
        self.api_key = parse_api_key(api_key)?;
        Ok(())
    }

    pub fn base_url(&self) -> &str {
        self.requester.base_url()
    }

    /// `None` restores the production endpoint. An unparsable URL is rejected
    /// and the current one kept.
    pub fn set_base_url(&mut self, base_url: Option<&str>) -> Result<()> {
        self.requester
            .set_base_url(base_url.unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn timeout(&self) -> Duration {
        self.requester.timeout()
    }

    pub fn set_timeout(&mut self, timeout: Duration) -> Result<()> {
        self.requester.set_timeout(timeout)
    }

    fn key(&self) -> Result<&ApiKey> {
        self.api_key
            .as_ref()
            .ok_or_else(|| ErrorBuilder::validation().empty_api_key())
    }

    async fn send<R: ApiRequest>(&self, request: &R) -> Result<String> {
        let api_key = self.key()?;
        self.requester.post(R::PATH, &request.payload(api_key)).await
    }

    /// Create a bulk request and return the raw response body
    pub async fn create_request_raw(&self, request: &CreateRequest) -> Result<String> {
        self.send(request).await
    }

    /// Create a bulk request for the given domains
    pub async fn create_request(&self, request: &CreateRequest) -> Result<ResponseCreate> {
        let request = request.clone().with_output_format(OutputFormat::Json);
        let body = self.create_request_raw(&request).await?;
        parse(&body)
    }

    pub async fn get_requests_raw(&self, request: &RequestsListRequest) -> Result<String> {
        self.send(request).await
    }

    /// List the bulk requests of the account
    pub async fn get_requests(&self) -> Result<ResponseRequests> {
        let body = self.get_requests_raw(&RequestsListRequest::new()).await?;
        parse(&body)
    }

    pub async fn get_records_raw(&self, request: &RecordsRequest) -> Result<String> {
        self.send(request).await
    }

    /// Fetch one page of processed WHOIS records
    pub async fn get_records(&self, request: &RecordsRequest) -> Result<ResponseRecords> {
        let request = request.clone().with_output_format(OutputFormat::Json);
        let body = self.get_records_raw(&request).await?;
        parse(&body)
    }

    /// Fetch the CSV export of a bulk request
    pub async fn download_raw(&self, request: &DownloadRequest) -> Result<String> {
        self.send(request).await
    }

    /// Write the CSV export of a bulk request to `path`.
    ///
    /// The file is created (and truncated) before the API is called, so an
    /// unwritable path fails without spending a request. The body is written
    /// byte for byte.
    pub async fn download(&self, request: &DownloadRequest, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(ErrorBuilder::validation().required("Output file name"));
        }

        let mut file = tokio::fs::File::create(path)
            .await
            .map_err(|e| ErrorBuilder::file().cannot_open(Some(e)))?;

        debug!(path = %path.display(), request_id = %request.request_id(), "Downloading results");
        let body = self
            .requester
            .post_bytes(DownloadRequest::PATH, &request.payload(self.key()?))
            .await?;

        file.write_all(&body)
            .await
            .map_err(|e| ErrorBuilder::file().cannot_write(e))?;
        file.flush()
            .await
            .map_err(|e| ErrorBuilder::file().cannot_write(e))?;

        info!(path = %path.display(), bytes = body.len(), "Download saved");
        Ok(())
    }
}
