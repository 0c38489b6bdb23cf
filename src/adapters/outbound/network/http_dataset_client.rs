use crate::eol_analysis::domain::Dataset;
use crate::ports::outbound::DatasetRepository;
use crate::shared::error::ReportError;
use crate::shared::security::MAX_DATASET_SIZE;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HttpDatasetClient adapter for fetching the dataset document over HTTP(S)
///
/// One GET per load, no retries. Non-success statuses and oversized bodies
/// are reported as fetch errors. The size cap holds for chunked responses
/// too: the body is read chunk by chunk and dropped once it grows past it.
pub struct HttpDatasetClient {
    client: reqwest::Client,
    url: String,
    max_body_size: u64,
}

impl HttpDatasetClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let user_agent = format!("eol-report/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
            max_body_size: MAX_DATASET_SIZE,
        })
    }

    pub fn with_max_body_size(mut self, max_body_size: u64) -> Self {
        self.max_body_size = max_body_size;
        self
    }

    fn too_large_error(&self, size: u64) -> ReportError {
        self.fetch_error(format!(
            "Response is too large ({} bytes). Maximum allowed size is {} bytes.",
            size, self.max_body_size
        ))
    }

    fn fetch_error(&self, details: impl Into<String>) -> ReportError {
        ReportError::DatasetFetchError {
            url: self.url.clone(),
            details: details.into(),
        }
    }

    async fn fetch_body(&self) -> Result<String> {
        let mut response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.fetch_error(format!("HTTP status {}", status)).into());
        }

        if let Some(length) = response.content_length() {
            if length > self.max_body_size {
                return Err(self.too_large_error(length).into());
            }
        }

        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| self.fetch_error(e.to_string()))?
        {
            let size = (body.len() + chunk.len()) as u64;
            if size > self.max_body_size {
                return Err(self.too_large_error(size).into());
            }
            body.extend_from_slice(&chunk);
        }

        String::from_utf8(body).map_err(|e| {
            ReportError::DatasetParseError {
                location: self.url.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl DatasetRepository for HttpDatasetClient {
    async fn load_dataset(&self) -> Result<Dataset> {
        let body = self.fetch_body().await?;

        Dataset::from_json(&body).map_err(|e| {
            ReportError::DatasetParseError {
                location: self.url.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}
