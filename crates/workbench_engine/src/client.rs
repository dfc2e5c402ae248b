use std::time::Duration;

use reqwest::multipart::{Form, Part};
use url::Url;

use crate::types::{
    AnalyzeResponse, ClientError, ContractPayload, IngestAck, InsightPayload, InsightsResponse,
};

/// Connection settings for the analytics service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_address: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_address: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Thin adapter over the remote analytics service: one method per endpoint,
/// one request/response exchange each, no retries, no state beyond the
/// configured base address.
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    base: Url,
    embed_url: String,
    http: reqwest::Client,
}

impl AnalyticsClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let base = Url::parse(&config.base_address)
            .map_err(|err| ClientError::InvalidBaseAddress(err.to_string()))?;
        let mut embed = base
            .join("/report")
            .map_err(|err| ClientError::InvalidBaseAddress(err.to_string()))?;
        embed.set_query(Some("format=html"));
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| ClientError::Network(err.to_string()))?;
        Ok(Self {
            base,
            embed_url: embed.into(),
            http,
        })
    }

    /// Readiness probe; carries no payload either way.
    pub async fn health(&self) -> Result<(), ClientError> {
        let response = self
            .http
            .get(self.endpoint("/health")?)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(&response)?;
        Ok(())
    }

    /// Asks the service to load its built-in sample dataset. Pipeline state
    /// lives server-side; the ack is informational only.
    pub async fn ingest_sample(&self) -> Result<IngestAck, ClientError> {
        let response = self
            .http
            .post(self.endpoint("/ingest/sample")?)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(&response)?;
        Ok(parse_ingest_ack(response).await)
    }

    /// Uploads a dataset as a multipart body. The service is the sole
    /// authority on acceptable formats; the bytes go over the wire untouched.
    pub async fn ingest_file(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<IngestAck, ClientError> {
        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("file", part);
        let response = self
            .http
            .post(self.endpoint("/ingest")?)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(&response)?;
        Ok(parse_ingest_ack(response).await)
    }

    /// Requests contract validation of the currently ingested dataset.
    pub async fn analyze(&self) -> Result<ContractPayload, ClientError> {
        let response = self
            .http
            .post(self.endpoint("/analyze")?)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(&response)?;
        let body = response.text().await.map_err(map_reqwest_error)?;
        let parsed: AnalyzeResponse = serde_json::from_str(&body).map_err(|err| {
            ClientError::Malformed {
                detail: err.to_string(),
            }
        })?;
        Ok(parsed.contract)
    }

    /// Fetches the current insight list in service-provided order.
    pub async fn insights(&self) -> Result<Vec<InsightPayload>, ClientError> {
        let response = self
            .http
            .get(self.endpoint("/insights")?)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(&response)?;
        let body = response.text().await.map_err(map_reqwest_error)?;
        let parsed: InsightsResponse = serde_json::from_str(&body).map_err(|err| {
            ClientError::Malformed {
                detail: err.to_string(),
            }
        })?;
        Ok(parsed.insights)
    }

    /// Fetches the textual markdown report body. An empty body is valid.
    pub async fn report_markdown(&self) -> Result<String, ClientError> {
        let response = self
            .http
            .get(self.endpoint("/report")?)
            .query(&[("format", "md")])
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(&response)?;
        response.text().await.map_err(map_reqwest_error)
    }

    /// Reference for direct embedding of the html report; the embedding
    /// surface fetches the document itself.
    pub fn report_embed_url(&self) -> &str {
        &self.embed_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base
            .join(path)
            .map_err(|err| ClientError::InvalidBaseAddress(err.to_string()))
    }
}

fn check_status(response: &reqwest::Response) -> Result<(), ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ClientError::Http {
            status: status.as_u16(),
        })
    }
}

// Ingest responses need no body; a present one is parsed leniently so the
// shell can log row/column counts.
async fn parse_ingest_ack(response: reqwest::Response) -> IngestAck {
    match response.text().await {
        Ok(body) if !body.trim().is_empty() => serde_json::from_str(&body).unwrap_or_default(),
        _ => IngestAck::default(),
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        return ClientError::Timeout;
    }
    ClientError::Network(err.to_string())
}
