//! HTTP client for the BUFU file server control endpoints.

use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::ClientError;

/// BUFU file server client.
#[derive(Debug, Clone)]
pub struct FileServerClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Base URL of the file server, without trailing slash.
    base_url: String,
    /// Run number sent with popfile and restart requests.
    runnumber: String,
}

/// One completed HTTP exchange: the status the server answered with and the
/// raw body text. The body is never interpreted by this crate.
#[derive(Debug, Clone)]
pub struct ServerReply {
    /// HTTP status of the response.
    pub status: reqwest::StatusCode,
    /// Raw response body.
    pub body: String,
}

impl ServerReply {
    /// Whether the server answered with a 2xx status.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl FileServerClient {
    /// Create a new file server client from config.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.http_timeout_ms))
            .connect_timeout(std::time::Duration::from_millis(
                config.http_timeout_ms.min(5_000),
            ))
            .tcp_nodelay(true)
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url: config.base_url().to_string(),
            runnumber: config.runnumber.clone(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured run number.
    pub fn runnumber(&self) -> &str {
        &self.runnumber
    }

    /// Pop the next available run file.
    ///
    /// The server renames the file's index entry as a side effect, so a
    /// 200 reply means the file now belongs to this caller.
    #[instrument(skip(self), fields(runnumber = %self.runnumber))]
    pub async fn popfile(&self) -> Result<ServerReply, ClientError> {
        self.fetch("/popfile", &[("runnumber", self.runnumber.as_str())])
            .await
    }

    /// Restart the run directory observer for the configured run.
    #[instrument(skip(self), fields(runnumber = %self.runnumber))]
    pub async fn restart(&self) -> Result<ServerReply, ClientError> {
        self.fetch("/restart", &[("runnumber", self.runnumber.as_str())])
            .await
    }

    /// Fetch statistics for all runs the server knows about.
    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<ServerReply, ClientError> {
        self.fetch("/stats", &[]).await
    }

    /// Perform one GET against the file server and capture the reply as-is.
    ///
    /// No status-code checking happens here: a 4xx or 5xx answer is still a
    /// completed exchange and is handed back to the caller verbatim.
    async fn fetch(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<ServerReply, ClientError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(%status, body_len = body.len(), "exchange completed");

        Ok(ServerReply { status, body })
    }
}
