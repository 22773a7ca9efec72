//! HTTP backend implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::traits::ChatBackend;
use super::types::{BackendError, ChatReply, ResetReply};
use crate::constants::{CHAT_PATH, RESET_PATH, SUCCESS_STATUS};

/// Talks to the chat backend over HTTP.
#[derive(Clone)]
pub struct HttpBackend {
    base_url: String,
    http: Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build URL from base URL and path
    pub fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// POST with a JSON content type and decode the JSON body.
    ///
    /// The HTTP status is not checked: the backend reports application
    /// errors as a JSON body with a 5xx status, and those must reach the
    /// caller as decoded replies.
    async fn post<Req, Res>(&self, path: &str, body: Option<&Req>) -> Result<Res, BackendError>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let url = self.build_url(path);
        let mut request = self
            .http
            .post(&url)
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BackendError::network(path, e))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| BackendError::network(path, e))?;
        debug!(path, status = status.as_u16(), len = bytes.len(), "Received backend response");

        serde_json::from_slice(&bytes).map_err(|e| BackendError::decode(path, e.to_string()))
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn send_message(&self, message: &str) -> Result<ChatReply, BackendError> {
        info!(
            base_url = self.base_url.as_str(),
            chars = message.chars().count(),
            "Sending chat message"
        );
        let body: ChatResponseBody = self.post(CHAT_PATH, Some(&ChatRequestBody { message })).await?;

        if body.status == SUCCESS_STATUS {
            let response = body
                .response
                .ok_or_else(|| BackendError::decode(CHAT_PATH, "missing response"))?;
            Ok(ChatReply::Success(response))
        } else {
            Ok(ChatReply::Failure(body.error.unwrap_or(body.status)))
        }
    }

    async fn reset(&self) -> Result<ResetReply, BackendError> {
        info!(base_url = self.base_url.as_str(), "Requesting conversation reset");
        let body: ResetResponseBody = self.post::<(), _>(RESET_PATH, None).await?;

        if body.status == SUCCESS_STATUS {
            Ok(ResetReply::Success)
        } else {
            Ok(ResetReply::Failure(body.status))
        }
    }
}

#[derive(Serialize)]
struct ChatRequestBody<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatResponseBody {
    status: String,
    response: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct ResetResponseBody {
    status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_without_duplicate_slashes() {
        let backend = HttpBackend::new("http://127.0.0.1:5000/");
        assert_eq!(backend.build_url("/api/chat"), "http://127.0.0.1:5000/api/chat");

        let backend = HttpBackend::new("http://host/prefix");
        assert_eq!(backend.build_url("api/reset"), "http://host/prefix/api/reset");
    }
}
