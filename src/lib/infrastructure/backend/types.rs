//! Backend types - replies and errors

use thiserror::Error;

/// Decoded answer of the chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatReply {
    /// `status` was `"success"`; carries the response text
    Success(String),
    /// Any other status; carries the error detail
    Failure(String),
}

/// Decoded answer of the reset endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetReply {
    Success,
    /// Non-success status as reported by the backend
    Failure(String),
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("network error calling {endpoint}: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} returned an invalid response: {reason}")]
    Decode { endpoint: String, reason: String },
}

impl BackendError {
    pub fn network(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            endpoint: endpoint.into(),
            source,
        }
    }

    pub fn decode(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    /// User-friendly error message in Indonesian
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Network { endpoint, source } => {
                if source.is_connect() {
                    format!("Tidak dapat terhubung ke '{endpoint}'.")
                } else if source.is_timeout() {
                    format!("Permintaan ke '{endpoint}' melebihi batas waktu.")
                } else {
                    format!("Kesalahan jaringan pada '{endpoint}'.")
                }
            }
            BackendError::Decode { endpoint, .. } => {
                format!("Respons dari '{endpoint}' tidak valid.")
            }
        }
    }
}
