use crate::error::HandlerError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// HTTP-style result consumed by the platform's HTTP integration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    /// JSON text.
    pub body: String,
}

impl Response {
    /// Builds a response whose body is `payload` encoded as JSON.
    pub fn json<T: Serialize>(status_code: u16, payload: &T) -> Result<Self, HandlerError> {
        if !(100..=599).contains(&status_code) {
            return Err(HandlerError::InvalidStatus(status_code));
        }
        let body = serde_json::to_string(payload)?;
        Ok(Response { status_code, body })
    }

    pub fn body_json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Message {
            message: message.into(),
        }
    }
}
