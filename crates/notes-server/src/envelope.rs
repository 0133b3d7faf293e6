//! The response envelope and its builder.
//!
//! Every handler answers with `{statusCode, headers, body}`, where `body` is a
//! JSON-encoded string. Success bodies are notes, arrays of notes, or
//! `{message, noteId?}`; error bodies are always `{error}`.

use std::collections::BTreeMap;

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Body returned when the envelope itself cannot be encoded.
const FALLBACK_ERROR_BODY: &str = r#"{"error":"Internal Server Error"}"#;

/// The uniform handler response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    /// UTF-8 JSON payload.
    pub body: String,
}

impl Envelope {
    /// Decode the body as JSON.
    pub fn json_body(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(&self.body)
    }
}

/// `{error}` body.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

/// `{message, noteId?}` body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageBody<'a> {
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_id: Option<&'a str>,
}

/// Builds envelopes with a fixed header set.
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    headers: BTreeMap<String, String>,
}

impl ResponseBuilder {
    /// Create a builder. With `cors` set, every envelope carries the
    /// permissive cross-origin headers.
    pub fn new(cors: bool) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        if cors {
            headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());
        }
        Self { headers }
    }

    /// Envelope with `payload` encoded as the body.
    pub fn json<T: Serialize + ?Sized>(&self, status: StatusCode, payload: &T) -> Envelope {
        match serde_json::to_string(payload) {
            Ok(body) => self.raw(status, body),
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode response body");
                self.raw(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    FALLBACK_ERROR_BODY.to_string(),
                )
            }
        }
    }

    /// `{message}` envelope.
    pub fn message(&self, status: StatusCode, message: &str) -> Envelope {
        self.json(
            status,
            &MessageBody {
                message,
                note_id: None,
            },
        )
    }

    /// `{message, noteId}` envelope.
    pub fn message_with_id(&self, status: StatusCode, message: &str, note_id: &str) -> Envelope {
        self.json(
            status,
            &MessageBody {
                message,
                note_id: Some(note_id),
            },
        )
    }

    /// `{error}` envelope.
    pub fn error(&self, status: StatusCode, error: &str) -> Envelope {
        self.json(status, &ErrorBody { error })
    }

    fn raw(&self, status: StatusCode, body: String) -> Envelope {
        Envelope {
            status_code: status.as_u16(),
            headers: self.headers.clone(),
            body,
        }
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;

        let headers = response.headers_mut();
        for (name, value) in &self.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!(header = %name, "Dropping invalid envelope header"),
            }
        }

        response
    }
}
