//! Transport port — the HTTP client wrapper the services talk through.
//!
//! Every call resolves to an [`ApiResponse`] envelope whatever the status
//! code; only a network-level failure produces a [`TransportError`]. A body
//! that is not JSON never reaches the caller as an error: it becomes `{}`.

use std::future::Future;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Normalized response: HTTP status plus the parsed JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: Value,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status_code: u16, body: Value) -> Self {
        Self { status_code, body }
    }

    /// Build a response from raw body text. Text that does not parse as JSON
    /// (including an empty body) yields an empty object.
    #[must_use]
    pub fn from_text(status_code: u16, text: &str) -> Self {
        let body = serde_json::from_str(text).unwrap_or_else(|_| empty_body());
        Self { status_code, body }
    }

    /// Whether the status is 2xx.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// The server's `message` field, when the body is an object carrying one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.body
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
    }

    /// Decode the body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the body has the wrong shape.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.body)
    }
}

/// The body every unparseable response degrades to.
#[must_use]
pub fn empty_body() -> Value {
    Value::Object(Map::new())
}

/// The request never produced a response (DNS, connection refused, CORS…).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("network error: {message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A non-JSON request body.
///
/// `F` is the adapter's file handle (a browser `File` in the dashboard).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawBody<F> {
    /// Form-encoded fields, as sent by the login form.
    Form(Vec<(String, String)>),
    /// A multipart body carrying one file under `field`.
    File { field: String, file: F },
}

/// Issues requests against the backend, relative to its base URL, with
/// credentials (cookies) attached.
pub trait ApiTransport {
    /// File handle accepted by [`RawBody::File`].
    type File;

    /// `GET uri?params`.
    fn get(
        &self,
        uri: &str,
        params: &[(&str, &str)],
    ) -> impl Future<Output = Result<ApiResponse, TransportError>>;

    /// `POST uri` with a JSON body.
    fn post_json(
        &self,
        uri: &str,
        body: &Value,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>>;

    /// `POST uri` with a form or file body.
    fn post_raw(
        &self,
        uri: &str,
        body: RawBody<Self::File>,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>>;

    /// `DELETE uri`, optionally with a JSON body.
    fn delete(
        &self,
        uri: &str,
        body: Option<&Value>,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>>;
}

impl<T: ApiTransport> ApiTransport for Rc<T> {
    type File = T::File;

    fn get(
        &self,
        uri: &str,
        params: &[(&str, &str)],
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        (**self).get(uri, params)
    }

    fn post_json(
        &self,
        uri: &str,
        body: &Value,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        (**self).post_json(uri, body)
    }

    fn post_raw(
        &self,
        uri: &str,
        body: RawBody<Self::File>,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        (**self).post_raw(uri, body)
    }

    fn delete(
        &self,
        uri: &str,
        body: Option<&Value>,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        (**self).delete(uri, body)
    }
}
