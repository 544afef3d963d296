//! HTTP transport wrapping `gloo-net` for calls to the backend.
//!
//! Every request carries the session cookie. Whatever the status, the body
//! is read as text and normalized through [`ApiResponse::from_text`].

use std::future::Future;
use std::sync::Arc;

use gloo_net::http::{Request, RequestBuilder};
use leptos::prelude::expect_context;
use rackdash_app::config::ClientConfig;
use rackdash_app::ports::{ApiResponse, ApiTransport, RawBody, TransportError};
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData, RequestCredentials, UrlSearchParams};

/// Browser implementation of the transport port.
#[derive(Debug, Clone)]
pub struct GlooTransport {
    config: Arc<ClientConfig>,
}

impl GlooTransport {
    pub fn new(config: Arc<ClientConfig>) -> Self {
        Self { config }
    }

    fn builder(&self, method: Method, uri: &str) -> RequestBuilder {
        let url = self.config.url(uri);
        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        };
        builder
            .credentials(RequestCredentials::Include)
            .header("Accept", "application/json")
    }
}

#[derive(Clone, Copy)]
enum Method {
    Get,
    Post,
    Delete,
}

/// The transport provided at the root of the app.
pub fn use_transport() -> GlooTransport {
    expect_context::<GlooTransport>()
}

fn network(err: gloo_net::Error) -> TransportError {
    TransportError::new(err.to_string())
}

fn js(err: &JsValue) -> TransportError {
    TransportError::new(format!("{err:?}"))
}

async fn send(request: Result<Request, TransportError>) -> Result<ApiResponse, TransportError> {
    let response = request?.send().await.map_err(network)?;
    let status = response.status();
    // An unreadable body is treated like an unparseable one.
    let text = response.text().await.unwrap_or_default();
    if !(200..300).contains(&status) {
        tracing::debug!(status, url = %response.url(), "request rejected");
    }
    Ok(ApiResponse::from_text(status, &text))
}

fn raw_request(builder: RequestBuilder, body: RawBody<File>) -> Result<Request, TransportError> {
    match body {
        RawBody::Form(fields) => {
            let params = UrlSearchParams::new().map_err(|err| js(&err))?;
            for (name, value) in &fields {
                params.append(name, value);
            }
            builder.body(params).map_err(network)
        }
        RawBody::File { field, file } => {
            let form = FormData::new().map_err(|err| js(&err))?;
            form.append_with_blob_and_filename(&field, &file, &file.name())
                .map_err(|err| js(&err))?;
            builder.body(form).map_err(network)
        }
    }
}

impl ApiTransport for GlooTransport {
    type File = File;

    fn get(
        &self,
        uri: &str,
        params: &[(&str, &str)],
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        let request = self
            .builder(Method::Get, uri)
            .query(params.iter().copied())
            .build()
            .map_err(network);
        send(request)
    }

    fn post_json(
        &self,
        uri: &str,
        body: &Value,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        let request = self
            .builder(Method::Post, uri)
            .json(body)
            .map_err(network);
        send(request)
    }

    fn post_raw(
        &self,
        uri: &str,
        body: RawBody<File>,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        send(raw_request(self.builder(Method::Post, uri), body))
    }

    fn delete(
        &self,
        uri: &str,
        body: Option<&Value>,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        let builder = self.builder(Method::Delete, uri);
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(network);
        send(request)
    }
}
