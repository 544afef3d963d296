//! In-memory transport used by the service tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;

use serde_json::Value;

use crate::ports::{ApiResponse, ApiTransport, RawBody, TransportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// A request as seen by the fake.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: Method,
    pub uri: String,
    pub json: Option<Value>,
    pub raw: Option<RawBody<String>>,
}

/// Answers from a route table; unknown routes get `404 {}`.
///
/// Files are plain file names.
#[derive(Default)]
pub struct FakeTransport {
    routes: RefCell<HashMap<(Method, String), Result<ApiResponse, TransportError>>>,
    recorded: RefCell<Vec<Recorded>>,
}

impl FakeTransport {
    pub fn route(self, method: Method, uri: &str, status: u16, body: Value) -> Self {
        self.routes
            .borrow_mut()
            .insert((method, uri.to_string()), Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn unreachable(self, method: Method, uri: &str) -> Self {
        self.routes.borrow_mut().insert(
            (method, uri.to_string()),
            Err(TransportError::new("connection refused")),
        );
        self
    }

    pub fn recorded(&self) -> Vec<Recorded> {
        self.recorded.borrow().clone()
    }

    pub fn sent_to(&self, method: Method, uri: &str) -> Option<Recorded> {
        self.recorded
            .borrow()
            .iter()
            .find(|r| r.method == method && r.uri == uri)
            .cloned()
    }

    fn answer(
        &self,
        request: Recorded,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> + use<> {
        let result = self
            .routes
            .borrow()
            .get(&(request.method, request.uri.clone()))
            .cloned()
            .unwrap_or_else(|| Ok(ApiResponse::new(404, serde_json::json!({}))));
        self.recorded.borrow_mut().push(request);
        async move { result }
    }
}

impl ApiTransport for FakeTransport {
    type File = String;

    fn get(
        &self,
        uri: &str,
        _params: &[(&str, &str)],
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        self.answer(Recorded {
            method: Method::Get,
            uri: uri.to_string(),
            json: None,
            raw: None,
        })
    }

    fn post_json(
        &self,
        uri: &str,
        body: &Value,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        self.answer(Recorded {
            method: Method::Post,
            uri: uri.to_string(),
            json: Some(body.clone()),
            raw: None,
        })
    }

    fn post_raw(
        &self,
        uri: &str,
        body: RawBody<String>,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        self.answer(Recorded {
            method: Method::Post,
            uri: uri.to_string(),
            json: None,
            raw: Some(body),
        })
    }

    fn delete(
        &self,
        uri: &str,
        body: Option<&Value>,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        self.answer(Recorded {
            method: Method::Delete,
            uri: uri.to_string(),
            json: body.cloned(),
            raw: None,
        })
    }
}
