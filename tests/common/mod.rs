//! Shared helpers for integration tests.
//!
//! [`MockTransport`] records every request it receives and answers with a
//! [`Reply`] that it signs the way the CCV Shop API does: over the request's
//! method and URI, the raw response body and the response's own `x-date`.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use ccvshop_api::auth::canonical_string;
use ccvshop_api::auth::hmac::compute_signature;
use ccvshop_api::clients::{HEADER_DATE, HEADER_HASH};
use ccvshop_api::{
    ApiClient, ApiCredentials, HostName, HttpError, HttpMethod, HttpRequest, HttpResponse,
    PublicKey, SecretKey, Transport,
};

pub const PUBLIC_KEY: &str = "test-public-key";
pub const SECRET_KEY: &str = "test-secret-key";
pub const RESPONSE_DATE: &str = "2024-01-31T10:00:05+00:00";

/// Creates credentials for `demo.ccvshop.nl` with the test keys.
pub fn test_credentials() -> ApiCredentials {
    ApiCredentials::new(
        HostName::new("demo.ccvshop.nl").unwrap(),
        PublicKey::new(PUBLIC_KEY).unwrap(),
        SecretKey::new(SECRET_KEY).unwrap(),
    )
}

/// Computes the `x-hash` the API would send for a response.
pub fn response_hash(method: HttpMethod, uri: &str, body: &[u8], date: &str) -> String {
    compute_signature(
        &canonical_string(&[
            PUBLIC_KEY.as_bytes(),
            method.as_str().as_bytes(),
            uri.as_bytes(),
            body,
            date.as_bytes(),
        ]),
        SECRET_KEY,
    )
}

/// Recomputes the `x-hash` a request should carry given its own headers.
pub fn expected_request_hash(request: &HttpRequest) -> String {
    compute_signature(
        &canonical_string(&[
            PUBLIC_KEY.as_bytes(),
            request.method.as_str().as_bytes(),
            request.uri.as_bytes(),
            request.body.as_deref().unwrap_or_default().as_bytes(),
            request.header(HEADER_DATE).unwrap().as_bytes(),
        ]),
        SECRET_KEY,
    )
}

/// How a reply is signed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signing {
    /// Signed correctly.
    Valid,
    /// Signed over the original body, then one body byte is flipped.
    TamperedBody,
    /// Signed correctly, then `x-date` is changed.
    TamperedDate,
    /// No `x-hash` header.
    Unsigned,
}

/// A scripted response.
#[derive(Clone, Debug)]
pub struct Reply {
    pub status: u16,
    pub body: Vec<u8>,
    pub signing: Signing,
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Self::status(200, body)
    }

    pub fn json(value: &serde_json::Value) -> Self {
        Self::status(200, &value.to_string())
    }

    pub fn no_content() -> Self {
        Self::status(204, "")
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
            signing: Signing::Valid,
        }
    }

    pub fn signed(mut self, signing: Signing) -> Self {
        self.signing = signing;
        self
    }

    fn into_response(self, request: &HttpRequest) -> HttpResponse {
        let mut body = self.body;
        let hash = response_hash(request.method, &request.uri, &body, RESPONSE_DATE);
        let mut date = RESPONSE_DATE.to_string();

        match self.signing {
            Signing::Valid | Signing::Unsigned => {}
            Signing::TamperedBody => {
                if let Some(last) = body.last_mut() {
                    *last ^= 0x01;
                }
            }
            Signing::TamperedDate => date = "2024-01-31T10:00:06+00:00".to_string(),
        }

        let mut headers = HashMap::new();
        headers.insert(HEADER_DATE.to_string(), vec![date]);
        if self.signing != Signing::Unsigned {
            headers.insert(HEADER_HASH.to_string(), vec![hash]);
        }
        HttpResponse::new(self.status, headers, body)
    }
}

type Responder = Box<dyn Fn(&HttpRequest) -> Reply + Send + Sync>;

/// A transport that records requests and answers with scripted replies.
///
/// Every send yields to the scheduler once before answering, so calls joined
/// on one task interleave.
pub struct MockTransport {
    responder: Responder,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    /// Answers every request with the same reply.
    pub fn always(reply: Reply) -> Self {
        Self::responding(move |_| reply.clone())
    }

    /// Answers each request with the reply computed from it.
    pub fn responding<F>(responder: F) -> Self
    where
        F: Fn(&HttpRequest) -> Reply + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Returns a copy of every request received so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Returns the most recent request.
    pub fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        tokio::task::yield_now().await;
        let reply = (self.responder)(&request);
        self.requests.lock().unwrap().push(request.clone());
        Ok(reply.into_response(&request))
    }
}

/// Creates a client over a mock transport.
pub fn mock_client(transport: MockTransport) -> ApiClient<MockTransport> {
    ApiClient::with_transport(test_credentials(), transport)
}
