//! Operation orchestration for a resource kind.
//!
//! An [`Endpoint`] borrows the [`ApiClient`] and optionally carries a
//! [`ParentReference`]. It holds no per-call state: every operation builds
//! its own [`RequestContext`], so one endpoint can serve concurrent calls.
//!
//! Each operation runs the same pipeline:
//!
//! 1. Build the URI and serialize the body
//! 2. Capture the timestamp and sign
//! 3. Send through the client's [`Transport`]
//! 4. Classify non-2xx responses into an [`ApiError`]
//! 5. Validate `x-hash` against the raw body and the response's `x-date`
//! 6. Decode JSON and hydrate the resource type
//!
//! # Example
//!
//! ```rust,ignore
//! use ccvshop_api::rest::{QueryFilters, ParentReference};
//! use ccvshop_api::rest::resources::{Credential, Webshop};
//!
//! let credentials = client
//!     .endpoint::<Credential>()
//!     .with_parent(ParentReference::for_resource::<Webshop>(42))
//!     .get_all(&QueryFilters::new())
//!     .await?;
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use serde_json::Value;

use crate::auth::{sign_request, validate_response};
use crate::clients::{ApiClient, HttpClient, HttpMethod, HttpRequest, RequestContext, Transport};
use crate::rest::errors::ApiError;
use crate::rest::path::{build_uri, with_query, ParentReference, QueryFilters};
use crate::rest::resource::{build_collection, hydrate, Resource};

/// Operations on one resource kind, optionally scoped under a parent.
pub struct Endpoint<'c, R, T = HttpClient> {
    client: &'c ApiClient<T>,
    parent: Option<ParentReference>,
    resource: PhantomData<fn() -> R>,
}

impl<R, T> Clone for Endpoint<'_, R, T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client,
            parent: self.parent.clone(),
            resource: PhantomData,
        }
    }
}

impl<R: Resource, T> fmt::Debug for Endpoint<'_, R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("resource", &R::NAME)
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}

impl<'c, R: Resource, T: Transport> Endpoint<'c, R, T> {
    /// Creates an unscoped endpoint.
    #[must_use]
    pub const fn new(client: &'c ApiClient<T>) -> Self {
        Self {
            client,
            parent: None,
            resource: PhantomData,
        }
    }

    /// Returns a new endpoint scoped under `parent`.
    ///
    /// The receiver is left unchanged.
    #[must_use]
    pub fn with_parent(&self, parent: ParentReference) -> Self {
        Self {
            client: self.client,
            parent: Some(parent),
            resource: PhantomData,
        }
    }

    /// Returns the parent scope, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<&ParentReference> {
        self.parent.as_ref()
    }

    /// Returns the collection URI (no id, no query).
    #[must_use]
    pub fn uri(&self) -> String {
        build_uri(R::PATH, self.parent.as_ref(), None)
    }

    /// Fetches one resource by id.
    ///
    /// Returns `Ok(None)` if the API answered with an empty body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_one(&self, id: u64, filters: &QueryFilters) -> Result<Option<R>, ApiError> {
        let uri = with_query(build_uri(R::PATH, self.parent.as_ref(), Some(id)), filters);
        let decoded = self
            .execute(RequestContext::new(HttpMethod::Get, uri, None))
            .await?;
        decoded.as_ref().map(hydrate::<R>).transpose()
    }

    /// Fetches a collection.
    ///
    /// A body with an `items` array yields each element; any other object
    /// yields a one-element list. An empty body yields an empty list.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_all(&self, filters: &QueryFilters) -> Result<Vec<R>, ApiError> {
        let uri = with_query(self.uri(), filters);
        let decoded = self
            .execute(RequestContext::new(HttpMethod::Get, uri, None))
            .await?;
        decoded
            .as_ref()
            .map_or_else(|| Ok(Vec::new()), build_collection::<R>)
    }

    /// Fetches the single object served at the collection URI.
    ///
    /// Used for singleton sub-resources, such as the merchant of a webshop.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_single(&self, filters: &QueryFilters) -> Result<Option<R>, ApiError> {
        let uri = with_query(self.uri(), filters);
        let decoded = self
            .execute(RequestContext::new(HttpMethod::Get, uri, None))
            .await?;
        decoded.as_ref().map(hydrate::<R>).transpose()
    }

    /// Creates a resource with `POST`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidPayload`] if `data` cannot be serialized;
    /// nothing is sent in that case. See [`ApiError`] for the rest.
    pub async fn create<D>(&self, data: &D) -> Result<Option<R>, ApiError>
    where
        D: Serialize + Sync + ?Sized,
    {
        let body = serde_json::to_string(data).map_err(ApiError::InvalidPayload)?;
        let context = RequestContext::new(HttpMethod::Post, self.uri(), Some(body));
        let decoded = self.execute(context).await?;
        decoded.as_ref().map(hydrate::<R>).transpose()
    }

    /// Updates a resource with `PATCH`.
    ///
    /// Success is the absence of an error; any response body is validated
    /// and discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidPayload`] if `data` cannot be serialized;
    /// nothing is sent in that case. See [`ApiError`] for the rest.
    pub async fn update<D>(&self, id: u64, data: &D) -> Result<(), ApiError>
    where
        D: Serialize + Sync + ?Sized,
    {
        let body = serde_json::to_string(data).map_err(ApiError::InvalidPayload)?;
        let uri = build_uri(R::PATH, self.parent.as_ref(), Some(id));
        self.execute(RequestContext::new(HttpMethod::Patch, uri, Some(body)))
            .await?;
        Ok(())
    }

    /// Signs, sends, validates and decodes one request.
    async fn execute(&self, context: RequestContext) -> Result<Option<Value>, ApiError> {
        let credentials = self.client.api_credentials();
        let signature = sign_request(credentials, &context);
        let request = HttpRequest::signed(&context, credentials.public_key().as_ref(), signature);

        tracing::debug!("Sending {} {}", context.method(), context.uri());

        let response = self.client.transport().send(request).await?;

        if !response.is_ok() {
            tracing::debug!(
                "{} {} answered with status {}",
                context.method(),
                context.uri(),
                response.code
            );
            return Err(ApiError::from_vendor_body(&response.body));
        }

        validate_response(credentials, &context, &response)?;

        if !response.has_body() {
            return Ok(None);
        }

        match serde_json::from_slice(&response.body) {
            Ok(Value::Null) => Ok(None),
            Ok(decoded) => Ok(Some(decoded)),
            Err(e) => Err(ApiError::malformed(format!("body is not JSON: {e}"))),
        }
    }
}

// Verify Endpoint is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Endpoint<'static, crate::rest::resources::Webshop>>();
};
