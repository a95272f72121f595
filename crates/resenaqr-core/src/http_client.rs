//! Minimal HTTP client abstraction so the remote lead store can be driven by
//! any transport, including queued in-memory fakes in tests.

use std::future::Future;
use std::sync::Arc;

#[cfg(feature = "reqwest-client")]
use crate::error::TransportError;

/// HTTP client trait for sending raw HTTP requests.
#[trait_variant::make(Send)]
pub trait HttpClient {
    /// Error type returned by the HTTP client.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send an HTTP request and return the response.
    fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> impl Future<Output = Result<http::Response<Vec<u8>>, Self::Error>>;
}

#[cfg(feature = "reqwest-client")]
impl HttpClient for reqwest::Client {
    type Error = TransportError;

    async fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> Result<http::Response<Vec<u8>>, Self::Error> {
        let (parts, body) = request.into_parts();

        let mut req = self.request(parts.method, parts.uri.to_string()).body(body);
        for (name, value) in parts.headers.iter() {
            req = req.header(name.as_str(), value.as_bytes());
        }

        let resp = req.send().await.map_err(TransportError::from)?;

        let mut builder = http::Response::builder().status(resp.status());
        for (name, value) in resp.headers().iter() {
            builder = builder.header(name.as_str(), value.as_bytes());
        }
        let body = resp
            .bytes()
            .await
            .map_err(TransportError::from)?
            .to_vec();

        builder
            .body(body)
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))
    }
}

impl<T: HttpClient + Sync> HttpClient for Arc<T> {
    type Error = T::Error;

    fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> impl Future<Output = Result<http::Response<Vec<u8>>, Self::Error>> + Send {
        self.as_ref().send_http(request)
    }
}
