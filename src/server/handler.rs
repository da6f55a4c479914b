// src/server/handler.rs
use futures::future::{ready, Ready};
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Body, Request, Response};
use std::convert::Infallible;
use std::task::{Context, Poll};
use tower::Service;

/// Answers every request with the same plaintext body and a 200.
///
/// Method, path, headers and body of the request are never inspected.
#[derive(Clone, Debug)]
pub struct AckHandler {
    body: &'static str,
}

impl AckHandler {
    pub fn new(body: &'static str) -> Self {
        Self { body }
    }

    fn respond(&self) -> Response<Body> {
        let mut response = Response::new(Body::from(self.body));
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        response
    }
}

impl Service<Request<Body>> for AckHandler {
    type Response = Response<Body>;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        tracing::debug!(method = %req.method(), path = %req.uri().path(), "ack");
        ready(Ok(self.respond()))
    }
}
