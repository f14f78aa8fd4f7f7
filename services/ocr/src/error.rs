use thiserror::Error;

/// Terminal outcome of an API call that produced no result.
///
/// Every failure path of [`OcrClient`](crate::OcrClient) resolves to exactly
/// one of these variants. None of them is retried by the client; retry
/// policy, if any, belongs to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be built or signed; nothing was sent.
    #[error("failed to construct request: {0}")]
    Construction(String),

    /// No response was received: connection, DNS or TLS failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered outside the success range. The body is carried
    /// as plain text regardless of its content.
    #[error("unexpected http status {status}: {body}")]
    HttpStatus {
        /// HTTP status code of the response.
        status: u16,
        /// Response body as text.
        body: String,
    },

    /// A well-formed envelope carrying a service-level error, e.g. an
    /// unreadable image or an exhausted quota.
    #[error("api error {code}: {message} (request id: {request_id})")]
    Upstream {
        /// Error code such as `FailedOperation.ImageDecodeFailed`.
        code: String,
        /// Human readable message from the service.
        message: String,
        /// Request id to quote when contacting support.
        request_id: String,
    },

    /// The body was not valid JSON or lacked the expected envelope shape.
    /// Carries a truncated snippet of the offending body.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    /// Returns true for errors where the service itself rejected the call,
    /// as opposed to the call never completing.
    pub fn is_upstream(&self) -> bool {
        matches!(self, ApiError::Upstream { .. })
    }
}
