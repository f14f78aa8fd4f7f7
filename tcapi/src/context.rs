use tcapi_core::{Context, OsEnv};
use tcapi_http_send_reqwest::ReqwestHttpSend;

/// Build a [`Context`] with standard components: a reqwest-backed HTTP
/// transport and the process environment.
///
/// This is what the `default_signer` / `default_client` helpers use. Build
/// the context yourself when you need a fake transport or environment.
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}

/// Like [`default_context`], but backed by a caller-configured
/// [`reqwest::Client`], e.g. one with timeouts or a proxy set up.
pub fn context_with_client(client: reqwest::Client) -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::new(client))
        .with_env(OsEnv)
}
