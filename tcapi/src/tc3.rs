//! TC3-HMAC-SHA256 signing with convenience APIs.
//!
//! This module re-exports everything from `tcapi-tc3` along with helpers
//! for the common case.

pub use tcapi_tc3::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Signer};

/// Default TC3 signer type with commonly used components.
#[cfg(feature = "default-context")]
pub type DefaultSigner = Signer<Credential>;

/// Create a TC3 signer for one service with standard configuration:
/// default context (reqwest, OS environment) and the default credential
/// chain (config, then environment variables).
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> tcapi::Result<()> {
/// let signer = tcapi::tc3::default_signer("cvm");
///
/// let mut parts = http::Request::builder()
///     .method(http::Method::POST)
///     .uri("https://cvm.tencentcloudapi.com/")
///     .header("content-type", "application/json; charset=utf-8")
///     .header("x-tc-action", "DescribeInstances")
///     .body(())
///     .unwrap()
///     .into_parts()
///     .0;
///
/// signer.sign(&mut parts, b"{}").await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_signer(service: &str) -> DefaultSigner {
    let ctx = default_context();
    let provider = DefaultCredentialProvider::new(Config::default());
    let builder = RequestSigner::new(service);

    Signer::new(ctx, provider, builder)
}
