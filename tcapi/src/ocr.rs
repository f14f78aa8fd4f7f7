//! OCR service client with convenience APIs.
//!
//! This module re-exports everything from `tcapi-ocr` along with helpers
//! for the common case.

pub use tcapi_ocr::*;

#[cfg(feature = "default-context")]
use crate::default_context;
#[cfg(feature = "default-context")]
use tcapi_tc3::{Config, DefaultCredentialProvider};

/// Create an OCR client with standard configuration: default context
/// (reqwest, OS environment) and the default credential chain (config,
/// then environment variables).
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> anyhow::Result<()> {
/// use tcapi::ocr::CardSide;
///
/// let client = tcapi::ocr::default_client("ap-guangzhou");
/// let result = client.id_card_ocr("<base64>", CardSide::Front, None).await?;
/// println!("recognized: {}", result.name);
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_client(region: &str) -> OcrClient {
    let ctx = default_context();
    let provider = DefaultCredentialProvider::new(Config::default());

    OcrClient::new(ctx, provider, region)
}
