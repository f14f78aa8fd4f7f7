//! Tencent Cloud OCR client for tcapi.
//!
//! This crate provides a typed client for the Tencent Cloud OCR service,
//! currently covering the `IDCardOCR` action: recognizing the fields of a
//! Chinese resident identity card from a base64-encoded image.
//!
//! ## Overview
//!
//! Every call is one signed `POST /` against the service endpoint. The
//! client serializes the request body, obtains a TC3-HMAC-SHA256
//! `Authorization` header through [`tcapi_tc3`], sends the exact bytes it
//! signed, and classifies the response into an [`OcrResult`] or one
//! [`ApiError`] variant:
//!
//! - [`ApiError::Construction`]: the request never left the process.
//! - [`ApiError::Transport`]: no response was received.
//! - [`ApiError::HttpStatus`]: the server answered outside the success
//!   range.
//! - [`ApiError::Upstream`]: the service returned an error envelope, e.g.
//!   for an unreadable image, even on HTTP 200.
//! - [`ApiError::MalformedResponse`]: the body was not the expected
//!   envelope.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tcapi_core::Context;
//! use tcapi_http_send_reqwest::ReqwestHttpSend;
//! use tcapi_ocr::{CardSide, OcrClient};
//! use tcapi_tc3::StaticCredentialProvider;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//!     let provider = StaticCredentialProvider::new("secret_id", "secret_key");
//!     let client = OcrClient::new(ctx, provider, "ap-guangzhou");
//!
//!     let image_base64 = tcapi_core::hash::base64_encode(&std::fs::read("id_card.jpg")?);
//!     let result = client
//!         .id_card_ocr(&image_base64, CardSide::Front, None)
//!         .await?;
//!     println!("name: {}", result.name);
//!     Ok(())
//! }
//! ```
//!
//! ## Credential Sources
//!
//! Any [`tcapi_core::ProvideCredential`] with `Credential =`
//! [`tcapi_tc3::Credential`] works, including the environment-variable and
//! config providers shipped by [`tcapi_tc3`].

mod constants;

mod client;
pub use client::OcrClient;

mod error;
pub use error::ApiError;

mod types;
pub use types::{CardSide, OcrResult};
