//! Tencent Cloud API 3.0 request signing (TC3-HMAC-SHA256).
//!
//! ## Overview
//!
//! Every API 3.0 style endpoint shares one authentication scheme: a
//! `POST /` request whose `Authorization` header is derived from the body
//! bytes, a fixed trio of headers and the caller's secret key, chained
//! through HMAC-SHA256. This crate implements that derivation once so that
//! concrete service clients such as OCR only have to describe their
//! actions.
//!
//! The derivation itself is exposed two ways: [`build_authorization`] is
//! the pure function over explicit inputs, and [`RequestSigner`] wraps it
//! as a [`tcapi_core::SignRequest`] so a [`tcapi_core::Signer`] can sign
//! `http::request::Parts` in place.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tcapi_core::{Context, Signer};
//! use tcapi_tc3::{RequestSigner, StaticCredentialProvider};
//!
//! #[tokio::main]
//! async fn main() -> tcapi_core::Result<()> {
//!     // Signing performs no I/O; a bare context is enough.
//!     let ctx = Context::new();
//!     let provider = StaticCredentialProvider::new("secret_id", "secret_key");
//!     let signer = Signer::new(ctx, provider, RequestSigner::new("ocr"));
//!
//!     let body = br#"{"ImageBase64":"","CardSide":"FRONT"}"#;
//!     let mut parts = http::Request::builder()
//!         .method(http::Method::POST)
//!         .uri("https://ocr.tencentcloudapi.com/")
//!         .header("content-type", "application/json; charset=utf-8")
//!         .header("x-tc-action", "IDCardOCR")
//!         .body(())
//!         .unwrap()
//!         .into_parts()
//!         .0;
//!
//!     signer.sign(&mut parts, body).await?;
//!     assert!(parts.headers.contains_key("authorization"));
//!     Ok(())
//! }
//! ```
//!
//! ## Credential Sources
//!
//! Credentials come from whatever [`tcapi_core::ProvideCredential`] the
//! signer is built with:
//!
//! - [`StaticCredentialProvider`]: opaque strings supplied by the caller.
//! - [`EnvCredentialProvider`]: `TENCENTCLOUD_SECRET_ID` /
//!   `TENCENTCLOUD_SECRET_KEY` (plus `TKE_*` fallbacks).
//! - [`ConfigCredentialProvider`]: an explicit [`Config`].
//! - [`DefaultCredentialProvider`]: config first, then environment.

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::{
    ConfigCredentialProvider, DefaultCredentialProvider, EnvCredentialProvider,
    StaticCredentialProvider,
};

mod sign_request;
pub use sign_request::{build_authorization, RequestSigner};
