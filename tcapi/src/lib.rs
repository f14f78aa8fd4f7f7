#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use tcapi_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::{context_with_client, default_context};

#[cfg(feature = "tc3")]
pub mod tc3;

#[cfg(feature = "ocr")]
pub mod ocr;
