//! s3cli-core: Core library for the s3cli object storage client
//!
//! This crate provides the SDK-independent pieces of s3cli:
//! - Settings loaded from the per-user config file and environment
//! - Header-name derivation for the `S3_CLI_HTTP_*` injection convention
//! - The ObjectStore trait and its data types
//! - The page cursor used by listing and counting
//! - The part-manifest format for multipart completion
//!
//! Only the `s3cli-s3` crate talks to the AWS SDK; everything here can be
//! exercised against a mock store.

pub mod config;
pub mod error;
pub mod headers;
pub mod pager;
pub mod parts;
pub mod store;

pub use config::Settings;
pub use error::{Error, Result};
pub use headers::{derive_headers, HEADER_ENV_PREFIX};
pub use pager::Pages;
pub use parts::{PartEntry, PartManifest};
pub use store::{ObjectEntry, ObjectPage, ObjectStore};
