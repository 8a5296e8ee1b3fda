//! s3cli-s3: S3 SDK adapter for s3cli
//!
//! This crate provides the implementation of the ObjectStore trait using
//! aws-sdk-s3, plus the interceptor that injects `S3_CLI_HTTP_*` headers
//! into every outbound request. It is the only crate that directly depends
//! on the AWS SDK.

pub mod client;
pub mod inject;

pub use client::S3Client;
pub use inject::HeaderInjector;
