//! ObjectStore trait definition
//!
//! The interface every command goes through. It keeps the CLI decoupled
//! from the AWS SDK: the `s3cli-s3` crate provides the real implementation,
//! tests drive handlers and the pager with a mock.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parts::PartEntry;

/// Metadata for one stored object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectEntry {
    /// Object key
    pub key: String,

    /// Size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<i64>,

    /// Human-readable size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_human: Option<String>,

    /// Last modified timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<jiff::Timestamp>,

    /// ETag (content MD5 for single-part uploads), quotes stripped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

impl ObjectEntry {
    /// Create an entry with a known size
    pub fn new(key: impl Into<String>, size: i64) -> Self {
        Self {
            key: key.into(),
            size_bytes: Some(size),
            size_human: Some(humansize::format_size(size.max(0) as u64, humansize::BINARY)),
            last_modified: None,
            etag: None,
        }
    }
}

/// One page of a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectPage {
    /// Entries on this page
    pub entries: Vec<ObjectEntry>,

    /// Continuation token for the next page, absent on the last page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Storage operations used by the commands
///
/// Every method maps to exactly one request against the service. There is
/// no retry, timeout, or pooling behavior here beyond SDK defaults.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Create a bucket
    async fn create_bucket(&self, bucket: &str) -> Result<()>;

    /// Upload a local file as one object, streaming the body
    async fn put_object(&self, bucket: &str, key: &str, file: &Path) -> Result<ObjectEntry>;

    /// Delete an object
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()>;

    /// Fetch one listing page, passing the prefix through unmodified
    // The lifetime is named so the generated mock can expand it.
    async fn list_page<'a>(
        &self,
        bucket: &str,
        prefix: Option<&'a str>,
        token: Option<&'a str>,
    ) -> Result<ObjectPage>;

    /// Start a multipart upload, returning the upload id
    async fn create_multipart(&self, bucket: &str, key: &str) -> Result<String>;

    /// Upload a local file as one part, returning the part ETag
    async fn upload_part(
        &self,
        bucket: &str,
        key: &str,
        upload_id: &str,
        part_number: i32,
        file: &Path,
    ) -> Result<String>;

    /// Complete a multipart upload with the given parts, in their given
    /// order, returning the final ETag when the service reports one
    async fn complete_multipart(
        &self,
        bucket: &str,
        key: &str,
        upload_id: &str,
        parts: &[PartEntry],
    ) -> Result<Option<String>>;
}
