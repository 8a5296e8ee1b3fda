//! Part manifest for multipart completion
//!
//! `complete-multipart-upload` reads a JSON file listing the parts to
//! stitch together: `{"Parts": [{"PartNumber": 1, "ETag": "..."}, ...]}`.
//! The entries are forwarded to the service exactly in file order, without
//! reordering or deduplication.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One uploaded part, as reported by a prior upload-part call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartEntry {
    /// Part number within the upload (1-based)
    #[serde(rename = "PartNumber")]
    pub part_number: i32,

    /// ETag the service returned for the part
    #[serde(rename = "ETag")]
    pub etag: String,
}

/// The parts file handed to complete-multipart-upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartManifest {
    /// Parts in completion order
    #[serde(rename = "Parts")]
    pub parts: Vec<PartEntry>,
}

impl PartManifest {
    /// Read and parse a parts file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(format!(
                "parts file '{}'",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let manifest: Self = serde_json::from_str(&content)?;
        Ok(manifest)
    }
}
