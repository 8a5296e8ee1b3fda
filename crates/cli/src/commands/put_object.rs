//! put-object command
//!
//! Uploads a local file as a single object. The file is checked locally
//! before any request is sent; the body is streamed with an explicit
//! content length.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use s3cli_core::ObjectStore;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Upload a local file as one object
#[derive(Args, Debug)]
pub struct PutObjectArgs {
    /// Bucket name
    #[arg(short, long)]
    pub bucket: String,

    /// Object key
    #[arg(short, long)]
    pub key: String,

    /// Local file to upload
    #[arg(short, long)]
    pub file: PathBuf,
}

#[derive(Debug, Serialize)]
struct PutObjectOutput {
    status: &'static str,
    bucket: String,
    key: String,
    size_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    etag: Option<String>,
}

/// Execute the put-object command
pub async fn execute(
    args: PutObjectArgs,
    store: &dyn ObjectStore,
    output_config: OutputConfig,
) -> ExitCode {
    let formatter = Formatter::new(output_config);

    // No request is sent for a missing local file.
    if !args.file.exists() {
        formatter.error(&format!("File not found: {}", args.file.display()));
        return ExitCode::NotFound;
    }

    match store.put_object(&args.bucket, &args.key, &args.file).await {
        Ok(entry) => {
            if formatter.is_json() {
                formatter.json(&PutObjectOutput {
                    status: "success",
                    bucket: args.bucket,
                    key: args.key,
                    size_bytes: entry.size_bytes,
                    etag: entry.etag,
                });
            } else {
                let size = entry.size_human.as_deref().unwrap_or("0 B");
                formatter.success(&format!(
                    "Uploaded '{}/{}' ({size}).",
                    args.bucket, args.key
                ));
                if let Some(etag) = &entry.etag {
                    formatter.println(&format!("ETag: {etag}"));
                }
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!(
                "Failed to upload '{}/{}': {e}",
                args.bucket, args.key
            ));
            ExitCode::from_error(&e)
        }
    }
}
