//! complete-multipart-upload command
//!
//! Reads a JSON parts file and finishes the multipart upload. Parts are
//! sent in the exact order the file lists them; the service rejects
//! out-of-order part numbers, not this client.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use s3cli_core::{ObjectStore, PartManifest};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Complete a multipart upload from a parts file
#[derive(Args, Debug)]
pub struct CompleteMultipartUploadArgs {
    /// Bucket name
    #[arg(short, long)]
    pub bucket: String,

    /// Object key
    #[arg(short, long)]
    pub key: String,

    /// Upload id from create-multipart-upload
    #[arg(short, long)]
    pub upload_id: String,

    /// JSON file listing the uploaded parts and their ETags
    #[arg(short, long)]
    pub file: PathBuf,
}

#[derive(Debug, Serialize)]
struct CompleteMultipartUploadOutput {
    bucket: String,
    key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    etag: Option<String>,
}

/// Execute the complete-multipart-upload command
pub async fn execute(
    args: CompleteMultipartUploadArgs,
    store: &dyn ObjectStore,
    output_config: OutputConfig,
) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let manifest = match PartManifest::from_file(&args.file) {
        Ok(m) => m,
        Err(e) => {
            formatter.error(&format!(
                "Failed to read parts file '{}': {e}",
                args.file.display()
            ));
            return ExitCode::from_error(&e);
        }
    };

    match store
        .complete_multipart(&args.bucket, &args.key, &args.upload_id, &manifest.parts)
        .await
    {
        Ok(etag) => {
            if formatter.is_json() {
                formatter.json(&CompleteMultipartUploadOutput {
                    bucket: args.bucket,
                    key: args.key,
                    etag,
                });
            } else {
                formatter.success(&format!(
                    "Completed multipart upload of '{}/{}'.",
                    args.bucket, args.key
                ));
                if let Some(etag) = etag {
                    formatter.println(&format!("ETag: {etag}"));
                }
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!(
                "Failed to complete multipart upload of '{}/{}': {e}",
                args.bucket, args.key
            ));
            ExitCode::from_error(&e)
        }
    }
}
