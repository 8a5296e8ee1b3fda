//! upload-part command
//!
//! Streams a local file as one numbered part of a multipart upload and
//! prints the part ETag the completion call will need.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use s3cli_core::ObjectStore;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Upload a local file as one part of a multipart upload
#[derive(Args, Debug)]
pub struct UploadPartArgs {
    /// Bucket name
    #[arg(short, long)]
    pub bucket: String,

    /// Object key
    #[arg(short, long)]
    pub key: String,

    /// Upload id from create-multipart-upload
    #[arg(short, long)]
    pub upload_id: String,

    /// Part number (1-based)
    #[arg(short, long)]
    pub part_number: i32,

    /// Local file holding the part body
    #[arg(short, long)]
    pub file: PathBuf,
}

#[derive(Debug, Serialize)]
struct UploadPartOutput {
    part_number: i32,
    etag: String,
}

/// Execute the upload-part command
pub async fn execute(
    args: UploadPartArgs,
    store: &dyn ObjectStore,
    output_config: OutputConfig,
) -> ExitCode {
    let formatter = Formatter::new(output_config);

    match store
        .upload_part(
            &args.bucket,
            &args.key,
            &args.upload_id,
            args.part_number,
            &args.file,
        )
        .await
    {
        Ok(etag) => {
            if formatter.is_json() {
                formatter.json(&UploadPartOutput {
                    part_number: args.part_number,
                    etag,
                });
            } else {
                // Plain ETag so scripts can capture it for the parts file.
                formatter.println(&etag);
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!(
                "Failed to upload part {} of '{}/{}': {e}",
                args.part_number, args.bucket, args.key
            ));
            ExitCode::from_error(&e)
        }
    }
}
