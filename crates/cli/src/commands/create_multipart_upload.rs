//! create-multipart-upload command
//!
//! Starts a multipart upload and prints the upload id needed by the
//! subsequent upload-part and complete-multipart-upload calls.

use clap::Args;
use serde::Serialize;

use s3cli_core::ObjectStore;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Start a multipart upload
#[derive(Args, Debug)]
pub struct CreateMultipartUploadArgs {
    /// Bucket name
    #[arg(short, long)]
    pub bucket: String,

    /// Object key
    #[arg(short, long)]
    pub key: String,
}

#[derive(Debug, Serialize)]
struct CreateMultipartUploadOutput {
    bucket: String,
    key: String,
    upload_id: String,
}

/// Execute the create-multipart-upload command
pub async fn execute(
    args: CreateMultipartUploadArgs,
    store: &dyn ObjectStore,
    output_config: OutputConfig,
) -> ExitCode {
    let formatter = Formatter::new(output_config);

    match store.create_multipart(&args.bucket, &args.key).await {
        Ok(upload_id) => {
            if formatter.is_json() {
                formatter.json(&CreateMultipartUploadOutput {
                    bucket: args.bucket,
                    key: args.key,
                    upload_id,
                });
            } else {
                // Plain id so scripts can capture it directly.
                formatter.println(&upload_id);
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!(
                "Failed to start multipart upload for '{}/{}': {e}",
                args.bucket, args.key
            ));
            ExitCode::from_error(&e)
        }
    }
}
