//! create-bucket command
//!
//! Issues a single bucket-creation request.

use clap::Args;
use serde::Serialize;

use s3cli_core::ObjectStore;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Create a bucket
#[derive(Args, Debug)]
pub struct CreateBucketArgs {
    /// Bucket name
    #[arg(short, long)]
    pub bucket: String,
}

#[derive(Debug, Serialize)]
struct CreateBucketOutput {
    status: &'static str,
    bucket: String,
}

/// Execute the create-bucket command
pub async fn execute(
    args: CreateBucketArgs,
    store: &dyn ObjectStore,
    output_config: OutputConfig,
) -> ExitCode {
    let formatter = Formatter::new(output_config);

    match store.create_bucket(&args.bucket).await {
        Ok(()) => {
            if formatter.is_json() {
                formatter.json(&CreateBucketOutput {
                    status: "success",
                    bucket: args.bucket,
                });
            } else {
                formatter.success(&format!("Bucket '{}' created.", args.bucket));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to create bucket '{}': {e}", args.bucket));
            ExitCode::from_error(&e)
        }
    }
}
