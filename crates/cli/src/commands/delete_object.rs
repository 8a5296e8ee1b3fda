//! delete-object command
//!
//! Issues a single delete request.

use clap::Args;
use serde::Serialize;

use s3cli_core::ObjectStore;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Delete an object
#[derive(Args, Debug)]
pub struct DeleteObjectArgs {
    /// Bucket name
    #[arg(short, long)]
    pub bucket: String,

    /// Object key
    #[arg(short, long)]
    pub key: String,
}

#[derive(Debug, Serialize)]
struct DeleteObjectOutput {
    status: &'static str,
    bucket: String,
    key: String,
}

/// Execute the delete-object command
pub async fn execute(
    args: DeleteObjectArgs,
    store: &dyn ObjectStore,
    output_config: OutputConfig,
) -> ExitCode {
    let formatter = Formatter::new(output_config);

    match store.delete_object(&args.bucket, &args.key).await {
        Ok(()) => {
            if formatter.is_json() {
                formatter.json(&DeleteObjectOutput {
                    status: "success",
                    bucket: args.bucket,
                    key: args.key,
                });
            } else {
                formatter.success(&format!("Object '{}/{}' deleted.", args.bucket, args.key));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!(
                "Failed to delete '{}/{}': {e}",
                args.bucket, args.key
            ));
            ExitCode::from_error(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::ScriptedStore;

    #[tokio::test]
    async fn test_delete_object_success() {
        let store = ScriptedStore::default();
        let args = DeleteObjectArgs {
            bucket: "test6".into(),
            key: "a.txt".into(),
        };
        let code = execute(args, &store, OutputConfig::default()).await;
        assert_eq!(code, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_delete_object_error_reported() {
        let store = ScriptedStore {
            fail: true,
            ..Default::default()
        };
        let args = DeleteObjectArgs {
            bucket: "test6".into(),
            key: "a.txt".into(),
        };
        let code = execute(args, &store, OutputConfig::default()).await;
        assert_eq!(code, ExitCode::ServiceError);
    }
}
