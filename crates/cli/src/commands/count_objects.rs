//! count-objects command
//!
//! Folds the full listing to a total object count, carrying the
//! continuation token across pages. A running total is shown in place
//! while pages are still arriving.

use clap::Args;
use serde::Serialize;

use s3cli_core::{ObjectStore, Pages};

use crate::exit_code::ExitCode;
use crate::output::{CountDisplay, Formatter, OutputConfig};

/// Count all objects in a bucket, following pagination
#[derive(Args, Debug)]
pub struct CountObjectsArgs {
    /// Bucket name
    #[arg(short, long)]
    pub bucket: String,

    /// Key prefix to filter by, passed through unmodified
    #[arg(short, long)]
    pub prefix: Option<String>,
}

#[derive(Debug, Serialize)]
struct CountObjectsOutput {
    bucket: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
    count: u64,
}

/// Execute the count-objects command
pub async fn execute(
    args: CountObjectsArgs,
    store: &dyn ObjectStore,
    output_config: OutputConfig,
) -> ExitCode {
    let formatter = Formatter::new(output_config.clone());
    let counter = CountDisplay::new(&output_config);

    let result = Pages::new(store, &args.bucket, args.prefix.as_deref())
        .fold_count(|running| counter.update(running))
        .await;
    counter.finish();

    match result {
        Ok(total) => {
            if formatter.is_json() {
                formatter.json(&CountObjectsOutput {
                    bucket: args.bucket,
                    prefix: args.prefix,
                    count: total,
                });
            } else {
                formatter.println(&format!("Total: {total} objects"));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to count bucket '{}': {e}", args.bucket));
            ExitCode::from_error(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::ScriptedStore;
    use s3cli_core::{ObjectEntry, ObjectPage};

    fn page_of(keys: &[&str], next: Option<&str>) -> ObjectPage {
        ObjectPage {
            entries: keys.iter().map(|k| ObjectEntry::new(*k, 1)).collect(),
            next_token: next.map(String::from),
        }
    }

    fn args() -> CountObjectsArgs {
        CountObjectsArgs {
            bucket: "test6".into(),
            prefix: None,
        }
    }

    /// Pages of 2+2+1 objects count to exactly 5.
    #[tokio::test]
    async fn test_count_objects_across_pages() {
        let store = ScriptedStore::with_pages(vec![
            page_of(&["a", "b"], Some("t1")),
            page_of(&["c", "d"], Some("t2")),
            page_of(&["e"], None),
        ]);

        let code = execute(args(), &store, OutputConfig::default()).await;
        assert_eq!(code, ExitCode::Success);
        // All pages were consumed
        assert!(store.pages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_count_objects_empty_bucket() {
        let store = ScriptedStore::with_pages(vec![page_of(&[], None)]);
        let code = execute(args(), &store, OutputConfig::default()).await;
        assert_eq!(code, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_count_objects_error_reported() {
        let store = ScriptedStore {
            fail: true,
            ..Default::default()
        };
        let code = execute(args(), &store, OutputConfig::default()).await;
        assert_eq!(code, ExitCode::ServiceError);
    }
}
