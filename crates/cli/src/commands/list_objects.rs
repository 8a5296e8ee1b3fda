//! list-objects command
//!
//! Shows a single listing page. Unlike count-objects, this command does not
//! paginate: only the first page is printed, by design.

use clap::Args;

use s3cli_core::{ObjectStore, Pages};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// List the first page of objects in a bucket
#[derive(Args, Debug)]
pub struct ListObjectsArgs {
    /// Bucket name
    #[arg(short, long)]
    pub bucket: String,

    /// Key prefix to filter by, passed through unmodified
    #[arg(short, long)]
    pub prefix: Option<String>,
}

/// Execute the list-objects command
pub async fn execute(
    args: ListObjectsArgs,
    store: &dyn ObjectStore,
    output_config: OutputConfig,
) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let mut pages = Pages::new(store, &args.bucket, args.prefix.as_deref());

    match pages.next_page().await {
        Ok(Some(page)) => {
            if formatter.is_json() {
                formatter.json(&page);
            } else {
                for entry in &page.entries {
                    let date = entry
                        .last_modified
                        .map(|d| d.strftime("%Y-%m-%d %H:%M:%S").to_string())
                        .unwrap_or_else(|| "                   ".to_string());
                    let size = entry.size_human.as_deref().unwrap_or("0 B");
                    formatter.println(&format!("[{date}] {size:>9} {}", entry.key));
                }
            }
            ExitCode::Success
        }
        Ok(None) => ExitCode::Success,
        Err(e) => {
            formatter.error(&format!("Failed to list bucket '{}': {e}", args.bucket));
            ExitCode::from_error(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::ScriptedStore;
    use s3cli_core::{ObjectEntry, ObjectPage};

    fn args(prefix: Option<&str>) -> ListObjectsArgs {
        ListObjectsArgs {
            bucket: "test6".into(),
            prefix: prefix.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_list_objects_single_page() {
        let store = ScriptedStore::with_pages(vec![
            ObjectPage {
                entries: vec![ObjectEntry::new("a.txt", 5), ObjectEntry::new("b.txt", 6)],
                next_token: Some("more".into()),
            },
            // A second page exists but must never be requested.
            ObjectPage {
                entries: vec![ObjectEntry::new("c.txt", 7)],
                next_token: None,
            },
        ]);

        let code = execute(args(None), &store, OutputConfig::default()).await;
        assert_eq!(code, ExitCode::Success);
        // Only the first page was consumed
        assert_eq!(store.pages.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_objects_prefix_passed_through() {
        let store = ScriptedStore::default();
        let code = execute(args(Some("logs/2024_")), &store, OutputConfig::default()).await;
        assert_eq!(code, ExitCode::Success);
        assert_eq!(
            store.seen_prefixes.lock().unwrap().as_slice(),
            &[Some("logs/2024_".to_string())]
        );
    }

    #[tokio::test]
    async fn test_list_objects_error_reported() {
        let store = ScriptedStore {
            fail: true,
            ..Default::default()
        };
        let code = execute(args(None), &store, OutputConfig::default()).await;
        assert_eq!(code, ExitCode::ServiceError);
    }
}
