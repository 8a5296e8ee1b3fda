//! Sequential page cursor over a listing
//!
//! A lazy sequence of listing pages: each `next_page` call issues one
//! request and carries the continuation token forward. `list-objects`
//! consumes a single page; `count-objects` folds the sequence to
//! exhaustion. The final count never depends on page boundaries.

use crate::error::Result;
use crate::store::{ObjectPage, ObjectStore};

/// Cursor over the pages of one bucket/prefix listing
pub struct Pages<'a> {
    store: &'a dyn ObjectStore,
    bucket: &'a str,
    prefix: Option<&'a str>,
    token: Option<String>,
    done: bool,
}

impl<'a> Pages<'a> {
    /// Start a cursor at the first page
    pub fn new(store: &'a dyn ObjectStore, bucket: &'a str, prefix: Option<&'a str>) -> Self {
        Self {
            store,
            bucket,
            prefix,
            token: None,
            done: false,
        }
    }

    /// Fetch the next page, or None once the listing is exhausted
    pub async fn next_page(&mut self) -> Result<Option<ObjectPage>> {
        if self.done {
            return Ok(None);
        }

        let page = self
            .store
            .list_page(self.bucket, self.prefix, self.token.as_deref())
            .await?;

        self.token = page.next_token.clone();
        if self.token.is_none() {
            self.done = true;
        }

        Ok(Some(page))
    }

    /// Consume the remaining pages, accumulating a total object count.
    ///
    /// `on_page` receives the running total after each page, so callers can
    /// surface progress while the listing is still in flight.
    pub async fn fold_count(mut self, mut on_page: impl FnMut(u64)) -> Result<u64> {
        let mut total: u64 = 0;

        while let Some(page) = self.next_page().await? {
            total += page.entries.len() as u64;
            on_page(total);
        }

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MockObjectStore, ObjectEntry};

    fn page_of(keys: &[&str], next: Option<&str>) -> ObjectPage {
        ObjectPage {
            entries: keys.iter().map(|k| ObjectEntry::new(*k, 1)).collect(),
            next_token: next.map(String::from),
        }
    }

    /// Three pages of 2+2+1 objects must count to exactly 5.
    #[tokio::test]
    async fn test_fold_count_across_pages() {
        let mut store = MockObjectStore::new();
        store
            .expect_list_page()
            .withf(|bucket, prefix, token| {
                bucket == "b" && prefix.is_none() && token.is_none()
            })
            .times(1)
            .returning(|_, _, _| Ok(page_of(&["a", "b"], Some("t1"))));
        store
            .expect_list_page()
            .withf(|_, _, token| token == &Some("t1"))
            .times(1)
            .returning(|_, _, _| Ok(page_of(&["c", "d"], Some("t2"))));
        store
            .expect_list_page()
            .withf(|_, _, token| token == &Some("t2"))
            .times(1)
            .returning(|_, _, _| Ok(page_of(&["e"], None)));

        let mut running = Vec::new();
        let total = Pages::new(&store, "b", None)
            .fold_count(|n| running.push(n))
            .await
            .unwrap();

        assert_eq!(total, 5);
        assert_eq!(running, vec![2, 4, 5]);
    }

    #[tokio::test]
    async fn test_single_page_listing() {
        let mut store = MockObjectStore::new();
        store
            .expect_list_page()
            .times(1)
            .returning(|_, _, _| Ok(page_of(&["only"], None)));

        let mut pages = Pages::new(&store, "b", None);
        let first = pages.next_page().await.unwrap().unwrap();
        assert_eq!(first.entries.len(), 1);

        // Exhausted: no further request is issued
        assert!(pages.next_page().await.unwrap().is_none());
    }

    /// Consuming only the first page leaves the rest of the listing alone.
    #[tokio::test]
    async fn test_first_page_only_consumption() {
        let mut store = MockObjectStore::new();
        store
            .expect_list_page()
            .times(1)
            .returning(|_, _, _| Ok(page_of(&["a"], Some("more"))));

        let mut pages = Pages::new(&store, "b", None);
        let first = pages.next_page().await.unwrap().unwrap();
        assert_eq!(first.next_token.as_deref(), Some("more"));
        // Dropping the cursor here must not trigger another request;
        // the mock's times(1) enforces that.
    }

    /// The prefix must reach the store unmodified.
    #[tokio::test]
    async fn test_prefix_passed_through() {
        let mut store = MockObjectStore::new();
        store
            .expect_list_page()
            .withf(|_, prefix, _| prefix == &Some("logs/2024_"))
            .times(1)
            .returning(|_, _, _| Ok(page_of(&[], None)));

        let total = Pages::new(&store, "b", Some("logs/2024_"))
            .fold_count(|_| {})
            .await
            .unwrap();
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn test_error_propagates() {
        let mut store = MockObjectStore::new();
        store
            .expect_list_page()
            .times(1)
            .returning(|_, _, _| Err(crate::Error::Service("boom".into())));

        let result = Pages::new(&store, "b", None).fold_count(|_| {}).await;
        assert!(result.is_err());
    }
}
