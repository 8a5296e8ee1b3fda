//! S3 client implementation
//!
//! Wraps aws-sdk-s3 and implements the ObjectStore trait from s3cli-core.
//! One client is built per process from the loaded settings and shared by
//! every command: static credentials, custom endpoint, path-style
//! addressing, and a fixed placeholder region. No retry, timeout, or
//! pooling configuration beyond SDK defaults.

use std::path::Path;

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{CompletedMultipartUpload, CompletedPart};

use s3cli_core::{Error, ObjectEntry, ObjectPage, ObjectStore, PartEntry, Result, Settings};

use crate::inject::HeaderInjector;

/// Placeholder region; path-style requests against a custom endpoint do not
/// route by region, but the signer requires one.
const PLACEHOLDER_REGION: &str = "us-east-1";

/// S3 client wrapper
pub struct S3Client {
    inner: aws_sdk_s3::Client,
}

impl S3Client {
    /// Build the shared client from the loaded settings, with the header
    /// injector attached to the request pipeline.
    pub async fn new(settings: &Settings, injector: HeaderInjector) -> Result<Self> {
        if let Some(profile) = &settings.profile {
            tracing::debug!(profile, "using configured profile label");
        }

        let credentials = aws_credential_types::Credentials::new(
            settings.access_key_id.clone(),
            settings.secret_access_key.clone(),
            None, // session token
            None, // expiry
            "s3cli-static-credentials",
        );

        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(aws_config::Region::new(PLACEHOLDER_REGION))
            .endpoint_url(&settings.endpoint_url)
            .load()
            .await;

        let s3_config = aws_sdk_s3::config::Builder::from(&config)
            .force_path_style(true)
            .interceptor(injector)
            .build();

        Ok(Self {
            inner: aws_sdk_s3::Client::from_conf(s3_config),
        })
    }

    /// Get the underlying aws-sdk-s3 client
    pub fn inner(&self) -> &aws_sdk_s3::Client {
        &self.inner
    }
}

/// Render an SDK error with its full source chain and classify it.
fn map_sdk_error<E>(what: impl std::fmt::Display, err: E) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    let err_str = format!("{}", DisplayErrorContext(&err));
    if err_str.contains("NotFound")
        || err_str.contains("NoSuchKey")
        || err_str.contains("NoSuchBucket")
        || err_str.contains("NoSuchUpload")
    {
        Error::NotFound(what.to_string())
    } else {
        Error::Service(err_str)
    }
}

fn trim_etag(etag: &str) -> String {
    etag.trim_matches('"').to_string()
}

/// Open a local file as a streaming request body with its length.
async fn file_body(file: &Path) -> Result<(ByteStream, i64)> {
    let size = tokio::fs::metadata(file).await?.len() as i64;
    let body = ByteStream::from_path(file)
        .await
        .map_err(|e| Error::General(format!("failed to open '{}': {e}", file.display())))?;
    Ok((body, size))
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn create_bucket(&self, bucket: &str) -> Result<()> {
        self.inner
            .create_bucket()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| map_sdk_error(format!("bucket '{bucket}'"), e))?;

        Ok(())
    }

    async fn put_object(&self, bucket: &str, key: &str, file: &Path) -> Result<ObjectEntry> {
        let (body, size) = file_body(file).await?;

        let response = self
            .inner
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_length(size)
            .body(body)
            .send()
            .await
            .map_err(|e| map_sdk_error(format!("'{bucket}/{key}'"), e))?;

        let mut entry = ObjectEntry::new(key, size);
        entry.etag = response.e_tag().map(trim_etag);
        entry.last_modified = Some(jiff::Timestamp::now());

        Ok(entry)
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        self.inner
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| map_sdk_error(format!("'{bucket}/{key}'"), e))?;

        Ok(())
    }

    async fn list_page<'a>(
        &self,
        bucket: &str,
        prefix: Option<&'a str>,
        token: Option<&'a str>,
    ) -> Result<ObjectPage> {
        let mut request = self.inner.list_objects_v2().bucket(bucket);

        if let Some(p) = prefix {
            request = request.prefix(p);
        }
        if let Some(t) = token {
            request = request.continuation_token(t);
        }

        let response = request
            .send()
            .await
            .map_err(|e| map_sdk_error(format!("bucket '{bucket}'"), e))?;

        let entries = response
            .contents()
            .iter()
            .map(|object| {
                let key = object.key().unwrap_or_default();
                let size = object.size().unwrap_or(0);
                let mut entry = ObjectEntry::new(key, size);

                if let Some(modified) = object.last_modified() {
                    entry.last_modified = jiff::Timestamp::from_second(modified.secs()).ok();
                }
                if let Some(etag) = object.e_tag() {
                    entry.etag = Some(trim_etag(etag));
                }

                entry
            })
            .collect();

        let next_token = if response.is_truncated().unwrap_or(false) {
            response.next_continuation_token().map(String::from)
        } else {
            None
        };

        Ok(ObjectPage {
            entries,
            next_token,
        })
    }

    async fn create_multipart(&self, bucket: &str, key: &str) -> Result<String> {
        let response = self
            .inner
            .create_multipart_upload()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| map_sdk_error(format!("'{bucket}/{key}'"), e))?;

        response
            .upload_id()
            .map(String::from)
            .ok_or_else(|| Error::General("service returned no upload id".into()))
    }

    async fn upload_part(
        &self,
        bucket: &str,
        key: &str,
        upload_id: &str,
        part_number: i32,
        file: &Path,
    ) -> Result<String> {
        let (body, size) = file_body(file).await?;

        let response = self
            .inner
            .upload_part()
            .bucket(bucket)
            .key(key)
            .upload_id(upload_id)
            .part_number(part_number)
            .content_length(size)
            .body(body)
            .send()
            .await
            .map_err(|e| map_sdk_error(format!("upload '{upload_id}' part {part_number}"), e))?;

        response
            .e_tag()
            .map(trim_etag)
            .ok_or_else(|| Error::General("service returned no part ETag".into()))
    }

    async fn complete_multipart(
        &self,
        bucket: &str,
        key: &str,
        upload_id: &str,
        parts: &[PartEntry],
    ) -> Result<Option<String>> {
        // Parts go out exactly as listed: no reordering, no deduplication.
        let completed: Vec<CompletedPart> = parts
            .iter()
            .map(|p| {
                CompletedPart::builder()
                    .part_number(p.part_number)
                    .e_tag(&p.etag)
                    .build()
            })
            .collect();

        let upload = CompletedMultipartUpload::builder()
            .set_parts(Some(completed))
            .build();

        let response = self
            .inner
            .complete_multipart_upload()
            .bucket(bucket)
            .key(key)
            .upload_id(upload_id)
            .multipart_upload(upload)
            .send()
            .await
            .map_err(|e| map_sdk_error(format!("upload '{upload_id}'"), e))?;

        Ok(response.e_tag().map(trim_etag))
    }
}
