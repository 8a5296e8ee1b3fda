//! Header-name derivation for the `S3_CLI_HTTP_*` injection convention
//!
//! Any environment variable named `S3_CLI_HTTP_<NAME>` becomes an outbound
//! HTTP header: the prefix is stripped, the remainder lower-cased, and
//! (when the dash transform is enabled) underscores become dashes. Values
//! pass through unmodified. The caller snapshots the environment once at
//! startup so behavior stays deterministic within one run.

/// Prefix marking environment variables that become request headers
pub const HEADER_ENV_PREFIX: &str = "S3_CLI_HTTP_";

/// Derive the injected header list from an environment snapshot.
///
/// Returns `(name, value)` pairs in the order the snapshot yields them.
/// No validation of header names or values is performed; the transport
/// rejects anything malformed.
pub fn derive_headers(
    vars: impl IntoIterator<Item = (String, String)>,
    dash_transform: bool,
) -> Vec<(String, String)> {
    vars.into_iter()
        .filter_map(|(name, value)| {
            let rest = name.strip_prefix(HEADER_ENV_PREFIX)?;
            if rest.is_empty() {
                return None;
            }
            let mut header = rest.to_lowercase();
            if dash_transform {
                header = header.replace('_', "-");
            }
            Some((header, value))
        })
        .collect()
}
