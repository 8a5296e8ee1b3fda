//! Request header injection
//!
//! The environment is snapshotted once at startup and turned into a fixed
//! list of headers; this interceptor sets them on every outbound request
//! before signing, overwriting any existing header of the same name. Header
//! names and values are not validated here; the transport rejects anything
//! malformed.

use aws_smithy_runtime_api::box_error::BoxError;
use aws_smithy_runtime_api::client::interceptors::context::BeforeTransmitInterceptorContextMut;
use aws_smithy_runtime_api::client::interceptors::Intercept;
use aws_smithy_runtime_api::client::runtime_components::RuntimeComponents;
use aws_smithy_types::config_bag::ConfigBag;

use s3cli_core::derive_headers;

/// Interceptor that adds the `S3_CLI_HTTP_*` headers to each request
#[derive(Debug, Clone, Default)]
pub struct HeaderInjector {
    headers: Vec<(String, String)>,
}

impl HeaderInjector {
    /// Snapshot the current process environment
    pub fn from_env(dash_transform: bool) -> Self {
        Self::from_vars(std::env::vars(), dash_transform)
    }

    /// Build from an explicit environment snapshot
    pub fn from_vars(
        vars: impl IntoIterator<Item = (String, String)>,
        dash_transform: bool,
    ) -> Self {
        Self {
            headers: derive_headers(vars, dash_transform),
        }
    }

    /// The derived header list, in snapshot order
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

impl Intercept for HeaderInjector {
    fn name(&self) -> &'static str {
        "HeaderInjector"
    }

    fn modify_before_signing(
        &self,
        context: &mut BeforeTransmitInterceptorContextMut<'_>,
        _runtime_components: &RuntimeComponents,
        _cfg: &mut ConfigBag,
    ) -> Result<(), BoxError> {
        let headers = context.request_mut().headers_mut();
        for (name, value) in &self.headers {
            tracing::debug!(header = %name, "injecting request header");
            headers.try_insert(name.clone(), value.clone())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_snapshot_derivation() {
        let injector = HeaderInjector::from_vars(
            vars(&[("S3_CLI_HTTP_Foo_Bar", "baz"), ("HOME", "/root")]),
            true,
        );
        assert_eq!(
            injector.headers(),
            &[("foo-bar".to_string(), "baz".to_string())]
        );
    }

    #[test]
    fn test_no_transform() {
        let injector =
            HeaderInjector::from_vars(vars(&[("S3_CLI_HTTP_Foo_Bar", "baz")]), false);
        assert_eq!(
            injector.headers(),
            &[("foo_bar".to_string(), "baz".to_string())]
        );
    }

    #[test]
    fn test_empty_environment() {
        let injector = HeaderInjector::from_vars(std::iter::empty(), true);
        assert!(injector.is_empty());
    }
}
