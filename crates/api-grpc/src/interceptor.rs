use api_shared::auth::{self, API_KEY_HEADER};
use std::sync::Arc;
use tonic::service::Interceptor;
use tonic::{Request, Status};

/// Authentication interceptor for gRPC requests.
///
/// With no key configured every call passes through. Otherwise the call must carry an
/// `x-api-key` metadata entry equal to the configured key.
#[derive(Clone, Debug, Default)]
pub struct ApiKeyInterceptor {
    expected: Option<Arc<str>>,
}

impl ApiKeyInterceptor {
    pub fn new(expected: Option<&str>) -> Self {
        Self {
            expected: expected.map(Arc::from),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.expected.is_some()
    }
}

impl Interceptor for ApiKeyInterceptor {
    fn call(&mut self, req: Request<()>) -> Result<Request<()>, Status> {
        let Some(expected) = self.expected.as_deref() else {
            return Ok(req);
        };

        let api_key = req
            .metadata()
            .get(API_KEY_HEADER)
            .ok_or_else(|| Status::unauthenticated("Missing x-api-key header"))?
            .to_str()
            .map_err(|_| Status::unauthenticated("Invalid API key"))?;

        auth::validate_api_key(api_key, expected)?;
        Ok(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::metadata::AsciiMetadataValue;
    use tonic::Code;

    fn request_with_key(key: &str) -> Request<()> {
        let mut req = Request::new(());
        req.metadata_mut()
            .insert(API_KEY_HEADER, key.parse().expect("valid metadata value"));
        req
    }

    #[test]
    fn test_disabled_interceptor_lets_everything_through() {
        let mut interceptor = ApiKeyInterceptor::new(None);
        assert!(!interceptor.is_enabled());
        assert!(interceptor.call(Request::new(())).is_ok());
    }

    #[test]
    fn test_missing_key_is_unauthenticated() {
        let mut interceptor = ApiKeyInterceptor::new(Some("secret"));
        let status = interceptor
            .call(Request::new(()))
            .expect_err("missing key should be rejected");
        assert_eq!(status.code(), Code::Unauthenticated);
        assert_eq!(status.message(), "Missing x-api-key header");
    }

    #[test]
    fn test_wrong_key_is_unauthenticated() {
        let mut interceptor = ApiKeyInterceptor::new(Some("secret"));
        let status = interceptor
            .call(request_with_key("guess"))
            .expect_err("wrong key should be rejected");
        assert_eq!(status.message(), "Invalid API key");
    }

    #[test]
    fn test_non_ascii_key_is_invalid_not_missing() {
        let mut req = Request::new(());
        let value = AsciiMetadataValue::try_from(&b"caf\xe9"[..]).expect("opaque header bytes");
        req.metadata_mut().insert(API_KEY_HEADER, value);

        let mut interceptor = ApiKeyInterceptor::new(Some("secret"));
        let status = interceptor
            .call(req)
            .expect_err("unreadable key should be rejected");
        assert_eq!(status.code(), Code::Unauthenticated);
        assert_eq!(status.message(), "Invalid API key");
    }

    #[test]
    fn test_matching_key_passes() {
        let mut interceptor = ApiKeyInterceptor::new(Some("secret"));
        assert!(interceptor.call(request_with_key("secret")).is_ok());
    }
}
