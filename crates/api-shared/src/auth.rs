/// Metadata key carrying the API key on every call.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Validates the provided API key against the expected key.
///
/// Returns `Ok(())` if the keys match, or `Unauthenticated` otherwise.
#[allow(clippy::result_large_err)]
pub fn validate_api_key(provided_key: &str, expected_key: &str) -> Result<(), tonic::Status> {
    if provided_key == expected_key {
        Ok(())
    } else {
        Err(tonic::Status::unauthenticated("Invalid API key"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_key_is_accepted() {
        assert!(validate_api_key("secret", "secret").is_ok());
    }

    #[test]
    fn test_mismatched_key_is_unauthenticated() {
        let status = validate_api_key("guess", "secret").expect_err("should reject");
        assert_eq!(status.code(), tonic::Code::Unauthenticated);
        assert_eq!(status.message(), "Invalid API key");
    }
}
