use url::Url;

use crate::utils::error::{Result, SpotterError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SpotterError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SpotterError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SpotterError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("ip_endpoint", "https://api.ipify.org?format=json").is_ok());
        assert!(validate_url("flyover_endpoint", "http://api.open-notify.org/iss-pass.json").is_ok());
        assert!(validate_url("geo_endpoint", "").is_err());
        assert!(validate_url("geo_endpoint", "not-a-url").is_err());
        assert!(validate_url("geo_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_url_error_carries_field_and_value() {
        let err = validate_url("geo_endpoint", "ftp://example.com").unwrap_err();
        match err {
            SpotterError::InvalidConfigValue { field, value, .. } => {
                assert_eq!(field, "geo_endpoint");
                assert_eq!(value, "ftp://example.com");
            }
            other => panic!("expected InvalidConfigValue, got {:?}", other),
        }
    }
}
