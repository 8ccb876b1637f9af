//! URL 验证模块
//!
//! 链接字段的格式检查，阻止危险协议

use url::Url;

/// URL 验证错误
#[derive(Debug, PartialEq, Eq)]
pub enum UrlValidationError {
    Empty,
    UnsupportedScheme(String),
    Malformed(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "URL cannot be empty"),
            Self::UnsupportedScheme(scheme) => {
                write!(f, "Unsupported scheme {}: only http and https", scheme)
            }
            Self::Malformed(msg) => write!(f, "Invalid URL: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 验证链接字段
///
/// 检查项目：
/// 1. 非空
/// 2. 必须是 http:// 或 https://
/// 3. 格式有效
pub fn validate_link(raw: &str) -> Result<(), UrlValidationError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let parsed = Url::parse(raw).map_err(|e| UrlValidationError::Malformed(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(UrlValidationError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_links() {
        assert!(validate_link("http://example.com").is_ok());
        assert!(validate_link("https://example.com/path?query=1").is_ok());
        assert!(validate_link("http://localhost:8080").is_ok());
        assert!(validate_link("  https://example.com  ").is_ok());
    }

    #[test]
    fn test_empty_link() {
        assert_eq!(validate_link(""), Err(UrlValidationError::Empty));
        assert_eq!(validate_link("   "), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_unsupported_schemes() {
        assert!(matches!(
            validate_link("javascript:alert(1)"),
            Err(UrlValidationError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            validate_link("ftp://example.com"),
            Err(UrlValidationError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            validate_link("file:///etc/passwd"),
            Err(UrlValidationError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            validate_link("not a url"),
            Err(UrlValidationError::Malformed(_))
        ));
        assert!(matches!(
            validate_link("http://"),
            Err(UrlValidationError::Malformed(_))
        ));
    }
}
