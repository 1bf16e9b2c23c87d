use super::ValidationError;
use std::fmt;
use url::Url;

/// The Notion integration token sent as a bearer credential.
///
/// An empty token is accepted: the upstream rejects it with 401 and the
/// request fails through the regular failure path.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create a new API key, trimming surrounding whitespace
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_string())
    }

    /// An absent token
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Get the API key as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the key has one of the prefixes Notion issues tokens with.
    pub fn has_known_prefix(&self) -> bool {
        self.0.starts_with("secret_") || self.0.starts_with("ntn_")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Redact API key in display
        let visible: String = self.0.chars().take(6).collect();
        write!(f, "{}...", visible)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({})", self)
    }
}

/// Validated URL type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl(Url);

impl ValidatedUrl {
    /// Create a new validated http(s) URL
    pub fn parse(url: &str) -> Result<Self, ValidationError> {
        let parsed_url = Url::parse(url).map_err(|e| ValidationError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
            return Err(ValidationError::InvalidUrl {
                url: url.to_string(),
                reason: "URL must use http or https scheme".to_string(),
            });
        }

        Ok(Self(parsed_url))
    }

    /// The URL without a trailing slash, ready to have paths appended.
    pub fn as_base(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }
}

impl fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
