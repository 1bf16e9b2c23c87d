use super::ValidationError;
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Strong typing for IDs with phantom types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

/// Marker types for different ID kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockMarker;

/// Type aliases for specific ID types
pub type PageId = Id<PageMarker>;
pub type BlockId = Id<BlockMarker>;

impl<T> Id<T> {
    /// Parse various Notion ID formats into a normalized ID
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = normalize_notion_id(input)?;
        Ok(Self::from_normalized(normalized))
    }

    /// Create an ID from a string the API handed us, without validation
    pub(crate) fn from_normalized(value: String) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Get the ID as a string reference
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Normalize various Notion ID formats into the 32-character lowercase form
fn normalize_notion_id(input: &str) -> Result<String, ValidationError> {
    let input = input.trim().trim_end_matches('/');

    if input.starts_with("http://") || input.starts_with("https://") {
        return match extract_id_from_url(input) {
            Some(id) => normalize_notion_id(id),
            None => Err(ValidationError::InvalidId(format!(
                "Could not extract ID from URL: {}",
                input
            ))),
        };
    }

    if let Ok(uuid) = Uuid::parse_str(input) {
        return Ok(uuid.as_simple().to_string());
    }

    if input.len() != 32 {
        return Err(ValidationError::InvalidId(format!(
            "Invalid ID length: expected 32 characters, got {}",
            input.len()
        )));
    }

    if !input.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidId(
            "ID must contain only hexadecimal characters".to_string(),
        ));
    }

    Ok(input.to_lowercase())
}

/// Extract ID from Notion URL
///
/// The ID is the tail of the last path segment, either 32 hex characters
/// (`Title-<id>`) or a hyphenated UUID.
fn extract_id_from_url(url: &str) -> Option<&str> {
    let path = url.split(|c| c == '?' || c == '#').next().unwrap_or(url);
    let segment = path.trim_end_matches('/').rsplit('/').next()?;

    [36, 32].into_iter().find_map(|len| {
        let start = segment.len().checked_sub(len)?;
        let candidate = segment.get(start..)?;
        Uuid::parse_str(candidate).ok().map(|_| candidate)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parsing() {
        let id = PageId::parse("2498a22e66db80ffb4cacbca00c8de28").unwrap();
        assert_eq!(id.as_str(), "2498a22e66db80ffb4cacbca00c8de28");

        let id = PageId::parse("2498a22e-66db-80ff-b4ca-cbca00c8de28").unwrap();
        assert_eq!(id.as_str(), "2498a22e66db80ffb4cacbca00c8de28");

        let id = PageId::parse("https://www.notion.so/Dreams-2498a22e66db80ffb4cacbca00c8de28")
            .unwrap();
        assert_eq!(id.as_str(), "2498a22e66db80ffb4cacbca00c8de28");

        let id = PageId::parse("https://www.notion.so/2498A22E66DB80FFB4CACBCA00C8DE28?pvs=4")
            .unwrap();
        assert_eq!(id.as_str(), "2498a22e66db80ffb4cacbca00c8de28");

        let id = PageId::parse("https://www.notion.so/Notes-59833787-2cf9-4fdf-8782-e53db20768a5/")
            .unwrap();
        assert_eq!(id.as_str(), "598337872cf94fdf8782e53db20768a5");
    }

    #[test]
    fn test_invalid_ids() {
        assert!(PageId::parse("too-short").is_err());
        assert!(PageId::parse("zz98a22e66db80ffb4cacbca00c8de28").is_err());
        assert!(PageId::parse("").is_err());
        assert!(PageId::parse("https://www.notion.so/no-id-here").is_err());
    }
}
