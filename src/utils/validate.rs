//! Paper identifier validation.
//!
//! Identifiers become filenames in the paper store, so anything that could
//! escape the store directory is rejected before it reaches the filesystem.

use thiserror::Error;

/// Validation error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid paper ID: empty ID")]
    Empty,

    #[error("Invalid paper ID: contains control characters")]
    ControlCharacter,

    #[error("Path traversal detected: {0}")]
    PathTraversal(String),
}

/// Validate a paper ID and return it trimmed
///
/// Old-style arXiv identifiers (`hep-th/9901001v1`) contain a single `/`,
/// which is allowed here; the store maps it to a filename separately.
pub fn validate_paper_id(id: &str) -> Result<&str, ValidationError> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Empty);
    }

    if id.chars().any(char::is_control) {
        return Err(ValidationError::ControlCharacter);
    }

    if id.contains("..") || id.contains('\\') || id.starts_with('/') || id.ends_with('/') {
        return Err(ValidationError::PathTraversal(id.to_string()));
    }

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        assert_eq!(validate_paper_id("2301.12345v1"), Ok("2301.12345v1"));
        assert_eq!(validate_paper_id("  2301.12345  "), Ok("2301.12345"));
        assert_eq!(validate_paper_id("hep-th/9901001v1"), Ok("hep-th/9901001v1"));
    }

    #[test]
    fn test_empty_id() {
        assert_eq!(validate_paper_id(""), Err(ValidationError::Empty));
        assert_eq!(validate_paper_id("   "), Err(ValidationError::Empty));
    }

    #[test]
    fn test_path_traversal() {
        assert!(matches!(
            validate_paper_id("../../etc/passwd"),
            Err(ValidationError::PathTraversal(_))
        ));
        assert!(matches!(
            validate_paper_id("/etc/passwd"),
            Err(ValidationError::PathTraversal(_))
        ));
        assert!(matches!(
            validate_paper_id("a\\b"),
            Err(ValidationError::PathTraversal(_))
        ));
    }

    #[test]
    fn test_control_characters() {
        assert_eq!(
            validate_paper_id("2301\0.12345"),
            Err(ValidationError::ControlCharacter)
        );
    }
}
