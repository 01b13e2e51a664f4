//! Book validation

use thiserror::Error;

/// Errors that can occur during book validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BookValidationError {
    #[error("missing required field title")]
    MissingTitle,

    #[error("missing required field comment")]
    MissingComment,

    #[error("Book ID '{0}' is not a valid identifier")]
    InvalidId(String),
}

/// Validate a book title. Presence is the only rule.
pub fn validate_title(title: &str) -> Result<(), BookValidationError> {
    if title.is_empty() {
        return Err(BookValidationError::MissingTitle);
    }

    Ok(())
}

/// Validate a comment before it is appended
pub fn validate_comment(comment: &str) -> Result<(), BookValidationError> {
    if comment.is_empty() {
        return Err(BookValidationError::MissingComment);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_title() {
        assert!(validate_title("Zen").is_ok());
        assert!(validate_title(" ").is_ok());
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(validate_title(""), Err(BookValidationError::MissingTitle));
    }

    #[test]
    fn test_empty_comment() {
        assert_eq!(
            validate_comment(""),
            Err(BookValidationError::MissingComment)
        );
        assert!(validate_comment("great read").is_ok());
    }

    #[test]
    fn test_messages_match_wire_text() {
        assert_eq!(
            BookValidationError::MissingTitle.to_string(),
            "missing required field title"
        );
        assert_eq!(
            BookValidationError::MissingComment.to_string(),
            "missing required field comment"
        );
    }
}
