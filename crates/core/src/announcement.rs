//! Announcement content validation.

/// Maximum length of an announcement in characters.
pub const MAX_ANNOUNCEMENT_LENGTH: usize = 10_000;

/// Validate announcement content: non-blank and within the length ceiling.
pub fn validate_content(content: &str) -> Result<(), String> {
    if content.trim().is_empty() {
        return Err("Announcement content cannot be empty".to_string());
    }
    if content.chars().count() > MAX_ANNOUNCEMENT_LENGTH {
        return Err(format!(
            "Announcement exceeds maximum length of {MAX_ANNOUNCEMENT_LENGTH} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_content_accepted() {
        assert!(validate_content("Office closed on Friday.").is_ok());
    }

    #[test]
    fn empty_content_rejected() {
        let result = validate_content("");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("cannot be empty"));
    }

    #[test]
    fn whitespace_only_rejected() {
        assert!(validate_content("   \n\t").is_err());
    }

    #[test]
    fn content_at_limit_accepted() {
        let content = "a".repeat(MAX_ANNOUNCEMENT_LENGTH);
        assert!(validate_content(&content).is_ok());
    }

    #[test]
    fn content_over_limit_rejected() {
        let content = "a".repeat(MAX_ANNOUNCEMENT_LENGTH + 1);
        let result = validate_content(&content);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("exceeds maximum length"));
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        // Multibyte characters at exactly the limit must still pass.
        let content = "é".repeat(MAX_ANNOUNCEMENT_LENGTH);
        assert!(validate_content(&content).is_ok());
    }
}
