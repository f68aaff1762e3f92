use crate::constants::*;

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn validate_required(field: &str, value: &str, max: usize) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{} is required", field));
    }
    if char_len(value) > max {
        return Err(format!("{} must be at most {} characters", field, max));
    }
    Ok(())
}

pub fn validate_content(content: &str) -> Result<(), String> {
    validate_required("Content", content, MAX_CONTENT_LENGTH)
}

pub fn validate_author(author: &str) -> Result<(), String> {
    validate_required("Author", author, MAX_AUTHOR_LENGTH)
}

/// Server-side check for the `username` field of a request body.
pub fn validate_request_username(username: &str) -> Result<(), String> {
    validate_required("Username", username, MAX_USERNAME_LENGTH)
}

/// Stricter check applied to the username a client is configured with.
pub fn validate_username(username: &str) -> Result<(), String> {
    let len = char_len(username);
    if len < MIN_USERNAME_LENGTH {
        return Err(format!(
            "Username must be at least {} characters",
            MIN_USERNAME_LENGTH
        ));
    }
    if len > MAX_USERNAME_LENGTH {
        return Err(format!(
            "Username must be at most {} characters",
            MAX_USERNAME_LENGTH
        ));
    }
    Ok(())
}
