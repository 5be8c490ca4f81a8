//! Input validation for text handed to the classifier by callers.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Input too long: max {max} characters, got {actual}")]
    InputTooLong { max: usize, actual: usize },

    #[error("Invalid characters detected")]
    InvalidCharacters,

    #[error("Empty input not allowed")]
    EmptyInput,
}

/// Validate user input before classification.
///
/// Length is counted in characters, not bytes, so a Japanese request gets the
/// same budget as an ASCII one.
pub fn validate_input(input: &str, max_chars: usize) -> Result<(), ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let actual = input.chars().count();
    if actual > max_chars {
        return Err(ValidationError::InputTooLong {
            max: max_chars,
            actual,
        });
    }

    // Control characters other than newline, tab and carriage return
    if input.chars().any(|c| {
        c.is_control() && c != '\n' && c != '\t' && c != '\r'
    }) {
        return Err(ValidationError::InvalidCharacters);
    }

    Ok(())
}
