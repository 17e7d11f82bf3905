//! # Content Hygiene
//!
//! Body validation and masking for posts. This sits at the caller seam, in
//! front of the store: the store persists whatever it is given, callers run
//! bodies through here first.

use thiserror::Error;

/// Longest permitted post body, in characters.
pub const MAX_BODY_LEN: usize = 140;

/// Words replaced by the mask, matched case-insensitively.
const MASKED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

const MASK: &str = "****";

/// Result type for content checks
pub type ContentResult<T> = Result<T, ContentError>;

/// Content validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// Body is empty
    #[error("post body is missing")]
    EmptyBody,

    /// Body exceeds [`MAX_BODY_LEN`] characters
    #[error("post body exceeds {MAX_BODY_LEN} characters")]
    BodyTooLong,
}

/// Check a post body against the length rules.
pub fn validate_body(body: &str) -> ContentResult<()> {
    if body.is_empty() {
        return Err(ContentError::EmptyBody);
    }
    if body.chars().count() > MAX_BODY_LEN {
        return Err(ContentError::BodyTooLong);
    }
    Ok(())
}

/// Mask disallowed words in a body, preserving everything else verbatim.
///
/// Matching is whole-word on single spaces; punctuation attached to a word
/// defeats the mask, which is accepted behavior.
pub fn clean_body(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            if MASKED_WORDS
                .iter()
                .any(|masked| word.eq_ignore_ascii_case(masked))
            {
                MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
