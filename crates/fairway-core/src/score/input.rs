use crate::error::{Error, Result};

use super::MAX_STROKES;

/// Parse a typed score.
///
/// Surrounding whitespace is ignored. Anything that is not a plain
/// non-negative integer (empty text, signs, trailing junk like "5x",
/// decimals) is rejected rather than coerced, as is anything above
/// `MAX_STROKES`.
pub fn parse_score(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidScoreInput(text.to_string()));
    }
    trimmed
        .parse::<u32>()
        .ok()
        .filter(|&score| score <= MAX_STROKES)
        .ok_or_else(|| Error::InvalidScoreInput(text.to_string()))
}

/// Reject a stroke count above `MAX_STROKES`
pub fn check_strokes(score: u32) -> Result<u32> {
    if score > MAX_STROKES {
        return Err(Error::InvalidScoreInput(score.to_string()));
    }
    Ok(score)
}
