//! Message formatter - splits long answers into transport-sized chunks.
//!
//! Cuts prefer a blank line, then a single newline, then a hard cut at the
//! limit. Leading whitespace of every following chunk is dropped.
//! Lengths count Unicode scalar values.

use crate::error::{CoreError, CoreResult};

/// Telegram message size ceiling
pub const MAX_MESSAGE_CHARS: usize = 4096;

/// Split `text` into chunks of at most `limit` characters.
///
/// Text within the limit is returned whole. Otherwise every remainder,
/// including the last one, is cut again at its own last separator.
pub fn chunk(text: &str, limit: usize) -> CoreResult<Vec<String>> {
    if limit < 1 {
        return Err(CoreError::InvalidLimit(limit));
    }
    if byte_offset(text, limit).is_none() {
        return Ok(vec![text.to_string()]);
    }

    let mut chunks = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let window_end = byte_offset(rest, limit).unwrap_or(rest.len());
        let cut = find_cut(&rest[..window_end]).unwrap_or(window_end);
        chunks.push(rest[..cut].to_string());
        rest = rest[cut..].trim_start();
    }
    Ok(chunks)
}

/// Byte offset of the `limit`-th character, or `None` when `text` has
/// at most `limit` characters.
fn byte_offset(text: &str, limit: usize) -> Option<usize> {
    text.char_indices().nth(limit).map(|(i, _)| i)
}

/// Last paragraph break, else last line break, inside `window`.
///
/// A separator at offset 0 is not a cut: it would emit an empty chunk.
fn find_cut(window: &str) -> Option<usize> {
    window
        .rfind("\n\n")
        .filter(|&i| i > 0)
        .or_else(|| window.rfind('\n').filter(|&i| i > 0))
}
