//! Release-note extraction from PR descriptions
//!
//! A release note is written as a fenced block in the PR body:
//!
//! ````text
//! ```release-note
//! Fixed the crash on startup
//! ```
//! ````
//!
//! Only the first block counts. The scan is line-based: the opening fence
//! must be a whole line followed by a newline, and the block ends at the
//! first line that is exactly three backticks.

use crate::types::ReleaseNoteExtraction;

/// Opening fence line of a release-note block
const OPEN_FENCE: &str = "```release-note";

/// Closing fence line
const CLOSE_FENCE: &str = "```";

/// Release note used when the description has none
pub const NO_RELEASE_NOTE: &str = "NONE";

/// Byte ranges of a fenced block within the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FencedBlock {
    /// Start of the opening fence line
    start: usize,
    /// End of the closing fence (excluding its line terminator)
    end: usize,
    /// Start of the first content line
    content_start: usize,
    /// End of the content (excluding the newline before the closing fence)
    content_end: usize,
}

/// Iterate lines with their byte offset, keeping terminators
fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split_inclusive('\n').scan(0, |offset, line| {
        let start = *offset;
        *offset += line.len();
        Some((start, line))
    })
}

/// Line text without `\n` or `\r\n`
fn line_text(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Find the first complete release-note block
fn find_block(body: &str) -> Option<FencedBlock> {
    let mut lines = lines_with_offsets(body);

    // Opening fence: a whole line, and something must follow it
    let (start, content_start) = lines.by_ref().find_map(|(offset, line)| {
        (line.ends_with('\n') && line_text(line) == OPEN_FENCE)
            .then_some((offset, offset + line.len()))
    })?;

    // Closing fence: the first line after the opening that is exactly ```
    let (close_start, close_line) = lines.find(|(_, line)| line_text(line) == CLOSE_FENCE)?;

    // Content excludes the line break in front of the closing fence
    let before_close = &body[content_start..close_start];
    let content_len = before_close
        .strip_suffix('\n')
        .map_or(before_close.len(), |s| s.strip_suffix('\r').unwrap_or(s).len());

    Some(FencedBlock {
        start,
        end: close_start + line_text(close_line).len(),
        content_start,
        content_end: content_start + content_len,
    })
}

/// Split a PR body into description and release note
///
/// - No block: the whole body is the description, the note is `"NONE"`.
/// - Block with only whitespace: same as no block; the block is left in
///   the description.
/// - Block with content: the block is cut out of the description and its
///   trimmed content becomes the note.
pub fn extract_release_note(body: &str) -> ReleaseNoteExtraction {
    let unchanged = || ReleaseNoteExtraction {
        description: body.to_string(),
        release_note: NO_RELEASE_NOTE.to_string(),
    };

    let Some(block) = find_block(body) else {
        return unchanged();
    };

    let note = body[block.content_start..block.content_end].trim();
    if note.is_empty() {
        return unchanged();
    }

    let mut description = String::with_capacity(body.len() - (block.end - block.start));
    description.push_str(&body[..block.start]);
    description.push_str(&body[block.end..]);

    ReleaseNoteExtraction {
        description,
        release_note: note.to_string(),
    }
}
