// WHY: marker re-segmentation on regex-automata's meta engine
// Non-overlapping leftmost-first matches give each digit run to at most one marker

use anyhow::Result;
use regex_automata::meta::Regex;
use tracing::debug;

use super::whitespace::is_collapsible;

/// Bracketed run of decimal digits, e.g. `[7]` or `[128]`
pub const MARKER_PATTERN: &str = r"\[\d+\]";

/// Finds markers and moves each one (except a leading one) onto its own line
#[derive(Debug, Clone)]
pub struct MarkerSegmenter {
    regex: Regex,
}

impl MarkerSegmenter {
    pub fn new() -> Result<Self> {
        let regex = Regex::new(MARKER_PATTERN)?;
        debug!("Compiled marker pattern: {}", MARKER_PATTERN);
        Ok(Self { regex })
    }

    /// Byte offsets of every marker in `text`, in order
    pub fn find_markers(&self, text: &str) -> Vec<(usize, usize)> {
        self.regex
            .find_iter(text)
            .map(|m| (m.start(), m.end()))
            .collect()
    }

    /// Rewrite `text` so every marker not at offset 0 starts a new line
    pub fn segment(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        self.segment_into(text, &mut result);
        result
    }

    /// Segment into supplied buffer, returning how many line breaks were inserted
    ///
    /// The whitespace run directly before a marker is replaced by a single `\n`.
    /// The run never reaches back past the end of the previous marker, and the
    /// character at offset 0 is never consumed.
    pub fn segment_into(&self, text: &str, buffer: &mut String) -> usize {
        buffer.clear();
        buffer.reserve(text.len() + 8);

        let mut copied_to = 0;
        let mut inserted = 0;

        for m in self.regex.find_iter(text) {
            if m.start() == 0 {
                continue;
            }

            let gap = &text[copied_to..m.start()];
            let mut break_at = copied_to + gap.trim_end_matches(is_collapsible).len();
            if break_at == 0 {
                // Offset 0 stays in place even when it is whitespace
                break_at = text.chars().next().map_or(0, char::len_utf8);
            }

            buffer.push_str(&text[copied_to..break_at]);
            buffer.push('\n');
            buffer.push_str(&text[m.start()..m.end()]);
            copied_to = m.end();
            inserted += 1;
        }

        buffer.push_str(&text[copied_to..]);
        inserted
    }
}
