// WHY: line-break removal and whitespace collapse share one pass over the text
// Keeps the marker stage working on text that already has single-space separators

/// Characters folded into a single space: Unicode whitespace plus the
/// FS/GS/RS/US information separators (U+001C..U+001F)
pub fn is_collapsible(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '\u{1c}'..='\u{1f}')
}

/// Flatten text onto one line: every line break and whitespace run becomes one space
/// \r\n counts as a single break; leading and trailing whitespace is dropped
pub fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    collapse_whitespace_into(text, &mut result);
    result
}

/// Collapse into supplied buffer, returning the number of line breaks consumed
/// (`\r\n`, `\n` and `\r` each count once)
/// WHY: enables buffer reuse when one normalizer handles many files
pub fn collapse_whitespace_into(text: &str, buffer: &mut String) -> usize {
    buffer.clear();
    buffer.reserve(text.len());

    let mut chars = text.chars().peekable();
    let mut pending_space = false;
    let mut line_breaks = 0;

    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                // \r\n is one break, not two
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                line_breaks += 1;
                pending_space = true;
            }
            '\n' => {
                line_breaks += 1;
                pending_space = true;
            }
            _ if is_collapsible(ch) => {
                pending_space = true;
            }
            _ => {
                // Leading whitespace never emits a space
                if pending_space && !buffer.is_empty() {
                    buffer.push(' ');
                }
                pending_space = false;
                buffer.push(ch);
            }
        }
    }

    // A trailing run is simply never flushed
    line_breaks
}
