//! Block string decoding (`"""..."""`).
//!
//! The decoded value is produced in two passes over the lines of the raw
//! content: pass 1 computes the common indentation of every non-first,
//! non-blank line plus the first and last non-blank line indices, pass 2
//! writes the stripped lines into a single buffer.

use std::borrow::Cow;

/// Decodes the raw content found between the opening and closing `"""`.
///
/// `\"""` is unescaped to `"""`, the common indent is removed from every
/// line except the first, and fully blank leading and trailing lines are
/// dropped. Lines are re-joined with `\n` regardless of the original line
/// terminators.
pub fn block_string_value(raw_content: &str) -> String {
    let mut scratch = String::new();
    decode_block_string(raw_content, &mut scratch).into_owned()
}

/// Same as [`block_string_value`] but decodes through `scratch` and
/// borrows from `raw_content` when the value is a single untouched line.
/// An owned result is an exact-size copy of `scratch`, whose capacity is
/// kept for the next call.
pub(crate) fn decode_block_string<'a>(
    raw_content: &'a str,
    scratch: &mut String,
) -> Cow<'a, str> {
    if raw_content.contains("\\\"\"\"") {
        let unescaped = raw_content.replace("\\\"\"\"", "\"\"\"");
        let decoded = dedent(&unescaped, scratch);
        return Cow::Owned(decoded.into_owned());
    }
    dedent(raw_content, scratch)
}

fn dedent<'a>(content: &'a str, scratch: &mut String) -> Cow<'a, str> {
    let lines = split_lines(content);

    // Pass 1
    let mut common_indent: Option<usize> = None;
    let mut first_non_blank: Option<usize> = None;
    let mut last_non_blank: Option<usize> = None;
    for (idx, line) in lines.iter().enumerate() {
        let indent = leading_whitespace(line);
        if indent == line.len() {
            continue;
        }
        if idx > 0 {
            common_indent = Some(common_indent.map_or(indent, |c| c.min(indent)));
        }
        first_non_blank.get_or_insert(idx);
        last_non_blank = Some(idx);
    }

    let (Some(first), Some(last)) = (first_non_blank, last_non_blank) else {
        return Cow::Borrowed("");
    };
    let common_indent = common_indent.unwrap_or(0);

    if first == last && (first == 0 || common_indent == 0) {
        return Cow::Borrowed(lines[first]);
    }

    // Pass 2
    scratch.clear();
    for (idx, line) in lines[first..=last].iter().enumerate() {
        let line_idx = first + idx;
        if idx > 0 {
            scratch.push('\n');
        }
        if line_idx == 0 {
            scratch.push_str(line);
        } else {
            let strip = common_indent.min(leading_whitespace(line));
            scratch.push_str(&line[strip..]);
        }
    }
    Cow::Owned(scratch.clone())
}

/// Splits on `\r\n`, `\n` and `\r`.
fn split_lines(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut i = 0;
    while let Some(rel) = memchr::memchr2(b'\n', b'\r', &bytes[i..]) {
        let at = i + rel;
        lines.push(&content[line_start..at]);
        i = if bytes[at] == b'\r' && bytes.get(at + 1) == Some(&b'\n') {
            at + 2
        } else {
            at + 1
        };
        line_start = i;
    }
    lines.push(&content[line_start..]);
    lines
}

/// Number of leading space/tab bytes.
fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}
