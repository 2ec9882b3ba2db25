//! Placing a rendered quote into an existing markdown document.

/// Insert `content` at byte `offset`, starting a new line first when the
/// cursor is past the first column of a line.
///
/// `offset` is clamped to the document and moved back to the nearest char
/// boundary.
pub fn insert_in_new_line(document: &str, offset: usize, content: &str) -> String {
    let mut offset = offset.min(document.len());
    while !document.is_char_boundary(offset) {
        offset -= 1;
    }

    let (before, after) = document.split_at(offset);
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count();

    let mut out = String::with_capacity(document.len() + content.len() + 1);
    out.push_str(before);
    if column > 1 {
        out.push('\n');
    }
    out.push_str(content);
    out.push_str(after);
    out
}

/// [`insert_in_new_line`] with the cursor at the end of the document.
pub fn append_in_new_line(document: &str, content: &str) -> String {
    insert_in_new_line(document, document.len(), content)
}
