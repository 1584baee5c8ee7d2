use crate::types::Position;

/// Text of the cursor's line up to the cursor.
///
/// A `character` past the end of the line is clamped to the line length.
/// Returns `None` when the document has no such line. A trailing `\r` from
/// CRLF line endings is not part of the line.
pub fn line_prefix(source: &str, position: Position) -> Option<&str> {
    let line = source.split('\n').nth(position.line as usize)?;
    let line = line.strip_suffix('\r').unwrap_or(line);

    let end = line
        .char_indices()
        .nth(position.character as usize)
        .map_or(line.len(), |(index, _)| index);

    Some(&line[..end])
}
