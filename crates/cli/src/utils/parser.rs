use css_suggestor_core::Position;

/// Split `path:line[:column]` into a path and a zero-based position.
///
/// Line and column are 1-based on the command line. A missing column means
/// the end of the line.
pub fn parse_filepath_with_position(filepath_arg: &str) -> (String, Option<Position>) {
    let Some((head, last)) = filepath_arg.rsplit_once(':') else {
        return (filepath_arg.to_string(), None);
    };

    // Not a valid number, treat the whole thing as a path
    let Ok(last_num) = last.parse::<u32>() else {
        return (filepath_arg.to_string(), None);
    };

    if let Some((path, line_part)) = head.rsplit_once(':') {
        if let Ok(line_num) = line_part.parse::<u32>() {
            return (
                path.to_string(),
                Some(Position::new(
                    line_num.saturating_sub(1),
                    last_num.saturating_sub(1),
                )),
            );
        }
    }

    (
        head.to_string(),
        Some(Position::new(last_num.saturating_sub(1), u32::MAX)),
    )
}
