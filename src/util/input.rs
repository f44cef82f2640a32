//! Item-entry parsing for the add-items modal boundary

/// Split a block of entered text into candidate item names.
///
/// One item per line: split on newline, trim each line, discard empty
/// lines, preserving input order. The result is what the add-items
/// operation receives after the modal's own validation.
pub fn parse_item_names(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
