//! MDI command parsing

/// Parse an MDI command line. Blank lines carry no command.
pub fn parse_command(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    Some(input.to_string())
}
