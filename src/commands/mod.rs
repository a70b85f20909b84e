//! Parsing of REPL meta-commands.
//!
//! Meta-commands are checked before any input reaches the conversation
//! session. Command words match case-insensitively; the two execution
//! shortcuts are exact prefixes followed by a command string.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Terminate the loop cleanly.
    Quit,
    /// Reset the conversation transcript.
    Clear,
    /// `runlocal <cmd>`: execute without involving the model.
    RunLocal(String),
    /// `runclaude <cmd>`: have the model execute and analyze.
    RunViaModel(String),
    /// Ordinary conversational input.
    Message(String),
    /// Blank line; ignored by the loop.
    Empty,
}

pub fn parse_input(input: &str) -> ReplCommand {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ReplCommand::Empty;
    }

    if let Some(rest) = strip_prefix_ignore_case(trimmed, "runlocal ") {
        return ReplCommand::RunLocal(rest.trim().to_string());
    }
    if let Some(rest) = strip_prefix_ignore_case(trimmed, "runclaude ") {
        return ReplCommand::RunViaModel(rest.trim().to_string());
    }

    match trimmed.to_lowercase().as_str() {
        "quit" | "exit" | "q" => ReplCommand::Quit,
        "clear" => ReplCommand::Clear,
        _ => ReplCommand::Message(trimmed.to_string()),
    }
}

fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&input[prefix.len()..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_aliases_match_case_insensitively() {
        for input in ["quit", "exit", "q", "QUIT", "Exit", "Q"] {
            assert_eq!(parse_input(input), ReplCommand::Quit);
        }
    }

    #[test]
    fn clear_matches_case_insensitively() {
        assert_eq!(parse_input("clear"), ReplCommand::Clear);
        assert_eq!(parse_input("CLEAR"), ReplCommand::Clear);
    }

    #[test]
    fn blank_lines_are_empty() {
        assert_eq!(parse_input(""), ReplCommand::Empty);
        assert_eq!(parse_input("   \t"), ReplCommand::Empty);
    }

    #[test]
    fn runlocal_extracts_the_command() {
        assert_eq!(
            parse_input("runlocal nmap -sV 10.0.0.1"),
            ReplCommand::RunLocal("nmap -sV 10.0.0.1".to_string())
        );
        assert_eq!(
            parse_input("RunLocal  whoami "),
            ReplCommand::RunLocal("whoami".to_string())
        );
    }

    #[test]
    fn runclaude_extracts_the_command() {
        assert_eq!(
            parse_input("runclaude dig example.com"),
            ReplCommand::RunViaModel("dig example.com".to_string())
        );
        assert_eq!(
            parse_input("RUNCLAUDE id"),
            ReplCommand::RunViaModel("id".to_string())
        );
    }

    #[test]
    fn shortcut_without_argument_is_an_ordinary_message() {
        // No trailing space after the command word, so the prefix rule does
        // not apply and the text falls through to the session.
        assert_eq!(
            parse_input("runlocal"),
            ReplCommand::Message("runlocal".to_string())
        );
        assert_eq!(
            parse_input("runclaude   "),
            ReplCommand::Message("runclaude".to_string())
        );
    }

    #[test]
    fn everything_else_is_a_message() {
        assert_eq!(
            parse_input("  what ports are open?  "),
            ReplCommand::Message("what ports are open?".to_string())
        );
        assert_eq!(
            parse_input("quit the scan early"),
            ReplCommand::Message("quit the scan early".to_string())
        );
    }
}
