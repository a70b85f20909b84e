//! Detection of command requests in free-form chat input.

use crate::core::constants::DEFAULT_KNOWN_TOOLS;
use std::collections::HashSet;

/// Literal prefixes that mark the rest of the line as a command. Matched
/// case-insensitively, unlike the tool-name set below.
const COMMAND_PREFIXES: &[&str] = &["run ", "execute ", "exec "];

/// Decides whether a line of user input denotes a command to execute.
///
/// Two rules, in priority order: a `run `/`execute `/`exec ` prefix
/// (case-insensitive) yields everything after the first token, and a first
/// token that exactly matches the allow-list yields the whole line. The
/// prefix check is case-insensitive while the tool-name check is
/// case-sensitive; that asymmetry is long-observed behavior and callers
/// depend on `Nmap ...` staying conversational.
pub struct CommandClassifier {
    known_tools: HashSet<String>,
}

impl Default for CommandClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_KNOWN_TOOLS.iter().map(|t| t.to_string()))
    }
}

impl CommandClassifier {
    pub fn new(known_tools: impl IntoIterator<Item = String>) -> Self {
        Self {
            known_tools: known_tools.into_iter().collect(),
        }
    }

    /// Returns the literal command string when `text` looks like a command
    /// request, `None` when it is ordinary conversational text. Pure; no
    /// side effects.
    pub fn classify(&self, text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let lowered = trimmed.to_lowercase();
        for prefix in COMMAND_PREFIXES {
            if lowered.starts_with(prefix) {
                let rest = trimmed.get(prefix.len()..).unwrap_or("").trim_start();
                if rest.is_empty() {
                    return None;
                }
                return Some(rest.to_string());
            }
        }

        let first_word = trimmed.split_whitespace().next().unwrap_or("");
        if self.known_tools.contains(first_word) {
            return Some(trimmed.to_string());
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_prefix_is_case_insensitive() {
        let classifier = CommandClassifier::default();
        for input in ["run whoami", "RUN whoami", "Run whoami"] {
            assert_eq!(classifier.classify(input).as_deref(), Some("whoami"));
        }
    }

    #[test]
    fn execute_and_exec_prefixes_extract_remainder() {
        let classifier = CommandClassifier::default();
        assert_eq!(
            classifier.classify("execute id -u").as_deref(),
            Some("id -u")
        );
        assert_eq!(
            classifier.classify("exec cat /etc/passwd").as_deref(),
            Some("cat /etc/passwd")
        );
    }

    #[test]
    fn prefix_with_empty_remainder_is_conversational() {
        let classifier = CommandClassifier::default();
        assert_eq!(classifier.classify("run"), None);
        assert_eq!(classifier.classify("run "), None);
        assert_eq!(classifier.classify("run   "), None);
    }

    #[test]
    fn remainder_preserves_original_casing() {
        let classifier = CommandClassifier::default();
        assert_eq!(
            classifier.classify("RUN Nmap -sV").as_deref(),
            Some("Nmap -sV")
        );
    }

    #[test]
    fn known_tool_returns_full_line() {
        let classifier = CommandClassifier::default();
        assert_eq!(
            classifier.classify("nmap -sV 10.0.0.1").as_deref(),
            Some("nmap -sV 10.0.0.1")
        );
    }

    #[test]
    fn tool_name_match_is_case_sensitive() {
        // Deliberately asymmetric with the prefix rule; see module docs.
        let classifier = CommandClassifier::default();
        assert_eq!(classifier.classify("Nmap -sV 10.0.0.1"), None);
    }

    #[test]
    fn plain_text_is_conversational() {
        let classifier = CommandClassifier::default();
        assert_eq!(classifier.classify("how do I scan a subnet?"), None);
        assert_eq!(classifier.classify(""), None);
        assert_eq!(classifier.classify("   "), None);
    }

    #[test]
    fn allow_list_is_configurable() {
        let classifier = CommandClassifier::new(vec!["masscan".to_string()]);
        assert_eq!(
            classifier.classify("masscan -p80 10.0.0.0/8").as_deref(),
            Some("masscan -p80 10.0.0.0/8")
        );
        assert_eq!(classifier.classify("nmap -sV 10.0.0.1"), None);
    }
}
