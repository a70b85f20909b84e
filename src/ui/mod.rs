//! Terminal presentation layer.
//!
//! All user-facing output goes through [`Printer`], which renders either
//! plain text or ANSI-styled text. The classifier and session never format
//! anything themselves, so they stay independently testable.

pub mod repl;

use std::io::IsTerminal;

const BOLD: &str = "\x1b[1m";
const BLUE: &str = "\x1b[94m";
const GREEN: &str = "\x1b[92m";
const YELLOW: &str = "\x1b[93m";
const RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Plain,
    Styled,
}

/// Detect whether styled output is appropriate for the current terminal.
/// Priority: explicit opt-out -> NO_COLOR -> TERM=dumb -> non-tty fallback.
pub fn detect_output_mode(force_plain: bool) -> OutputMode {
    if force_plain || std::env::var_os("NO_COLOR").is_some() {
        return OutputMode::Plain;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return OutputMode::Plain;
        }
    }
    if !std::io::stdout().is_terminal() {
        return OutputMode::Plain;
    }
    OutputMode::Styled
}

pub struct Printer {
    mode: OutputMode,
}

impl Printer {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    fn paint(&self, codes: &str, text: &str) -> String {
        match self.mode {
            OutputMode::Plain => text.to_string(),
            OutputMode::Styled => format!("{codes}{text}{RESET}"),
        }
    }

    /// Input prompt, printed without a trailing newline by the loop.
    pub fn prompt(&self) -> String {
        format!("{} ", self.paint(&format!("{BOLD}{BLUE}"), "You:"))
    }

    pub fn assistant(&self, text: &str) {
        println!(
            "\n{} {text}",
            self.paint(&format!("{BOLD}{GREEN}"), "🤖 Claude:")
        );
    }

    pub fn tool(&self, text: &str) {
        println!("{}", self.paint(YELLOW, &format!("🔧 {text}")));
    }

    pub fn error(&self, text: &str) {
        println!("{}", self.paint(RED, &format!("❌ Error: {text}")));
    }

    pub fn info(&self, text: &str) {
        println!("{text}");
    }

    pub fn output(&self, text: &str) {
        println!("\n{}\n{text}", self.paint(BOLD, "Output:"));
    }

    pub fn banner(&self, execution_enabled: bool) {
        println!(
            "\n{}",
            self.paint(&format!("{BOLD}{GREEN}"), "⚡ strikechat ⚡")
        );
        if execution_enabled {
            println!(
                "{}",
                self.paint(GREEN, "  ✓ MCP Mode: Commands will be executed automatically")
            );
        } else {
            println!(
                "{}",
                self.paint(YELLOW, "  ⚠ Manual Mode: Guidance only, nothing is executed")
            );
        }
        println!("\n{}", self.paint(BOLD, "  Commands:"));
        println!("  • 'runlocal <command>' - Execute a command without AI analysis");
        println!("  • 'runclaude <command>' - AI executes and analyzes the command");
        println!("  • 'quit' or 'exit' - Leave strikechat");
        println!("  • 'clear' - Clear conversation history");
        println!();
    }

    pub fn goodbye(&self) {
        println!("\n{}", self.paint(GREEN, "👋 Exiting strikechat."));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_emits_no_escape_codes() {
        let printer = Printer::new(OutputMode::Plain);
        assert_eq!(printer.prompt(), "You: ");
        assert_eq!(printer.paint(RED, "boom"), "boom");
    }

    #[test]
    fn styled_mode_wraps_text_in_codes() {
        let printer = Printer::new(OutputMode::Styled);
        let painted = printer.paint(RED, "boom");
        assert!(painted.starts_with(RED));
        assert!(painted.ends_with(RESET));
        assert!(painted.contains("boom"));
    }

    #[test]
    fn force_plain_wins_over_everything() {
        assert_eq!(detect_output_mode(true), OutputMode::Plain);
    }
}
