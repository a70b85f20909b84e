//! The interactive read-evaluate-print loop.

use crate::commands::{parse_input, ReplCommand};
use crate::core::session::ChatSession;
use crate::ui::Printer;
use std::error::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Runs the loop until `quit`, end-of-input, or Ctrl-C. Errors from handling
/// one line are reported and the loop continues; only losing stdout itself
/// ends the session abnormally.
pub async fn run(session: &mut ChatSession, printer: &Printer) -> Result<(), Box<dyn Error>> {
    printer.banner(session.execution_enabled());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(printer.prompt().as_bytes()).await?;
        stdout.flush().await?;

        let line = tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => line,
                // EOF behaves like `quit`.
                Ok(None) => break,
                Err(e) => {
                    printer.error(&format!("Failed to read input: {e}"));
                    continue;
                }
            },
            // An interrupt during the blocking read also behaves like `quit`.
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        match parse_input(&line) {
            ReplCommand::Empty => continue,
            ReplCommand::Quit => break,
            ReplCommand::Clear => {
                session.clear();
                printer.tool("Conversation cleared.");
            }
            ReplCommand::RunLocal(command) => {
                if session.execution_enabled() {
                    printer.tool(&format!("Executing: {command}"));
                    let output = session.run_local(&command).await;
                    printer.output(&output);
                } else {
                    printer.error("MCP not connected. Cannot execute commands.");
                }
            }
            ReplCommand::RunViaModel(command) => {
                if session.execution_enabled() {
                    printer.tool(&format!("Executing via Claude: {command}"));
                    let reply = session.run_via_model(&command).await;
                    printer.assistant(&reply);
                } else {
                    printer.error("MCP not connected. Cannot execute commands.");
                }
            }
            ReplCommand::Message(text) => {
                let reply = session.send(&text).await;
                printer.assistant(&reply);
            }
        }
    }

    printer.goodbye();
    Ok(())
}
