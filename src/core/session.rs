//! Stateful owner of the conversation transcript and the
//! execute-then-ask turn protocol.

use crate::api::client::ChatBackend;
use crate::core::classifier::CommandClassifier;
use crate::core::constants::COMMAND_TIMEOUT_SECS;
use crate::core::message::Message;
use crate::exec::{combine_output, CommandExecutor};
use std::time::Duration;

pub struct ChatSession {
    transcript: Vec<Message>,
    backend: Box<dyn ChatBackend>,
    executor: Option<Box<dyn CommandExecutor>>,
    classifier: CommandClassifier,
}

impl ChatSession {
    pub fn new(
        backend: Box<dyn ChatBackend>,
        executor: Option<Box<dyn CommandExecutor>>,
        classifier: CommandClassifier,
    ) -> Self {
        Self {
            transcript: Vec::new(),
            backend,
            executor,
            classifier,
        }
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Wholesale transcript reset. Individual messages are never removed.
    pub fn clear(&mut self) {
        self.transcript.clear();
    }

    pub fn execution_enabled(&self) -> bool {
        self.executor
            .as_ref()
            .map(|executor| executor.is_enabled())
            .unwrap_or(false)
    }

    /// One conversational turn. When the input looks like a command and
    /// execution is enabled, the command runs first and its output is spliced
    /// into the user message inside a fenced block.
    ///
    /// A backend failure is returned as error text rather than an `Err`: the
    /// session never tears down the loop over a bad model call. The user turn
    /// has already been appended at that point, so retrying the same input
    /// adds it to the transcript a second time unless the user clears
    /// history. That ordering is deliberate and preserved.
    pub async fn send(&mut self, user_text: &str) -> String {
        let command = if self.execution_enabled() {
            self.classifier.classify(user_text)
        } else {
            None
        };

        let content = match command {
            Some(command) => {
                let output = self.run_command(&command).await;
                format!("{user_text}\n\nCommand output:\n```\n{output}\n```")
            }
            None => user_text.to_string(),
        };
        self.transcript.push(Message::user(content));

        match self.backend.complete(&self.transcript).await {
            Ok(reply) => {
                self.transcript.push(Message::assistant(reply.clone()));
                reply
            }
            Err(e) => format!("Error calling Claude API: {e}"),
        }
    }

    /// Runs a raw command and returns the combined output, without touching
    /// the transcript or the model.
    pub async fn run_local(&self, command: &str) -> String {
        self.run_command(command).await
    }

    /// Runs a command through the full `send` path by wrapping it in a fixed
    /// instruction so the model executes and analyzes it in one turn.
    pub async fn run_via_model(&mut self, command: &str) -> String {
        let prompt = format!(
            "You have MCP API access to my Kali Linux system. \
             Execute this command and analyze the output: {command}"
        );
        self.send(&prompt).await
    }

    async fn run_command(&self, command: &str) -> String {
        match &self.executor {
            Some(executor) if executor.is_enabled() => {
                let result = executor
                    .execute(command, Duration::from_secs(COMMAND_TIMEOUT_SECS))
                    .await;
                combine_output(&result)
            }
            _ => format!("Cannot execute command. MCP not connected.\nYou can run manually: {command}"),
        }
    }
}
