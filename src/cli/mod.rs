//! Command-line interface parsing and startup wiring
//!
//! This module parses arguments, resolves configuration and credentials,
//! probes the MCP server when requested, and hands a wired-up session to the
//! interactive loop. Nothing here calls `process::exit`; fatal errors are
//! returned to `main`.

use std::error::Error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::api::client::AnthropicClient;
use crate::auth;
use crate::core::classifier::CommandClassifier;
use crate::core::config::Config;
use crate::core::constants::{DEFAULT_MCP_SERVER, DEFAULT_MODEL};
use crate::core::session::ChatSession;
use crate::exec::{CommandExecutor, McpClient};
use crate::ui::{detect_output_mode, repl, Printer};

#[derive(Parser)]
#[command(name = "strikechat")]
#[command(about = "A terminal chat client with optional remote command execution")]
#[command(
    long_about = "Strikechat is a line-oriented terminal chat client for security work. \
It relays your messages to the Anthropic Messages API and, with --mcp, forwards \
command-like input to an MCP execution server and folds the captured output back \
into the conversation.\n\n\
Environment Variables:\n\
  ANTHROPIC_API_KEY   Your API key (required)\n\
  ANTHROPIC_BASE_URL  Custom API base URL (optional)\n\n\
Meta-commands:\n\
  runlocal <cmd>      Execute a command without AI analysis\n\
  runclaude <cmd>     AI executes and analyzes the command\n\
  clear               Clear conversation history\n\
  quit | exit | q     Leave strikechat"
)]
pub struct Args {
    /// Enable MCP integration for remote command execution
    #[arg(long)]
    pub mcp: bool,

    /// MCP server URL (default: http://localhost:5000)
    #[arg(long, value_name = "URL")]
    pub mcp_server: Option<String>,

    /// Model to use for chat
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Disable styled terminal output
    #[arg(long)]
    pub plain: bool,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let args = Args::parse();
    let config = Config::load()?;
    let api_key = auth::resolve_api_key()?;

    let printer = Printer::new(detect_output_mode(args.plain));

    let model = args
        .model
        .or_else(|| config.default_model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let executor = if args.mcp {
        let server = args
            .mcp_server
            .or_else(|| config.mcp_server.clone())
            .unwrap_or_else(|| DEFAULT_MCP_SERVER.to_string());
        Some(connect_executor(&server, &printer).await)
    } else {
        None
    };

    let backend = AnthropicClient::new(auth::resolve_base_url(), api_key, model);
    let classifier = CommandClassifier::new(config.known_tools());
    let mut session = ChatSession::new(Box::new(backend), executor, classifier);

    repl::run(&mut session, &printer).await
}

/// Probes the MCP server once at startup. A failed probe leaves the executor
/// attached but disabled, so execution features degrade to manual-mode
/// messages instead of crashing.
async fn connect_executor(server: &str, printer: &Printer) -> Box<dyn CommandExecutor> {
    let mut client = McpClient::new(server);
    if client.probe().await {
        printer.tool(&format!("MCP connected to {} ✓", client.server_url()));
    } else {
        printer.error(&format!("MCP server not available at {server}"));
        printer.info("Continuing without command execution. Start the server and rerun with --mcp.");
    }
    Box::new(client)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
}
