use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::sync::Arc;

use tinychat_api::{HealthStatus, HttpChatClient};
use tinychat_chat::{ChatController, SendOutcome};

use super::sink::TerminalSink;
use crate::cli::Cli;
use crate::conversation_logger::ConversationLogger;

/// Run interactive REPL mode
pub async fn run_repl_mode(cli: &Cli) -> Result<()> {
    println!("{}", "Tiny Chat - local model chat client".bright_cyan().bold());
    println!("{}", format!("Endpoint: {}", cli.api_url).bright_black());
    println!(
        "{}",
        "Type 'exit' or 'quit' to leave, or /help for commands\n".bright_black()
    );

    let transport = Arc::new(HttpChatClient::new());
    let sink = Arc::new(TerminalSink::new());
    let mut controller = ChatController::new(transport, sink);
    controller.set_endpoint(&cli.api_url);

    if let Some(raw) = &cli.max_length {
        controller.settings_mut().set_max_length(raw);
    }
    if let Some(raw) = &cli.temperature {
        controller.settings_mut().set_temperature(raw);
    }

    // Initial probe, the counterpart of the page-load status check
    print_health(controller.check_health().await);

    let mut logger = if cli.no_log {
        None
    } else {
        match ConversationLogger::new(&std::env::current_dir()?).await {
            Ok(logger) => Some(logger),
            Err(e) => {
                eprintln!("Logging disabled: {}", e);
                None
            }
        }
    };

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline(&format!("{} ", "You:".bright_green().bold()));

        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                if line == "exit" || line == "quit" {
                    println!("{}", "Goodbye!".bright_cyan());
                    break;
                }

                if line == "/help" {
                    print_help();
                    continue;
                }

                if line == "/health" {
                    print_health(controller.check_health().await);
                    continue;
                }

                if let Some(url) = line.strip_prefix("/endpoint ") {
                    controller.set_endpoint(url);
                    println!(
                        "{}",
                        format!("Endpoint: {}", controller.state().api_endpoint).bright_black()
                    );
                    print_health(controller.check_health().await);
                    continue;
                }

                if let Some(raw) = line.strip_prefix("/max-length ") {
                    controller.settings_mut().set_max_length(raw);
                    println!(
                        "{}",
                        format!("max_length = {}", controller.settings().max_length).bright_black()
                    );
                    continue;
                }

                if let Some(raw) = line.strip_prefix("/temperature ") {
                    controller.settings_mut().set_temperature(raw);
                    println!(
                        "{}",
                        format!("temperature = {}", controller.settings().temperature)
                            .bright_black()
                    );
                    continue;
                }

                rl.add_history_entry(line)?;

                let outcome = controller.send_message(line).await;
                if outcome == SendOutcome::Ignored {
                    continue;
                }

                // The cycle appended the user message and one reply
                if let Some(logger) = &mut logger {
                    let transcript = controller.transcript();
                    let start = transcript.len().saturating_sub(2);
                    for entry in &transcript[start..] {
                        logger.log(entry.role.as_str(), &entry.content).await;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".bright_black());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(err) => {
                eprintln!("{} {}", "Error:".bright_red().bold(), err);
                break;
            }
        }
    }

    // Graceful shutdown of logger (flush & close)
    if let Some(logger) = &mut logger {
        logger.shutdown().await;
    }

    Ok(())
}

fn print_health(status: HealthStatus) {
    match status {
        HealthStatus::Available => println!("{}", "API status: connected".green()),
        HealthStatus::Unavailable => println!("{}", "API status: connection failed".red()),
    }
}

fn print_help() {
    println!("{} Commands:", "💬".bright_cyan());
    println!("  /endpoint <url>     - Point the session at a different chat endpoint");
    println!("  /health             - Probe the server's health endpoint");
    println!("  /max-length <n>     - Set the reply length budget (50-500, default 150)");
    println!("  /temperature <t>    - Set the sampling temperature (0.1-1.0, default 0.7)");
    println!("  /help               - Show this help");
    println!("  exit | quit         - Leave the session");
}
