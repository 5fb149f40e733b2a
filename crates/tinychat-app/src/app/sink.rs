use std::io::{self, Write};
use std::sync::Mutex;

use colored::Colorize;

use tinychat_chat::PresentationSink;
use tinychat_types::Role;

const TYPING_LABEL: &str = "Assistant is typing...";

/// Renders controller events to the terminal.
pub struct TerminalSink {
    // Last reported reachability; transitions are printed, repeats are not
    connected: Mutex<Option<bool>>,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self {
            connected: Mutex::new(None),
        }
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationSink for TerminalSink {
    fn render_message(&self, role: Role, content: &str) {
        // The user's line is already on screen from the prompt; only
        // assistant messages need to be drawn
        if role == Role::Assistant {
            println!("\n{} {}\n", "Assistant:".bright_blue().bold(), content);
        }
    }

    fn show_typing_placeholder(&self) {
        print!("{}", TYPING_LABEL.bright_black());
        let _ = io::stdout().flush();
    }

    fn remove_typing_placeholder(&self) {
        // Wipe the placeholder line and return the cursor to column 0
        print!("\r{}\r", " ".repeat(TYPING_LABEL.len()));
        let _ = io::stdout().flush();
    }

    fn set_connection_indicator(&self, connected: bool) {
        let mut last = self.connected.lock().unwrap();
        if *last == Some(connected) {
            return;
        }
        *last = Some(connected);
        if connected {
            println!("{}", "● connected".green());
        } else {
            println!("{}", "● connection failed".red());
        }
    }

    fn set_sending_affordance(&self, _disabled: bool) {
        // The readline prompt is blocked while a send is awaited, so there
        // is no send button to grey out
    }

    fn clear_input(&self) {
        // rustyline consumed the line on submit
    }

    fn focus_input(&self) {
        // The readline prompt reclaims the cursor when the send returns
    }
}
