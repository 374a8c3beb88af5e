//! Status lines for the terminal. Everything goes to stderr so report output
//! on stdout can be piped into a file.

use colored::Colorize;

/// Print a status message with a spinner-like indicator
pub fn status_message(message: &str) {
    eprintln!("{} {} ... ", "⏳".yellow(), message.bright_white());
}

pub fn success_message(message: &str) {
    eprintln!("{} {}", "✅".green(), message.green());
}

pub fn warning_message(message: &str) {
    eprintln!("{} {}", "⚠️ ".yellow(), message.yellow());
}

/// Print a section header to separate logical sections of output
pub fn section_header(title: &str) {
    eprintln!("\n{}", format!("==== {} ====", title).cyan().bold());
}

pub fn info_message(message: &str) {
    eprintln!("{} {}", "ℹ️ ".blue(), message.blue());
}
