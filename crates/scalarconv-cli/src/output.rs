//! Output formatting utilities

use colored::Colorize;
use std::io::IsTerminal;

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::set_override(std::io::stdout().is_terminal()),
    }
}

/// Install the logger; `RUST_LOG` wins over the verbosity flag
pub fn setup_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    if let Err(e) = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init()
    {
        eprintln!("{} logger already installed: {}", "Warning:".yellow(), e);
    }
}

/// Format an error and its causes for display
pub fn format_error(error: &anyhow::Error) -> String {
    let mut message = format!("{} {}", "Error:".red().bold(), error);
    for cause in error.chain().skip(1) {
        message.push_str(&format!("\n  {} {}", "caused by:".yellow(), cause));
    }
    message
}

/// Mark a check result
pub fn format_verdict(converts: bool) -> String {
    if converts {
        "ok".green().to_string()
    } else {
        "invalid".red().to_string()
    }
}
