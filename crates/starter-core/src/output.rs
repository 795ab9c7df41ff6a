//! Console progress lines
//!
//! Each step prints `-> <label>...` and is finished on the same line by a
//! status glyph once it completes.

use colored::Colorize;
use std::io::Write;

/// Start a progress line
pub fn log_progress(message: &str) {
    let mut stdout = std::io::stdout().lock();
    let _ = write!(stdout, "{} {}...", "->".blue(), message.trim());
    let _ = stdout.flush();
}

/// Finish the current progress line with a success or error glyph
pub fn log_status(success: bool) {
    let glyph = if success { "✅" } else { "🚫" };
    let mut stdout = std::io::stdout().lock();
    let _ = writeln!(stdout, " {}", glyph);
    let _ = stdout.flush();
}

/// Finish the current progress line for a step that had nothing to do
pub fn log_skipped(reason: &str) {
    let mut stdout = std::io::stdout().lock();
    let _ = writeln!(stdout, " {}", format!("skipped ({})", reason).dimmed());
    let _ = stdout.flush();
}
