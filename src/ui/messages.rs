//! Coloured one-line status messages for the terminal.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

fn tagged(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    format!("{color}{BOLD}{icon} {RESET}{msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", tagged(FG_BLUE, "ℹ️", msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", tagged(FG_GREEN, "✅", msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", tagged(FG_YELLOW, "⚠️", msg));
}

/// Goes to stderr, unlike the other helpers.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", tagged(FG_RED, "❌", msg));
}

/// Location status line shown after a clock action.
pub fn location<T: fmt::Display>(msg: T) {
    println!("{}", tagged(FG_BLUE, "📍", msg));
}

/// Section title for list and summary output.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{FG_BLUE}{BOLD}=== {msg} ==={RESET}\n");
}
