/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Grey out placeholder text (empty notes, missing location).
pub fn colorize_optional(value: &str, present: bool) -> String {
    if present {
        value.to_string()
    } else {
        format!("{GREY}{value}{RESET}")
    }
}

pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}
