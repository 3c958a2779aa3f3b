/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Goal-progress color:
/// \>= 100 → green
/// \>= 50 → yellow
/// below → reset
pub fn color_for_progress(pct: u8) -> &'static str {
    if pct >= 100 {
        GREEN
    } else if pct >= 50 {
        YELLOW
    } else {
        RESET
    }
}

/// Grey placeholder for empty optional fields in listings.
pub fn grey_placeholder() -> String {
    format!("{GREY}-{RESET}")
}
