/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Colors are disabled when `NO_COLOR` is set (https://no-color.org).
pub fn enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn paint(value: &str, color: &str) -> String {
    if enabled() {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Loss color:
/// 0 → green
/// < 15% → yellow
/// otherwise → red
pub fn color_for_loss(pct: f64) -> &'static str {
    if pct <= 0.0 {
        GREEN
    } else if pct < 15.0 {
        YELLOW
    } else {
        RED
    }
}
