//! Shared CLI output helpers.
//!
//! Status lines go to stderr so stdout stays clean for data that may be
//! piped or sourced (`ssm2env write -o -`, `ssm2env list --json`).
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: paths, keys, hints
//! - Dimmed: secondary info

use std::fmt::Display;

use console::style;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ wrote 12 variables to /etc/profile.d/loadenv_fromssm.sh`
pub fn success(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✓").green(), msg);
    } else {
        eprintln!("✓ {}", msg);
    }
}

/// Print an error message (red).
///
/// Example: `✗ parameter store unavailable`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ export SSM2ENV_PREFIX=myapp`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a key-value pair, key padded to `width`.
pub fn kv(key: &str, value: impl Display, width: usize) {
    if colors_enabled() {
        println!("{:<width$}  {}", key, style(value).dim(), width = width);
    } else {
        println!("{:<width$}  {}", key, value, width = width);
    }
}

/// Format a path in cyan.
pub fn path(p: &str) -> String {
    if colors_enabled() {
        style(p).cyan().to_string()
    } else {
        p.to_string()
    }
}

/// Print raw data to stdout without decoration or a trailing newline.
pub fn raw(data: &str) {
    print!("{}", data);
}
