//! User-facing console lines, separate from tracing logs.
//! Colors are used only when the target stream is a TTY.

use owo_colors::OwoColorize;

/// Whether stderr is attached to a terminal. Also drives ANSI in log output.
pub fn stderr_is_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

fn emit(label: &str, msg: &str, paint: fn(&str) -> String) {
    let prefix = if stderr_is_tty() {
        paint(label)
    } else {
        label.to_string()
    };
    eprintln!("{prefix} {msg}");
}

pub fn print_warn(msg: &str) {
    emit("warn:", msg, |s| s.yellow().bold().to_string());
}

pub fn print_error(msg: &str) {
    emit("error:", msg, |s| s.red().bold().to_string());
}

/// Print a plain line (no prefix). Used for `original -> final` mappings,
/// which users may script against.
pub fn print_user(msg: &str) {
    println!("{msg}");
}
