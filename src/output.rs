//! User-facing console output.
//! Status messages get a colored prefix when stdout is a TTY; action lines and
//! the summary are printed plainly so they can be grepped or scripted against.

use owo_colors::OwoColorize;

fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {msg}");
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {msg}");
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {msg}");
    }
}

/// Plain line without prefix (action log lines, summary).
pub fn print_user(msg: &str) {
    println!("{msg}");
}
