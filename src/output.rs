use owo_colors::OwoColorize;

use crate::planner::{MoveOutcome, RunSummary};

/// User-facing console lines. Colors only when stdout is a TTY.
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

/// Plain line with no prefix; per-file results go here so they can be scripted against.
pub fn print_user(msg: &str) {
    println!("{msg}");
}

/// `'<old>' -> 'MM/<new>': ok[ (renamed)]`, prefixed with `dry-run: ` when nothing moved.
pub fn outcome_line(o: &MoveOutcome) -> String {
    let mut line = format!(
        "'{}' -> '{}/{}': ok",
        o.source_name, o.month, o.target_name
    );
    if o.renamed() {
        line.push_str(" (renamed)");
    }
    if o.dry_run {
        line.insert_str(0, "dry-run: ");
    }
    line
}

/// Collision notice for a file whose preferred name was taken.
pub fn collision_line(o: &MoveOutcome) -> String {
    format!(
        "'{}' already taken in {}; using '{}'",
        o.candidate, o.month, o.target_name
    )
}

pub fn summary_line(s: &RunSummary, dry_run: bool) -> String {
    let verb = if dry_run { "would move" } else { "moved" };
    format!(
        "{verb} {} file(s), {} renamed, {} collision(s) resolved",
        s.moved, s.renamed, s.collided
    )
}

pub fn print_outcome(o: &MoveOutcome) {
    if o.collided() {
        print_info(&collision_line(o));
    }
    print_user(&outcome_line(o));
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {msg}");
    }
}
