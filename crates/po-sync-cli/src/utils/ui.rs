// CLI output formatting with consistent styling using indicatif and colored.
// Progress and results go to stdout/stderr directly; tracing is for diagnostics.

use colored::Colorize as _;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const PD_TICK: Duration = Duration::from_millis(100);

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "PO_SYNC_LOG";

/// Install the tracing subscriber writing to stderr.
///
/// `PO_SYNC_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "po_sync_cli=debug,po_sync_toml=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(PD_TICK);
    pb
}

pub fn print_header(title: &str) {
    println!("{}", title.dimmed());
}

pub fn print_pulled(repo: &Path) {
    println!("{} {}", "Pulled".dimmed(), repo.display().to_string().green());
}

pub fn print_skip_pull() {
    println!("{}", "Skipping git pull (--no-pull)".yellow());
}

// mo

pub fn print_compiled(language: &str, stats: &str, duration: Duration) {
    let stats = stats.trim();
    if stats.is_empty() {
        println!(
            "{} {} in {}",
            "Compiled".dimmed(),
            language.green(),
            HumanDuration(duration).to_string().cyan()
        );
    } else {
        println!(
            "{} {} in {}: {}",
            "Compiled".dimmed(),
            language.green(),
            HumanDuration(duration).to_string().cyan(),
            stats
        );
    }
}

pub fn print_compile_summary(count: usize) {
    println!("{} {} catalog(s) compiled", "Done:".green(), count);
}

// update-pot

pub fn print_template_written(path: &Path, bytes: usize) {
    println!(
        "{} {} ({} bytes)",
        "Wrote".dimmed(),
        path.display().to_string().green(),
        bytes.to_string().cyan()
    );
}

// update-pos

pub fn print_invalid(language: &str, path: &Path) {
    eprintln!(
        "{} {}: {}",
        "Format check failed for".red(),
        language.white().bold(),
        path.display()
    );
}

pub fn print_copied(language: &str, destination: &Path, stripped: usize, changed: bool) {
    let state = if changed { "updated" } else { "unchanged" };
    println!(
        "{} {} -> {} ({}, {} marker line(s) removed)",
        "Copied".dimmed(),
        language.green(),
        destination.display(),
        state.cyan(),
        stripped
    );
}

pub fn print_validation_failed(count: usize, log: &Path) {
    eprintln!(
        "{} {} file(s), see {}",
        "Validation failed for".red(),
        count.to_string().white().bold(),
        log.display()
    );
}

// commit gate

pub fn print_no_changes(repo: &Path) {
    println!(
        "{} {}",
        "No changes in".dimmed(),
        repo.display().to_string().green()
    );
}

pub fn print_pushed(repo: &Path, message: &str) {
    println!(
        "{} {} ({})",
        "Committed and pushed".green(),
        repo.display(),
        message.dimmed()
    );
}

pub fn print_would_commit(repo: &Path, stat: &str) {
    println!(
        "{} {}",
        "Dry run: would commit in".yellow(),
        repo.display()
    );
    for line in stat.lines() {
        println!("  {}", line);
    }
}

pub fn print_diff(old: &str, new: &str) {
    use similar::{ChangeTag, TextDiff};

    let diff = TextDiff::from_lines(old, new);

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!("{}", "  ...".dimmed());
        }
        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => "-",
                    ChangeTag::Insert => "+",
                    ChangeTag::Equal => " ",
                };
                let line = format!("{} {}", sign, change);
                match change.tag() {
                    ChangeTag::Delete => print!("{}", line.red()),
                    ChangeTag::Insert => print!("{}", line.green()),
                    ChangeTag::Equal => print!("{}", line.dimmed()),
                }
            }
        }
    }
}
