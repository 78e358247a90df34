//! Console logger behind the `log` facade.
//!
//! Records go to stderr as `[TAG] message`, with the tag colored like the
//! CLI banners. Initialization is idempotent: the first call installs the
//! logger, later calls only adjust the level. While a progress bar is
//! attached, lines are printed through it so the spinner redraws below them.

use std::sync::{Mutex, MutexGuard};

use colored::Colorize;
use indicatif::ProgressBar;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

static PROGRESS: Mutex<Option<ProgressBar>> = Mutex::new(None);

fn progress_slot() -> MutexGuard<'static, Option<ProgressBar>> {
    PROGRESS.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Routes log lines through `bar` until [`detach_progress`] is called.
pub fn attach_progress(bar: &ProgressBar) {
    *progress_slot() = Some(bar.clone());
}

pub fn detach_progress() {
    progress_slot().take();
}

fn tag(level: Level) -> colored::ColoredString {
    match level {
        Level::Error => "ERR".bold().red(),
        Level::Warn => "WRN".bold().yellow(),
        Level::Info => "INF".bold().cyan(),
        Level::Debug => "DBG".bold().blue(),
        Level::Trace => "TRC".bold().dimmed(),
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "{}{}{} {}",
            "[".bold().white(),
            tag(record.level()),
            "]".bold().white(),
            record.args()
        );
        emit(&line);
    }

    fn flush(&self) {}
}

fn emit(line: &str) {
    let bar = progress_slot().clone();
    match bar {
        Some(bar) => bar.suspend(|| eprintln!("{line}")),
        None => eprintln!("{line}"),
    }
}

/// Maps `-v` occurrences to a level: warnings by default, `-v` info, `-vv` debug.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(verbose: u8) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level_for_verbosity(verbose));
}
