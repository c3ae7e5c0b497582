//! Diagnostic logging for `-v`.
//!
//! Diagnostics describe what the parser read and how long each report took.
//! They always go to stderr, prefixed with `elfy:`, so stdout carries nothing
//! but the report itself.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Set once at startup from `-v`.
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enable or disable diagnostics for the rest of the process.
pub fn init(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

/// Whether `-v` was given.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// `eprintln!` with an `elfy:` prefix, only under `-v`.
///
/// ```ignore
/// vprintln!("{} section headers", sections.len());
/// ```
macro_rules! vprintln {
    ($($arg:tt)*) => {
        if $crate::verbose::is_verbose() {
            eprintln!("elfy: {}", format_args!($($arg)*));
        }
    };
}

pub(crate) use vprintln;

/// Logs how long a report took to build when dropped, only under `-v`.
///
/// ```ignore
/// let _t = Timer::start("Section Headers");
/// // logs "elfy: Section Headers: 41.7µs"
/// ```
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    /// Start timing `label`.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if is_verbose() {
            eprintln!("elfy: {}: {:.1?}", self.label, self.elapsed());
        }
    }
}
