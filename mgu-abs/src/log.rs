/*!

Logging for the workspace. The (crate) public interface consists of
`set_global_logging_threshold()` / `get_global_logging_threshold()` and the macros `critical!`,
`error!`, `warning!`, `info!`, `debug!`, and `trace!`. The backing implementation is the
`tracing` / `tracing-subscriber` pair, but nothing outside this module depends on that.

Thresholds are small integers:

| threshold | emitted                |
|-----------|------------------------|
| 0         | nothing                |
| 1         | critical, error        |
| 2         | ... + warning          |
| 3         | ... + info             |
| 4         | ... + debug            |
| 5         | ... + trace            |

*/

use std::sync::atomic::{AtomicU8, Ordering};

use tracing::level_filters::LevelFilter;

static GLOBAL_LOGGING_THRESHOLD: AtomicU8 = AtomicU8::new(2);

/// Sets the global logging threshold and installs the global subscriber if one is not already
/// installed. Safe to call from multiple tests; only the first installation wins.
pub fn set_global_logging_threshold(threshold: u8) {
  GLOBAL_LOGGING_THRESHOLD.store(threshold, Ordering::Relaxed);

  let level = match threshold {
    0 => LevelFilter::OFF,
    1 => LevelFilter::ERROR,
    2 => LevelFilter::WARN,
    3 => LevelFilter::INFO,
    4 => LevelFilter::DEBUG,
    _ => LevelFilter::TRACE,
  };

  // A subscriber may already be installed; keep the stored threshold either way.
  let _ = tracing_subscriber::fmt()
      .with_max_level(level)
      .without_time()
      .try_init();
}

pub fn get_global_logging_threshold() -> u8 {
  GLOBAL_LOGGING_THRESHOLD.load(Ordering::Relaxed)
}

// The macros forward to `tracing`. `critical!` and `warning!` are renames, the rest are
// pass-throughs kept so that call sites never name the backing crate.

#[macro_export]
macro_rules! critical {
  ($($arg:tt)*) => { $crate::tracing::error!($($arg)*) };
}

#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => { $crate::tracing::error!($($arg)*) };
}

#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => { $crate::tracing::warn!($($arg)*) };
}

#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => { $crate::tracing::info!($($arg)*) };
}

#[macro_export]
macro_rules! debug {
  ($($arg:tt)*) => { $crate::tracing::debug!($($arg)*) };
}

#[macro_export]
macro_rules! trace {
  ($($arg:tt)*) => { $crate::tracing::trace!($($arg)*) };
}
