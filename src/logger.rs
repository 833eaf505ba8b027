//! Diagnostics of the pass manager.
//!
//! Messages are printed to stderr with colors, and the number of errors
//! and warnings is recorded per thread. With the `no-logger` feature,
//! nothing is printed but the counters are still updated.

use std::cell::RefCell;

#[cfg(not(feature = "no-logger"))]
use colored::*;

thread_local! {
  static STATE: RefCell<GlobalState> = RefCell::new(GlobalState::default());
}

/// Global state of the logger.
#[derive(Default)]
struct GlobalState {
  err_num: usize,
  warn_num: usize,
  verbose: bool,
}

/// Resets the global state, verbosity included.
pub fn reset() {
  STATE.with(|gs| *gs.borrow_mut() = GlobalState::default());
}

/// Enables or disables printing of notes.
pub fn set_verbose(verbose: bool) {
  STATE.with(|gs| gs.borrow_mut().verbose = verbose);
}

/// Checks if notes are printed.
pub fn is_verbose() -> bool {
  STATE.with(|gs| gs.borrow().verbose)
}

/// Logs an error.
pub fn log_error(message: &str) {
  STATE.with(|gs| gs.borrow_mut().err_num += 1);
  #[cfg(not(feature = "no-logger"))]
  eprintln!("{}: {}", "error".bright_red(), message);
  #[cfg(feature = "no-logger")]
  let _ = message;
}

/// Logs a warning.
pub fn log_warning(message: &str) {
  STATE.with(|gs| gs.borrow_mut().warn_num += 1);
  #[cfg(not(feature = "no-logger"))]
  eprintln!("{}: {}", "warning".yellow(), message);
  #[cfg(feature = "no-logger")]
  let _ = message;
}

/// Logs a note, only if verbose mode is on.
///
/// The message is built lazily, so callers pay nothing when notes
/// are disabled.
pub fn log_note<F>(message: F)
where
  F: FnOnce() -> String,
{
  if !is_verbose() {
    return;
  }
  #[cfg(not(feature = "no-logger"))]
  eprintln!("{}: {}", "note".blue(), message());
  #[cfg(feature = "no-logger")]
  let _ = message;
}

/// Logs global information (total error/warning number).
#[cfg(feature = "no-logger")]
pub fn log_global() {}

/// Logs global information (total error/warning number).
#[cfg(not(feature = "no-logger"))]
pub fn log_global() {
  STATE.with(|gs| {
    let gs = gs.borrow();
    // error info
    if gs.err_num != 0 {
      eprint!("{} {}", gs.err_num, "error".bright_red());
      if gs.err_num > 1 {
        eprint!("{}", "s".bright_red());
      }
    }
    // seperator
    if gs.err_num != 0 && gs.warn_num != 0 {
      eprint!(" and ");
    }
    // warning info
    if gs.warn_num != 0 {
      eprint!("{} {}", gs.warn_num, "warning".yellow());
      if gs.warn_num > 1 {
        eprint!("{}", "s".yellow());
      }
    }
    // ending
    if gs.err_num + gs.warn_num != 0 {
      eprintln!(" emitted");
    }
  });
}

/// Returns the number of errors.
pub fn error_num() -> usize {
  STATE.with(|gs| gs.borrow().err_num)
}

/// Returns the number of warnings.
pub fn warning_num() -> usize {
  STATE.with(|gs| gs.borrow().warn_num)
}

/// Checks if there are some errors.
pub fn has_error() -> bool {
  error_num() != 0
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn counters() {
    reset();
    assert!(!has_error());
    log_error("test error");
    log_warning("test warning");
    log_warning("test warning 2");
    log_global();
    assert_eq!(error_num(), 1);
    assert_eq!(warning_num(), 2);
    reset();
    assert_eq!(error_num() + warning_num(), 0);
  }

  #[test]
  fn notes_are_lazy() {
    reset();
    let mut built = false;
    log_note(|| {
      built = true;
      "hidden".into()
    });
    assert!(!built);
    set_verbose(true);
    log_note(|| {
      built = true;
      "shown".into()
    });
    // notes are compiled out without the logger
    assert_eq!(built, cfg!(not(feature = "no-logger")));
    assert_eq!(error_num() + warning_num(), 0);
    reset();
    assert!(!is_verbose());
  }
}
