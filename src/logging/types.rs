//! The [`Log`] trait shared by logging backends.

/// Abstraction over logging backends.
///
/// Pipeline code logs through `&dyn Log` so it does not depend on how (or
/// whether) output is rendered.
pub trait Log {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (suppressed on console unless verbose).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log an action that was skipped because of `--dry-run`.
    fn dry_run(&self, msg: &str);
}
