//! Console output handle for user-facing lines.
//!
//! All user-visible output (rendered findings, error lines, debug narration)
//! goes through [`ConsoleStyle`] rather than `println!`, so commands stay
//! testable with in-memory writers. Logging via `tracing` is separate and
//! never carries user-facing output.

use std::io::Write;

/// Output verbosity selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Normal output: findings and errors only.
    #[default]
    Normal,
    /// Debug output: narrate each orchestration step.
    Debug,
}

/// User-facing console bound to an output and an error stream.
pub struct ConsoleStyle {
    verbosity: Verbosity,
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
}

impl ConsoleStyle {
    /// Creates a console bound to the process stdout and stderr.
    #[must_use]
    pub fn stdio(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            out: Box::new(std::io::stdout()),
            err: Box::new(std::io::stderr()),
        }
    }

    /// Creates a console writing to the given writers.
    #[must_use]
    pub fn with_writers(
        verbosity: Verbosity,
        out: Box<dyn Write + Send>,
        err: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            verbosity,
            out,
            err,
        }
    }

    /// Returns true when debug narration is enabled.
    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.verbosity == Verbosity::Debug
    }

    /// Writes a line to the output stream.
    ///
    /// Write failures (e.g. a closed pipe) are ignored; console output is
    /// best-effort.
    pub fn line(&mut self, message: &str) {
        let _ = writeln!(self.out, "{message}");
    }

    /// Writes a line to the error stream.
    pub fn error(&mut self, message: &str) {
        let _ = writeln!(self.err, "{message}");
    }

    /// Writes a narration line to the output stream under debug verbosity.
    ///
    /// No-op otherwise.
    pub fn debug(&mut self, message: &str) {
        if self.is_debug() {
            self.line(message);
        }
    }
}

impl std::fmt::Debug for ConsoleStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleStyle")
            .field("verbosity", &self.verbosity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Writer backed by a shared buffer, inspectable after the console is
    /// done with it.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn console(verbosity: Verbosity) -> (ConsoleStyle, SharedBuf, SharedBuf) {
        let out = SharedBuf::default();
        let err = SharedBuf::default();
        let console = ConsoleStyle::with_writers(
            verbosity,
            Box::new(out.clone()),
            Box::new(err.clone()),
        );
        (console, out, err)
    }

    #[test]
    fn line_goes_to_out() {
        let (mut console, out, err) = console(Verbosity::Normal);
        console.line("hello");
        assert_eq!(out.contents(), "hello\n");
        assert_eq!(err.contents(), "");
    }

    #[test]
    fn error_goes_to_err() {
        let (mut console, out, err) = console(Verbosity::Normal);
        console.error("boom");
        assert_eq!(out.contents(), "");
        assert_eq!(err.contents(), "boom\n");
    }

    #[test]
    fn debug_is_silent_under_normal_verbosity() {
        let (mut console, out, _) = console(Verbosity::Normal);
        console.debug("step one");
        assert_eq!(out.contents(), "");
        assert!(!console.is_debug());
    }

    #[test]
    fn debug_narrates_under_debug_verbosity() {
        let (mut console, out, _) = console(Verbosity::Debug);
        console.debug("step one");
        assert_eq!(out.contents(), "step one\n");
        assert!(console.is_debug());
    }
}
