//! Command output with a transient loading line.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use console::Term;

/// Raw terminal operations the [`Screen`] is drawn with.
pub trait Console: Send + Sync {
    fn write_out(&self, text: &str) -> io::Result<()>;
    fn write_err_line(&self, line: &str) -> io::Result<()>;
    /// Erase the last `n` lines written to stderr.
    fn clear_err_lines(&self, n: usize) -> io::Result<()>;
    fn err_is_term(&self) -> bool;
}

/// Standard output and standard error of the process.
pub struct TermConsole {
    out: Term,
    err: Term,
}

impl Default for TermConsole {
    fn default() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
        }
    }
}

impl Console for TermConsole {
    fn write_out(&self, text: &str) -> io::Result<()> {
        self.out.write_str(text)
    }

    fn write_err_line(&self, line: &str) -> io::Result<()> {
        self.err.write_line(line)
    }

    fn clear_err_lines(&self, n: usize) -> io::Result<()> {
        self.err.clear_last_lines(n)
    }

    fn err_is_term(&self) -> bool {
        self.err.is_term()
    }
}

/// Reports go to stdout; messages and the loading line go to stderr.
///
/// The loading line is always the last stderr line while it is shown. Any
/// message removes it before writing, so clearing it never erases anything
/// else.
pub struct Screen {
    console: Box<dyn Console>,
    progress: bool,
    loading: AtomicBool,
}

impl Screen {
    /// `progress` enables the loading line. It stays off when stderr is not a
    /// terminal.
    pub fn new(console: impl Console + 'static, progress: bool) -> Self {
        let progress = progress && console.err_is_term();
        Self {
            console: Box::new(console),
            progress,
            loading: AtomicBool::new(false),
        }
    }

    pub fn report(&self, text: &str) -> io::Result<()> {
        self.console.write_out(text)
    }

    pub fn message(&self, line: &str) -> io::Result<()> {
        self.clear_loading()?;
        self.console.write_err_line(line)
    }

    pub fn show_loading(&self, line: &str) -> io::Result<()> {
        if !self.progress {
            return Ok(());
        }
        self.clear_loading()?;
        self.console.write_err_line(line)?;
        self.loading.store(true, Ordering::Release);
        Ok(())
    }

    /// Remove the loading line if it is still shown.
    pub fn clear_loading(&self) -> io::Result<()> {
        if self.loading.swap(false, Ordering::AcqRel) {
            self.console.clear_err_lines(1)
        } else {
            Ok(())
        }
    }
}
