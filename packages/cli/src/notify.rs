use std::sync::Arc;

use client::{FailureNotifier, FetchError};
use common::Handle;
use tracing::debug;

use crate::render::render_failure;
use crate::screen::Screen;

/// Shows fetch failures on stderr.
pub struct TerminalNotifier {
    screen: Arc<Screen>,
}

impl TerminalNotifier {
    pub fn new(screen: Arc<Screen>) -> Self {
        Self { screen }
    }
}

impl FailureNotifier for TerminalNotifier {
    fn notify_failure(&self, handle: &Handle, error: &FetchError) {
        debug!(handle = %handle, code = error.code(), error = %error, "Fetch failed");
        // Nothing sensible to do if stderr itself is gone.
        let _ = self.screen.message(&render_failure());
    }
}
