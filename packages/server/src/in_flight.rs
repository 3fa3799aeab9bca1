use std::sync::Arc;

use common::Handle;
use dashmap::DashSet;

/// Handles with a check currently running.
///
/// Codeforces handles are case-insensitive, so keys are lowercased.
#[derive(Clone, Default)]
pub struct InFlight {
    handles: Arc<DashSet<String>>,
}

impl InFlight {
    /// Mark `handle` as being checked, or return `None` if it already is.
    pub fn acquire(&self, handle: &Handle) -> Option<InFlightGuard> {
        let key = handle.as_str().to_ascii_lowercase();
        self.handles.insert(key.clone()).then(|| InFlightGuard {
            handles: Arc::clone(&self.handles),
            key,
        })
    }

    pub fn is_checking(&self, handle: &Handle) -> bool {
        self.handles
            .contains(&handle.as_str().to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// Releases the handle when dropped.
pub struct InFlightGuard {
    handles: Arc<DashSet<String>>,
    key: String,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.handles.remove(&self.key);
    }
}
