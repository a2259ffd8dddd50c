use super::SeatingManager;
use parking_lot::Mutex;
use shared::seating::{CommandResponse, SeatingCommand};
use std::sync::Arc;

/// Shared handle to one [`SeatingManager`]
///
/// Tables and the waitlist form one ordering state, so a single coarse lock
/// guards the whole manager. Every command runs to completion under it.
#[derive(Debug, Clone)]
pub struct SeatingService {
    inner: Arc<Mutex<SeatingManager>>,
}

impl SeatingService {
    pub fn new(manager: SeatingManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    pub fn execute_command(&self, cmd: SeatingCommand) -> CommandResponse {
        self.inner.lock().execute_command(cmd)
    }

    /// Run a read-only query against a consistent view
    pub fn read<R>(&self, f: impl FnOnce(&SeatingManager) -> R) -> R {
        f(&self.inner.lock())
    }
}
