//! Process-wide keep-awake toggle.
//!
//! A simpler alternative to [`PowerRequest`](crate::PowerRequest): one shared
//! request for the whole process, created lazily by [`activate`] and torn
//! down by [`deactivate`]. Use this when there is no natural owner for a
//! request handle.

use std::sync::Mutex;

use crate::lifecycle::SingletonState;
use crate::{Error, PlatformOps};

// Sole accessor to the process-wide request
static STATE: Mutex<SingletonState<PlatformOps>> = Mutex::new(SingletonState::new());

/// Keep the system awake until [`deactivate`] is called.
///
/// The first call creates the shared request; later calls reuse it. Passing
/// `keep_display = true` upgrades an existing system-only request to also
/// keep the display on. There is no downgrade: once the display assertion is
/// active it stays active until [`deactivate`].
pub fn activate(keep_display: bool) -> Result<(), Error> {
  let mut state = STATE.lock().unwrap();
  state.activate(&PlatformOps, keep_display)
}

/// Let the system sleep again. No-op if [`activate`] never succeeded.
pub fn deactivate() {
  let mut state = STATE.lock().unwrap();
  state.deactivate(&PlatformOps)
}

/// Whether the shared request is currently active.
pub fn is_active() -> bool {
  STATE.lock().unwrap().is_active()
}

/// Whether the shared request also holds the display-required assertion.
pub fn keeps_display() -> bool {
  STATE.lock().unwrap().keeps_display()
}
