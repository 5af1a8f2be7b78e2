#![warn(clippy::all)]

mod lifecycle;

#[cfg(windows)]
mod windows;

#[cfg(not(windows))]
mod unsupported;

pub mod global;

#[cfg(windows)]
pub(crate) use crate::windows::Ops as PlatformOps;

#[cfg(not(windows))]
pub(crate) use crate::unsupported::Ops as PlatformOps;

use crate::lifecycle::Request;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// The OS refused to create the power request or activate an assertion.
  /// There is no finer diagnosis available from the API.
  #[error("power request failed: {0}")]
  Platform(#[source] std::io::Error),

  #[error("keeping the system awake is not supported on this platform")]
  Unsupported,
}

/// One outstanding "keep the system awake" request.
///
/// Each value owns an independent OS power request; any number of them may
/// coexist. Dropping the value releases the request, and [`release`] does the
/// same thing eagerly.
///
/// [`release`]: PowerRequest::release
///
/// ```no_run
/// let request = nosleep::PowerRequest::new(true)?;
/// // ... long-running work; the machine stays awake ...
/// drop(request);
/// # Ok::<(), nosleep::Error>(())
/// ```
pub struct PowerRequest {
  inner: Request<PlatformOps>,
}

impl PowerRequest {
  /// Ask the OS to keep the system awake, and additionally keep the display
  /// on when `keep_display` is set.
  ///
  /// Failure is recoverable: no OS resource is left behind, and callers that
  /// can live without the request may log the error and carry on.
  pub fn new(keep_display: bool) -> Result<Self, Error> {
    let inner = Request::create(PlatformOps, keep_display)?;
    Ok(Self { inner })
  }

  /// Whether the display-required assertion is held. Always false once the
  /// request has been released.
  pub fn keeps_display(&self) -> bool {
    self.inner.keeps_display()
  }

  /// Whether the underlying OS request is still open.
  pub fn is_active(&self) -> bool {
    self.inner.is_active()
  }

  /// Release the request now instead of waiting for drop. Safe to call any
  /// number of times.
  pub fn release(&mut self) {
    self.inner.release()
  }
}
