use crate::Error;

/// The primitive operations the OS must provide for one power request.
///
/// There is exactly one real implementation (the Windows backend) plus the
/// stub used on every other platform; tests drive the lifecycle rules below
/// through a recording fake instead of the OS.
pub(crate) trait PowerOps {
  /// The OS identifier for one power request object.
  type Raw: Copy;

  fn create_request(&self) -> Result<Self::Raw, Error>;
  fn set_system_required(&self, raw: Self::Raw) -> Result<(), Error>;
  fn set_display_required(&self, raw: Self::Raw) -> Result<(), Error>;

  // Clearing and closing are best-effort: there is no recovery action if the
  // OS refuses, so these cannot fail observably.
  fn clear_system_required(&self, raw: Self::Raw);
  fn clear_display_required(&self, raw: Self::Raw);
  fn close(&self, raw: Self::Raw);
}

/// One outstanding keep-awake request.
///
/// Invariant: `display` implies `raw` is `Some`. Both explicit `release()`
/// and `Drop` funnel into the same routine, which takes the stored handle as
/// its first step so a second invocation finds nothing left to do.
pub(crate) struct Request<O: PowerOps> {
  ops: O,
  raw: Option<O::Raw>,
  display: bool,
}

impl<O: PowerOps> Request<O> {
  pub(crate) fn create(ops: O, keep_display: bool) -> Result<Self, Error> {
    let raw = ops.create_request()?;

    if let Err(err) = ops.set_system_required(raw) {
      ops.close(raw);
      return Err(err);
    }

    if keep_display {
      if let Err(err) = ops.set_display_required(raw) {
        // roll back the assertion that did activate before giving up
        ops.clear_system_required(raw);
        ops.close(raw);
        return Err(err);
      }
    }

    Ok(Self {
      ops,
      raw: Some(raw),
      display: keep_display,
    })
  }

  /// Clear the assertions and close the OS object. No-op once released.
  pub(crate) fn release(&mut self) {
    if let Some(raw) = self.raw.take() {
      self.ops.clear_system_required(raw);
      if self.display {
        self.ops.clear_display_required(raw);
      }
      self.ops.close(raw);
      self.display = false;
    }
  }

  pub(crate) fn keeps_display(&self) -> bool {
    self.display
  }

  pub(crate) fn is_active(&self) -> bool {
    self.raw.is_some()
  }
}

impl<O: PowerOps> Drop for Request<O> {
  fn drop(&mut self) {
    self.release();
  }
}

/// Process-wide variant: at most one request, created lazily and reused.
///
/// Unlike `Request`, an existing system-only request can be upgraded to also
/// keep the display on by a later `activate(true)`. There is no downgrade.
pub(crate) struct SingletonState<O: PowerOps> {
  raw: Option<O::Raw>,
  display: bool,
}

impl<O: PowerOps> SingletonState<O> {
  pub(crate) const fn new() -> Self {
    Self {
      raw: None,
      display: false,
    }
  }

  pub(crate) fn activate(&mut self, ops: &O, keep_display: bool) -> Result<(), Error> {
    let raw = match self.raw {
      Some(raw) => raw,
      None => {
        let raw = ops.create_request()?;
        if let Err(err) = ops.set_system_required(raw) {
          ops.close(raw);
          return Err(err);
        }
        self.raw = Some(raw);
        self.display = false;
        raw
      }
    };

    if keep_display && !self.display {
      // a failed upgrade leaves the request active, system-only
      ops.set_display_required(raw)?;
      self.display = true;
    }

    Ok(())
  }

  pub(crate) fn deactivate(&mut self, ops: &O) {
    if let Some(raw) = self.raw.take() {
      ops.clear_system_required(raw);
      if self.display {
        ops.clear_display_required(raw);
      }
      ops.close(raw);
      self.display = false;
    }
  }

  pub(crate) fn is_active(&self) -> bool {
    self.raw.is_some()
  }

  pub(crate) fn keeps_display(&self) -> bool {
    self.display
  }
}
