use std::convert::Infallible;

use crate::lifecycle::PowerOps;
use crate::Error;

/// Stub backend for everything that is not Windows: creation always fails,
/// so no handle can ever exist and the remaining operations are vacuous.
pub(crate) struct Ops;

impl PowerOps for Ops {
  type Raw = Infallible;

  fn create_request(&self) -> Result<Infallible, Error> {
    Err(Error::Unsupported)
  }

  fn set_system_required(&self, raw: Infallible) -> Result<(), Error> {
    match raw {}
  }

  fn set_display_required(&self, raw: Infallible) -> Result<(), Error> {
    match raw {}
  }

  fn clear_system_required(&self, raw: Infallible) {
    match raw {}
  }

  fn clear_display_required(&self, raw: Infallible) {
    match raw {}
  }

  fn close(&self, raw: Infallible) {
    match raw {}
  }
}
