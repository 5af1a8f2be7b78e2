use std::io;

use tracing::{trace, warn};
use windows_sys::Win32::Foundation::{CloseHandle, HANDLE, INVALID_HANDLE_VALUE};
use windows_sys::Win32::System::Power::{
  PowerClearRequest, PowerCreateRequest, PowerRequestDisplayRequired, PowerRequestSystemRequired,
  PowerSetRequest, POWER_REQUEST_CONTEXT_SIMPLE_STRING, POWER_REQUEST_CONTEXT_VERSION,
  POWER_REQUEST_TYPE,
};
use windows_sys::Win32::System::Threading::{REASON_CONTEXT, REASON_CONTEXT_0};

use crate::lifecycle::PowerOps;
use crate::Error;

// Shown by `powercfg /requests` next to the outstanding request
const REASON: &str = "Kept awake by nosleep";

pub(crate) struct Ops;

impl Ops {
  fn set(&self, raw: HANDLE, request_type: POWER_REQUEST_TYPE) -> Result<(), Error> {
    // SAFETY: raw is a live power request handle owned by the caller
    let ok = unsafe { PowerSetRequest(raw, request_type) };
    if ok == 0 {
      return Err(Error::Platform(io::Error::last_os_error()));
    }
    Ok(())
  }

  fn clear(&self, raw: HANDLE, request_type: POWER_REQUEST_TYPE) {
    // SAFETY: raw is a live power request handle owned by the caller
    let ok = unsafe { PowerClearRequest(raw, request_type) };
    if ok == 0 {
      warn!(
        "PowerClearRequest failed, ignoring. type={} err={}",
        request_type,
        io::Error::last_os_error()
      );
    }
  }
}

impl PowerOps for Ops {
  type Raw = HANDLE;

  fn create_request(&self) -> Result<HANDLE, Error> {
    // The OS keeps its own copy of the reason string, so the buffer only has
    // to outlive the call
    let mut reason: Vec<u16> = REASON.encode_utf16().chain(std::iter::once(0)).collect();
    let context = REASON_CONTEXT {
      Version: POWER_REQUEST_CONTEXT_VERSION,
      Flags: POWER_REQUEST_CONTEXT_SIMPLE_STRING,
      Reason: REASON_CONTEXT_0 {
        SimpleReasonString: reason.as_mut_ptr(),
      },
    };

    // SAFETY: context points at a fully initialized REASON_CONTEXT with a
    // nul-terminated simple reason string
    let raw = unsafe { PowerCreateRequest(&context) };
    if raw == INVALID_HANDLE_VALUE || raw == 0 {
      return Err(Error::Platform(io::Error::last_os_error()));
    }

    trace!("created power request. handle={:#x}", raw);
    Ok(raw)
  }

  fn set_system_required(&self, raw: HANDLE) -> Result<(), Error> {
    self.set(raw, PowerRequestSystemRequired)
  }

  fn set_display_required(&self, raw: HANDLE) -> Result<(), Error> {
    self.set(raw, PowerRequestDisplayRequired)
  }

  fn clear_system_required(&self, raw: HANDLE) {
    self.clear(raw, PowerRequestSystemRequired)
  }

  fn clear_display_required(&self, raw: HANDLE) {
    self.clear(raw, PowerRequestDisplayRequired)
  }

  fn close(&self, raw: HANDLE) {
    // SAFETY: raw was returned by PowerCreateRequest and is closed only here
    let ok = unsafe { CloseHandle(raw) };
    if ok == 0 {
      warn!("CloseHandle failed, ignoring. err={}", io::Error::last_os_error());
    }
    trace!("closed power request. handle={:#x}", raw);
  }
}
