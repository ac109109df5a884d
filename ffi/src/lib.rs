//! C-ABI wrapper around `zoo-core`.
//!
//! # Overview
//! Lets any language with a C FFI build a `ZooClient` backed by the network
//! transport and read animal messages from it.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - `zoo_read_message` mirrors `ZooClient::read_message`: a transport
//!   failure comes back as an empty string, null is reserved for invalid
//!   arguments.
//! - The C caller owns all returned pointers and must call the matching
//!   `zoo_*_free` function to release them.

pub mod types;

use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Duration;

use zoo_core::{UreqTransportFactory, ZooClient, ZooConfig};

use types::*;

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new `ZooClient` bound to `base_url`, whose requests time out after
/// `timeout_ms` milliseconds.
///
/// Returns null if `base_url` is null, not UTF-8, or if an internal panic
/// occurs. The caller must free the returned pointer with `zoo_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn zoo_client_new(base_url: *const c_char, timeout_ms: u64) -> *mut FfiZooClient {
    catch_unwind(|| {
        if base_url.is_null() {
            return std::ptr::null_mut();
        }
        let Ok(url) = unsafe { CStr::from_ptr(base_url) }.to_str() else {
            return std::ptr::null_mut();
        };
        let factory = UreqTransportFactory::new(Duration::from_millis(timeout_ms));
        let client = ZooClient::new(&factory, url);
        Box::into_raw(Box::new(FfiZooClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Create a new `ZooClient` from `ZOO_BASE_URL` / `ZOO_TIMEOUT_MS`.
///
/// Returns null if the environment holds an invalid value.
#[unsafe(no_mangle)]
pub extern "C" fn zoo_client_new_from_env() -> *mut FfiZooClient {
    catch_unwind(|| {
        let config = match ZooConfig::from_env() {
            Ok(config) => config,
            Err(err) => {
                tracing::error!(error = %err, "invalid zoo client configuration");
                return std::ptr::null_mut();
            }
        };
        let factory = UreqTransportFactory::new(config.timeout);
        let client = ZooClient::from_config(&factory, &config);
        Box::into_raw(Box::new(FfiZooClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a `ZooClient` created by `zoo_client_new*`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn zoo_client_free(client: *mut FfiZooClient) {
    if !client.is_null() {
        // `dyn Transport` is not `RefUnwindSafe`.
        let _ = catch_unwind(AssertUnwindSafe(|| {
            drop(unsafe { Box::from_raw(client) });
        }));
    }
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Read the message for `animal`.
///
/// Returns the response body, or an empty string if the request failed.
/// Returns null if `client` or `animal` is null or `animal` is not UTF-8.
/// The caller must free the returned string with `zoo_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn zoo_read_message(
    client: *const FfiZooClient,
    animal: *const c_char,
) -> *mut c_char {
    catch_unwind(AssertUnwindSafe(|| {
        if client.is_null() || animal.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let Ok(animal) = unsafe { CStr::from_ptr(animal) }.to_str() else {
            return std::ptr::null_mut();
        };
        to_c_string(client.inner.read_message(animal)).into_raw()
    }))
    .unwrap_or(std::ptr::null_mut())
}

/// Free a C string returned by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn zoo_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { std::ffi::CString::from_raw(s) });
        });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
