//! Handle types for the FFI boundary.

use std::ffi::CString;

use zoo_core::ZooClient;

/// Opaque handle to a `ZooClient`. C callers receive a pointer to this and
/// pass it back into `zoo_read_message` / `zoo_client_free`.
pub struct FfiZooClient {
    pub(crate) inner: ZooClient,
}

/// Convert a message into a C string. Interior NUL bytes cannot be
/// represented and are dropped.
pub(crate) fn to_c_string(message: String) -> CString {
    let bytes: Vec<u8> = message.into_bytes().into_iter().filter(|b| *b != 0).collect();
    CString::new(bytes).unwrap_or_default()
}
