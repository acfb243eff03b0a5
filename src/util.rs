use std::borrow::Borrow;
use std::ffi::{CStr, CString};
use std::path::Path;

use crate::internal_prelude::*;

/// Convert a zero-terminated string (`const char *`) into a `String`.
///
/// # Safety
///
/// `string` must point to a valid, zero-terminated C string.
pub unsafe fn string_from_cstr(string: *const c_char) -> String {
    CStr::from_ptr(string).to_string_lossy().into_owned()
}

/// Convert a `String` or a `&str` into a zero-terminated string (`const char *`).
pub fn to_cstring<S: Borrow<str>>(string: S) -> Result<CString> {
    let string = string.borrow();
    CString::new(string).map_err(|_| format!("null byte in string: {string:?}").into())
}

/// Convert a filesystem path into a zero-terminated string.
pub fn path_to_cstring<P: AsRef<Path>>(path: P) -> Result<CString> {
    let path = path.as_ref();
    to_cstring(path.to_str().ok_or_else(|| format!("Invalid UTF-8 in file name: {path:?}"))?)
}

/// Convert a fixed-length (possibly zero-terminated) char buffer to a string.
pub fn string_from_fixed_bytes(bytes: &[c_char], len: usize) -> String {
    let len = len.min(bytes.len());
    let len = bytes[..len].iter().position(|&c| c == 0).unwrap_or(len);
    let bytes: Vec<u8> = bytes[..len].iter().map(|&c| c as u8).collect();
    String::from_utf8_lossy(&bytes).into_owned()
}
