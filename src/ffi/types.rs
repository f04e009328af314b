//! Marshalling types for the Go calling convention boundary.

use std::ffi::CStr;
use std::marker::PhantomData;
use std::os::raw::{c_char, c_longlong};

use crate::error::{BridgeError, BridgeResult};
use crate::operation::Operation;

/// Integer type the Go runtime uses for lengths (`GoInt`)
pub type GoInt = c_longlong;

/// Mirror of the exported Go string layout: `struct { const char *p; GoInt n; }`
///
/// The descriptor borrows its backing text for the duration of a single
/// foreign call; the recorded length is the byte length of the text at
/// construction time. The text is passed through uninspected: empty strings,
/// non-ASCII content, and embedded NUL bytes are all legal, since the layout
/// is length-delimited rather than NUL-terminated.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct GoString<'a> {
    p: *const c_char,
    n: GoInt,
    _text: PhantomData<&'a str>,
}

impl<'a> GoString<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            p: text.as_ptr().cast(),
            n: text.len() as GoInt,
            _text: PhantomData,
        }
    }

    /// Byte length recorded at construction time
    pub fn len(&self) -> GoInt {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn as_ptr(&self) -> *const c_char {
        self.p
    }
}

impl<'a> From<&'a str> for GoString<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

/// Decode the text a forwarding call returned.
///
/// A null pointer means the library produced no response; anything else is
/// surfaced to the caller rather than discarded.
///
/// # Safety
///
/// `raw` must be null or point to a NUL-terminated string that remains valid
/// for the duration of this call.
pub(crate) unsafe fn decode_response(
    operation: Operation,
    raw: *const c_char,
) -> BridgeResult<Option<String>> {
    if raw.is_null() {
        return Ok(None);
    }

    let text = CStr::from_ptr(raw)
        .to_str()
        .map_err(|source| BridgeError::ForeignCall { operation, source })?;

    Ok(Some(text.to_owned()))
}
