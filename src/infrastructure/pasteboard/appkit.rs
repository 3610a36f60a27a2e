//! macOS general pasteboard adapter
//!
//! Talks to `NSPasteboard` directly, so every type the pasteboard holds is
//! visible, not just the ones a cross-platform crate knows about.

// `cocoa` is deprecated in favour of objc2; msg_send! trips cfg warnings
#![allow(deprecated)]
#![allow(unexpected_cfgs)]

use std::ffi::c_void;
use std::os::raw::c_char;

use cocoa::base::{id, nil, BOOL, NO};
use cocoa::foundation::NSAutoreleasePool;
use log::debug;
use objc::{class, msg_send, sel, sel_impl};

use crate::application::ports::{ClipboardError, Pasteboard};
use crate::domain::clipboard::ContentType;

/// NSUTF8StringEncoding
const NS_UTF8_STRING_ENCODING: usize = 4;

/// Adapter over `[NSPasteboard generalPasteboard]`
pub struct AppKitPasteboard {
    pasteboard: id,
}

impl AppKitPasteboard {
    /// Open the general pasteboard
    pub fn general() -> Result<Self, ClipboardError> {
        let pasteboard: id = unsafe { msg_send![class!(NSPasteboard), generalPasteboard] };
        if pasteboard == nil {
            return Err(ClipboardError::Unavailable(
                "NSPasteboard has no general pasteboard".to_string(),
            ));
        }
        debug!("Opened general pasteboard");
        Ok(Self { pasteboard })
    }
}

/// Run `f` inside an autorelease pool so temporaries are freed per call.
fn with_pool<T>(f: impl FnOnce() -> T) -> T {
    unsafe {
        let pool = NSAutoreleasePool::new(nil);
        let result = f();
        pool.drain();
        result
    }
}

/// Autoreleased NSString copy of `s`
unsafe fn ns_string(s: &str) -> id {
    let string: id = msg_send![class!(NSString), alloc];
    let string: id = msg_send![string,
        initWithBytes: s.as_ptr() as *const c_void
        length: s.len()
        encoding: NS_UTF8_STRING_ENCODING];
    msg_send![string, autorelease]
}

unsafe fn rust_string(string: id) -> Option<String> {
    if string == nil {
        return None;
    }
    let len: usize = msg_send![string, lengthOfBytesUsingEncoding: NS_UTF8_STRING_ENCODING];
    let ptr: *const c_char = msg_send![string, UTF8String];
    if ptr.is_null() {
        return None;
    }
    let bytes = std::slice::from_raw_parts(ptr as *const u8, len);
    Some(String::from_utf8_lossy(bytes).into_owned())
}

impl Pasteboard for AppKitPasteboard {
    fn clear(&mut self) -> Result<(), ClipboardError> {
        with_pool(|| unsafe {
            let _change_count: isize = msg_send![self.pasteboard, clearContents];
        });
        Ok(())
    }

    fn types(&mut self) -> Result<Vec<ContentType>, ClipboardError> {
        Ok(with_pool(|| unsafe {
            let types: id = msg_send![self.pasteboard, types];
            if types == nil {
                return Vec::new();
            }
            let count: usize = msg_send![types, count];
            (0..count)
                .filter_map(|i| {
                    let item: id = msg_send![types, objectAtIndex: i];
                    rust_string(item)
                })
                .map(ContentType::new)
                .collect()
        }))
    }

    fn string_for_type(
        &mut self,
        content_type: &ContentType,
    ) -> Result<Option<String>, ClipboardError> {
        Ok(with_pool(|| unsafe {
            let string: id =
                msg_send![self.pasteboard, stringForType: ns_string(content_type.as_str())];
            rust_string(string)
        }))
    }

    fn set_string_for_type(
        &mut self,
        content: &str,
        content_type: &ContentType,
    ) -> Result<(), ClipboardError> {
        let ok: BOOL = with_pool(|| unsafe {
            msg_send![self.pasteboard,
                setString: ns_string(content)
                forType: ns_string(content_type.as_str())]
        });
        if ok == NO {
            return Err(ClipboardError::WriteFailed(format!(
                "NSPasteboard rejected string for {}",
                content_type
            )));
        }
        Ok(())
    }

    fn data_for_type(
        &mut self,
        content_type: &ContentType,
    ) -> Result<Option<Vec<u8>>, ClipboardError> {
        Ok(with_pool(|| unsafe {
            let data: id =
                msg_send![self.pasteboard, dataForType: ns_string(content_type.as_str())];
            if data == nil {
                return None;
            }
            let len: usize = msg_send![data, length];
            if len == 0 {
                return Some(Vec::new());
            }
            let ptr: *const c_void = msg_send![data, bytes];
            Some(std::slice::from_raw_parts(ptr as *const u8, len).to_vec())
        }))
    }

    fn set_data_for_type(
        &mut self,
        data: &[u8],
        content_type: &ContentType,
    ) -> Result<(), ClipboardError> {
        let ok: BOOL = with_pool(|| unsafe {
            let bytes: id = msg_send![class!(NSData),
                dataWithBytes: data.as_ptr() as *const c_void
                length: data.len()];
            msg_send![self.pasteboard,
                setData: bytes
                forType: ns_string(content_type.as_str())]
        });
        if ok == NO {
            return Err(ClipboardError::WriteFailed(format!(
                "NSPasteboard rejected data for {}",
                content_type
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ns_string_round_trip() {
        with_pool(|| unsafe {
            let text = "héllo\u{1F600}";
            assert_eq!(rust_string(ns_string(text)), Some(text.to_string()));
        });
    }

    #[test]
    fn nil_is_not_a_string() {
        assert!(unsafe { rust_string(nil) }.is_none());
    }
}
