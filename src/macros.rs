//! Small crate-wide convenience macros.
//!
//! The logging macros forward to the browser console.  Off wasm32 the
//! console call is never reached, so the pure reducer code can be
//! unit-tested on the host without tripping wasm-bindgen's "imported
//! function called outside wasm" panic.

/// Debug-level console log.  Compiled out of release builds.
///
/// ```rust,ignore
/// debug_log!("dropping stale status response seq={} latest={}", seq, latest);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(all(target_arch = "wasm32", debug_assertions)) {
            web_sys::console::log_1(
                &format!("[session-panel] {}", format!($($arg)*)).into(),
            );
        }
    };
}

/// Warning-level console log.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        if cfg!(target_arch = "wasm32") {
            web_sys::console::warn_1(
                &format!("[session-panel] {}", format!($($arg)*)).into(),
            );
        }
    };
}

/// Error-level console log.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        if cfg!(target_arch = "wasm32") {
            web_sys::console::error_1(
                &format!("[session-panel] {}", format!($($arg)*)).into(),
            );
        }
    };
}

/// Acquire a **mutable** borrow from a `RefCell` (or `Rc<RefCell>`).
/// The standard panic message emitted by `RefCell::borrow_mut()` is
/// preserved to keep the macro zero-cost.
#[macro_export]
macro_rules! mut_borrow {
    ($cell:expr) => {
        $cell.borrow_mut()
    };
}
