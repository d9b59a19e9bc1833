//! Runtime switch for the native grouping primitive.
//!
//! The switch is read on every [`group_by_typename`](super::group_by_typename)
//! call, so disabling or restoring it takes effect immediately.

use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};

static NATIVE_GROUPING: AtomicBool = AtomicBool::new(true);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Native,
    Fallback,
}

pub fn native_grouping_available() -> bool {
    NATIVE_GROUPING.load(Ordering::Relaxed)
}

/// Makes subsequent calls use the fold fallback.
pub fn disable_native_grouping() {
    if NATIVE_GROUPING.swap(false, Ordering::Relaxed) {
        info!("native grouping disabled, using fold fallback");
    }
}

pub fn restore_native_grouping() {
    if !NATIVE_GROUPING.swap(true, Ordering::Relaxed) {
        info!("native grouping restored");
    }
}

/// Disables native grouping until the returned scope is dropped, then puts the
/// previous setting back.
pub fn force_fallback() -> FallbackScope {
    let was_native = NATIVE_GROUPING.swap(false, Ordering::Relaxed);
    debug!("fallback grouping forced (native was {})", was_native);
    FallbackScope { was_native }
}

#[must_use = "native grouping is restored as soon as the scope is dropped"]
#[derive(Debug)]
pub struct FallbackScope {
    was_native: bool,
}

impl Drop for FallbackScope {
    fn drop(&mut self) {
        if self.was_native {
            restore_native_grouping();
        }
    }
}

pub fn selected_strategy() -> Strategy {
    if native_grouping_available() {
        Strategy::Native
    } else {
        Strategy::Fallback
    }
}
