use std::sync::atomic::{AtomicBool, Ordering};

static DIAG_DEBUG: AtomicBool = AtomicBool::new(false);

pub(crate) fn set_debug(enabled: bool) {
    DIAG_DEBUG.store(enabled, Ordering::Relaxed);
}

pub(crate) fn debug_enabled() -> bool {
    DIAG_DEBUG.load(Ordering::Relaxed)
}
