// cli/constants.rs — Program identity, size multipliers, and display infrastructure.

use std::sync::atomic::{AtomicU32, Ordering};

// ── Identity ─────────────────────────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "lzdgen";

// ── Size multipliers (suffixes accepted by `--size`) ─────────────────────────
pub const KB: u64 = 1 << 10;
pub const MB: u64 = 1 << 20;
pub const GB: u64 = 1 << 30;
pub const TB: u64 = 1 << 40;

// ── Display level ────────────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal (default); 3 = verbose (`-v`:
// seed and digest); 4 = very verbose (`-vv`: parameters and progress).
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Print to stderr unconditionally.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Print to stderr when the display level is at least `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
