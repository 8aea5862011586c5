//! Application constants.

/// Event loop tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Frames of the loading spinner shown in the header.
pub const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
