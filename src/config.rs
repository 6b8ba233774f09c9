use log::Level;

/// Height of the fixed header; section scroll targets land this far below the viewport top.
pub const HEADER_OFFSET: f64 = 80.0;

/// Delay standing in for "next animation frame" before a shown card fades in.
pub const FRAME_TICK_MS: u32 = 10;
/// Matches the card opacity/transform transition duration.
pub const FADE_OUT_MS: u32 = 300;

pub const ENROLL_DELAY_MS: u32 = 1500;
pub const PREVIEW_DELAY_MS: u32 = 1000;

pub const PARALLAX_SPEED: f64 = 0.5;

pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Vertical offset (px) of a hidden card or revealable element.
pub const HIDDEN_OFFSET_Y: f64 = 20.0;
pub const REVEAL_TRANSITION: &str = "opacity 0.5s ease, transform 0.5s ease";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
