// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;

// Re-exports von strip-core
pub use strip_core::{
    AnimationSession, FrameContext, Pixel, PixelBuffer, StripError, StripTransport, TimeSource,
    WireLayout, pulse_level,
};
