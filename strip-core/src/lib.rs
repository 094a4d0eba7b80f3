//! Strip Core - Platform-agnostic LED-Strip Logic
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Pixel-Modell, Wire-Encoding, Animation-Engine
//! und die Traits für Transport und Zeitmessung.

#![no_std]

pub mod animation;
pub mod buffer;
pub mod logic;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use animation::{AnimationSession, FrameContext};
pub use buffer::{MAX_FRAME_LEN, MAX_STRIP_LEN, PixelBuffer, WireFrame};
pub use logic::{chase_position, pulse_level};
pub use traits::{StripError, StripTransport, TimeSource, TransportError};
pub use types::{END_FRAME, MAX_BRIGHTNESS, Pixel, START_FRAME, WireLayout};
