// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use rgb::RGB8;
use strip_core::WireLayout;

// ============================================================================
// Strip Konfiguration
// ============================================================================

/// Anzahl der LEDs im Strip
pub const LED_COUNT: usize = 60;

/// Ziel-Framerate der Animation (Frames pro Sekunde)
pub const FRAME_RATE_FPS: f32 = 24.0;

/// Wire-Layout der Pixel-Kodierung
/// HeaderPacked ist das Layout, das zu gängiger APA102-Hardware passt.
/// Muss am echten Strip verifiziert werden (siehe strip-core::types).
pub const WIRE_LAYOUT: WireLayout = WireLayout::HeaderPacked;

// ============================================================================
// SPI Konfiguration
// ============================================================================

/// SPI Taktfrequenz in Hz
/// 1 MHz ist konservativ; APA102 verträgt deutlich mehr
pub const SPI_CLOCK_HZ: u32 = 1_000_000;

// ============================================================================
// Demo-Pattern Konfiguration
// ============================================================================

/// Periode des Puls-Effekts in Frames
/// 62 Frames ≈ 2,6 Sekunden bei 24 fps
pub const PULSE_PERIOD_FRAMES: u32 = 62;

/// Grundfarbe des Puls-Effekts (Weiß; Helligkeit moduliert der Puls)
pub const PULSE_COLOR: RGB8 = RGB8 {
    r: 255,
    g: 255,
    b: 255,
};
