//! Core Types für LED-Strip Steuerung
//!
//! Pixel-Modell und Wire-Layouts ohne Hardware-Dependencies

use rgb::RGB8;

use crate::traits::StripError;

/// Maximale Helligkeit (5-Bit Feld im APA102 Wire-Format)
pub const MAX_BRIGHTNESS: u8 = 31;

/// Start-of-Frame Marker: 32 Null-Bits vor den Pixel-Daten
///
/// Gehört zum Bus-Framing des Transports, nicht zum kodierten
/// Puffer-Inhalt.
pub const START_FRAME: [u8; 4] = [0x00; 4];

/// End-of-Frame Marker: 32 Eins-Bits nach den Pixel-Daten
pub const END_FRAME: [u8; 4] = [0xFF; 4];

/// Wire-Layout für die Pixel-Kodierung
///
/// Welches Layout der Strip tatsächlich erwartet ist nicht eindeutig
/// dokumentiert. Daher explizite Konfiguration statt verstecktem
/// Default - muss am echten Strip verifiziert werden.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WireLayout {
    /// Protokoll A: 32-Bit Wort mit 0b111 Header in den Top-Bits,
    /// Big-Endian emittiert (Header+Helligkeit, Blau, Grün, Rot)
    HeaderPacked,
    /// Protokoll B: rohe Feld-Bytes ohne Header
    /// (Helligkeit, Rot, Grün, Blau)
    RawFields,
}

/// Ein adressierbares Pixel: RGB-Farbe plus 5-Bit Helligkeit
///
/// Reiner Wert-Typ ohne Identität; wird bei jedem Schreibzugriff
/// vollständig ersetzt.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pixel {
    pub color: RGB8,
    pub brightness: u8,
}

impl Pixel {
    /// Pixel im Aus-Zustand (Farbe und Helligkeit null)
    pub const OFF: Self = Self {
        color: RGB8 { r: 0, g: 0, b: 0 },
        brightness: 0,
    };

    /// Erstellt ein Pixel mit validierter Helligkeit
    ///
    /// # Fehlerbehandlung
    /// Gibt `StripError::ValueOutOfRange` zurück wenn die Helligkeit
    /// über 31 liegt. Die Farbkanäle sind durch `u8` bereits begrenzt.
    pub fn new(color: RGB8, brightness: u8) -> Result<Self, StripError> {
        if brightness > MAX_BRIGHTNESS {
            return Err(StripError::ValueOutOfRange);
        }
        Ok(Self { color, brightness })
    }

    /// Kodiert das Pixel in seine 4 Wire-Bytes
    ///
    /// Deterministisch; das Ergebnis hängt nur vom Pixel-Zustand und
    /// dem gewählten Layout ab.
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use rgb::RGB8;
    /// # use strip_core::{Pixel, WireLayout};
    /// let pixel = Pixel::new(RGB8 { r: 255, g: 0, b: 0 }, 5).unwrap();
    /// assert_eq!(pixel.encode(WireLayout::HeaderPacked), [0xE5, 0x00, 0x00, 0xFF]);
    /// assert_eq!(pixel.encode(WireLayout::RawFields), [0x05, 0xFF, 0x00, 0x00]);
    /// ```
    pub fn encode(&self, layout: WireLayout) -> [u8; 4] {
        match layout {
            WireLayout::HeaderPacked => {
                let word = (0b111_u32 << 29)
                    | (u32::from(self.brightness & 0x1F) << 24)
                    | (u32::from(self.color.b) << 16)
                    | (u32::from(self.color.g) << 8)
                    | u32::from(self.color.r);
                word.to_be_bytes()
            }
            WireLayout::RawFields => {
                [self.brightness, self.color.r, self.color.g, self.color.b]
            }
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Pixel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Pixel {{ rgb: ({}, {}, {}), brightness: {} }}",
            self.color.r,
            self.color.g,
            self.color.b,
            self.brightness
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for WireLayout {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            WireLayout::HeaderPacked => defmt::write!(fmt, "HeaderPacked"),
            WireLayout::RawFields => defmt::write!(fmt, "RawFields"),
        }
    }
}
