//! PixelBuffer: Pixel-Zustand und Wire-Frame Kodierung

use heapless::Vec;
use rgb::RGB8;

use crate::traits::StripError;
use crate::types::{Pixel, WireLayout};

/// Maximale Strip-Länge (Kapazität, zur Compile-Zeit fest)
pub const MAX_STRIP_LEN: usize = 144;

/// Maximale Wire-Frame Länge: 4 Bytes pro Pixel
pub const MAX_FRAME_LEN: usize = 4 * MAX_STRIP_LEN;

/// Kodierter Wire-Frame (exakt 4 × LED-Anzahl Bytes lang)
pub type WireFrame = Vec<u8, MAX_FRAME_LEN>;

/// Puffer für den Zustand aller Pixel eines Strips
///
/// Die LED-Anzahl wird bei der Konstruktion festgelegt und nie
/// geändert. Jede Mutation validiert ihre Argumente vollständig,
/// bevor irgendein Pixel angefasst wird (atomar pro Aufruf).
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use strip_core::{PixelBuffer, WireLayout};
/// let mut buffer = PixelBuffer::new(2, WireLayout::HeaderPacked).unwrap();
/// buffer.set(0, RGB8 { r: 255, g: 0, b: 0 }, 5).unwrap();
/// let frame = buffer.encode();
/// assert_eq!(&frame[..4], &[0xE5, 0x00, 0x00, 0xFF]);
/// assert_eq!(frame.len(), 8);
/// ```
pub struct PixelBuffer {
    pixels: Vec<Pixel, MAX_STRIP_LEN>,
    layout: WireLayout,
}

impl PixelBuffer {
    /// Erstellt einen Puffer mit `count` Pixeln, alle aus
    ///
    /// # Fehlerbehandlung
    /// `count == 0` oder `count > MAX_STRIP_LEN` ist ein
    /// Konfigurationsfehler.
    pub fn new(count: usize, layout: WireLayout) -> Result<Self, StripError> {
        if count == 0 || count > MAX_STRIP_LEN {
            return Err(StripError::InvalidConfig);
        }
        let mut pixels = Vec::new();
        pixels
            .resize(count, Pixel::OFF)
            .map_err(|_| StripError::InvalidConfig)?;
        Ok(Self { pixels, layout })
    }

    /// Anzahl der Pixel im Puffer
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Das bei der Konstruktion gewählte Wire-Layout
    pub fn layout(&self) -> WireLayout {
        self.layout
    }

    /// Liest ein Pixel, `None` bei ungültigem Index
    pub fn get(&self, index: usize) -> Option<Pixel> {
        self.pixels.get(index).copied()
    }

    /// Schreibt ein Pixel
    ///
    /// # Fehlerbehandlung
    /// - `IndexOutOfRange` wenn `index >= len()`
    /// - `ValueOutOfRange` wenn die Helligkeit über 31 liegt
    ///
    /// In beiden Fällen bleibt der Puffer byte-für-byte unverändert.
    pub fn set(&mut self, index: usize, color: RGB8, brightness: u8) -> Result<(), StripError> {
        if index >= self.pixels.len() {
            return Err(StripError::IndexOutOfRange);
        }
        let pixel = Pixel::new(color, brightness)?;
        self.pixels[index] = pixel;
        Ok(())
    }

    /// Setzt alle Pixel auf dieselbe Farbe und Helligkeit
    ///
    /// Validiert genau einmal, dann alles-oder-nichts: bei ungültiger
    /// Helligkeit wird kein einziges Pixel angefasst.
    pub fn fill(&mut self, color: RGB8, brightness: u8) -> Result<(), StripError> {
        let pixel = Pixel::new(color, brightness)?;
        for slot in self.pixels.iter_mut() {
            *slot = pixel;
        }
        Ok(())
    }

    /// Schaltet alle Pixel aus (äquivalent zu `fill` mit Null-Werten)
    pub fn clear(&mut self) {
        for slot in self.pixels.iter_mut() {
            *slot = Pixel::OFF;
        }
    }

    /// Kodiert den kompletten Puffer in den Wire-Frame
    ///
    /// Reine Funktion des aktuellen Pixel-Zustands: mutiert nichts,
    /// liefert die Pixel in Index-Reihenfolge, je 4 Bytes pro Pixel.
    pub fn encode(&self) -> WireFrame {
        self.pixels
            .iter()
            .flat_map(|pixel| pixel.encode(self.layout))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> RGB8 {
        RGB8 { r: 255, g: 0, b: 0 }
    }

    #[test]
    fn test_new_rejects_zero_count() {
        assert!(matches!(
            PixelBuffer::new(0, WireLayout::HeaderPacked),
            Err(StripError::InvalidConfig)
        ));
    }

    #[test]
    fn test_new_rejects_count_over_capacity() {
        assert!(matches!(
            PixelBuffer::new(MAX_STRIP_LEN + 1, WireLayout::HeaderPacked),
            Err(StripError::InvalidConfig)
        ));
    }

    #[test]
    fn test_new_buffer_encodes_all_header_bytes() {
        let buffer = PixelBuffer::new(3, WireLayout::HeaderPacked).unwrap();
        let frame = buffer.encode();
        assert_eq!(frame.len(), 12);
        for group in frame.chunks(4) {
            assert_eq!(group, [0xE0, 0x00, 0x00, 0x00]);
        }
    }

    #[test]
    fn test_set_writes_at_byte_offset() {
        let mut buffer = PixelBuffer::new(4, WireLayout::HeaderPacked).unwrap();
        buffer.set(2, red(), 5).unwrap();
        let frame = buffer.encode();
        assert_eq!(&frame[8..12], &[0xE5, 0x00, 0x00, 0xFF]);
    }

    #[test]
    fn test_set_out_of_range_leaves_buffer_unchanged() {
        let mut buffer = PixelBuffer::new(4, WireLayout::RawFields).unwrap();
        buffer.set(1, red(), 10).unwrap();
        let before = buffer.encode();

        let result = buffer.set(4, RGB8 { r: 0, g: 0, b: 0 }, 0);
        assert_eq!(result, Err(StripError::IndexOutOfRange));
        assert_eq!(buffer.encode(), before);
    }

    #[test]
    fn test_fill_invalid_brightness_touches_nothing() {
        let mut buffer = PixelBuffer::new(4, WireLayout::RawFields).unwrap();
        buffer.set(0, red(), 10).unwrap();
        let before = buffer.encode();

        let result = buffer.fill(red(), 32);
        assert_eq!(result, Err(StripError::ValueOutOfRange));
        assert_eq!(buffer.encode(), before);
    }

    #[test]
    fn test_clear_yields_all_zero_raw_frame() {
        let mut buffer = PixelBuffer::new(5, WireLayout::RawFields).unwrap();
        buffer.fill(red(), 31).unwrap();
        buffer.clear();
        let frame = buffer.encode();
        assert_eq!(frame.len(), 20);
        assert!(frame.iter().all(|byte| *byte == 0));
    }

    #[test]
    fn test_get_returns_written_pixel() {
        let mut buffer = PixelBuffer::new(2, WireLayout::HeaderPacked).unwrap();
        buffer.set(1, red(), 7).unwrap();
        let pixel = buffer.get(1).unwrap();
        assert_eq!(pixel.color, red());
        assert_eq!(pixel.brightness, 7);
        assert_eq!(buffer.get(2), None);
    }
}
