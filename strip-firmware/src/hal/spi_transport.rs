// SPI Transport für APA102 Strips
//
// Implementiert StripTransport über das ESP32 SPI Peripheral.
// Der Strip hat kein Chip-Select; nur SCK und MOSI sind belegt.

use esp_hal::Blocking;
use esp_hal::spi::master::Spi;
use strip_core::{END_FRAME, START_FRAME, StripTransport, TransportError};

/// SPI-Transport: rahmt jeden Wire-Frame mit Start- und End-Marker
///
/// APA102 erwartet 32 Null-Bits vor und 32 Eins-Bits nach den
/// Pixel-Daten, damit die LEDs den Frame übernehmen. Die Marker sind
/// Bus-Framing und gehören nicht zum kodierten Puffer-Inhalt.
pub struct SpiStripTransport<'a> {
    spi: Option<Spi<'a, Blocking>>,
}

impl<'a> SpiStripTransport<'a> {
    /// Übernimmt einen fertig konfigurierten SPI-Master (Mode 0, MSB-first)
    pub fn new(spi: Spi<'a, Blocking>) -> Self {
        Self { spi: Some(spi) }
    }
}

impl StripTransport for SpiStripTransport<'_> {
    fn write_frame(&mut self, frame: &[u8]) -> Result<(), TransportError> {
        // Nach close() ist der Bus weg; weitere Writes sind ein Fehler
        let spi = self.spi.as_mut().ok_or(TransportError::WriteFailed)?;
        spi.write(&START_FRAME)
            .map_err(|_| TransportError::WriteFailed)?;
        spi.write(frame).map_err(|_| TransportError::WriteFailed)?;
        spi.write(&END_FRAME)
            .map_err(|_| TransportError::WriteFailed)
    }

    fn close(&mut self) -> Result<(), TransportError> {
        // Drop gibt das SPI Peripheral frei
        self.spi = None;
        Ok(())
    }
}
