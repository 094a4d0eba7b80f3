//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Bus-Zugriff und
//! Zeitmessung ohne konkrete Implementierung.

use core::time::Duration;

/// Fehler-Typ des Transport-Kollaborateurs
///
/// Für den Core opak: er wird unverändert durchgereicht, nie
/// interpretiert oder wiederholt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    WriteFailed,
    CloseFailed,
}

/// Fehler-Typ für Strip-Operationen
///
/// Alle Validierungsfehler werden VOR jeder Mutation erkannt
/// (keine partiellen Schreibzugriffe). Out-of-Range Werte werden
/// nie stillschweigend geclampt - das würde die angezeigte Farbe
/// unbemerkt verfälschen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripError {
    /// Pixel-Index außerhalb von [0, LED-Anzahl)
    IndexOutOfRange,
    /// Helligkeit über 31
    ValueOutOfRange,
    /// Ungültige Konfiguration (LED-Anzahl null, Framerate nicht positiv)
    InvalidConfig,
    /// Vom Transport durchgereichter Fehler
    Transport(TransportError),
}

impl From<TransportError> for StripError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err)
    }
}

/// Trait für den Serial-Bus Transport
///
/// Der Core inspiziert den Bus nie; er übergibt nur fertig kodierte
/// Frames. Öffnen und Konfigurieren (Bus, Chip-Select, Taktrate, Mode)
/// gehören zur konkreten Implementierung.
///
/// # Implementierungen
/// - **Production:** SpiStripTransport (ESP32 SPI Peripheral)
/// - **Testing:** MockTransport (in-memory Mock)
pub trait StripTransport: Send {
    /// Überträgt einen kodierten Wire-Frame
    ///
    /// # Fehlerbehandlung
    /// Gibt `TransportError::WriteFailed` zurück wenn der Bus-Zugriff
    /// fehlschlägt. Die Engine behandelt das als fatal für die Session.
    fn write_frame(&mut self, frame: &[u8]) -> Result<(), TransportError>;

    /// Gibt den Bus frei
    ///
    /// Wird von der Engine auf JEDEM Exit-Pfad genau einmal aufgerufen
    /// (stop, Laufzeit abgelaufen, propagierter Fehler).
    fn close(&mut self) -> Result<(), TransportError>;
}

/// Trait für monotone Zeitmessung
///
/// Liefert die verstrichene Zeit seit einem beliebigen, festen
/// Startpunkt (z.B. Boot). Die Engine bildet daraus Differenzen;
/// der Nullpunkt ist irrelevant.
pub trait TimeSource {
    fn now(&self) -> Duration;
}
