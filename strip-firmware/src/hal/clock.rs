// Monotone Zeitquelle über den esp-hal System-Timer

use core::time::Duration;

use strip_core::TimeSource;

/// TimeSource auf Basis von `esp_hal::time::Instant`
///
/// Liefert die Zeit seit Boot; die Engine bildet daraus nur
/// Differenzen.
pub struct EspClock;

impl TimeSource for EspClock {
    fn now(&self) -> Duration {
        let since_boot = esp_hal::time::Instant::now().duration_since_epoch();
        Duration::from_micros(since_boot.as_micros())
    }
}
