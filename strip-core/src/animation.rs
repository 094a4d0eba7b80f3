//! Animation-Engine: Frame-Pacing Loop
//!
//! Treibt eine Pattern-Funktion gegen den PixelBuffer und überträgt
//! jeden kodierten Frame über den Transport. Das Pacing misst die
//! tatsächlich verbrauchte Zeit pro Iteration statt fix zu schlafen:
//! dauert ein Frame länger als die Periode, wird gar nicht geschlafen
//! (Framerate sinkt), nie negativ und nie mit Aufhol-Burst.

use core::sync::atomic::{AtomicBool, Ordering};
use core::time::Duration;

use embedded_hal::delay::DelayNs;

use crate::buffer::PixelBuffer;
use crate::traits::{StripError, StripTransport, TimeSource};

/// Kontext für einen Pattern-Aufruf
#[derive(Clone, Copy, Debug)]
pub struct FrameContext {
    /// Laufende Frame-Nummer seit Session-Start (beginnt bei 0)
    pub index: u32,
    /// Verstrichene Zeit seit Session-Start
    pub elapsed: Duration,
}

/// Eine laufende Animation: Frame-Periode, optionale Laufzeit,
/// Running-Flag
///
/// Genau ein Owner treibt die Session bis zum Ende oder Abbruch;
/// es gibt keinen globalen Animations-Zustand. `stop()` ist
/// kooperativ und wird an der nächsten Iterationsgrenze beobachtet
/// (worst case: eine Frame-Periode plus ein Pattern-Aufruf).
pub struct AnimationSession {
    frame_period: Duration,
    duration: Option<Duration>,
    running: AtomicBool,
}

impl AnimationSession {
    /// Erstellt eine Session mit Ziel-Framerate und optionaler Laufzeit
    ///
    /// # Fehlerbehandlung
    /// Nicht-positive oder nicht-endliche Framerate ist ein
    /// Konfigurationsfehler.
    pub fn new(frame_rate_fps: f32, duration: Option<Duration>) -> Result<Self, StripError> {
        if !frame_rate_fps.is_finite() || frame_rate_fps <= 0.0 {
            return Err(StripError::InvalidConfig);
        }
        let period_micros = (1_000_000.0 / frame_rate_fps) as u64;
        Ok(Self {
            frame_period: Duration::from_micros(period_micros),
            duration,
            running: AtomicBool::new(true),
        })
    }

    /// Ziel-Zeit zwischen zwei aufeinanderfolgenden Frames
    pub fn frame_period(&self) -> Duration {
        self.frame_period
    }

    /// Stoppt die Session an der nächsten Iterationsgrenze
    ///
    /// Nicht preemptiv: ein laufender Pattern- oder Transport-Aufruf
    /// wird noch zu Ende geführt. Der Puffer wird NICHT geleert;
    /// das ist Sache des Aufrufers.
    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Treibt die Animation bis `stop()`, Laufzeit-Ende oder Fehler
    ///
    /// Pro Iteration genau ein Pattern-Aufruf, ein `encode()` und ein
    /// `write_frame()` - Frames werden nie übersprungen oder doppelt
    /// gesendet. Fehler aus Pattern oder Transport beenden die Session
    /// sofort (keine Retries: sie zeigen einen Programmierfehler bzw.
    /// Bus-Defekt an, keinen transienten Zustand).
    ///
    /// `transport.close()` wird auf jedem Exit-Pfad genau einmal
    /// aufgerufen. Ein Fehler aus der Loop hat Vorrang vor einem
    /// Close-Fehler.
    pub fn run<P, T, C, D>(
        &self,
        buffer: &mut PixelBuffer,
        mut pattern: P,
        transport: &mut T,
        clock: &C,
        delay: &mut D,
    ) -> Result<(), StripError>
    where
        P: FnMut(&mut PixelBuffer, FrameContext) -> Result<(), StripError>,
        T: StripTransport,
        C: TimeSource,
        D: DelayNs,
    {
        let result = self.drive(buffer, &mut pattern, transport, clock, delay);
        let closed = transport.close().map_err(StripError::Transport);
        self.running.store(false, Ordering::Relaxed);
        result.and(closed)
    }

    fn drive<P, T, C, D>(
        &self,
        buffer: &mut PixelBuffer,
        pattern: &mut P,
        transport: &mut T,
        clock: &C,
        delay: &mut D,
    ) -> Result<(), StripError>
    where
        P: FnMut(&mut PixelBuffer, FrameContext) -> Result<(), StripError>,
        T: StripTransport,
        C: TimeSource,
        D: DelayNs,
    {
        let start = clock.now();
        let mut frame_index: u32 = 0;

        while self.is_running() {
            let iteration_start = clock.now();
            let context = FrameContext {
                index: frame_index,
                elapsed: iteration_start.saturating_sub(start),
            };

            pattern(buffer, context)?;
            let frame = buffer.encode();
            transport.write_frame(&frame)?;
            frame_index = frame_index.wrapping_add(1);

            let after_work = clock.now();
            if let Some(limit) = self.duration {
                if after_work.saturating_sub(start) >= limit {
                    // Sauberes Ende: Puffer bleibt als letzter Frame stehen
                    break;
                }
            }

            let spent = after_work.saturating_sub(iteration_start);
            let sleep = self.frame_period.saturating_sub(spent);
            if !sleep.is_zero() {
                delay.delay_us(sleep.as_micros() as u32);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_frame_rate() {
        assert!(matches!(
            AnimationSession::new(0.0, None),
            Err(StripError::InvalidConfig)
        ));
    }

    #[test]
    fn test_new_rejects_negative_frame_rate() {
        assert!(matches!(
            AnimationSession::new(-24.0, None),
            Err(StripError::InvalidConfig)
        ));
    }

    #[test]
    fn test_new_rejects_nan_frame_rate() {
        assert!(matches!(
            AnimationSession::new(f32::NAN, None),
            Err(StripError::InvalidConfig)
        ));
    }

    #[test]
    fn test_frame_period_for_24_fps() {
        let session = AnimationSession::new(24.0, None).unwrap();
        assert_eq!(session.frame_period(), Duration::from_micros(41_666));
    }

    #[test]
    fn test_stop_clears_running_flag() {
        let session = AnimationSession::new(24.0, None).unwrap();
        assert!(session.is_running());
        session.stop();
        assert!(!session.is_running());
    }
}
