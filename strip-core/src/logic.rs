//! Pure Pattern-Logik
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::types::MAX_BRIGHTNESS;

/// Dreieckswellen-Helligkeit: 0 → 31 → 0 über eine Periode
///
/// Ganzzahl-Rendition des Puls-Effekts; braucht keine Float-Mathematik.
///
/// # Beispiele
///
/// ```
/// # use strip_core::pulse_level;
/// assert_eq!(pulse_level(0, 62), 0);
/// assert_eq!(pulse_level(31, 62), 31);  // Scheitelpunkt
/// assert_eq!(pulse_level(62, 62), 0);   // nächste Periode
/// ```
pub fn pulse_level(frame_index: u32, period_frames: u32) -> u8 {
    let half = period_frames / 2;
    if half == 0 {
        return MAX_BRIGHTNESS;
    }
    let phase = frame_index % period_frames;
    let rising = if phase <= half {
        phase
    } else {
        period_frames - phase
    };
    ((rising * u32::from(MAX_BRIGHTNESS)) / half) as u8
}

/// Position eines Lauflicht-Punkts: wandert pro Frame ein Pixel weiter
pub fn chase_position(frame_index: u32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (frame_index as usize) % count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_level_stays_in_brightness_range() {
        for frame in 0..200 {
            assert!(pulse_level(frame, 62) <= MAX_BRIGHTNESS);
        }
    }

    #[test]
    fn test_pulse_level_is_symmetric() {
        // Auf- und absteigende Flanke spiegeln sich
        assert_eq!(pulse_level(10, 62), pulse_level(52, 62));
        assert_eq!(pulse_level(1, 62), pulse_level(61, 62));
    }

    #[test]
    fn test_pulse_level_degenerate_period() {
        // Periode < 2 hat keine Flanken: konstant volle Helligkeit
        assert_eq!(pulse_level(5, 0), MAX_BRIGHTNESS);
        assert_eq!(pulse_level(5, 1), MAX_BRIGHTNESS);
    }

    #[test]
    fn test_chase_position_wraps_at_strip_end() {
        assert_eq!(chase_position(0, 60), 0);
        assert_eq!(chase_position(59, 60), 59);
        assert_eq!(chase_position(60, 60), 0);
    }

    #[test]
    fn test_chase_position_empty_strip() {
        assert_eq!(chase_position(17, 0), 0);
    }
}
