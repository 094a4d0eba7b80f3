// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_hal bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use defmt::{error, info};
use embedded_hal::delay::DelayNs;

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::spi::Mode;
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use esp_hal::time::Rate;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_strip_steuerung::config::{
    FRAME_RATE_FPS, LED_COUNT, PULSE_COLOR, PULSE_PERIOD_FRAMES, SPI_CLOCK_HZ, WIRE_LAYOUT,
};
use esp_strip_steuerung::hal::{EspClock, SpiStripTransport};
use esp_strip_steuerung::{
    AnimationSession, PixelBuffer, StripError, StripTransport, TimeSource, pulse_level,
};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware und SPI, dann treibt die Animation-Engine
/// den Strip bis zu einem Fehler. Kein Async-Executor: die Pacing-Loop
/// der Engine besitzt das Timing alleine.
#[esp_hal::main]
fn main() -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // SPI Master für den Strip: Mode 0, MSB-first, kein Chip-Select
    // GPIO6 = SCK (Clock), GPIO7 = MOSI (Daten)
    let spi = match Spi::new(
        peripherals.SPI2,
        SpiConfig::default()
            .with_frequency(Rate::from_hz(SPI_CLOCK_HZ))
            .with_mode(Mode::_0),
    ) {
        Ok(spi) => spi.with_sck(peripherals.GPIO6).with_mosi(peripherals.GPIO7),
        Err(_) => {
            error!("SPI-Konfiguration fehlgeschlagen");
            halt();
        }
    };

    let mut transport = SpiStripTransport::new(spi);
    let clock = EspClock;
    let mut delay = Delay::new();

    info!(
        "Strip-Steuerung startet: {} LEDs, Layout {}",
        LED_COUNT, WIRE_LAYOUT
    );

    // Puls-Demo läuft bis stop() oder Fehler; der Transport wird von
    // der Engine auf jedem Exit-Pfad geschlossen
    if let Err(e) = run_pulse_animation(&mut transport, &clock, &mut delay) {
        error!("Animation abgebrochen: {}", e);
    }

    halt()
}

/// Puls-Demo: ganzer Strip in Weiß, Helligkeit als Dreieckswelle
fn run_pulse_animation<T, C, D>(
    transport: &mut T,
    clock: &C,
    delay: &mut D,
) -> Result<(), StripError>
where
    T: StripTransport,
    C: TimeSource,
    D: DelayNs,
{
    let mut buffer = PixelBuffer::new(LED_COUNT, WIRE_LAYOUT)?;
    let session = AnimationSession::new(FRAME_RATE_FPS, None)?;

    session.run(
        &mut buffer,
        |buffer, context| {
            let level = pulse_level(context.index, PULSE_PERIOD_FRAMES);
            buffer.fill(PULSE_COLOR, level)
        },
        transport,
        clock,
        delay,
    )
}

/// Endlos-Schleife nach Fehler (Peripherie bleibt in Ruhe)
fn halt() -> ! {
    let mut delay = Delay::new();
    loop {
        delay.delay_ms(1_000);
    }
}
