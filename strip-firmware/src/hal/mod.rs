// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den strip-core Traits,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod clock;
pub mod spi_transport;

pub use clock::EspClock;
pub use spi_transport::SpiStripTransport;
