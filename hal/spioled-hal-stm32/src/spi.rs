//! Blocking SPI master for the panel
//!
//! Wraps any embedded-hal 1.0 bus; in practice embassy-stm32's blocking
//! `Spi`, built transmit-only on SPI1 (SCK PA5, MOSI PA7).

use embedded_hal::spi::{Error as _, ErrorKind, SpiBus as EhSpiBus};
use spioled_hal::spi::{Mode, SpiConfig};
use spioled_hal::SpiBus;

/// Error from SPI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiBusError {
    /// Receive overrun
    Overrun,
    /// Mode fault (NSS pulled low while master)
    ModeFault,
    /// Frame format error
    FrameFormat,
    /// Other error
    Other,
}

impl From<ErrorKind> for SpiBusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Overrun => SpiBusError::Overrun,
            ErrorKind::ModeFault => SpiBusError::ModeFault,
            ErrorKind::FrameFormat => SpiBusError::FrameFormat,
            _ => SpiBusError::Other,
        }
    }
}

/// embassy-stm32 SPI configuration for a hal [`SpiConfig`]
pub fn embassy_config(config: SpiConfig) -> embassy_stm32::spi::Config {
    use embassy_stm32::spi;

    let mut out = spi::Config::default();
    out.frequency = embassy_stm32::time::Hertz(config.frequency);
    out.mode = match config.mode {
        Mode::Mode0 => spi::MODE_0,
        Mode::Mode1 => spi::MODE_1,
        Mode::Mode2 => spi::MODE_2,
        Mode::Mode3 => spi::MODE_3,
    };
    out
}

/// SPI bus usable by the SSD1351 driver
pub struct SpiPort<S> {
    bus: S,
}

impl<S> SpiPort<S>
where
    S: EhSpiBus<u8>,
{
    pub fn new(bus: S) -> Self {
        Self { bus }
    }
}

impl<S> SpiBus for SpiPort<S>
where
    S: EhSpiBus<u8>,
{
    type Error = SpiBusError;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.bus.write(data).map_err(|e| e.kind().into())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.bus.flush().map_err(|e| e.kind().into())
    }
}
