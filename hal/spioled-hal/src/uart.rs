//! UART serial communication abstractions
//!
//! The console UART is serviced byte-by-byte from its interrupt handler,
//! so the trait exposes the data and status registers rather than a
//! buffered stream.

/// Register-level view of a UART used from interrupt context
///
/// Every method must be callable from an interrupt handler: no blocking,
/// no allocation.
pub trait SerialPort {
    /// A received byte is waiting in the data register
    fn rx_ready(&self) -> bool;

    /// The transmit data register can accept another byte
    fn tx_empty(&self) -> bool;

    /// Read the received byte, clearing the RX-ready condition
    fn read_byte(&mut self) -> u8;

    /// Load a byte into the transmit data register
    fn write_byte(&mut self, byte: u8);

    /// Enable or disable the transmit-register-empty interrupt
    fn set_tx_interrupt(&mut self, enabled: bool);

    /// Whether the transmit-register-empty interrupt is enabled
    fn tx_interrupt_enabled(&self) -> bool;
}

/// UART configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Data bits per frame
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 115200,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}
