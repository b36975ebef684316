//! USART register access for the console interrupt
//!
//! embassy-stm32 configures the peripheral (pins, baud rate); the
//! interrupt handler then drives the data and status registers through
//! [`UsartPort`].

use embassy_stm32::pac;
use embassy_stm32::usart;
use spioled_hal::uart::{DataBits, Parity, StopBits, UartConfig};
use spioled_hal::SerialPort;

/// Console baud rate on the Black Pill
pub const BLACKPILL_BAUD: u32 = 115_200;

/// Console baud rate on the Blue Pill
pub const BLUEPILL_BAUD: u32 = 9_600;

/// embassy-stm32 USART configuration for a hal [`UartConfig`]
pub fn embassy_config(config: UartConfig) -> usart::Config {
    let mut out = usart::Config::default();
    out.baudrate = config.baudrate;
    out.data_bits = match config.data_bits {
        DataBits::Eight => usart::DataBits::DataBits8,
        DataBits::Nine => usart::DataBits::DataBits9,
    };
    out.parity = match config.parity {
        Parity::None => usart::Parity::ParityNone,
        Parity::Even => usart::Parity::ParityEven,
        Parity::Odd => usart::Parity::ParityOdd,
    };
    out.stop_bits = match config.stop_bits {
        StopBits::One => usart::StopBits::STOP1,
        StopBits::Two => usart::StopBits::STOP2,
    };
    out
}

/// Status and data registers of one USART
#[derive(Clone, Copy)]
pub struct UsartPort {
    regs: pac::usart::Usart,
}

impl UsartPort {
    /// The console USART (TX PA9, RX PA10)
    pub const fn usart1() -> Self {
        Self { regs: pac::USART1 }
    }

    /// Enable the receive-not-empty interrupt
    pub fn listen_rx(&mut self) {
        self.regs.cr1().modify(|w| w.set_rxneie(true));
    }
}

impl SerialPort for UsartPort {
    fn rx_ready(&self) -> bool {
        self.regs.sr().read().rxne()
    }

    fn tx_empty(&self) -> bool {
        self.regs.sr().read().txe()
    }

    fn read_byte(&mut self) -> u8 {
        self.regs.dr().read().dr() as u8
    }

    fn write_byte(&mut self, byte: u8) {
        self.regs.dr().write(|w| w.set_dr(u16::from(byte)));
    }

    fn set_tx_interrupt(&mut self, enabled: bool) {
        self.regs.cr1().modify(|w| w.set_txeie(enabled));
    }

    fn tx_interrupt_enabled(&self) -> bool {
        self.regs.cr1().read().txeie()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embassy_config_carries_framing() {
        let c = embassy_config(UartConfig {
            baudrate: BLUEPILL_BAUD,
            data_bits: DataBits::Nine,
            parity: Parity::Even,
            stop_bits: StopBits::Two,
        });
        assert_eq!(c.baudrate, 9_600);
        assert!(matches!(c.data_bits, usart::DataBits::DataBits9));
        assert!(matches!(c.parity, usart::Parity::ParityEven));
        assert!(matches!(c.stop_bits, usart::StopBits::STOP2));
    }
}
