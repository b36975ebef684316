//! Console UART plumbing
//!
//! [`service_interrupt`] is the whole USART interrupt handler, written
//! against the hal [`SerialPort`] so it can be exercised on the host.
//! [`SerialWriter`] is the foreground side: `write!` into the TX ring.

use core::fmt;

use spioled_hal::SerialPort;

use crate::ring::{RingConsumer, RingProducer};

/// USART interrupt body
///
/// Moves one received byte into `rx` (dropped if `rx` is full) and, while
/// the TX-empty interrupt is enabled, one byte from `tx` to the port. The
/// TX-empty interrupt is switched off once `tx` runs dry; [`SerialWriter`]
/// switches it back on.
pub fn service_interrupt<P, const N: usize>(
    port: &mut P,
    rx: &mut RingProducer<'_, N>,
    tx: &mut RingConsumer<'_, N>,
) where
    P: SerialPort,
{
    if port.rx_ready() {
        let byte = port.read_byte();
        let _ = rx.push(byte);
    }

    if port.tx_empty() && port.tx_interrupt_enabled() {
        match tx.pop() {
            Some(byte) => port.write_byte(byte),
            None => port.set_tx_interrupt(false),
        }
    }
}

/// `fmt::Write` into the TX ring with `\n` expanded to `\r\n`
///
/// Spins (through `wait`) while the ring is full and calls `kick` after
/// every byte so the interrupt starts draining.
pub struct SerialWriter<'r, 'q, const N: usize, K, W>
where
    K: FnMut(),
    W: FnMut(),
{
    tx: &'r mut RingProducer<'q, N>,
    kick: K,
    wait: W,
}

impl<'r, 'q, const N: usize, K, W> SerialWriter<'r, 'q, N, K, W>
where
    K: FnMut(),
    W: FnMut(),
{
    pub fn new(tx: &'r mut RingProducer<'q, N>, kick: K, wait: W) -> Self {
        Self { tx, kick, wait }
    }

    fn put(&mut self, byte: u8) {
        let wait = &mut self.wait;
        self.tx.push_blocking(byte, || wait());
        (self.kick)();
    }
}

impl<const N: usize, K, W> fmt::Write for SerialWriter<'_, '_, N, K, W>
where
    K: FnMut(),
    W: FnMut(),
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for b in s.bytes() {
            if b == b'\n' {
                self.put(b'\r');
            }
            self.put(b);
        }
        Ok(())
    }
}
