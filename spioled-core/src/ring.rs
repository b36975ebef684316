//! Byte ring buffers
//!
//! One buffer carries received bytes from the UART interrupt to the main
//! loop, another carries bytes to transmit the other way. Each is a
//! single-producer/single-consumer queue: after [`RingBuffer::split`] the
//! producer half belongs to one context and the consumer half to the
//! other, so neither side ever takes a lock.

use heapless::spsc::{Consumer, Producer, Queue};

/// Size of the console RX and TX buffers
pub const UART_BUFFER_SIZE: usize = 128;

/// A push into a full buffer; carries the rejected byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Full(pub u8);

/// Fixed-size byte FIFO holding at most `N - 1` bytes
///
/// `N` must be a power of two.
pub struct RingBuffer<const N: usize> {
    queue: Queue<u8, N>,
}

impl<const N: usize> Default for RingBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RingBuffer<N> {
    const SIZE_OK: () = assert!(N >= 2 && N.is_power_of_two(), "ring size must be a power of two");

    /// An empty buffer; `const` so it can be placed in a static cell
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::SIZE_OK;
        Self {
            queue: Queue::new(),
        }
    }

    /// Bytes the buffer can hold; one slot is always kept free
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.queue.is_full()
    }

    /// Append a byte; never overwrites
    pub fn push(&mut self, byte: u8) -> Result<(), Full> {
        self.queue.enqueue(byte).map_err(Full)
    }

    /// Remove the oldest byte
    pub fn pop(&mut self) -> Option<u8> {
        self.queue.dequeue()
    }

    /// Hand out the two halves
    pub fn split(&mut self) -> (RingProducer<'_, N>, RingConsumer<'_, N>) {
        let (p, c) = self.queue.split();
        (RingProducer { inner: p }, RingConsumer { inner: c })
    }
}

/// Writing half of a [`RingBuffer`]
pub struct RingProducer<'a, const N: usize> {
    inner: Producer<'a, u8, N>,
}

impl<const N: usize> RingProducer<'_, N> {
    /// Append a byte if there is room
    pub fn push(&mut self, byte: u8) -> Result<(), Full> {
        self.inner.enqueue(byte).map_err(Full)
    }

    /// Append a byte, calling `wait` until the consumer makes room
    pub fn push_blocking(&mut self, byte: u8, mut wait: impl FnMut()) {
        while !self.inner.ready() {
            wait();
        }
        // Only the consumer runs between `ready` and here, and it can only
        // free space.
        let _ = self.inner.enqueue(byte);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }

    pub fn is_full(&self) -> bool {
        !self.inner.ready()
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }
}

/// Reading half of a [`RingBuffer`]
pub struct RingConsumer<'a, const N: usize> {
    inner: Consumer<'a, u8, N>,
}

impl<const N: usize> RingConsumer<'_, N> {
    /// Remove the oldest byte, if any
    pub fn pop(&mut self) -> Option<u8> {
        self.inner.dequeue()
    }

    /// Remove the oldest byte, calling `wait` until one arrives
    pub fn pop_blocking(&mut self, mut wait: impl FnMut()) -> u8 {
        loop {
            if let Some(b) = self.inner.dequeue() {
                return b;
            }
            wait();
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        !self.inner.ready()
    }

    pub fn is_full(&self) -> bool {
        self.inner.len() == self.inner.capacity()
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let rb = RingBuffer::<8>::new();
        assert!(rb.is_empty());
        assert!(!rb.is_full());
        assert_eq!(rb.len(), 0);
        assert_eq!(rb.capacity(), 7);
    }

    #[test]
    fn test_holds_n_minus_one() {
        let mut rb = RingBuffer::<8>::new();
        for b in 0..7 {
            assert_eq!(rb.push(b), Ok(()));
        }
        assert!(rb.is_full());
        assert_eq!(rb.push(99), Err(Full(99)));
        assert_eq!(rb.len(), 7);
    }

    #[test]
    fn test_fifo_across_wrap() {
        let mut rb = RingBuffer::<4>::new();
        let mut next = 0u8;
        let mut expect = 0u8;
        for _ in 0..10 {
            rb.push(next).unwrap();
            next += 1;
            rb.push(next).unwrap();
            next += 1;
            assert_eq!(rb.pop(), Some(expect));
            assert_eq!(rb.pop(), Some(expect + 1));
            expect += 2;
        }
        assert_eq!(rb.pop(), None);
    }

    #[test]
    fn test_split_halves_share_storage() {
        let mut rb = RingBuffer::<UART_BUFFER_SIZE>::new();
        let (mut tx, mut rx) = rb.split();
        assert_eq!(tx.capacity(), 127);
        tx.push(b'a').unwrap();
        tx.push(b'b').unwrap();
        assert_eq!(rx.len(), 2);
        assert_eq!(rx.pop(), Some(b'a'));
        assert_eq!(rx.pop(), Some(b'b'));
        assert!(rx.is_empty());
        assert!(tx.is_empty());
    }

    #[test]
    fn test_push_blocking_waits_for_room() {
        let mut rb = RingBuffer::<2>::new();
        let (mut tx, mut rx) = rb.split();
        tx.push(1).unwrap();
        assert!(tx.is_full());
        assert!(rx.is_full());

        let mut waits = 0;
        tx.push_blocking(2, || {
            waits += 1;
            if waits == 3 {
                assert_eq!(rx.pop(), Some(1));
            }
        });
        assert_eq!(waits, 3);
        assert_eq!(rx.pop(), Some(2));
    }

    #[test]
    fn test_pop_blocking_waits_for_data() {
        let mut rb = RingBuffer::<4>::new();
        let (mut tx, mut rx) = rb.split();
        let mut waits = 0;
        let b = rx.pop_blocking(|| {
            waits += 1;
            if waits == 2 {
                tx.push(0x42).unwrap();
            }
        });
        assert_eq!(b, 0x42);
        assert_eq!(waits, 2);
    }
}
