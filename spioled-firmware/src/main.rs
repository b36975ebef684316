//! spioled clock console
//!
//! A segment-digit clock on an SSD1351 OLED, driven one byte at a time
//! from USART1. SysTick counts milliseconds, TIM4 counts seconds, and the
//! USART1 interrupt moves bytes between the data register and two ring
//! buffers. Everything else happens in the foreground loop below.

#![no_std]
#![no_main]

mod board;

use core::cell::RefCell;

use cortex_m_rt::{entry, exception};
use defmt::*;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::interrupt;
use embassy_stm32::interrupt::InterruptExt;
use embassy_stm32::spi::Spi;
use embassy_stm32::timer::low_level::Timer;
use embassy_stm32::usart::Uart;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use spioled_core::config::ClockConfig;
use spioled_core::{
    service_interrupt, Clock, ClockFace, Effect, RingBuffer, RingConsumer, RingProducer,
    SerialWriter, UART_BUFFER_SIZE,
};
use spioled_display::Ssd1351;
use spioled_hal::gpio::NoPin;
use spioled_hal::spi::SpiConfig;
use spioled_hal::uart::UartConfig;
use spioled_hal::SerialPort;
use spioled_hal_stm32::time::{self, SecondTimer};
use spioled_hal_stm32::{spi, uart, Pin, SpiPort, UsartPort};

use crate::board::Frame;

/// Interrupt-side halves of the console rings
struct ConsoleIsr {
    port: UsartPort,
    rx: RingProducer<'static, UART_BUFFER_SIZE>,
    tx: RingConsumer<'static, UART_BUFFER_SIZE>,
}

static CLOCK: Clock = Clock::new();

static CONSOLE: Mutex<CriticalSectionRawMutex, RefCell<Option<ConsoleIsr>>> =
    Mutex::new(RefCell::new(None));

/// PC14, toggled every millisecond for a scope
static STROBE: Mutex<CriticalSectionRawMutex, RefCell<Option<Pin<'static>>>> =
    Mutex::new(RefCell::new(None));

static RX_RING: StaticCell<RingBuffer<UART_BUFFER_SIZE>> = StaticCell::new();
static TX_RING: StaticCell<RingBuffer<UART_BUFFER_SIZE>> = StaticCell::new();
static FRAME: StaticCell<Frame> = StaticCell::new();

#[entry]
fn main() -> ! {
    info!("spioled clock console starting on {}", board::NAME);

    let p = embassy_stm32::init(board::config());
    let mut core = unwrap!(cortex_m::Peripherals::take());

    // Panel on SPI1: SCK PA5, MOSI PA7, CS PA4, DC PA3
    let bus = Spi::new_blocking_txonly(p.SPI1, p.PA5, p.PA7, spi::embassy_config(SpiConfig::default()));
    let dc = Pin::new(Output::new(p.PA3, Level::High, Speed::VeryHigh));
    let cs = Pin::new(Output::new(p.PA4, Level::High, Speed::VeryHigh));
    let mut panel = Ssd1351::new(SpiPort::new(bus), dc, cs);
    if let Err(e) = panel.init() {
        error!("Panel init failed: {:?}", e);
    }

    // Console on USART1: TX PA9, RX PA10. The embassy driver only sets up
    // pins and baud rate; it must stay alive for the clock gate.
    let uart_config = UartConfig {
        baudrate: board::CONSOLE_BAUD,
        ..Default::default()
    };
    let _uart = unwrap!(Uart::new_blocking(
        p.USART1,
        p.PA10,
        p.PA9,
        uart::embassy_config(uart_config)
    ));

    let (rx_producer, mut rx) = RX_RING.init(RingBuffer::new()).split();
    let (mut tx, tx_consumer) = TX_RING.init(RingBuffer::new()).split();

    let mut port = UsartPort::usart1();
    port.listen_rx();
    CONSOLE.lock(|c| {
        c.replace(Some(ConsoleIsr {
            port,
            rx: rx_producer,
            tx: tx_consumer,
        }));
    });

    let mut led = Pin::new(Output::new(p.PC13, Level::High, Speed::Low));
    let strobe = Pin::new(Output::new(p.PC14, Level::Low, Speed::Low));
    STROBE.lock(|s| {
        s.replace(Some(strobe));
    });

    let mut seconds = SecondTimer::new(Timer::new(p.TIM4));
    seconds.start();
    time::start_systick(&mut core.SYST, board::HCLK_HZ);

    // SAFETY: both handlers only touch the clock and the parked ISR state
    unsafe {
        interrupt::USART1.enable();
        interrupt::TIM4.enable();
    }

    let frame = FRAME.init_with(Frame::new);
    let mut face = ClockFace::new(frame, panel, ClockConfig::default());

    let mut console = SerialWriter::new(
        &mut tx,
        || UsartPort::usart1().set_tx_interrupt(true),
        cortex_m::asm::wfi,
    );

    if let Err(e) = face.boot(&mut console) {
        warn!("Boot flush failed: {:?}", e);
    }
    info!("Ready");

    loop {
        if CLOCK.tick.take() {
            if let Err(e) = face.on_ms_tick(CLOCK.millis(), &mut led, &mut console) {
                warn!("Colon flush failed: {:?}", e);
            }
        }

        if CLOCK.rtc_tick.take() {
            if let Err(e) = face.on_rtc_tick(&CLOCK, &mut console) {
                warn!("Clock flush failed: {:?}", e);
            }
        }

        while let Some(byte) = rx.pop() {
            debug!("UART1: {=u8:#04x}", byte);
            match face.on_byte(byte, &CLOCK, &mut console) {
                Ok(Effect::ModeChanged(mode)) => info!("Mode: {}", mode),
                Ok(Effect::StyleChanged(style)) => info!("Style: {}", style),
                Ok(_) => {}
                Err(e) => warn!("Flush failed: {:?}", e),
            }
        }

        cortex_m::asm::wfi();
    }
}

#[interrupt]
fn USART1() {
    CONSOLE.lock(|c| {
        if let Some(isr) = c.borrow_mut().as_mut() {
            service_interrupt(&mut isr.port, &mut isr.rx, &mut isr.tx);
        }
    });
}

#[interrupt]
fn TIM4() {
    time::acknowledge_second();
    CLOCK.tick_second();
}

#[exception]
fn SysTick() {
    STROBE.lock(|s| match s.borrow_mut().as_mut() {
        Some(pin) => CLOCK.tick_millisecond(pin),
        None => CLOCK.tick_millisecond(&mut NoPin::default()),
    });
}
