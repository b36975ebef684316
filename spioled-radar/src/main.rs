//! Risible Radar
//!
//! Walk a radar set around a 256x256 field with the joystick and gather
//! the targets the sweep reveals before the sweeps run out. One frame per
//! sweep step, at most 25 frames a second.
//!
//! SysTick counts milliseconds and USART1 drains the console TX ring;
//! the game itself runs in the foreground loop.

#![no_std]
#![no_main]

use core::cell::RefCell;
use core::fmt::Write;

use cortex_m_rt::{entry, exception};
use defmt::*;
use embassy_stm32::adc::{Adc, AdcChannel};
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::interrupt;
use embassy_stm32::interrupt::InterruptExt;
use embassy_stm32::spi::Spi;
use embassy_stm32::time::Hertz;
use embassy_stm32::usart::Uart;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use spioled_core::config::RadarConfig;
use spioled_core::radar::{FramePacer, Game, Joystick};
use spioled_core::{
    service_interrupt, Clock, Deadline, RingBuffer, RingConsumer, RingProducer, SerialWriter,
    UART_BUFFER_SIZE,
};
use spioled_display::{Canvas, Color565, DisplayTransport, FrameBuffer, Ssd1351};
use spioled_hal::gpio::NoPin;
use spioled_hal::spi::SpiConfig;
use spioled_hal::uart::UartConfig;
use spioled_hal::{AnalogInput, SerialPort};
use spioled_hal_stm32::adc::{self, AdcInput};
use spioled_hal_stm32::{spi, time, uart, Pin, SpiPort, UsartPort};

const HCLK_HZ: u32 = 100_000_000;

type Frame = FrameBuffer<128, 128>;

/// Interrupt-side halves of the console rings
struct ConsoleIsr {
    port: UsartPort,
    rx: RingProducer<'static, UART_BUFFER_SIZE>,
    tx: RingConsumer<'static, UART_BUFFER_SIZE>,
}

static CLOCK: Clock = Clock::new();

static CONSOLE: Mutex<CriticalSectionRawMutex, RefCell<Option<ConsoleIsr>>> =
    Mutex::new(RefCell::new(None));

static STROBE: Mutex<CriticalSectionRawMutex, RefCell<Option<Pin<'static>>>> =
    Mutex::new(RefCell::new(None));

static RX_RING: StaticCell<RingBuffer<UART_BUFFER_SIZE>> = StaticCell::new();
static TX_RING: StaticCell<RingBuffer<UART_BUFFER_SIZE>> = StaticCell::new();
static FRAME: StaticCell<Frame> = StaticCell::new();

/// 25 MHz HSE, 100 MHz core
fn board_config() -> embassy_stm32::Config {
    let mut config = embassy_stm32::Config::default();
    {
        use embassy_stm32::rcc::*;
        config.rcc.hse = Some(Hse {
            freq: Hertz(25_000_000),
            mode: HseMode::Oscillator,
        });
        config.rcc.pll_src = PllSource::HSE;
        config.rcc.pll = Some(Pll {
            prediv: PllPreDiv::DIV25,
            mul: PllMul::MUL200,
            divp: Some(PllPDiv::DIV2),
            divq: None,
            divr: None,
        });
        config.rcc.sys = Sysclk::PLL1_P;
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV2;
        config.rcc.apb2_pre = APBPrescaler::DIV1;
    }
    config
}

/// Spin until `ms` milliseconds have passed
fn delay_ms(ms: u32) {
    let due = Deadline::after(CLOCK.millis(), ms);
    while !due.is_reached(CLOCK.millis()) {
        cortex_m::asm::wfi();
    }
}

#[entry]
fn main() -> ! {
    info!("Risible Radar starting");

    let p = embassy_stm32::init(board_config());
    let mut core = unwrap!(cortex_m::Peripherals::take());
    let config = RadarConfig::default();

    // Panel on SPI1: SCK PA5, MOSI PA7, CS PA4, DC PA3
    let bus = Spi::new_blocking_txonly(p.SPI1, p.PA5, p.PA7, spi::embassy_config(SpiConfig::default()));
    let dc = Pin::new(Output::new(p.PA3, Level::High, Speed::VeryHigh));
    let cs = Pin::new(Output::new(p.PA4, Level::High, Speed::VeryHigh));
    let mut panel = Ssd1351::new(SpiPort::new(bus), dc, cs);
    if let Err(e) = panel.init() {
        error!("Panel init failed: {:?}", e);
    }

    // Console on USART1, transmit only
    let _uart = unwrap!(Uart::new_blocking(
        p.USART1,
        p.PA10,
        p.PA9,
        uart::embassy_config(UartConfig::default())
    ));
    let (rx_producer, _rx) = RX_RING.init(RingBuffer::new()).split();
    let (mut tx, tx_consumer) = TX_RING.init(RingBuffer::new()).split();
    CONSOLE.lock(|c| {
        c.replace(Some(ConsoleIsr {
            port: UsartPort::usart1(),
            rx: rx_producer,
            tx: tx_consumer,
        }));
    });

    let strobe = Pin::new(Output::new(p.PC14, Level::Low, Speed::Low));
    STROBE.lock(|s| {
        s.replace(Some(strobe));
    });
    time::start_systick(&mut core.SYST, HCLK_HZ);

    // SAFETY: the handler only touches the parked console state
    unsafe {
        interrupt::USART1.enable();
    }

    // Joystick: X on PA1 (ADC1 channel 1), Y on PB0 (channel 8)
    let converter = adc::shared(Adc::new(p.ADC1));
    let mut x = AdcInput::new(&converter, p.PA1.degrade_adc());
    let mut y = AdcInput::new(&converter, p.PB0.degrade_adc());
    let noise = (u32::from(x.read()) << 16) | u32::from(y.read());
    let mut joystick = Joystick::new(x, y, config.deadband);

    let mut console = SerialWriter::new(
        &mut tx,
        || UsartPort::usart1().set_tx_interrupt(true),
        cortex_m::asm::wfi,
    );

    let frame = FRAME.init_with(Frame::new);
    frame.checkerboard(Color565::BLACK, Color565::WHITE);
    if let Err(e) = panel.flush(&*frame, 0, 127) {
        warn!("Flush failed: {:?}", e);
    }

    let _ = writeln!(console, "RisibleRadar");
    let _ = writeln!(console, "Ludum Dare MiniLD #34: Aspect");

    let mut game = Game::new(config, noise ^ CLOCK.millis());
    for (i, t) in game.targets().iter().enumerate() {
        let _ = writeln!(console, "{}: ({}, {}) siz: {}", i, t.x, t.y, t.size);
    }

    for (banner, hold) in [("Risible Radar", 2000), ("READY", 0)] {
        game.render_banner(frame, banner);
        if let Err(e) = panel.flush(&*frame, 0, 127) {
            warn!("Flush failed: {:?}", e);
        }
        delay_ms(hold);
    }

    let mut pacer = FramePacer::new(config.frame_ms);
    loop {
        pacer.begin(CLOCK.millis());

        let report = game.tick(joystick.read());
        game.render(frame);
        if let Err(e) = panel.flush(&*frame, 0, 127) {
            warn!("Flush failed: {:?}", e);
        }

        if report.gathered > 0 {
            info!("Gathered {} target(s)", report.gathered);
        }
        if report.sweep_done && report.game_over {
            info!("Game over");
            let _ = writeln!(console, "GAME OVER");
        }

        trace!("Frame took {} ms", pacer.elapsed(CLOCK.millis()));
        pacer.wait(|| CLOCK.millis(), cortex_m::asm::wfi);
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

#[exception]
fn SysTick() {
    STROBE.lock(|s| match s.borrow_mut().as_mut() {
        Some(pin) => CLOCK.tick_millisecond(pin),
        None => CLOCK.tick_millisecond(&mut NoPin::default()),
    });
}
