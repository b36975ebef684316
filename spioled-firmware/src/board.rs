//! Board selection
//!
//! Everything that differs between the Black Pill and the Blue Pill: clock
//! tree, console baud rate and the frame buffer the panel is driven from.

use embassy_stm32::time::Hertz;
use embassy_stm32::Config;

#[cfg(all(feature = "board-blackpill", feature = "board-bluepill"))]
compile_error!("select exactly one of `board-blackpill` and `board-bluepill`");

/// 25 MHz HSE, 100 MHz core
#[cfg(feature = "board-blackpill")]
mod chip {
    use spioled_display::FrameBuffer;

    pub const NAME: &str = "STM32F411";
    pub const HCLK_HZ: u32 = 100_000_000;
    pub const CONSOLE_BAUD: u32 = spioled_hal_stm32::uart::BLACKPILL_BAUD;

    /// Full 128x128 colour frame
    pub type Frame = FrameBuffer<128, 128>;

    pub fn rcc(config: &mut super::Config) {
        use embassy_stm32::rcc::*;

        config.rcc.hse = Some(Hse {
            freq: super::Hertz(25_000_000),
            mode: HseMode::Oscillator,
        });
        config.rcc.pll_src = PllSource::HSE;
        config.rcc.pll = Some(Pll {
            prediv: PllPreDiv::DIV25,  // 1 MHz
            mul: PllMul::MUL200,       // 200 MHz
            divp: Some(PllPDiv::DIV2), // 100 MHz SYSCLK
            divq: None,
            divr: None,
        });
        config.rcc.sys = Sysclk::PLL1_P;
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV2; // 50 MHz max
        config.rcc.apb2_pre = APBPrescaler::DIV1;
    }
}

/// 8 MHz HSE, 72 MHz core
#[cfg(feature = "board-bluepill")]
mod chip {
    use spioled_display::MonoFrameBuffer;

    pub const NAME: &str = "STM32F103";
    pub const HCLK_HZ: u32 = 72_000_000;
    pub const CONSOLE_BAUD: u32 = spioled_hal_stm32::uart::BLUEPILL_BAUD;

    /// Top quarter of the panel, one bit per pixel
    pub type Frame = MonoFrameBuffer<128, 4>;

    pub fn rcc(config: &mut super::Config) {
        use embassy_stm32::rcc::*;

        config.rcc.hse = Some(Hse {
            freq: super::Hertz(8_000_000),
            mode: HseMode::Oscillator,
        });
        config.rcc.pll = Some(Pll {
            src: PllSource::HSE,
            prediv: PllPreDiv::DIV1,
            mul: PllMul::MUL9,
        });
        config.rcc.sys = Sysclk::PLL1_P;
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV2;
        config.rcc.apb2_pre = APBPrescaler::DIV1;
    }
}

pub use chip::{Frame, CONSOLE_BAUD, HCLK_HZ, NAME};

/// embassy-stm32 init configuration for this board
pub fn config() -> Config {
    let mut config = Config::default();
    chip::rcc(&mut config);
    config
}
