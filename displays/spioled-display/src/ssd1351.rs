//! SSD1351 colour OLED driver
//!
//! Driver for 128x128 SSD1351 panels over a write-only SPI bus with
//! separate data/command and chip-select lines. The panel keeps its own
//! RAM, so [`DisplayTransport::flush`] only has to push the rows that
//! changed.

use spioled_hal::{OutputPin, SpiBus};

use crate::backend::{clamp_rows, DisplayError, DisplayTransport, Raster};

/// Widest row the driver can stream
pub const MAX_WIDTH: usize = 128;

/// SSD1351 commands
mod cmd {
    pub const SET_COLUMN: u8 = 0x15;
    pub const SET_ROW: u8 = 0x75;
    pub const WRITE_RAM: u8 = 0x5C;
    pub const SET_REMAP: u8 = 0xA0;
    pub const DISPLAY_OFFSET: u8 = 0xA2;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const FUNCTION_SELECT: u8 = 0xAB;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const PRECHARGE: u8 = 0xB1;
    pub const CLOCK_DIV: u8 = 0xB3;
    pub const SET_VSL: u8 = 0xB4;
    pub const SET_GPIO: u8 = 0xB5;
    pub const PRECHARGE2: u8 = 0xB6;
    pub const VCOMH: u8 = 0xBE;
    pub const CONTRAST_ABC: u8 = 0xC1;
    pub const CONTRAST_MASTER: u8 = 0xC7;
    pub const MUX_RATIO: u8 = 0xCA;
    pub const COMMAND_LOCK: u8 = 0xFD;
}

/// Colour order BGR, 65k colours, COM split, scan flipped vertically
const REMAP: u8 = 0x60 | 0x10;

/// Power-up choreography: (command, arguments)
const INIT: &[(u8, &[u8])] = &[
    (cmd::COMMAND_LOCK, &[0x12]),
    (cmd::COMMAND_LOCK, &[0xB1]),
    (cmd::DISPLAY_OFF, &[]),
    (cmd::CLOCK_DIV, &[0xF1]),
    (cmd::MUX_RATIO, &[127]),
    (cmd::DISPLAY_OFFSET, &[0x00]),
    (cmd::SET_GPIO, &[0x00]),
    (cmd::FUNCTION_SELECT, &[0x01]),
    (cmd::PRECHARGE, &[0x32]),
    (cmd::VCOMH, &[0x05]),
    (cmd::NORMAL_DISPLAY, &[]),
    (cmd::CONTRAST_ABC, &[0xC8, 0x80, 0xC8]),
    (cmd::CONTRAST_MASTER, &[0x0F]),
    (cmd::SET_VSL, &[0xA0, 0xB5, 0x55]),
    (cmd::PRECHARGE2, &[0x01]),
    (cmd::SET_REMAP, &[REMAP]),
    (cmd::DISPLAY_ON, &[]),
];

/// SSD1351 OLED driver
pub struct Ssd1351<SPI, DC, CS> {
    spi: SPI,
    dc: DC,
    cs: CS,
}

impl<SPI, DC, CS> Ssd1351<SPI, DC, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
{
    /// Wrap a bus and control pins; chip select is released immediately
    pub fn new(spi: SPI, dc: DC, mut cs: CS) -> Self {
        cs.set_high();
        Self { spi, dc, cs }
    }

    /// Run the power-up sequence and switch the panel on
    pub fn init(&mut self) -> Result<(), DisplayError<SPI::Error>> {
        for (c, args) in INIT {
            self.command(*c, args)?;
        }
        Ok(())
    }

    /// One command byte with DC low, then its arguments with DC high
    fn command(&mut self, c: u8, args: &[u8]) -> Result<(), DisplayError<SPI::Error>> {
        self.dc.set_low();
        self.cs.set_low();
        let result = self.send_command(c, args);
        self.cs.set_high();
        self.dc.set_high();
        result
    }

    fn send_command(&mut self, c: u8, args: &[u8]) -> Result<(), DisplayError<SPI::Error>> {
        self.spi.write(&[c])?;
        self.spi.flush()?;
        if !args.is_empty() {
            self.dc.set_high();
            self.spi.write(args)?;
            self.spi.flush()?;
        }
        Ok(())
    }

    fn stream_rows<R: Raster>(
        &mut self,
        frame: &R,
        width: usize,
        top: usize,
        bottom: usize,
    ) -> Result<(), DisplayError<SPI::Error>> {
        let mut line = [0u8; MAX_WIDTH * 2];
        for y in top..=bottom {
            for x in 0..width {
                let [hi, lo] = frame.pixel_word(x, y).to_be_bytes();
                line[2 * x] = hi;
                line[2 * x + 1] = lo;
            }
            self.spi.write(&line[..width * 2])?;
        }
        self.spi.flush()?;
        Ok(())
    }
}

impl<SPI, DC, CS> DisplayTransport for Ssd1351<SPI, DC, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
{
    type Error = DisplayError<SPI::Error>;

    fn flush<R: Raster>(&mut self, frame: &R, top: usize, bottom: usize) -> Result<(), Self::Error> {
        let (width, height) = frame.dimensions();
        if width > MAX_WIDTH {
            return Err(DisplayError::FrameTooWide);
        }
        let Some((top, bottom)) = clamp_rows(top, bottom, height) else {
            return Ok(());
        };
        if width == 0 {
            return Ok(());
        }

        self.command(cmd::SET_COLUMN, &[0, (width - 1) as u8])?;
        self.command(cmd::SET_ROW, &[top as u8, bottom as u8])?;
        self.command(cmd::WRITE_RAM, &[])?;

        // DC is left high by `command`, so everything below is pixel data
        self.cs.set_low();
        let result = self.stream_rows(frame, width, top, bottom);
        self.cs.set_high();
        result
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::cell::RefCell;
    use std::vec::Vec;

    use super::*;
    use crate::canvas::Canvas;
    use crate::color::Color565;
    use crate::framebuffer::FrameBuffer;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Cmd(u8),
        Data(u8),
        Select,
        Deselect,
    }

    #[derive(Default)]
    struct Bus {
        dc_high: bool,
        events: Vec<Event>,
        fail: bool,
    }

    struct MockSpi<'a>(&'a RefCell<Bus>);
    struct MockDc<'a>(&'a RefCell<Bus>);
    struct MockCs<'a>(&'a RefCell<Bus>, bool);

    impl SpiBus for MockSpi<'_> {
        type Error = ();

        fn write(&mut self, data: &[u8]) -> Result<(), ()> {
            let mut bus = self.0.borrow_mut();
            if bus.fail {
                return Err(());
            }
            let dc = bus.dc_high;
            bus.events
                .extend(data.iter().map(|&b| if dc { Event::Data(b) } else { Event::Cmd(b) }));
            Ok(())
        }
    }

    impl OutputPin for MockDc<'_> {
        fn set_high(&mut self) {
            self.0.borrow_mut().dc_high = true;
        }
        fn set_low(&mut self) {
            self.0.borrow_mut().dc_high = false;
        }
        fn is_set_high(&self) -> bool {
            self.0.borrow().dc_high
        }
    }

    impl OutputPin for MockCs<'_> {
        fn set_high(&mut self) {
            self.1 = true;
            self.0.borrow_mut().events.push(Event::Deselect);
        }
        fn set_low(&mut self) {
            self.1 = false;
            self.0.borrow_mut().events.push(Event::Select);
        }
        fn is_set_high(&self) -> bool {
            self.1
        }
    }

    fn driver(bus: &RefCell<Bus>) -> Ssd1351<MockSpi<'_>, MockDc<'_>, MockCs<'_>> {
        let d = Ssd1351::new(MockSpi(bus), MockDc(bus), MockCs(bus, false));
        bus.borrow_mut().events.clear();
        d
    }

    fn commands(bus: &RefCell<Bus>) -> Vec<u8> {
        bus.borrow()
            .events
            .iter()
            .filter_map(|e| match e {
                Event::Cmd(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    fn data(bus: &RefCell<Bus>) -> Vec<u8> {
        bus.borrow()
            .events
            .iter()
            .filter_map(|e| match e {
                Event::Data(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_init_sequence() {
        let bus = RefCell::new(Bus::default());
        let mut oled = driver(&bus);
        oled.init().unwrap();

        let cmds = commands(&bus);
        assert_eq!(cmds.first(), Some(&cmd::COMMAND_LOCK));
        assert_eq!(cmds.last(), Some(&cmd::DISPLAY_ON));
        assert_eq!(cmds.len(), INIT.len());
        assert!(data(&bus).contains(&0x70));
    }

    #[test]
    fn test_arguments_sent_as_data() {
        let bus = RefCell::new(Bus::default());
        let mut oled = driver(&bus);
        oled.init().unwrap();

        let events = bus.borrow().events.clone();
        assert_eq!(
            &events[..4],
            &[
                Event::Select,
                Event::Cmd(cmd::COMMAND_LOCK),
                Event::Data(0x12),
                Event::Deselect,
            ]
        );
    }

    #[test]
    fn test_flush_window_and_pixels() {
        let bus = RefCell::new(Bus::default());
        let mut oled = driver(&bus);
        let mut fb = FrameBuffer::<4, 8>::new();
        fb.set_pixel(1, 2, Color565::BLUE);
        fb.set_pixel(3, 3, Color565::RED);

        oled.flush(&fb, 2, 3).unwrap();

        assert_eq!(
            commands(&bus),
            [cmd::SET_COLUMN, cmd::SET_ROW, cmd::WRITE_RAM]
        );
        let d = data(&bus);
        // column window, row window, then 2 rows x 4 pixels x 2 bytes
        assert_eq!(&d[..4], &[0, 3, 2, 3]);
        let pixels = &d[4..];
        assert_eq!(pixels.len(), 16);
        assert_eq!(&pixels[2..4], &[0xf8, 0x00]);
        assert_eq!(&pixels[14..16], &[0x00, 0x1f]);
    }

    #[test]
    fn test_flush_clamps_bottom() {
        let bus = RefCell::new(Bus::default());
        let mut oled = driver(&bus);
        let fb = FrameBuffer::<4, 8>::new();

        oled.flush(&fb, 6, 100).unwrap();
        assert_eq!(&data(&bus)[..4], &[0, 3, 6, 7]);

        bus.borrow_mut().events.clear();
        oled.flush(&fb, 9, 12).unwrap();
        assert!(bus.borrow().events.is_empty());
    }

    #[test]
    fn test_chip_select_released_on_error() {
        let bus = RefCell::new(Bus::default());
        let mut oled = driver(&bus);
        bus.borrow_mut().fail = true;

        assert_eq!(oled.init(), Err(DisplayError::Bus(())));
        assert_eq!(bus.borrow().events.last(), Some(&Event::Deselect));
    }
}
