//! SSD1306 OLED behind the `TextDisplay` trait
//!
//! 128x64 panel on I2C, rendered with the 6x10 ASCII font
//! (21 columns x 6 rows).

use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use lumen_core::traits::{DisplayError, TextDisplay};

/// Pixel height of one text row
const ROW_HEIGHT: i32 = 10;

/// Bus the OLED is attached to
pub type OledBus = I2c<'static, I2C1, Blocking>;

type Driver =
    Ssd1306<I2CInterface<OledBus>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Buffered SSD1306 text display
pub struct Oled {
    driver: Driver,
    style: MonoTextStyle<'static, BinaryColor>,
    ready: bool,
}

impl Oled {
    /// Wrap the bus; call [`init`](Oled::init) before drawing
    pub fn new(bus: OledBus, address: u8) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(bus, address);
        let driver = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self {
            driver,
            style: MonoTextStyle::new(&FONT_6X10, BinaryColor::On),
            ready: false,
        }
    }

    /// Send the controller init sequence
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.driver.init().map_err(|_| DisplayError::Communication)?;
        self.ready = true;
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), DisplayError> {
        if self.ready {
            Ok(())
        } else {
            Err(DisplayError::NotInitialized)
        }
    }
}

impl TextDisplay for Oled {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        self.driver.clear_buffer();
        Ok(())
    }

    fn write_line(&mut self, row: u8, text: &str) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        let origin = Point::new(0, row as i32 * ROW_HEIGHT);
        Text::with_baseline(text, origin, self.style, Baseline::Top)
            .draw(&mut self.driver)
            .map_err(|_| DisplayError::Communication)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        self.driver.flush().map_err(|_| DisplayError::Communication)
    }
}
