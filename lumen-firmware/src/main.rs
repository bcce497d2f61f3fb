//! Lumen - RP2040 Board Demo Firmware
//!
//! Drives a 5x5 WS2812 matrix, an RGB indicator LED toggled by two
//! buttons, and an SSD1306 OLED that mirrors the serial console.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::peripherals::{PIO0, UART0};
use embassy_rp::pio::Pio;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use lumen_core::config::{parse_board_config, BoardConfig};
use lumen_hal_rp2040::PioWs2812;

use crate::display::Oled;

/// Board configuration compiled into the firmware
/// Edit board.toml and rebuild to customize
const BOARD_CONFIG: &str = include_str!("../board.toml");

mod channels;
mod display;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Lumen firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();

    // RGB indicator (GPIO13 red, GPIO11 green, GPIO12 blue), all off
    let indicator_pins = tasks::IndicatorPins {
        red: Output::new(p.PIN_13, Level::Low),
        green: Output::new(p.PIN_11, Level::Low),
        blue: Output::new(p.PIN_12, Level::Low),
    };

    // Buttons A (GPIO5) and B (GPIO6), active low
    let button_a = Input::new(p.PIN_5, Pull::Up);
    let button_b = Input::new(p.PIN_6, Pull::Up);

    // Console UART (TX=GPIO0, RX=GPIO1)
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = config.uart.baudrate;

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized at {} baud", config.uart.baudrate);

    // OLED on I2C1 (SDA=GPIO14, SCL=GPIO15)
    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = config.i2c.frequency_hz;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let oled = Oled::new(i2c, config.display.address);

    info!(
        "I2C initialized at {} Hz, OLED at {=u8:#x}",
        config.i2c.frequency_hz, config.display.address
    );

    // WS2812 matrix data on GPIO7, driven by PIO0 SM0
    let Pio {
        mut common,
        sm0,
        ..
    } = Pio::new(p.PIO0, Irqs);

    let strip = PioWs2812::new(
        &mut common,
        sm0,
        p.PIN_7,
        embassy_rp::clocks::clk_sys_freq(),
    );

    info!("PIO WS2812 initialized");

    spawner.spawn(tasks::console_tx_task(tx)).unwrap();
    spawner.spawn(tasks::display_task(oled)).unwrap();
    spawner
        .spawn(tasks::matrix_task(strip, config.matrix.latch_us))
        .unwrap();
    spawner
        .spawn(tasks::indicator_task(indicator_pins, config.buttons.debounce_ms))
        .unwrap();
    spawner.spawn(tasks::button_task(button_a, button_b)).unwrap();
    spawner.spawn(tasks::serial_rx_task(rx)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Parse the embedded board configuration, falling back to defaults
fn load_config() -> BoardConfig {
    match parse_board_config(BOARD_CONFIG) {
        Ok(config) => {
            info!("Board configuration loaded");
            config
        }
        Err(e) => {
            error!(
                "board.toml line {}: {:?}, using defaults",
                e.line, e.kind
            );
            BoardConfig::default()
        }
    }
}
