//! PIO-based WS2812 strip driver
//!
//! Uses one PIO state machine to generate the WS2812 single-wire bit
//! timing. The CPU only pushes 32-bit words into the TX FIFO; the state
//! machine autopulls and shifts out the upper 24 bits MSB-first, which
//! matches the GRB word layout produced by `lumen_core::matrix::Cell`.
//!
//! # Timing
//!
//! Each bit takes 10 PIO cycles (T1 = 2, T2 = 5, T3 = 3), so the state
//! machine clock must run at 10 × 800 kHz = 8 MHz.

use embassy_rp::pio::{
    Common, Config, Direction, FifoJoin, Instance, PioPin, ShiftConfig, ShiftDirection,
    StateMachine,
};
use embassy_rp::Peri;
use fixed::types::U24F8;

use lumen_core::traits::LedStrip;

/// System clock frequency (RP2040 default)
pub const SYS_CLK_HZ: u32 = 125_000_000;

/// WS2812 bit rate
pub const BIT_RATE_HZ: u32 = 800_000;

/// PIO cycles per encoded bit
pub const CYCLES_PER_BIT: u32 = 10;

/// Bits clocked out per cell (the low byte of each word is dropped)
pub const BITS_PER_CELL: u8 = 24;

/// Calculate the PIO clock divider for a given system clock
///
/// divider = SYS_CLK / (BIT_RATE * CYCLES_PER_BIT)
///
/// Returns (integer_part, fractional_part) for the 16.8 fixed-point divider.
pub fn calc_clock_divider(sys_clk_hz: u32) -> (u16, u8) {
    let pio_clk = (BIT_RATE_HZ * CYCLES_PER_BIT) as u64;
    let divider_x256 = (sys_clk_hz as u64 * 256) / pio_clk;

    let int_part = (divider_x256 / 256).clamp(1, 0xFFFF) as u16;
    let frac_part = (divider_x256 % 256) as u8;

    (int_part, frac_part)
}

/// CPU cycles needed to clock one cell out of the shift register
pub fn cell_time_cycles(sys_clk_hz: u32) -> u32 {
    (sys_clk_hz as u64 * BITS_PER_CELL as u64 / BIT_RATE_HZ as u64) as u32
}

/// WS2812 output on one PIO state machine
pub struct PioWs2812<'d, PIO: Instance, const SM: usize> {
    sm: StateMachine<'d, PIO, SM>,
    cell_cycles: u32,
}

impl<'d, PIO: Instance, const SM: usize> PioWs2812<'d, PIO, SM> {
    /// Load the WS2812 program and start the state machine
    ///
    /// # Arguments
    /// * `common` - PIO common resources (for loading program)
    /// * `sm` - State machine to use
    /// * `pin` - Data pin of the strip (must be PIO-capable)
    /// * `sys_clk_hz` - Current system clock, for the bit-rate divider
    pub fn new<P: PioPin>(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        pin: Peri<'d, P>,
        sys_clk_hz: u32,
    ) -> Self {
        // Bit cell: T3 low, T1 high, then T2 high for a one or low for a zero
        let prg = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "    out x, 1       side 0 [2]",
            "    jmp !x do_zero side 1 [1]",
            "do_one:",
            "    jmp bitloop    side 1 [4]",
            "do_zero:",
            "    nop            side 0 [4]",
            ".wrap"
        );

        let installed = common.load_program(&prg.program);
        let out_pin = common.make_pio_pin(pin);

        let mut cfg = Config::default();
        cfg.use_program(&installed, &[&out_pin]);
        cfg.set_out_pins(&[&out_pin]);
        cfg.set_set_pins(&[&out_pin]);

        let (int_div, frac_div) = calc_clock_divider(sys_clk_hz);
        cfg.clock_divider = U24F8::from_bits(((int_div as u32) << 8) | (frac_div as u32));

        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: BITS_PER_CELL,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&cfg);
        sm.set_pin_dirs(Direction::Out, &[&out_pin]);
        sm.set_enable(true);

        Self {
            sm,
            cell_cycles: cell_time_cycles(sys_clk_hz),
        }
    }

    /// True if every queued word has been pulled by the state machine
    pub fn is_idle(&mut self) -> bool {
        self.sm.tx().empty()
    }
}

impl<'d, PIO: Instance, const SM: usize> LedStrip for PioWs2812<'d, PIO, SM> {
    fn push_blocking(&mut self, word: u32) {
        // The joined FIFO holds 8 words; a 25-cell frame drains in ~750 µs
        while !self.sm.tx().try_push(word) {
            core::hint::spin_loop();
        }
    }

    fn flush(&mut self) {
        while !self.is_idle() {
            core::hint::spin_loop();
        }
        // FIFO empty means the last word was pulled, not sent
        cortex_m::asm::delay(self.cell_cycles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_divider_default_sysclk() {
        // 125 MHz / 8 MHz = 15.625
        let (int_part, frac_part) = calc_clock_divider(SYS_CLK_HZ);
        assert_eq!(int_part, 15);
        assert_eq!(frac_part, 160);
    }

    #[test]
    fn test_clock_divider_overclocked() {
        // 200 MHz / 8 MHz = 25.0
        assert_eq!(calc_clock_divider(200_000_000), (25, 0));
    }

    #[test]
    fn test_cell_time_covers_24_bits() {
        // 24 bits at 1.25 us each = 30 us
        assert_eq!(cell_time_cycles(SYS_CLK_HZ), 3_750);
        assert_eq!(cell_time_cycles(200_000_000), 6_000);
    }

    #[test]
    fn test_clock_divider_minimum() {
        assert_eq!(calc_clock_divider(1_000_000).0, 1);
    }
}
