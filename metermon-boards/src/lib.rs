//! Per-target pin assignments for the metermon display unit
//!
//! Each supported target family gets its own table module, and a Cargo
//! feature decides which one is re-exported as [`board`]. Driver and
//! application code reads [`PINS`] (and [`FAMILY`]) and never hardcodes a
//! pin number.
//!
//! Selection order is fixed: `esp8266` wins over `esp32c3`, and a build
//! with no family feature falls back to the [`generic`] layout. Enable
//! `deny-fallback` to turn that fallback into a build error, or enable
//! `generic` to state that the fallback layout is what you want.
//!
//! All three table modules are always compiled, so host tests can check
//! every row regardless of which one is active.

#![no_std]
#![deny(unsafe_code)]

use cfg_if::cfg_if;

pub mod esp32c3;
pub mod esp8266;
pub mod generic;

cfg_if! {
    if #[cfg(feature = "esp8266")] {
        pub use self::esp8266 as board;
    } else if #[cfg(feature = "esp32c3")] {
        pub use self::esp32c3 as board;
    } else {
        pub use self::generic as board;
    }
}

pub use self::board::{FAMILY, PINS};

#[cfg(all(feature = "esp8266", feature = "esp32c3"))]
compile_error!(
    "board features `esp8266` and `esp32c3` are mutually exclusive; enable exactly one"
);

#[cfg(all(
    feature = "deny-fallback",
    not(any(feature = "esp8266", feature = "esp32c3", feature = "generic"))
))]
compile_error!("no board family selected; enable `esp8266`, `esp32c3`, or `generic`");

#[cfg(test)]
mod tests {
    use super::*;
    use metermon_core::{BoardPins, DPin, PinId, TargetFamily};

    #[test]
    fn test_esp8266_table() {
        assert_eq!(esp8266::FAMILY, TargetFamily::Esp8266);
        assert_eq!(esp8266::PINS.led_clk, PinId::Label(DPin::D1));
        assert_eq!(esp8266::PINS.led_disp0, PinId::Label(DPin::D2));
        assert_eq!(esp8266::PINS.led_disp1, PinId::Label(DPin::D7));
        assert_eq!(esp8266::PINS.led_disp2, PinId::Label(DPin::D6));
        assert_eq!(esp8266::PINS.led_disp3, PinId::Label(DPin::D5));
        assert_eq!(esp8266::PINS.button, PinId::Label(DPin::D4));
    }

    #[test]
    fn test_esp32c3_table() {
        assert_eq!(esp32c3::FAMILY, TargetFamily::Esp32C3);
        assert_eq!(esp32c3::PINS.led_clk, PinId::Gpio(8));
        assert_eq!(esp32c3::PINS.led_disp0, PinId::Gpio(0));
        assert_eq!(esp32c3::PINS.led_disp1, PinId::Gpio(1));
        assert_eq!(esp32c3::PINS.led_disp2, PinId::Gpio(2));
        assert_eq!(esp32c3::PINS.led_disp3, PinId::Gpio(3));
        assert_eq!(esp32c3::PINS.button, PinId::Gpio(9));
    }

    #[test]
    fn test_generic_table() {
        assert_eq!(generic::FAMILY, TargetFamily::Generic);
        assert_eq!(generic::PINS.led_clk, PinId::Gpio(1));
        assert_eq!(generic::PINS.led_disp0, PinId::Gpio(2));
        assert_eq!(generic::PINS.led_disp1, PinId::Gpio(3));
        assert_eq!(generic::PINS.led_disp2, PinId::Gpio(4));
        assert_eq!(generic::PINS.led_disp3, PinId::Gpio(5));
        assert_eq!(generic::PINS.button, PinId::Gpio(0));
    }

    // The active table is usable in const contexts
    #[test]
    fn test_table_is_const() {
        const ACTIVE: BoardPins = PINS;
        const CLK: u8 = ACTIVE.led_clk.gpio();
        assert_eq!(CLK, PINS.led_clk.gpio());
    }

    #[cfg(not(any(feature = "esp8266", feature = "esp32c3")))]
    #[test]
    fn test_default_build_falls_back_to_generic() {
        assert_eq!(FAMILY, TargetFamily::Generic);
        assert_eq!(PINS, generic::PINS);
    }

    #[cfg(feature = "esp8266")]
    #[test]
    fn test_esp8266_build_selects_esp8266() {
        assert_eq!(FAMILY, TargetFamily::Esp8266);
        assert_eq!(PINS, esp8266::PINS);
    }

    #[cfg(all(feature = "esp32c3", not(feature = "esp8266")))]
    #[test]
    fn test_esp32c3_build_selects_esp32c3() {
        assert_eq!(FAMILY, TargetFamily::Esp32C3);
        assert_eq!(PINS, esp32c3::PINS);
    }
}
