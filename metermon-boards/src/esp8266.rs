//! NodeMCU / D1-mini style ESP8266 boards
//!
//! Pins are named by their silk-screen D-labels; `PinId::gpio` gives the
//! underlying GPIO number. D4 (GPIO 2) doubles as the on-module LED and
//! must be high at boot.

use metermon_core::{BoardPins, DPin, PinId, TargetFamily};

pub const FAMILY: TargetFamily = TargetFamily::Esp8266;

/// Display and button wiring
pub const PINS: BoardPins = BoardPins {
    led_clk: PinId::Label(DPin::D1),
    led_disp0: PinId::Label(DPin::D2),
    led_disp1: PinId::Label(DPin::D7),
    led_disp2: PinId::Label(DPin::D6),
    led_disp3: PinId::Label(DPin::D5),
    button: PinId::Label(DPin::D4),
};
