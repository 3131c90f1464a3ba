//! ESP32-C3 (RISC-V) boards

use metermon_core::{BoardPins, PinId, TargetFamily};

pub const FAMILY: TargetFamily = TargetFamily::Esp32C3;

/// Display and button wiring
///
/// GPIO 9 is the BOOT button on most C3 dev modules, so the button works
/// without extra hardware.
pub const PINS: BoardPins = BoardPins {
    led_clk: PinId::Gpio(8),
    led_disp0: PinId::Gpio(0),
    led_disp1: PinId::Gpio(1),
    led_disp2: PinId::Gpio(2),
    led_disp3: PinId::Gpio(3),
    button: PinId::Gpio(9),
};
