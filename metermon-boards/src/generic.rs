//! Fallback layout for boards not otherwise listed
//!
//! Active when no family feature is enabled, or on request via the
//! `generic` feature. Boards whose real wiring differs need their own
//! table, not a tweak to this one.

use metermon_core::{BoardPins, PinId, TargetFamily};

pub const FAMILY: TargetFamily = TargetFamily::Generic;

/// Display and button wiring
pub const PINS: BoardPins = BoardPins {
    led_clk: PinId::Gpio(1),
    led_disp0: PinId::Gpio(2),
    led_disp1: PinId::Gpio(3),
    led_disp2: PinId::Gpio(4),
    led_disp3: PinId::Gpio(5),
    button: PinId::Gpio(0),
};
