//! Pin identifier types
//!
//! Board tables name pins in one of two ways: as raw GPIO numbers, or as
//! the D-numbered labels silk-screened on NodeMCU / D1-mini style ESP8266
//! boards. Both forms resolve to a GPIO number, and everything here is
//! `const` so tables can live in `const` items.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Silk-screen pin label on NodeMCU / D1-mini style ESP8266 boards
///
/// The label-to-GPIO wiring is fixed by the board layout, not the chip:
/// `D1` is GPIO 5, `D4` is GPIO 2 (shared with the on-module LED), and
/// so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DPin {
    D0,
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
}

impl DPin {
    /// All labels, in silk-screen order
    pub const ALL: [DPin; 9] = [
        DPin::D0,
        DPin::D1,
        DPin::D2,
        DPin::D3,
        DPin::D4,
        DPin::D5,
        DPin::D6,
        DPin::D7,
        DPin::D8,
    ];

    /// GPIO number this label is wired to
    pub const fn gpio(self) -> u8 {
        match self {
            DPin::D0 => 16,
            DPin::D1 => 5,
            DPin::D2 => 4,
            DPin::D3 => 0,
            DPin::D4 => 2,
            DPin::D5 => 14,
            DPin::D6 => 12,
            DPin::D7 => 13,
            DPin::D8 => 15,
        }
    }

    /// Label wired to the given GPIO number, if any
    pub const fn from_gpio(gpio: u8) -> Option<DPin> {
        match gpio {
            16 => Some(DPin::D0),
            5 => Some(DPin::D1),
            4 => Some(DPin::D2),
            0 => Some(DPin::D3),
            2 => Some(DPin::D4),
            14 => Some(DPin::D5),
            12 => Some(DPin::D6),
            13 => Some(DPin::D7),
            15 => Some(DPin::D8),
            _ => None,
        }
    }
}

/// A physical pin as named by a board table
///
/// ESP8266 tables use the symbolic labels; everything else uses raw GPIO
/// numbers. One table sticks to one form throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PinId {
    /// Raw GPIO number
    Gpio(u8),
    /// Symbolic board label
    Label(DPin),
}

impl PinId {
    /// Underlying GPIO number
    pub const fn gpio(self) -> u8 {
        match self {
            PinId::Gpio(n) => n,
            PinId::Label(label) => label.gpio(),
        }
    }
}

/// Pins the display and button drivers need, resolved for one board
///
/// The four display data lines share a single clock line. Every field is
/// always populated; there is no such thing as a partial assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardPins {
    /// Shared display clock line
    pub led_clk: PinId,
    /// Data line, display module 0
    pub led_disp0: PinId,
    /// Data line, display module 1
    pub led_disp1: PinId,
    /// Data line, display module 2
    pub led_disp2: PinId,
    /// Data line, display module 3
    pub led_disp3: PinId,
    /// Push button input
    pub button: PinId,
}
