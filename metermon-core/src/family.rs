//! Supported target families

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Microcontroller family a board table targets
///
/// `Generic` is the fallback layout and is deliberately a named variant:
/// a build that lands on it did so either on purpose (the `generic`
/// feature) or because no family was selected at all. The boards crate
/// lets integrators turn the latter into a build error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TargetFamily {
    /// ESP8266 boards with a NodeMCU-style D-label pinout
    Esp8266,
    /// ESP32-C3 (RISC-V) boards
    Esp32C3,
    /// Fallback layout for boards not otherwise listed
    Generic,
}

impl TargetFamily {
    /// Short name for diagnostics
    pub const fn as_str(self) -> &'static str {
        match self {
            TargetFamily::Esp8266 => "esp8266",
            TargetFamily::Esp32C3 => "esp32c3",
            TargetFamily::Generic => "generic",
        }
    }
}
