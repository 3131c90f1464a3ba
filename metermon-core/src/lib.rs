//! Board-agnostic pin vocabulary for the metermon display unit
//!
//! This crate contains the types shared by every board definition:
//!
//! - Pin identifiers (raw GPIO numbers and NodeMCU-style D-labels)
//! - The six-pin record consumed by the display and button drivers
//! - The closed set of supported target families
//!
//! The tables themselves live in `metermon-boards`; nothing in this crate
//! depends on which board is being built for.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod family;
pub mod pin;

pub use family::TargetFamily;
pub use pin::{BoardPins, DPin, PinId};
