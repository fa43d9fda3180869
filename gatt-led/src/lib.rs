// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command handling for the two-LED GATT peripheral.
//! A central writes a single byte to the command characteristic to select one of
//! four LED states; whatever it wrote is echoed on the readout characteristic.
//! Button presses overwrite the readout with a sentinel byte.
//!
//! Everything here is independent from the BLE stack and the GPIO driver so it can
//! run on the host; the firmware plugs the pins in through [`LedPins`].

#![no_std]

mod animation;
mod button;
mod device;
mod leds;
mod readout;
mod state;

#[cfg(test)]
mod tests;

pub use animation::{startup_sequence, STARTUP_SEQUENCE};
pub use button::Button;
pub use device::{Command, Device, WriteOutcome};
pub use leds::{LedController, LedPins};
pub use readout::{Readout, ReadoutBuffer};
pub use state::{LedState, UnknownCommand};
