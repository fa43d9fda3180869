// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{Button, LedController, LedPins, LedState, ReadoutBuffer};

/// Interpretation of a payload written to the command characteristic.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command<'a> {
    /// Single byte naming a LED state
    Set(LedState),
    /// Single byte outside of the known states
    Unknown(u8),
    /// Anything that is not exactly one byte long
    Diagnostic(&'a [u8]),
}

impl<'a> Command<'a> {
    pub fn parse(data: &'a [u8]) -> Self {
        match data {
            [byte] => match LedState::try_from(*byte) {
                Ok(state) => Command::Set(state),
                Err(e) => Command::Unknown(e.0),
            },
            _ => Command::Diagnostic(data),
        }
    }
}

/// What a write did to the LEDs. Nothing here is an error, the caller only logs it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WriteOutcome {
    Applied(LedState),
    Ignored(u8),
    Diagnostic { len: usize },
}

/// LEDs and readout value, owned by the main loop.
pub struct Device<P> {
    leds: LedController<P>,
    readout: ReadoutBuffer,
}

impl<P: LedPins> Device<P> {
    pub fn new(leds: LedController<P>) -> Self {
        Self {
            leds,
            readout: ReadoutBuffer::new(),
        }
    }

    /// Handles a write on the command characteristic.
    ///
    /// A single known byte switches the LEDs, anything else leaves them alone.
    /// In every case the payload becomes the new readout value.
    pub fn handle_write(&mut self, data: &[u8]) -> WriteOutcome {
        let outcome = match Command::parse(data) {
            Command::Set(state) => {
                self.leds.apply(state);
                WriteOutcome::Applied(state)
            }
            Command::Unknown(byte) => WriteOutcome::Ignored(byte),
            Command::Diagnostic(data) => WriteOutcome::Diagnostic { len: data.len() },
        };
        self.readout.set(data);
        outcome
    }

    /// Reports a button press on the readout. The LEDs are not touched.
    pub fn handle_button(&mut self, button: Button) -> &ReadoutBuffer {
        self.readout.set(&[button.sentinel()]);
        &self.readout
    }

    /// Plays a state without touching the readout, used by the boot animation.
    pub fn show(&mut self, state: LedState) {
        self.leds.apply(state);
    }

    pub fn led_state(&self) -> LedState {
        self.leds.state()
    }

    pub fn readout(&self) -> &ReadoutBuffer {
        &self.readout
    }

    #[cfg(test)]
    pub(crate) fn leds(&self) -> &LedController<P> {
        &self.leds
    }
}
