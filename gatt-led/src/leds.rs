// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::LedState;

/// The two LED outputs.
/// `true` means lit, whatever the electrical polarity of the board.
pub trait LedPins {
    fn set_led1(&mut self, on: bool);

    fn set_led2(&mut self, on: bool);
}

/// Drives the LEDs from a [`LedState`].
pub struct LedController<P> {
    pins: P,
    state: LedState,
}

impl<P: LedPins> LedController<P> {
    /// Takes the pins and turns both LEDs off.
    pub fn new(pins: P) -> Self {
        let mut leds = Self {
            pins,
            state: LedState::AllOff,
        };
        leds.apply(LedState::AllOff);
        leds
    }

    /// Writes both pins, regardless of what they were before.
    pub fn apply(&mut self, state: LedState) {
        let (led1, led2) = state.levels();
        self.pins.set_led1(led1);
        self.pins.set_led2(led2);
        self.state = state;
    }

    /// Last applied state.
    pub fn state(&self) -> LedState {
        self.state
    }

    #[cfg(test)]
    pub(crate) fn pins(&self) -> &P {
        &self.pins
    }
}
