// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

/// State of the two LEDs, as selected by a command byte.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LedState {
    /// Both LEDs off
    #[default]
    AllOff = 0,
    /// Only LED1 on
    Led1On = 1,
    /// Only LED2 on
    Led2On = 2,
    /// Both LEDs on
    AllOn = 3,
}

/// A command byte outside of `0..=3`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownCommand(pub u8);

impl LedState {
    /// Pin levels as `(led1_on, led2_on)`.
    pub const fn levels(self) -> (bool, bool) {
        match self {
            LedState::AllOff => (false, false),
            LedState::Led1On => (true, false),
            LedState::Led2On => (false, true),
            LedState::AllOn => (true, true),
        }
    }
}

impl TryFrom<u8> for LedState {
    type Error = UnknownCommand;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LedState::AllOff),
            1 => Ok(LedState::Led1On),
            2 => Ok(LedState::Led2On),
            3 => Ok(LedState::AllOn),
            other => Err(UnknownCommand(other)),
        }
    }
}

impl From<LedState> for u8 {
    fn from(state: LedState) -> u8 {
        state as u8
    }
}
