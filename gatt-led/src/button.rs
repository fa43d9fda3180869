// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use consts::{BUTTON1_SENTINEL, BUTTON2_SENTINEL};

/// Physical push buttons reported on the readout characteristic.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    One,
    Two,
}

impl Button {
    /// Byte reported when this button is pressed.
    pub const fn sentinel(self) -> u8 {
        match self {
            Button::One => BUTTON1_SENTINEL,
            Button::Two => BUTTON2_SENTINEL,
        }
    }

    pub const fn from_sentinel(byte: u8) -> Option<Self> {
        match byte {
            BUTTON1_SENTINEL => Some(Button::One),
            BUTTON2_SENTINEL => Some(Button::Two),
            _ => None,
        }
    }
}
