// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use consts::READOUT_LEN;
use heapless::Vec;

use crate::{Button, LedState};

/// Value of the readout characteristic.
/// Holds the last write or button sentinel, never more than [`READOUT_LEN`] bytes.
/// Reads as [`READOUT_LEN`] zero bytes until the first event.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReadoutBuffer(Vec<u8, READOUT_LEN>);

impl ReadoutBuffer {
    pub fn new() -> Self {
        let mut readout = Self(Vec::new());
        readout.set(&[0; READOUT_LEN]);
        readout
    }

    /// Replaces the content, keeping the first [`READOUT_LEN`] bytes of `data`.
    pub fn set(&mut self, data: &[u8]) {
        let len = data.len().min(READOUT_LEN);
        self.0.clear();
        // Cannot fail, `len` is within capacity
        let _ = self.0.extend_from_slice(&data[..len]);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Borrow as the characteristic value type.
    pub fn as_vec(&self) -> &Vec<u8, READOUT_LEN> {
        &self.0
    }
}

impl Default for ReadoutBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// What a central sees when reading the readout characteristic.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Readout {
    /// A button was pressed after the last write
    Button(Button),
    /// Echo of a LED command
    Echo(LedState),
    /// Echo of any other payload
    Other,
}

impl Readout {
    pub fn classify(value: &[u8]) -> Self {
        match value {
            [byte] => {
                if let Some(button) = Button::from_sentinel(*byte) {
                    Readout::Button(button)
                } else if let Ok(state) = LedState::try_from(*byte) {
                    Readout::Echo(state)
                } else {
                    Readout::Other
                }
            }
            _ => Readout::Other,
        }
    }
}
