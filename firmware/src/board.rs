// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

//! nRF52-DK (PCA10040) wiring.

use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::Peripherals;
use gatt_led::LedPins;

/// LED1 and LED2 of the DK, both active-low.
pub struct Leds {
    led1: Output<'static>,
    led2: Output<'static>,
}

impl LedPins for Leds {
    fn set_led1(&mut self, on: bool) {
        self.led1.set_level(if on { Level::Low } else { Level::High });
    }

    fn set_led2(&mut self, on: bool) {
        self.led2.set_level(if on { Level::Low } else { Level::High });
    }
}

pub struct Board {
    pub leds: Leds,
    pub button1: Input<'static>,
    pub button2: Input<'static>,
}

impl Board {
    pub fn new(p: Peripherals) -> Self {
        // Start HIGH = off
        let leds = Leds {
            led1: Output::new(p.P0_17, Level::High, OutputDrive::Standard),
            led2: Output::new(p.P0_18, Level::High, OutputDrive::Standard),
        };

        // Buttons short to ground when pressed
        Self {
            leds,
            button1: Input::new(p.P0_13, Pull::Up),
            button2: Input::new(p.P0_14, Pull::Up),
        }
    }
}
