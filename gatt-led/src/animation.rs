// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use consts::STARTUP_ITERATIONS;

use crate::LedState;

/// One round of the boot animation.
pub const STARTUP_SEQUENCE: [LedState; 4] = [LedState::Led1On, LedState::AllOn, LedState::Led2On, LedState::AllOff];

/// Every step of the boot animation, in order. Ends with both LEDs off.
pub fn startup_sequence() -> impl Iterator<Item = LedState> {
    STARTUP_SEQUENCE.into_iter().cycle().take(STARTUP_SEQUENCE.len() * STARTUP_ITERATIONS)
}
