// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

//! LED control service.
//! The central writes a command to `command` and reads back the last command or
//! button sentinel from `readout`.

use core::cell::RefCell;

use consts::READOUT_LEN;
use defmt::{debug, error, info};
use gatt_led::{Device, ReadoutBuffer, WriteOutcome};
use heapless::Vec;
use nrf_softdevice::gatt_service;

use crate::board::Leds;

#[gatt_service(uuid = "a000")]
pub struct LedService {
    #[characteristic(uuid = "a001", read)]
    readout: Vec<u8, READOUT_LEN>,

    #[characteristic(uuid = "a002", write)]
    command: Vec<u8, READOUT_LEN>,
}

impl LedService {
    pub(crate) fn handle(&self, event: LedServiceEvent, device: &RefCell<Device<Leds>>) {
        match event {
            LedServiceEvent::CommandWrite(data) => {
                let mut device = device.borrow_mut();
                match device.handle_write(&data) {
                    WriteOutcome::Applied(state) => info!("LEDs: {}", state),
                    WriteOutcome::Ignored(byte) => debug!("Unknown command {}, LEDs left as is", byte),
                    WriteOutcome::Diagnostic { len } => {
                        info!("Data received: length = {}, data = {=[u8]:#04x}", len, &data[..])
                    }
                }
                self.publish(device.readout());
            }
        }
    }

    /// Makes `readout` the value the central reads.
    pub(crate) fn publish(&self, readout: &ReadoutBuffer) {
        if let Err(e) = self.readout_set(readout.as_vec()) {
            error!("Readout update failed: {:?}", e);
        }
    }
}
