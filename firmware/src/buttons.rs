// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use core::cell::RefCell;

use consts::BUTTON_QUEUE_LEN;
use defmt::{debug, warn};
use embassy_nrf::gpio::Input;
use embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;
use embassy_sync::channel::Channel;
use gatt_led::{Button, Device};

use crate::board::Leds;
use crate::server::Server;

/// Button presses waiting to be put on the readout characteristic.
static BUTTON_EVENTS: Channel<ThreadModeRawMutex, Button, BUTTON_QUEUE_LEN> = Channel::new();

#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut input: Input<'static>, button: Button) -> ! {
    loop {
        input.wait_for_falling_edge().await;
        debug!("{} pressed", button);
        if BUTTON_EVENTS.try_send(button).is_err() {
            warn!("Button queue full, dropping {}", button);
        }
    }
}

/// Drains the button queue, in press order.
pub async fn report_buttons(server: &Server, device: &RefCell<Device<Leds>>) {
    loop {
        let button = BUTTON_EVENTS.receive().await;
        let mut device = device.borrow_mut();
        server.led.publish(device.handle_button(button));
    }
}
