// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

#![no_std]
#![no_main]

mod board;
mod buttons;
mod led_service;
mod server;

use core::cell::RefCell;
use core::pin::pin;

use defmt_rtt as _; // global logger
use embassy_nrf as _; // time driver
use panic_probe as _;

use board::{Board, Leds};
use buttons::{button_task, report_buttons};
use consts::STARTUP_STEP_MS;
use defmt::{info, *};
use embassy_executor::Spawner;
use embassy_nrf::interrupt;
use embassy_time::Timer;
use gatt_led::{startup_sequence, Button, Device, LedController};
use nrf_softdevice::Softdevice;
use server::{initialize_sd, run_bluetooth, Server};

#[embassy_executor::task]
async fn softdevice_task(sd: &'static Softdevice) -> ! {
    info!("SD is running");
    sd.run().await
}

/// Boot animation, played before the radio is up.
async fn play_startup(device: &mut Device<Leds>) {
    for state in startup_sequence() {
        device.show(state);
        Timer::after_millis(STARTUP_STEP_MS).await;
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let mut conf = embassy_nrf::config::Config::default();
    // Keep clear of the priorities reserved by the SoftDevice
    conf.gpiote_interrupt_priority = interrupt::Priority::P2;
    conf.time_interrupt_priority = interrupt::Priority::P2;

    let p = embassy_nrf::init(conf);
    let board = Board::new(p);

    let mut device = Device::new(LedController::new(board.leds));
    play_startup(&mut device).await;

    info!("********* Starting Main Loop *********");
    let sd = initialize_sd();

    let server = unwrap!(Server::new(sd), "Creating the GATT server failed");
    unwrap!(spawner.spawn(softdevice_task(sd)), "Spawning the softdevice failed");

    unwrap!(spawner.spawn(button_task(board.button1, Button::One)), "Spawning button 1 failed");
    unwrap!(spawner.spawn(button_task(board.button2, Button::Two)), "Spawning button 2 failed");

    // Shared by the GATT write handler and the button reporter, never borrowed across an await
    let device = RefCell::new(device);
    server.led.publish(device.borrow().readout());

    let buttons = report_buttons(&server, &device);
    let ble = run_bluetooth(sd, &server, &device);
    info!("Init tasks");

    futures::future::select(pin!(buttons), pin!(ble)).await;
}
