// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundationdevices.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use core::cell::RefCell;
use core::mem;

use crate::board::Leds;
use crate::led_service::*;
use consts::{ADV_INTERVAL, DEVICE_NAME, SERVICES_LIST};
use defmt::{info, unwrap};
use gatt_led::Device;
use nrf_softdevice::ble::advertisement_builder::{
    Flag, LegacyAdvertisementBuilder, LegacyAdvertisementPayload, ServiceList, ServiceUuid16,
};
use nrf_softdevice::ble::{gatt_server, peripheral};
use nrf_softdevice::gatt_server;
use nrf_softdevice::{raw, Softdevice};

const SERVICES: [ServiceUuid16; 1] = [ServiceUuid16::from_u16(SERVICES_LIST[0])];

#[gatt_server]
pub struct Server {
    pub led: LedService,
}

pub fn initialize_sd() -> &'static mut Softdevice {
    let config = nrf_softdevice::Config {
        clock: Some(raw::nrf_clock_lf_cfg_t {
            source: raw::NRF_CLOCK_LF_SRC_XTAL as u8,
            rc_ctiv: 0,
            rc_temp_ctiv: 0,
            accuracy: raw::NRF_CLOCK_LF_ACCURACY_20_PPM as u8,
        }),
        conn_gap: Some(raw::ble_gap_conn_cfg_t {
            conn_count: 1,
            event_length: 24,
        }),
        gatts_attr_tab_size: Some(raw::ble_gatts_cfg_attr_tab_size_t {
            attr_tab_size: raw::BLE_GATTS_ATTR_TAB_SIZE_DEFAULT,
        }),
        gap_role_count: Some(raw::ble_gap_cfg_role_count_t {
            adv_set_count: 1,
            periph_role_count: 1,
            central_role_count: 0,
            central_sec_count: 0,
            _bitfield_1: raw::ble_gap_cfg_role_count_t::new_bitfield_1(0),
        }),
        gap_device_name: Some(raw::ble_gap_cfg_device_name_t {
            p_value: DEVICE_NAME.as_ptr() as _,
            current_len: DEVICE_NAME.len() as u16,
            max_len: DEVICE_NAME.len() as u16,
            write_perm: unsafe { mem::zeroed() },
            _bitfield_1: raw::ble_gap_cfg_device_name_t::new_bitfield_1(raw::BLE_GATTS_VLOC_STACK as u8),
        }),

        ..Default::default()
    };

    Softdevice::enable(&config)
}

/// Advertises, serves one central until it disconnects, and starts over.
pub async fn run_bluetooth(sd: &'static Softdevice, server: &Server, device: &RefCell<Device<Leds>>) {
    static ADV_DATA: LegacyAdvertisementPayload = LegacyAdvertisementBuilder::new()
        .flags(&[Flag::GeneralDiscovery, Flag::LE_Only])
        .full_name(DEVICE_NAME)
        .services_16(ServiceList::Complete, &SERVICES)
        .build();

    static SCAN_DATA: LegacyAdvertisementPayload = LegacyAdvertisementBuilder::new().build();

    let adv = peripheral::ConnectableAdvertisement::ScannableUndirected {
        adv_data: &ADV_DATA,
        scan_data: &SCAN_DATA,
    };

    // Advertising interval in units of 625us
    let config = peripheral::Config {
        interval: ADV_INTERVAL,
        ..Default::default()
    };

    loop {
        let conn = unwrap!(peripheral::advertise_connectable(sd, adv, &config).await, "Advertising failed");
        info!("advertising done!");

        // Returns once the central is gone, whatever the reason
        let e = gatt_server::run(&conn, server, |e| server.handle_event(e, device)).await;
        info!("gatt_server run exited: {:?}", e);
    }
}

impl Server {
    fn handle_event(&self, event: ServerEvent, device: &RefCell<Device<Leds>>) {
        match event {
            ServerEvent::Led(e) => self.led.handle(e, device),
        }
    }
}
