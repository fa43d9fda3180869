// SPDX-FileCopyrightText: 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

#![no_std]

/// Full device name advertised over BLE.
/// Carried as the complete local name in the advertising packet, so it must stay
/// short enough to fit the 31-byte legacy payload next to the flags and service list.
pub const DEVICE_NAME: &str = "Dave";

/// 16-bit UUID of the LED control service.
pub const LED_SERVICE_UUID: u16 = 0xA000;

/// 16-bit UUID of the readable characteristic (echo / button sentinel).
pub const READOUT_CHAR_UUID: u16 = 0xA001;

/// 16-bit UUID of the writable command characteristic.
pub const COMMAND_CHAR_UUID: u16 = 0xA002;

/// List of 16-bit service UUIDs put in the advertising packet.
pub const SERVICES_LIST: [u16; 1] = [LED_SERVICE_UUID];

/// Capacity of both characteristics, in bytes.
pub const READOUT_LEN: usize = 10;

/// Advertising interval in units of 0.625ms (160 units = 100ms).
pub const ADV_INTERVAL: u32 = 160;

/// Byte placed on the readable characteristic when button 1 is pressed.
pub const BUTTON1_SENTINEL: u8 = 4;

/// Byte placed on the readable characteristic when button 2 is pressed.
pub const BUTTON2_SENTINEL: u8 = 5;

/// Maximum number of button edges waiting to be reported.
pub const BUTTON_QUEUE_LEN: usize = 4;

/// Number of times the boot animation is played.
pub const STARTUP_ITERATIONS: usize = 5;

/// Duration of a single boot animation step, in milliseconds.
pub const STARTUP_STEP_MS: u64 = 50;

/// Flash occupied by the MBR and the S132 7.3.0 SoftDevice.
/// The application starts right after it.
pub const BASE_APP_ADDR: u32 = 0x26000;

/// Total flash of the nRF52832.
pub const FLASH_SIZE: u32 = 512 * 1024;

/// RAM reserved at the beginning of RAM for the SoftDevice.
/// S132 needs about 5.6K with a single peripheral link; keep some margin for the
/// attribute table and the event queue.
pub const SOFTDEVICE_RAM_RESERVED: u32 = 0x3000;

/// Total RAM of the nRF52832.
pub const RAM_SIZE: u32 = 64 * 1024;
